//! Steam Web API and Steam Store API integration.
//!
//! - [`SteamClient`] - reqwest implementation of [`crate::domain::gateways::SteamApi`]
//! - [`wire`] - upstream payload shapes and projection onto domain entities

mod client;
pub mod wire;

pub use client::{STEAM_STORE_API_URL, STEAM_WEB_API_URL, SteamClient};
