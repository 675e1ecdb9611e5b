//! Gateway trait definitions for the domain layer.
//!
//! Gateways abstract the third-party services this crate proxies. The
//! concrete HTTP implementation lives in `crate::infrastructure::steam`.
//!
//! # Available Gateways
//!
//! - [`SteamApi`] - Steam Web API and Steam Store API
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! Integration tests in `tests/` run the real client against a `mockito` stub.

pub mod steam_api;
pub mod upstream_error;

pub use steam_api::{NewsQuery, SteamApi};
pub use upstream_error::UpstreamError;

#[cfg(test)]
pub use steam_api::MockSteamApi;
