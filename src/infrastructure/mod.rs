//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`steam`] - reqwest client for the Steam Web and Store APIs

pub mod steam;
