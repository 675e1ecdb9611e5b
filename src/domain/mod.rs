//! Domain layer containing entities and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Value records returned to callers
//! - [`gateways`] - Upstream access trait and its error taxonomy
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
