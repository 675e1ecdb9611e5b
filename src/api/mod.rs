//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses in the shape the front-end client consumes.
//!
//! # Modules
//!
//! - [`docs`] - OpenAPI document and Swagger UI
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`routes`] - Route configuration

pub mod docs;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
