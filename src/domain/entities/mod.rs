//! Core domain entities.
//!
//! Entities are flat value records built from a parsed upstream payload,
//! returned to the caller and discarded. Nothing here is persisted or mutated
//! after construction.
//!
//! # Entity Types
//!
//! - [`AppSummary`] - An entry of the application catalogue
//! - [`AppDetail`] - Store details of one application
//! - [`NewsItem`] - A news post of one application

pub mod app;
pub mod news;

pub use app::{AppDetail, AppSummary};
pub use news::NewsItem;
