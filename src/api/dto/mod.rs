//! Data Transfer Objects for API responses.
//!
//! Field names follow what the front-end client reads (`appid`, `header_image`,
//! `feedname`, ...), not the Rust names of the domain entities.

pub mod games;
pub mod health;
pub mod news;
