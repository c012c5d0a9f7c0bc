//! Backend Access
//!
//! Browser transport for the Rehabit REST API.

pub mod client;

pub use client::{get_api_base, GlooApiClient};
