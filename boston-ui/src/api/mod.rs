//! API Layer
//!
//! HTTP client for the league REST API.

pub mod client;

pub use client::*;
