//! API Routes
//!
//! Route handlers organized by resource.

pub mod dashboard;
pub mod health;
pub mod matches;
pub mod news;
pub mod rankings;
pub mod teams;
