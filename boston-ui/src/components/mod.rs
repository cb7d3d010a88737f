//! UI Components
//!
//! Reusable Leptos components for the league site.

pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::{StatCard, StatusBadge};
pub use toast::Toast;
