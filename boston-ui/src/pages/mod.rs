//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod calendar;
pub mod home;
pub mod matches;
pub mod news;
pub mod rankings;

pub use admin::Admin;
pub use calendar::Calendar;
pub use home::Home;
pub use matches::Matches;
pub use news::{News, NewsDetail};
pub use rankings::Rankings;
