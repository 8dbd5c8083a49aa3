//! Pages
//!
//! Top-level page components for each route.

pub mod collections;
pub mod home;

pub use collections::{Activities, Leaderboard, Teams, Users, Workouts};
pub use home::Home;
