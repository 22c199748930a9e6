//! # MealDB TUI
//!
//! A terminal client for TheMealDB: browse food categories, pick one, and
//! see the meals that belong to it.
//!
//! ## Screens
//! - Categories (`MainScreen`) - grid of category cards
//! - Meals (`SecondScreen`) - column of meal cards for the chosen category
//!
//! Each screen renders exactly one of loading / error / success.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, single writer of view state)
//! - Network Layer (Tokio runtime + reqwest)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod routes;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::{Cli, Config};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Category, FetchError, LoadState, Meal};
pub use network::{MealDbClient, NetworkActor};
pub use routes::{Navigator, Route, RouteError};
