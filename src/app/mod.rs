//! App layer - view state and the actor that owns it
//!
//! The App actor receives UI events and network responses, updates state,
//! and emits network commands and render snapshots.

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
