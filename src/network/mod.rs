//! Network layer - meal API client and the actor that drives it
//!
//! The Network actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::MealDbClient;
