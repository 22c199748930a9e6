//! Network messages - communication between App and Network layers

use crate::models::{Category, Meal};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Fetch the full category list
    FetchCategories { id: u64 },
    /// Fetch the meals of one category
    FetchMeals { id: u64, category: String },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    CategoriesLoaded {
        id: u64,
        categories: Vec<Category>,
        time_ms: u64,
    },
    MealsLoaded {
        id: u64,
        category: String,
        meals: Vec<Meal>,
        time_ms: u64,
    },
    /// Any failure of either fetch; the id tells which one
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::CategoriesLoaded { id, .. } => *id,
            NetworkResponse::MealsLoaded { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::CategoriesLoaded { time_ms, .. } => *time_ms,
            NetworkResponse::MealsLoaded { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }
}
