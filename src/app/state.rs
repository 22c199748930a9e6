//! App state - pure data structure with no I/O logic

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{Category, LoadState, Meal};
use crate::routes::{Navigator, Route};

/// Main application state - pure data, no I/O
pub struct AppState {
    pub navigator: Navigator,
    pub grid_columns: usize,

    // Category screen
    pub categories: LoadState<Vec<Category>>,
    pub selected_category: usize,
    pub pending_categories_id: Option<u64>,

    // Meals screen
    pub chosen_category: Option<String>,
    pub meals: LoadState<Vec<Meal>>,
    pub selected_meal: usize,
    pub pending_meals_id: Option<u64>,

    // Request ids
    pub next_request_id: u64,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            navigator: Navigator::with_app_routes(),
            grid_columns: config.grid_columns.max(1),
            categories: LoadState::Loading,
            selected_category: 0,
            pending_categories_id: None,
            chosen_category: None,
            meals: LoadState::Loading,
            selected_meal: 0,
            pending_meals_id: None,
            next_request_id: 1,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            route: self.route(),
            categories: self.categories.clone(),
            selected_category: self.selected_category,
            grid_columns: self.grid_columns,
            chosen_category: self.chosen_category.clone(),
            meals: self.meals.clone(),
            selected_meal: self.selected_meal,
            show_help: self.show_help,
        }
    }
}
