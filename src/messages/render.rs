//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_GRID_COLUMNS;
use crate::models::{Category, LoadState, Meal};
use crate::routes::Route;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub route: Route,

    // Category grid
    pub categories: LoadState<Vec<Category>>,
    pub selected_category: usize,
    pub grid_columns: usize,

    // Meal list
    pub chosen_category: Option<String>,
    pub meals: LoadState<Vec<Meal>>,
    pub selected_meal: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            route: Route::Main,
            categories: LoadState::Loading,
            selected_category: 0,
            grid_columns: DEFAULT_GRID_COLUMNS,
            chosen_category: None,
            meals: LoadState::Loading,
            selected_meal: 0,
            show_help: false,
        }
    }
}
