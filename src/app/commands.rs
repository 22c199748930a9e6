//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{FetchError, LoadState};
use crate::routes::Route;

impl AppState {
    // ========================
    // Selection
    // ========================

    pub fn move_up(&mut self) {
        match self.route() {
            Route::Main => {
                if self.selected_category >= self.grid_columns {
                    self.selected_category -= self.grid_columns;
                }
            }
            Route::Meals => self.selected_meal = self.selected_meal.saturating_sub(1),
            Route::DishDetail => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.route() {
            Route::Main => {
                if self.categories.is_empty() {
                    return;
                }
                let total = self.categories.len();
                let columns = self.grid_columns;
                if self.selected_category + columns < total {
                    self.selected_category += columns;
                } else if self.selected_category / columns < (total - 1) / columns {
                    // Partial last row: land on its last card
                    self.selected_category = total - 1;
                }
            }
            Route::Meals => {
                if self.selected_meal + 1 < self.meals.len() {
                    self.selected_meal += 1;
                }
            }
            Route::DishDetail => {}
        }
    }

    pub fn move_left(&mut self) {
        if self.route() == Route::Main && self.selected_category % self.grid_columns > 0 {
            self.selected_category -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.route() != Route::Main {
            return;
        }
        let at_row_end = self.selected_category % self.grid_columns == self.grid_columns - 1;
        if !at_row_end && self.selected_category + 1 < self.categories.len() {
            self.selected_category += 1;
        }
    }

    // ========================
    // Fetching
    // ========================

    /// Start (or restart) the category list fetch
    pub fn request_categories(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_categories_id = Some(id);
        self.categories = LoadState::Loading;
        NetworkCommand::FetchCategories { id }
    }

    /// Start (or restart) the meal fetch for the chosen category
    pub fn request_meals(&mut self) -> Option<NetworkCommand> {
        let category = self.chosen_category.clone()?;
        let id = self.next_id();
        self.pending_meals_id = Some(id);
        self.meals = LoadState::Loading;
        self.selected_meal = 0;
        Some(NetworkCommand::FetchMeals { id, category })
    }

    /// Choose the selected category, navigate to its meals and fetch them
    pub fn select_category(&mut self) -> Option<NetworkCommand> {
        if self.route() != Route::Main {
            return None;
        }
        let name = self
            .categories
            .result()?
            .get(self.selected_category)?
            .name
            .clone();

        if let Err(e) = self.navigator.navigate(Route::Meals) {
            tracing::warn!(error = %e, "Cannot open meals screen");
            return None;
        }
        tracing::info!(category = %name, "Category selected");
        self.chosen_category = Some(name);
        self.request_meals()
    }

    /// Re-fetch whatever the current screen shows
    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        match self.route() {
            Route::Main => Some(self.request_categories()),
            Route::Meals => self.request_meals(),
            Route::DishDetail => None,
        }
    }

    // ========================
    // Navigation
    // ========================

    /// Pop the current screen. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        self.navigator.back()
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        let time_ms = response.time_ms();

        if self.pending_categories_id == Some(id) {
            self.pending_categories_id = None;
            let result = match response {
                NetworkResponse::CategoriesLoaded { categories, .. } => {
                    tracing::info!(id, count = categories.len(), time_ms, "Categories loaded");
                    if self.selected_category >= categories.len() {
                        self.selected_category = categories.len().saturating_sub(1);
                    }
                    Ok(categories)
                }
                NetworkResponse::Error { message, .. } => {
                    tracing::warn!(id, %message, time_ms, "Category fetch failed");
                    Err(FetchError::new(message))
                }
                other => {
                    tracing::warn!(id, ?other, "Unexpected response for category fetch");
                    return;
                }
            };
            self.categories = LoadState::from(result);
        } else if self.pending_meals_id == Some(id) {
            self.pending_meals_id = None;
            let result = match response {
                NetworkResponse::MealsLoaded { category, meals, .. } => {
                    tracing::info!(id, %category, count = meals.len(), time_ms, "Meals loaded");
                    Ok(meals)
                }
                NetworkResponse::Error { message, .. } => {
                    tracing::warn!(id, %message, time_ms, "Meal fetch failed");
                    Err(FetchError::new(message))
                }
                other => {
                    tracing::warn!(id, ?other, "Unexpected response for meal fetch");
                    return;
                }
            };
            self.meals = LoadState::from(result);
        } else {
            tracing::debug!(id, "Dropping stale response");
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Meal};

    fn loaded(names: &[&str]) -> AppState {
        let mut state = AppState::default();
        let NetworkCommand::FetchCategories { id } = state.request_categories() else {
            panic!("expected category fetch");
        };
        state.handle_response(NetworkResponse::CategoriesLoaded {
            id,
            categories: names.iter().map(|n| Category::new(*n, format!("{}.png", n))).collect(),
            time_ms: 1,
        });
        state
    }

    #[test]
    fn test_select_category_navigates_once() {
        let mut state = loaded(&["Beef", "Seafood"]);
        state.selected_category = 1;

        let cmd = state.select_category().unwrap();
        assert!(matches!(cmd, NetworkCommand::FetchMeals { ref category, .. } if category == "Seafood"));
        assert_eq!(state.chosen_category.as_deref(), Some("Seafood"));
        assert_eq!(state.route(), Route::Meals);
        assert_eq!(state.navigator.depth(), 2);
        assert!(state.meals.is_loading());

        // A second tap on the meals screen does nothing
        assert!(state.select_category().is_none());
        assert_eq!(state.navigator.depth(), 2);
    }

    #[test]
    fn test_select_requires_loaded_categories() {
        let mut state = AppState::default();
        state.request_categories();
        assert!(state.select_category().is_none());
        assert_eq!(state.route(), Route::Main);

        let mut state = loaded(&[]);
        assert!(state.select_category().is_none());
        assert!(state.chosen_category.is_none());
    }

    #[test]
    fn test_error_response() {
        let mut state = AppState::default();
        let NetworkCommand::FetchCategories { id } = state.request_categories() else {
            panic!("expected category fetch");
        };
        state.handle_response(NetworkResponse::Error {
            id,
            message: "timeout".into(),
            time_ms: 30_000,
        });
        assert_eq!(state.categories.error(), Some("timeout"));
        assert!(state.pending_categories_id.is_none());
    }

    #[test]
    fn test_stale_meals_dropped() {
        let mut state = loaded(&["Beef", "Seafood"]);
        let Some(NetworkCommand::FetchMeals { id: old_id, .. }) = state.select_category() else {
            panic!("expected meal fetch");
        };
        state.go_back();
        state.selected_category = 1;
        let Some(NetworkCommand::FetchMeals { id: new_id, .. }) = state.select_category() else {
            panic!("expected meal fetch");
        };

        state.handle_response(NetworkResponse::MealsLoaded {
            id: old_id,
            category: "Beef".into(),
            meals: vec![Meal::new("Steak", "s.png")],
            time_ms: 5,
        });
        assert!(state.meals.is_loading());

        state.handle_response(NetworkResponse::MealsLoaded {
            id: new_id,
            category: "Seafood".into(),
            meals: vec![Meal::new("Sushi", "u.png")],
            time_ms: 5,
        });
        assert_eq!(state.meals.result().unwrap()[0].name, "Sushi");
    }

    #[test]
    fn test_refresh_cycles_to_loading() {
        let mut state = loaded(&["Beef"]);
        assert!(state.categories.result().is_some());
        assert!(matches!(state.refresh(), Some(NetworkCommand::FetchCategories { .. })));
        assert!(state.categories.is_loading());

        let mut state = loaded(&["Beef"]);
        state.select_category();
        state.handle_response(NetworkResponse::Error {
            id: state.pending_meals_id.unwrap(),
            message: "boom".into(),
            time_ms: 0,
        });
        assert!(state.meals.is_error());
        assert!(matches!(state.refresh(), Some(NetworkCommand::FetchMeals { ref category, .. }) if category == "Beef"));
        assert!(state.meals.is_loading());
    }

    #[test]
    fn test_grid_movement() {
        // 2 columns, 5 cards:
        // 0 1
        // 2 3
        // 4
        let mut state = loaded(&["a", "b", "c", "d", "e"]);
        state.move_right();
        assert_eq!(state.selected_category, 1);
        state.move_right();
        assert_eq!(state.selected_category, 1);
        state.move_down();
        assert_eq!(state.selected_category, 3);
        state.move_down();
        assert_eq!(state.selected_category, 4);
        state.move_down();
        assert_eq!(state.selected_category, 4);
        state.move_up();
        assert_eq!(state.selected_category, 2);
        state.move_left();
        assert_eq!(state.selected_category, 2);
        state.move_up();
        state.move_up();
        assert_eq!(state.selected_category, 0);
    }

    #[test]
    fn test_meal_list_movement_clamped() {
        let mut state = loaded(&["Beef"]);
        state.select_category();
        state.move_down();
        assert_eq!(state.selected_meal, 0);

        state.handle_response(NetworkResponse::MealsLoaded {
            id: state.pending_meals_id.unwrap(),
            category: "Beef".into(),
            meals: vec![Meal::new("A", ""), Meal::new("B", "")],
            time_ms: 0,
        });
        state.move_down();
        state.move_down();
        assert_eq!(state.selected_meal, 1);
        state.move_up();
        state.move_up();
        assert_eq!(state.selected_meal, 0);
    }

    #[test]
    fn test_selection_clamped_after_shorter_reload() {
        let mut state = loaded(&["a", "b", "c"]);
        state.selected_category = 2;
        let NetworkCommand::FetchCategories { id } = state.refresh().unwrap() else {
            panic!("expected category fetch");
        };
        state.handle_response(NetworkResponse::CategoriesLoaded {
            id,
            categories: vec![Category::new("a", "")],
            time_ms: 0,
        });
        assert_eq!(state.selected_category, 0);
    }
}
