//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the public TheMealDB v1 API
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Path of the category list endpoint, relative to the base URL
pub const CATEGORIES_PATH: &str = "categories.php";

/// Path of the meals-by-category endpoint, relative to the base URL
pub const FILTER_PATH: &str = "filter.php";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of columns in the category grid
pub const DEFAULT_GRID_COLUMNS: usize = 2;

/// Default tracing filter when neither RUST_LOG nor config set one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directory (under the home directory) holding the config file
pub const CONFIG_DIR_NAME: &str = ".mealdb-tui";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Directory (under the cache directory) holding the log file
pub const LOG_DIR_NAME: &str = "mealdb-tui";

/// Log file name
pub const LOG_FILE_NAME: &str = "mealdb-tui.log";

/// Application name
pub const APP_NAME: &str = "MealDB TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
