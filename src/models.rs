use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A meal classification returned by the API (e.g. "Seafood")
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail_url: String,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Category {
            id: String::new(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
            description: String::new(),
        }
    }
}

/// A dish belonging to a category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal", default)]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: String,
}

impl Meal {
    pub fn new(name: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Meal {
            id: String::new(),
            name: name.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}

/// Body of `categories.php`
#[derive(Debug, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Body of `filter.php`. The API answers `{"meals": null}` for unknown
/// categories.
#[derive(Debug, Deserialize)]
pub struct MealsPayload {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// The only error kind surfaced to the screens: a display string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        FetchError {
            message: message.into(),
        }
    }
}

/// Tri-state wrapper around a fetch: in flight, failed, or done.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Error(String),
    Success(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Success(value),
            Err(e) => LoadState::Error(e.message),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Number of items when loaded, zero otherwise
    pub fn len(&self) -> usize {
        self.result().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
