//! HTTP client wrapper - talks to the meal API and decodes its JSON

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::{CATEGORIES_PATH, FILTER_PATH};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{CategoriesPayload, Category, FetchError, Meal, MealsPayload};

/// Client for the two endpoints the app uses
#[derive(Clone, Debug)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl MealDbClient {
    pub fn new(config: &Config) -> Self {
        MealDbClient {
            http: create_client(config.request_timeout_secs),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.request_timeout_secs,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET categories.php`
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let request = self.http.get(self.endpoint(CATEGORIES_PATH));
        let payload: CategoriesPayload = self.get_json(request).await?;
        Ok(payload.categories.unwrap_or_default())
    }

    /// `GET filter.php?c=<category>`. Unknown categories yield an empty list.
    pub async fn fetch_meals(&self, category: &str) -> Result<Vec<Meal>, FetchError> {
        let request = self
            .http
            .get(self.endpoint(FILTER_PATH))
            .query(&[("c", category)]);
        let payload: MealsPayload = self.get_json(request).await?;
        Ok(payload.meals.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::new(self.describe(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::new(format!("HTTP {}", status.as_u16())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::new(self.describe_body(&e)))?;

        serde_json::from_str(&body).map_err(|e| FetchError::new(format!("Invalid response: {}", e)))
    }

    fn describe(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            self.timed_out()
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            format!("Request failed: {}", e)
        }
    }

    /// The client timeout also covers reading the body
    fn describe_body(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            self.timed_out()
        } else {
            format!("Error reading body: {}", e)
        }
    }

    fn timed_out(&self) -> String {
        format!("Request timed out ({}s)", self.timeout_secs)
    }
}

/// Run one fetch command and wrap the outcome for the App layer.
/// Returns `None` for commands that are not fetches.
pub async fn execute_fetch(client: &MealDbClient, command: NetworkCommand) -> Option<NetworkResponse> {
    let start = Instant::now();
    let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

    let response = match command {
        NetworkCommand::FetchCategories { id } => match client.fetch_categories().await {
            Ok(categories) => NetworkResponse::CategoriesLoaded {
                id,
                categories,
                time_ms: elapsed(start),
            },
            Err(e) => NetworkResponse::Error {
                id,
                message: e.message,
                time_ms: elapsed(start),
            },
        },
        NetworkCommand::FetchMeals { id, category } => match client.fetch_meals(&category).await {
            Ok(meals) => NetworkResponse::MealsLoaded {
                id,
                category,
                meals,
                time_ms: elapsed(start),
            },
            Err(e) => NetworkResponse::Error {
                id,
                message: e.message,
                time_ms: elapsed(start),
            },
        },
        NetworkCommand::Shutdown => return None,
    };
    Some(response)
}

/// Create an HTTP client with the configured timeout
pub fn create_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("mealdb-tui/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, timeout_secs, "HTTP client builder failed, using defaults without timeout");
            reqwest::Client::new()
        })
}
