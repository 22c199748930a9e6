//! Route registry and navigation stack
//!
//! Routes are a closed enum. The set of routes a [`Navigator`] accepts is
//! handed to it at construction; anything else is rejected.

use thiserror::Error;

/// Navigation destinations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Category grid
    #[default]
    Main,
    /// Meals of the chosen category
    Meals,
    /// Declared for meal details, never registered
    DishDetail,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Main => "MainScreen",
            Route::Meals => "SecondScreen",
            Route::DishDetail => "DishDetailScreen",
        }
    }

    /// Header title for the route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Main => "Categories",
            Route::Meals => "Meals",
            Route::DishDetail => "Dish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route {} is not registered", .0.as_str())]
    Unregistered(Route),
}

/// Back stack over a fixed set of registered routes
#[derive(Debug, Clone)]
pub struct Navigator {
    registered: Vec<Route>,
    stack: Vec<Route>,
}

impl Navigator {
    /// Build a navigator starting at `start`. `start` is registered
    /// implicitly.
    pub fn new(start: Route, registered: &[Route]) -> Self {
        let mut routes = registered.to_vec();
        if !routes.contains(&start) {
            routes.push(start);
        }
        Navigator {
            registered: routes,
            stack: vec![start],
        }
    }

    /// The two screens the app actually shows
    pub fn with_app_routes() -> Self {
        Navigator::new(Route::Main, &[Route::Main, Route::Meals])
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn is_registered(&self, route: Route) -> bool {
        self.registered.contains(&route)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route`. Navigating to the route already on top is a no-op.
    pub fn navigate(&mut self, route: Route) -> Result<(), RouteError> {
        if !self.is_registered(route) {
            tracing::warn!(route = route.as_str(), "Rejected navigation to unregistered route");
            return Err(RouteError::Unregistered(route));
        }
        if self.current() != route {
            tracing::debug!(from = self.current().as_str(), to = route.as_str(), "Navigate");
            self.stack.push(route);
        }
        Ok(())
    }

    /// Pop the top route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::with_app_routes()
    }
}
