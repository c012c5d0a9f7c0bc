//! Route Table
//!
//! Client-side paths and how unknown paths are handled.

use std::fmt;

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Dashboard,
    ActivityLog,
    Insights,
}

/// Outcome of resolving a location path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// Render this page
    Page(Route),
    /// Replace the current location with this page
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Landing,
        Route::Dashboard,
        Route::ActivityLog,
        Route::Insights,
    ];

    /// Pages linked from the navigation bar, in display order
    pub const NAV: [Route; 3] = [Route::Dashboard, Route::ActivityLog, Route::Insights];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Dashboard => "/dashboard",
            Route::ActivityLog => "/activity",
            Route::Insights => "/insights",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::ActivityLog => "Log Activity",
            Route::Insights => "Insights",
        }
    }

    /// The landing page has its own hero header instead of the navbar
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Route::Landing)
    }

    /// Exact match on a known path (query string and trailing slash ignored)
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Resolve a path; anything unknown redirects to the landing page
    pub fn resolve(path: &str) -> RouteMatch {
        match Self::from_path(path) {
            Some(route) => RouteMatch::Page(route),
            None => {
                tracing::debug!("Unknown route {:?}, redirecting to /", path);
                RouteMatch::Redirect(Route::Landing)
            }
        }
    }
}

impl RouteMatch {
    /// The page that ends up on screen
    pub fn route(&self) -> Route {
        match self {
            RouteMatch::Page(r) | RouteMatch::Redirect(r) => *r,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Whether the navbar is rendered at `path`
pub fn navbar_visible(path: &str) -> bool {
    Route::resolve(path).route().shows_navbar()
}
