//! Page State
//!
//! UI-independent state machines behind the dashboard and activity log
//! pages. The Leptos pages hold these in signals and render from them.

pub mod activity_log;
pub mod dashboard;

pub use activity_log::{ActivityForm, QuickPreset, SubmitStatus};
pub use dashboard::DashboardPage;

/// Lifecycle of data a page fetches on mount
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// User-facing message
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}
