//! Dashboard Page State
//!
//! `loading -> ready | error`, re-entered on mount and on retry.

use super::LoadState;
use crate::api::ProductivityApi;
use crate::error::ApiResult;
use crate::models::{DashboardSnapshot, UserId};

/// Message shown when the snapshot cannot be loaded
pub const DASHBOARD_ERROR: &str = "Failed to load dashboard data";

/// State of the dashboard page for one user
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    user_id: UserId,
    state: LoadState<DashboardSnapshot>,
    attempt: u32,
}

impl DashboardPage {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            state: LoadState::Loading,
            attempt: 0,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn state(&self) -> &LoadState<DashboardSnapshot> {
        &self.state
    }

    /// Number of fetches started so far
    pub fn attempts(&self) -> u32 {
        self.attempt
    }

    /// Enter `loading` and return the id of the new attempt
    pub fn begin_load(&mut self) -> u32 {
        self.attempt += 1;
        self.state = LoadState::Loading;
        self.attempt
    }

    /// Apply a fetch result; results of superseded attempts are dropped
    pub fn finish_load(&mut self, attempt: u32, result: ApiResult<DashboardSnapshot>) {
        if attempt != self.attempt {
            tracing::debug!(attempt, current = self.attempt, "Dropping stale dashboard response");
            return;
        }

        self.state = match result {
            Ok(snapshot) => LoadState::Ready(snapshot),
            Err(e) => {
                tracing::error!("Error loading dashboard: {}", e);
                LoadState::Error(DASHBOARD_ERROR.to_string())
            }
        };
    }

    /// Fetch the snapshot and settle into `ready` or `error`
    pub async fn load<A: ProductivityApi + ?Sized>(&mut self, api: &A) {
        let attempt = self.begin_load();
        let result = api.get_dashboard(self.user_id).await;
        self.finish_load(attempt, result);
    }

    /// The "Try Again" action
    pub async fn retry<A: ProductivityApi + ?Sized>(&mut self, api: &A) {
        self.load(api).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_starts_loading() {
        let page = DashboardPage::new(1);
        assert!(page.state().is_loading());
        assert_eq!(page.attempts(), 0);
    }

    #[test]
    fn test_failure_sets_generic_error() {
        let mut page = DashboardPage::new(1);
        let attempt = page.begin_load();
        page.finish_load(attempt, Err(ApiError::Timeout(10)));
        assert_eq!(page.state().error(), Some(DASHBOARD_ERROR));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut page = DashboardPage::new(1);
        let first = page.begin_load();
        let second = page.begin_load();

        page.finish_load(first, Err(ApiError::Network("reset".into())));
        assert!(page.state().is_loading());

        page.finish_load(second, Ok(DashboardSnapshot::default()));
        assert!(page.state().ready().is_some());
    }
}
