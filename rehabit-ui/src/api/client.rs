//! HTTP API Client
//!
//! `ProductivityApi` over the browser fetch API. Requests are aborted once
//! the configured timeout elapses.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::AbortController;

use rehabit::api::{decode, decode_dashboard, encode};
use rehabit::config::DEFAULT_BASE_URL;
use rehabit::{
    ActivityRecord, ApiConfig, ApiError, ApiResult, DashboardSnapshot, Endpoint, Method,
    NewActivity, NewUser, PredictionSet, ProductivityApi, RecommendationSet, User, UserId,
};

/// Local storage key overriding the API base URL
pub const API_URL_KEY: &str = "rehabit_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Backend client for the browser
pub struct GlooApiClient {
    config: ApiConfig,
}

impl GlooApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Issue one request and return the body of a 2xx response
    async fn send(&self, endpoint: Endpoint, body: Option<String>) -> ApiResult<String> {
        let url = endpoint.url(self.config.base_url());
        let controller = AbortController::new()
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let timed_out = Rc::new(Cell::new(false));
        let timeout_ms = self.config.timeout_secs.saturating_mul(1000).min(u32::MAX as u64) as u32;
        let _timer = {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let builder: RequestBuilder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .abort_signal(Some(&controller.signal()));

        let fail = |e: gloo_net::Error| {
            let err = if timed_out.get() {
                ApiError::Timeout(self.config.timeout_secs)
            } else {
                ApiError::Network(e.to_string())
            };
            log_failure(endpoint, &err);
            err
        };

        let response = match body {
            Some(body) => {
                let request = builder
                    .body(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?;
                request.send().await.map_err(fail)?
            }
            None => builder.send().await.map_err(fail)?,
        };

        let status = response.status();
        let text = response.text().await.map_err(fail)?;

        if !response.ok() {
            let err = ApiError::from_status(status, &text);
            log_failure(endpoint, &err);
            return Err(err);
        }

        Ok(text)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let body = self.send(endpoint, None).await?;
        decode(&body)
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, payload: &B) -> ApiResult<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let body = self.send(endpoint, Some(encode(payload)?)).await?;
        decode(&body)
    }
}

fn log_failure(endpoint: Endpoint, err: &ApiError) {
    web_sys::console::error_1(
        &format!("{} {} failed: {}", endpoint.method(), endpoint.name(), err).into(),
    );
}

#[async_trait(?Send)]
impl ProductivityApi for GlooApiClient {
    async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        self.post_json(Endpoint::CreateUser, user).await
    }

    async fn get_user(&self, user_id: UserId) -> ApiResult<User> {
        self.get_json(Endpoint::GetUser(user_id)).await
    }

    async fn log_activity(&self, activity: &NewActivity) -> ApiResult<ActivityRecord> {
        self.post_json(Endpoint::LogActivity, activity).await
    }

    async fn list_activities(&self, user_id: UserId, limit: u32) -> ApiResult<Vec<ActivityRecord>> {
        self.get_json(Endpoint::ListActivities { user_id, limit }).await
    }

    async fn get_dashboard(&self, user_id: UserId) -> ApiResult<DashboardSnapshot> {
        let body = self.send(Endpoint::Dashboard(user_id), None).await?;
        decode_dashboard(&body)
    }

    async fn get_predictions(&self, user_id: UserId) -> ApiResult<PredictionSet> {
        self.get_json(Endpoint::Predictions(user_id)).await
    }

    async fn get_recommendations(&self, user_id: UserId) -> ApiResult<RecommendationSet> {
        self.get_json(Endpoint::Recommendations(user_id)).await
    }
}
