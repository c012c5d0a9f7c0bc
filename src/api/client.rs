//! Rehabit REST API Client
//!
//! reqwest-backed implementation of [`ProductivityApi`] for native hosts.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{decode, decode_dashboard, encode, Endpoint, Method, ProductivityApi};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ActivityRecord, DashboardSnapshot, NewActivity, NewUser, PredictionSet, RecommendationSet,
    User, UserId,
};

/// HTTP client for the Rehabit backend
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    config: ApiConfig,
}

impl HttpApiClient {
    /// Create a client with the given configuration
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request and return the raw body of a 2xx response
    async fn send(&self, endpoint: Endpoint, body: Option<String>) -> ApiResult<String> {
        let url = endpoint.url(self.config.base_url());
        tracing::debug!("{} {} ({})", endpoint.method(), url, endpoint.name());

        let request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");

        let request = match body {
            Some(body) => request.body(body),
            None => request,
        };

        let result = self.execute(request).await;
        if let Err(e) = &result {
            tracing::error!("Error during {}: {}", endpoint.name(), e);
        }
        result
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_transport(e))?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::from_status(status.as_u16(), &text))
        }
    }

    fn map_transport(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout(self.config.timeout_secs)
        } else {
            ApiError::Network(e.to_string())
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let body = self.send(endpoint, None).await?;
        decode(&body)
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> ApiResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let body = self.send(endpoint, Some(encode(body)?)).await?;
        decode(&body)
    }
}

#[async_trait(?Send)]
impl ProductivityApi for HttpApiClient {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_keeps_config() {
        let client = HttpApiClient::new(ApiConfig::with_base_url("http://localhost:9999/api/")).unwrap();
        assert_eq!(client.config().base_url(), "http://localhost:9999/api");
        assert_eq!(client.config().timeout(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is closed on test hosts
        let client = HttpApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:9/api")).unwrap();
        let err = client.get_dashboard(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout(_)));
    }
}
