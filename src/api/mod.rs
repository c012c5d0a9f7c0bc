//! Backend API
//!
//! The operations the frontend needs from the Rehabit backend, the endpoint
//! table they map to, and response decoding shared by every transport.
//!
//! ## Endpoints
//!
//! - `POST /users/create` - Create a user
//! - `GET /users/{id}` - Fetch a user
//! - `POST /activities/log` - Log an activity
//! - `GET /activities/{user_id}?limit=N` - Recent activities
//! - `GET /dashboard/{user_id}` - Dashboard snapshot
//! - `GET /predictions/{user_id}` - 24-hour forecast
//! - `GET /recommendations/{user_id}` - Recommendations

#[cfg(feature = "http-client")]
pub mod client;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ActivityRecord, DashboardSnapshot, HourlyPrediction, NewActivity, NewUser, PredictionSet,
    Recommendation, RecommendationSet, User, UserId,
};

#[cfg(feature = "http-client")]
pub use client::HttpApiClient;

/// Default page size for `list_activities`
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 50;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// One backend endpoint with its path parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CreateUser,
    GetUser(UserId),
    LogActivity,
    ListActivities { user_id: UserId, limit: u32 },
    Dashboard(UserId),
    Predictions(UserId),
    Recommendations(UserId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateUser | Endpoint::LogActivity => Method::Post,
            _ => Method::Get,
        }
    }

    /// Path relative to the API base, including any query string
    pub fn path(&self) -> String {
        match self {
            Endpoint::CreateUser => "/users/create".to_string(),
            Endpoint::GetUser(id) => format!("/users/{}", id),
            Endpoint::LogActivity => "/activities/log".to_string(),
            Endpoint::ListActivities { user_id, limit } => {
                format!("/activities/{}?limit={}", user_id, limit)
            }
            Endpoint::Dashboard(id) => format!("/dashboard/{}", id),
            Endpoint::Predictions(id) => format!("/predictions/{}", id),
            Endpoint::Recommendations(id) => format!("/recommendations/{}", id),
        }
    }

    /// Absolute URL under `base` (trailing slashes on `base` are ignored)
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::CreateUser => "create user",
            Endpoint::GetUser(_) => "fetch user",
            Endpoint::LogActivity => "log activity",
            Endpoint::ListActivities { .. } => "list activities",
            Endpoint::Dashboard(_) => "fetch dashboard",
            Endpoint::Predictions(_) => "fetch predictions",
            Endpoint::Recommendations(_) => "fetch recommendations",
        }
    }
}

/// Backend operations used by the pages
///
/// Every call issues exactly one request and hands failures straight back:
/// no retries, no caching. `?Send` because the browser client lives on a
/// single thread.
#[async_trait(?Send)]
pub trait ProductivityApi {
    async fn create_user(&self, user: &NewUser) -> ApiResult<User>;

    async fn get_user(&self, user_id: UserId) -> ApiResult<User>;

    async fn log_activity(&self, activity: &NewActivity) -> ApiResult<ActivityRecord>;

    async fn list_activities(&self, user_id: UserId, limit: u32) -> ApiResult<Vec<ActivityRecord>>;

    async fn get_dashboard(&self, user_id: UserId) -> ApiResult<DashboardSnapshot>;

    async fn get_predictions(&self, user_id: UserId) -> ApiResult<PredictionSet>;

    async fn get_recommendations(&self, user_id: UserId) -> ApiResult<RecommendationSet>;
}

/// Decode a JSON response body
pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Encode a JSON request body
pub fn encode<T: serde::Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Top-level keys of the flat dashboard snapshot
const SNAPSHOT_KEYS: [&str; 5] = [
    "today_score",
    "work_time",
    "streak",
    "predictions",
    "recommendations",
];

/// Decode a dashboard response
///
/// Accepts the flat snapshot as well as the `{"status", "data": {"stats", ...}}`
/// envelope the backend returns when its ML service is attached. A body that
/// is neither (an error payload, an empty object) is a decode error.
pub fn decode_dashboard(body: &str) -> ApiResult<DashboardSnapshot> {
    #[derive(Deserialize)]
    struct Envelope {
        data: EnvelopeData,
    }

    #[derive(Deserialize)]
    struct EnvelopeData {
        stats: EnvelopeStats,
        #[serde(default)]
        predictions: Vec<HourlyPrediction>,
        #[serde(default)]
        recommendations: Vec<Recommendation>,
    }

    #[derive(Deserialize)]
    struct EnvelopeStats {
        #[serde(default)]
        current_productivity: f64,
        #[serde(default)]
        work_time_today: u32,
        #[serde(default)]
        streak_days: u32,
    }

    let value: serde_json::Value = decode(body)?;
    let Some(object) = value.as_object() else {
        return Err(ApiError::Decode("dashboard body is not a JSON object".to_string()));
    };

    if object.contains_key("data") {
        let Envelope { data } =
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(DashboardSnapshot {
            today_score: data.stats.current_productivity,
            work_time: data.stats.work_time_today,
            streak: data.stats.streak_days,
            predictions: data.predictions,
            recommendations: data.recommendations,
            ..Default::default()
        });
    }

    if !SNAPSHOT_KEYS.iter().any(|key| object.contains_key(*key)) {
        return Err(ApiError::Decode(format!(
            "dashboard body has no snapshot fields: {}",
            value
        )));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
