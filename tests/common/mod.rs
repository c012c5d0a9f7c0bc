//! Shared test helpers: a stub backend served by axum and an in-memory API.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use rehabit::{
    ActivityRecord, ApiError, ApiResult, Config, DashboardSnapshot, NewActivity, NewUser,
    PredictionSet, ProductivityApi, RecommendationSet, User, UserId,
};

/// Install a test-friendly tracing subscriber.
///
/// RUST_LOG wins when set; otherwise the filter comes from REHABIT_LOG_LEVEL.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::from_env().logging.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ============ Stub backend ============

/// A request as seen by the stub backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, e.g. `/api/activities/1?limit=50`
    pub uri: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct StubState {
    responses: HashMap<String, (u16, String)>,
    delay: Option<Duration>,
    requests: Vec<RecordedRequest>,
}

/// Canned-response backend listening on an ephemeral local port
#[derive(Clone, Default)]
pub struct StubBackend {
    state: Arc<Mutex<StubState>>,
}

impl StubBackend {
    /// Start serving; returns the API base URL (`http://127.0.0.1:PORT/api`)
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }

    /// Answer `path` (without query) with `status` and a JSON body
    pub fn respond(&self, path: &str, status: u16, body: serde_json::Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Delay every response
    pub fn delay(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

async fn handle(
    State(stub): State<StubBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let (response, delay) = {
        let mut state = stub.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: method.to_string(),
            uri: uri
                .path_and_query()
                .map(|pq| pq.to_string())
                .unwrap_or_default(),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        (state.responses.get(uri.path()).cloned(), state.delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    match response {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"detail": "Not Found"}"#.to_string(),
        )
            .into_response(),
    }
}

// ============ In-memory API ============

/// Scripted `ProductivityApi` for driving the page state machines
#[derive(Default)]
pub struct FakeApi {
    /// Popped front-to-back by `get_dashboard`; empty queue answers 500
    pub dashboard_results: RefCell<VecDeque<ApiResult<DashboardSnapshot>>>,
    pub dashboard_calls: Cell<u32>,
    /// When set, `log_activity` fails with this error
    pub log_failure: RefCell<Option<ApiError>>,
    pub logged: RefCell<Vec<NewActivity>>,
}

impl FakeApi {
    pub fn push_dashboard(&self, result: ApiResult<DashboardSnapshot>) {
        self.dashboard_results.borrow_mut().push_back(result);
    }

    pub fn fail_logging(&self, error: ApiError) {
        *self.log_failure.borrow_mut() = Some(error);
    }
}

fn unsupported<T>() -> ApiResult<T> {
    Err(ApiError::Status {
        status: 501,
        message: "not scripted".to_string(),
    })
}

#[async_trait(?Send)]
impl ProductivityApi for FakeApi {
    async fn create_user(&self, _user: &NewUser) -> ApiResult<User> {
        unsupported()
    }

    async fn get_user(&self, _user_id: UserId) -> ApiResult<User> {
        unsupported()
    }

    async fn log_activity(&self, activity: &NewActivity) -> ApiResult<ActivityRecord> {
        if let Some(err) = self.log_failure.borrow().clone() {
            return Err(err);
        }
        self.logged.borrow_mut().push(activity.clone());
        Ok(ActivityRecord {
            id: self.logged.borrow().len() as u64,
            user_id: activity.user_id,
            timestamp: None,
            activity_type: activity.activity_type.to_string(),
            duration: activity.duration,
            productivity_score: activity.productivity_score,
            focus_level: activity.focus_level.to_string(),
        })
    }

    async fn list_activities(&self, _user_id: UserId, _limit: u32) -> ApiResult<Vec<ActivityRecord>> {
        unsupported()
    }

    async fn get_dashboard(&self, _user_id: UserId) -> ApiResult<DashboardSnapshot> {
        self.dashboard_calls.set(self.dashboard_calls.get() + 1);
        self.dashboard_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::from_status(500, "")))
    }

    async fn get_predictions(&self, _user_id: UserId) -> ApiResult<PredictionSet> {
        unsupported()
    }

    async fn get_recommendations(&self, _user_id: UserId) -> ApiResult<RecommendationSet> {
        unsupported()
    }
}
