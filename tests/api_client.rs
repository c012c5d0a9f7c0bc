//! HTTP client behaviour against a stub backend.

mod common;

use serde_json::json;
use std::time::Duration;

use common::{init_logging, StubBackend};
use rehabit::{
    ActivityType, ApiConfig, ApiError, FocusLevel, HttpApiClient, NewActivity, NewUser,
    ProductivityApi, DEFAULT_ACTIVITY_LIMIT,
};

async fn client_for(stub: &StubBackend) -> HttpApiClient {
    init_logging();
    let base_url = stub.start().await;
    HttpApiClient::new(ApiConfig::with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_get_dashboard() {
    let stub = StubBackend::default();
    stub.respond(
        "/api/dashboard/1",
        200,
        json!({
            "user_id": 1,
            "today_score": 8.3,
            "work_time": 245,
            "streak": 7,
            "predictions": [{"hour": 9, "score": 7.5}, {"hour": 10, "score": 8.0}],
            "recommendations": [
                {"type": "timing", "priority": "high", "message": "Schedule your most important task at 10:00 AM", "action": "schedule_task"}
            ],
            "timestamp": "2025-01-19T11:00:00"
        }),
    );
    let client = client_for(&stub).await;

    let snapshot = client.get_dashboard(1).await.unwrap();
    assert_eq!(snapshot.today_score, 8.3);
    assert_eq!(snapshot.work_time, 245);
    assert_eq!(snapshot.predictions.len(), 2);
    assert_eq!(snapshot.recommendations[0].priority, "high");

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].uri, "/api/dashboard/1");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_log_activity_posts_json() {
    let stub = StubBackend::default();
    stub.respond(
        "/api/activities/log",
        200,
        json!({
            "id": 12,
            "user_id": 1,
            "timestamp": "2025-01-19T11:00:00.123456",
            "activity_type": "work",
            "duration": 60,
            "productivity_score": 7,
            "focus_level": "medium"
        }),
    );
    let client = client_for(&stub).await;

    let activity = NewActivity {
        user_id: 1,
        activity_type: ActivityType::Work,
        duration: 60,
        productivity_score: 7,
        focus_level: FocusLevel::Medium,
        notes: Some("planning".to_string()),
    };
    let record = client.log_activity(&activity).await.unwrap();
    assert_eq!(record.id, 12);

    let requests = stub.requests();
    assert_eq!(requests[0].method, "POST");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "user_id": 1,
            "activity_type": "work",
            "duration": 60,
            "productivity_score": 7,
            "focus_level": "medium",
            "notes": "planning"
        })
    );
}

#[tokio::test]
async fn test_list_activities_sends_limit() {
    let stub = StubBackend::default();
    stub.respond("/api/activities/3", 200, json!([]));
    let client = client_for(&stub).await;

    let activities = client.list_activities(3, DEFAULT_ACTIVITY_LIMIT).await.unwrap();
    assert!(activities.is_empty());
    assert_eq!(stub.requests()[0].uri, "/api/activities/3?limit=50");
}

#[tokio::test]
async fn test_users_predictions_recommendations() {
    let stub = StubBackend::default();
    stub.respond(
        "/api/users/create",
        200,
        json!({"id": 2, "name": "Ada", "email": "ada@example.com", "created_at": "2025-01-10T09:00:00"}),
    );
    stub.respond(
        "/api/users/2",
        200,
        json!({"id": 2, "name": "Ada", "email": "ada@example.com", "created_at": "2025-01-10T09:00:00"}),
    );
    stub.respond(
        "/api/predictions/2",
        200,
        json!({
            "user_id": 2,
            "hourly_predictions": [{"hour": 9, "score": 7.5, "confidence": 0.75}],
            "peak_hours": [9],
            "confidence": 0.75,
            "note": "Mock predictions"
        }),
    );
    stub.respond(
        "/api/recommendations/2",
        200,
        json!({
            "user_id": 2,
            "recommendations": [
                {"type": "break", "priority": "medium", "message": "Take a 5-minute break every hour for better focus", "action": "take_break"}
            ],
            "generated_at": "2025-01-19T11:00:00.000001"
        }),
    );
    let client = client_for(&stub).await;

    let user = client
        .create_user(&NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(client.get_user(2).await.unwrap().email, "ada@example.com");

    let predictions = client.get_predictions(2).await.unwrap();
    assert_eq!(predictions.peak_hours, vec![9]);
    assert_eq!(predictions.hourly_predictions[0].confidence, Some(0.75));

    let recs = client.get_recommendations(2).await.unwrap();
    assert_eq!(recs.recommendations[0].kind, "break");
    assert!(recs.generated_at.is_some());

    let methods: Vec<_> = stub.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["POST", "GET", "GET", "GET"]);
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let stub = StubBackend::default();
    stub.respond("/api/users/99", 404, json!({"detail": "User not found"}));
    let client = client_for(&stub).await;

    let err = client.get_user(99).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "User not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let stub = StubBackend::default();
    stub.respond("/api/users/5", 200, json!({"unexpected": true}));
    let client = client_for(&stub).await;

    let err = client.get_user(5).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_dashboard_error_body_is_not_an_empty_dashboard() {
    let stub = StubBackend::default();
    stub.respond("/api/dashboard/1", 200, json!({"detail": "ML service unavailable"}));
    let client = client_for(&stub).await;

    let err = client.get_dashboard(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out_without_retry() {
    let stub = StubBackend::default();
    stub.respond("/api/dashboard/1", 200, json!({}));
    stub.delay(Duration::from_secs(5));
    init_logging();
    let base_url = stub.start().await;

    let config = ApiConfig {
        base_url,
        timeout_secs: 1,
    };
    let client = HttpApiClient::new(config).unwrap();

    let err = client.get_dashboard(1).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout(1));
    assert_eq!(stub.requests().len(), 1);
}
