//! # Rehabit
//!
//! Core of the Rehabit productivity dashboard: the data model shared with the
//! backend, the API client, display formatting and the state machines behind
//! each page. The Leptos frontend in `rehabit-ui/` renders on top of it.
//!
//! ## Modules
//!
//! - [`api`]: Backend operations, endpoint table and the native HTTP client
//! - [`models`]: Wire types (activities, dashboard snapshot, recommendations)
//! - [`pages`]: Dashboard and activity-log state machines
//! - [`insights`]: Aggregation over the insights fixture
//! - [`routes`]: Client-side route table
//! - [`format`]: Display helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rehabit::api::{HttpApiClient, ProductivityApi};
//! use rehabit::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = HttpApiClient::new(config.api.clone())?;
//!
//!     let snapshot = client.get_dashboard(config.session.user_id).await?;
//!     println!(
//!         "Today: {}/10, worked {}",
//!         snapshot.today_score,
//!         rehabit::format::format_minutes(snapshot.work_time)
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod insights;
pub mod lifecycle;
pub mod models;
pub mod pages;
pub mod routes;

// Re-export top-level types for convenience
pub use api::{Endpoint, Method, ProductivityApi, DEFAULT_ACTIVITY_LIMIT};

#[cfg(feature = "http-client")]
pub use api::HttpApiClient;

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, SessionConfig};

pub use error::{ApiError, ApiResult, ValidationError};

pub use models::{
    ActivityRecord, ActivityType, DashboardSnapshot, FocusLevel, HourlyPrediction, NewActivity,
    NewUser, PredictionSet, Recommendation, RecommendationSet, User, UserId,
};

pub use pages::{ActivityForm, DashboardPage, LoadState, QuickPreset, SubmitStatus};

pub use insights::{InsightsSummary, Trend};

pub use lifecycle::{MountGuard, MountToken};

pub use routes::{Route, RouteMatch};
