//! Data Model
//!
//! Wire types exchanged with the Rehabit backend. Field names follow the
//! backend's snake_case JSON schema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Shortest loggable activity, in minutes
pub const MIN_DURATION_MINUTES: u32 = 1;
/// Longest loggable activity, in minutes (8 hours)
pub const MAX_DURATION_MINUTES: u32 = 480;
/// Lowest productivity score
pub const MIN_PRODUCTIVITY_SCORE: u8 = 1;
/// Highest productivity score
pub const MAX_PRODUCTIVITY_SCORE: u8 = 10;

/// Backend user identifier
pub type UserId = u64;

// ============ Enums ============

/// Kind of activity the user is logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Work,
    Break,
    Exercise,
    Meeting,
    Study,
    Hobby,
}

impl ActivityType {
    /// All activity types in form display order
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Work,
        ActivityType::Break,
        ActivityType::Exercise,
        ActivityType::Meeting,
        ActivityType::Study,
        ActivityType::Hobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Work => "work",
            ActivityType::Break => "break",
            ActivityType::Exercise => "exercise",
            ActivityType::Meeting => "meeting",
            ActivityType::Study => "study",
            ActivityType::Hobby => "hobby",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Work => "Work",
            ActivityType::Break => "Break",
            ActivityType::Exercise => "Exercise",
            ActivityType::Meeting => "Meeting",
            ActivityType::Study => "Study",
            ActivityType::Hobby => "Hobby",
        }
    }

    /// Parse a wire value; `None` for anything outside the known set
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported focus during an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusLevel {
    Low,
    Medium,
    High,
}

impl FocusLevel {
    pub const ALL: [FocusLevel; 3] = [FocusLevel::Low, FocusLevel::Medium, FocusLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusLevel::Low => "low",
            FocusLevel::Medium => "medium",
            FocusLevel::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Numeric weight used when charting focus (low 1, medium 2, high 3)
    pub fn weight(&self) -> u8 {
        match self {
            FocusLevel::Low => 1,
            FocusLevel::Medium => 2,
            FocusLevel::High => 3,
        }
    }
}

impl fmt::Display for FocusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Users ============

/// Request body for `POST /users/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

// ============ Activities ============

/// Request body for `POST /activities/log`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub user_id: UserId,
    pub activity_type: ActivityType,
    /// Minutes
    pub duration: u32,
    pub productivity_score: u8,
    pub focus_level: FocusLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewActivity {
    /// Check the ranges the form enforces before anything is sent
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration) {
            return Err(ValidationError::Duration(self.duration));
        }
        if !(MIN_PRODUCTIVITY_SCORE..=MAX_PRODUCTIVITY_SCORE).contains(&self.productivity_score) {
            return Err(ValidationError::ProductivityScore(self.productivity_score));
        }
        Ok(())
    }
}

/// A stored activity as echoed back by the backend
///
/// Type and focus stay as strings: the backend accepts values the client
/// enums do not know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: u64,
    pub user_id: UserId,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    pub activity_type: String,
    pub duration: u32,
    pub productivity_score: u8,
    pub focus_level: String,
}

// ============ Dashboard ============

/// One hour of the 24-hour productivity forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPrediction {
    pub hour: u8,
    /// `predicted_score` when it comes straight from the forecast model
    #[serde(alias = "predicted_score")]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// An AI-generated recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub priority: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregate view-model returned by `GET /dashboard/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub user_id: UserId,
    pub today_score: f64,
    /// Minutes worked today
    pub work_time: u32,
    /// Consecutive active days
    pub streak: u32,
    pub predictions: Vec<HourlyPrediction>,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: Option<NaiveDateTime>,
}

impl DashboardSnapshot {
    /// Forecast entry with the highest score (earliest hour on ties)
    pub fn peak_prediction(&self) -> Option<&HourlyPrediction> {
        self.predictions.iter().fold(None, |best, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        })
    }
}

/// Response of `GET /predictions/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionSet {
    pub user_id: UserId,
    pub hourly_predictions: Vec<HourlyPrediction>,
    pub peak_hours: Vec<u8>,
    pub confidence: f64,
    pub note: Option<String>,
}

/// Response of `GET /recommendations/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSet {
    pub user_id: UserId,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: Option<NaiveDateTime>,
}
