//! Mock Data Provider
//!
//! Static data behind the insights page, which is not wired to the live
//! backend yet.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{ActivityType, FocusLevel};

/// A past activity in the insights fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureActivity {
    pub timestamp: NaiveDateTime,
    pub activity_type: ActivityType,
    pub duration: u32,
    pub productivity_score: u8,
    pub focus_level: FocusLevel,
}

/// Forecast summary shown on the insights page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixturePrediction {
    pub predicted_score: f64,
    /// 0.0 - 1.0
    pub confidence: f64,
    pub trend: String,
}

/// A personalized tip with optional rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightTip {
    pub recommendation: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Headline numbers for the insights page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSummary {
    pub current_streak: u32,
    pub total_tasks: u32,
    pub avg_score: f64,
}

/// Everything the insights page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsData {
    pub activities: Vec<FixtureActivity>,
    pub predictions: FixturePrediction,
    pub recommendations: Vec<InsightTip>,
    pub dashboard: FixtureSummary,
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn work(day: u32, hour: u32, minute: u32, duration: u32, score: u8, focus: FocusLevel) -> FixtureActivity {
    FixtureActivity {
        timestamp: at(day, hour, minute),
        activity_type: ActivityType::Work,
        duration,
        productivity_score: score,
        focus_level: focus,
    }
}

/// The week of sample data used by the insights page
pub fn mock_insights() -> InsightsData {
    use FocusLevel::{High, Medium};

    InsightsData {
        activities: vec![
            work(13, 8, 0, 90, 8, High),
            work(14, 9, 0, 120, 7, High),
            work(15, 10, 0, 60, 9, High),
            work(16, 8, 30, 75, 6, Medium),
            work(17, 9, 30, 100, 8, High),
            work(18, 10, 0, 85, 7, Medium),
            work(19, 11, 0, 95, 8, High),
        ],
        predictions: FixturePrediction {
            predicted_score: 8.2,
            confidence: 0.87,
            trend: "increasing".to_string(),
        },
        recommendations: vec![
            InsightTip {
                recommendation: "Your productivity is trending upward! Maintain your current routine for best results.".to_string(),
                reason: Some("AI detected consistent improvement over the past week".to_string()),
            },
            InsightTip {
                recommendation: "Consider scheduling deep work sessions between 9-11 AM when your focus is highest.".to_string(),
                reason: Some("Analysis shows 25% higher productivity during morning hours".to_string()),
            },
            InsightTip {
                recommendation: "You're on track for a personal best this month. Keep up the momentum!".to_string(),
                reason: Some("Current streak indicates strong habit formation".to_string()),
            },
        ],
        dashboard: FixtureSummary {
            current_streak: 5,
            total_tasks: 42,
            avg_score: 7.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_insights_shape() {
        let data = mock_insights();
        assert_eq!(data.activities.len(), 7);
        assert_eq!(data.recommendations.len(), 3);
        assert_eq!(data.dashboard.current_streak, 5);
        assert!(data
            .activities
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp));
    }
}
