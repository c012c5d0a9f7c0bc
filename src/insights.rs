//! Insights Aggregation
//!
//! Simple statistics over a list of past activities: weekly average,
//! trend and most productive hour.

use chrono::Timelike;
use std::collections::BTreeMap;
use std::fmt;

use crate::fixtures::FixtureActivity;
use crate::format::format_hour_12;

/// How far the recent average must move before the trend is not `Stable`
const TREND_THRESHOLD: f64 = 0.5;
/// Activities averaged at each end when computing the trend
const TREND_WINDOW: usize = 3;

/// Direction of productivity over the period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bar/area point on the insights charts
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    /// Short weekday name, e.g. "Mon"
    pub day: String,
    pub productivity: u8,
    pub duration: u32,
    pub focus: u8,
}

/// Computed figures for the insights header
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsSummary {
    pub weekly_average: f64,
    pub trend: Trend,
    /// Display form, e.g. "10AM", or "N/A"
    pub peak_time: String,
    pub points: Vec<ActivityPoint>,
}

impl InsightsSummary {
    pub fn from_activities(activities: &[FixtureActivity]) -> Self {
        Self {
            weekly_average: weekly_average(activities),
            trend: productivity_trend(activities),
            peak_time: most_productive_time(activities),
            points: chart_points(activities),
        }
    }
}

/// Mean productivity score rounded to one decimal; 0 when empty
pub fn weekly_average(activities: &[FixtureActivity]) -> f64 {
    if activities.is_empty() {
        return 0.0;
    }
    let sum: f64 = activities.iter().map(|a| a.productivity_score as f64).sum();
    (sum / activities.len() as f64 * 10.0).round() / 10.0
}

/// Compare the mean of the last three scores against the first three
pub fn productivity_trend(activities: &[FixtureActivity]) -> Trend {
    if activities.len() < 2 {
        return Trend::Stable;
    }

    let mean = |slice: &[FixtureActivity]| {
        slice.iter().map(|a| a.productivity_score as f64).sum::<f64>() / slice.len() as f64
    };

    let window = TREND_WINDOW.min(activities.len());
    let first = mean(&activities[..window]);
    let last = mean(&activities[activities.len() - window..]);

    if last > first + TREND_THRESHOLD {
        Trend::Increasing
    } else if last < first - TREND_THRESHOLD {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Hour of day with the highest mean score; lowest hour wins ties
pub fn peak_hour(activities: &[FixtureActivity]) -> Option<u32> {
    let mut by_hour: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
    for activity in activities {
        let entry = by_hour.entry(activity.timestamp.hour()).or_insert((0.0, 0));
        entry.0 += activity.productivity_score as f64;
        entry.1 += 1;
    }

    let mut best: Option<(u32, f64)> = None;
    for (hour, (total, count)) in by_hour {
        let avg = total / count as f64;
        if best.map_or(true, |(_, b)| avg > b) {
            best = Some((hour, avg));
        }
    }
    best.map(|(hour, _)| hour)
}

/// Peak hour formatted for display, "N/A" without data
pub fn most_productive_time(activities: &[FixtureActivity]) -> String {
    peak_hour(activities)
        .map(format_hour_12)
        .unwrap_or_else(|| "N/A".to_string())
}

/// One chart point per activity, in input order
pub fn chart_points(activities: &[FixtureActivity]) -> Vec<ActivityPoint> {
    activities
        .iter()
        .map(|a| ActivityPoint {
            day: a.timestamp.format("%a").to_string(),
            productivity: a.productivity_score,
            duration: a.duration,
            focus: a.focus_level.weight(),
        })
        .collect()
}
