//! Display Formatting
//!
//! Pure helpers shared by the pages. All of them are total: unknown inputs
//! fall back to a default instead of failing.

use chrono::NaiveDate;

/// Fallback emoji for unrecognized activity types
pub const DEFAULT_ACTIVITY_EMOJI: &str = "📝";

/// Tailwind classes for high priority recommendations
pub const PRIORITY_HIGH_CLASS: &str = "text-red-600 bg-red-50 border-red-200";
/// Tailwind classes for medium priority (also the fallback)
pub const PRIORITY_MEDIUM_CLASS: &str = "text-yellow-600 bg-yellow-50 border-yellow-200";
/// Tailwind classes for low priority recommendations
pub const PRIORITY_LOW_CLASS: &str = "text-green-600 bg-green-50 border-green-200";

/// Emoji for an activity type
pub fn activity_emoji(activity_type: &str) -> &'static str {
    match activity_type {
        "work" => "💼",
        "break" => "☕",
        "exercise" => "🏃",
        "meeting" => "👥",
        "study" => "📚",
        "hobby" => "🎨",
        _ => DEFAULT_ACTIVITY_EMOJI,
    }
}

/// CSS classes for a recommendation priority
pub fn priority_color(priority: &str) -> &'static str {
    match priority {
        "high" => PRIORITY_HIGH_CLASS,
        "low" => PRIORITY_LOW_CLASS,
        _ => PRIORITY_MEDIUM_CLASS,
    }
}

/// Icon for a recommendation type
pub fn recommendation_icon(kind: &str) -> &'static str {
    match kind {
        "timing" => "⏰",
        "break" => "🧘",
        "health" => "⚠️",
        _ => "💡",
    }
}

/// Minutes as "Xh Ym", or just "Ym" under an hour
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Short US date, e.g. "Jan 13, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Hour of day on a 12-hour clock, e.g. "9AM", "12PM"
pub fn format_hour_12(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}{}", display, period)
}

/// Hour of day as an axis label, e.g. "9:00"
pub fn format_hour_label(hour: u32) -> String {
    format!("{}:00", hour)
}
