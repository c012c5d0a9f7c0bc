//! Activity Log Form State
//!
//! Submit flow: `idle -> submitting -> success | error`. A success resets
//! duration, score and notes after [`RESET_DELAY_MS`]; the activity type and
//! focus level are kept for the next entry. An error leaves every field as
//! the user entered it.

use std::future::Future;
use std::time::Duration;

use crate::api::ProductivityApi;
use crate::error::ApiResult;
use crate::format::format_minutes;
use crate::lifecycle::MountToken;
use crate::models::{
    ActivityRecord, ActivityType, FocusLevel, NewActivity, UserId, MAX_DURATION_MINUTES,
    MIN_DURATION_MINUTES,
};

/// Delay between a successful submit and the form reset
pub const RESET_DELAY_MS: u32 = 2000;
/// Inline message after a failed submit
pub const SUBMIT_ERROR: &str = "Failed to log activity. Please try again.";

pub const DEFAULT_DURATION: u32 = 60;
pub const DEFAULT_SCORE: u8 = 7;

pub fn reset_delay() -> Duration {
    Duration::from_millis(RESET_DELAY_MS as u64)
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    /// Inline message
    Error(String),
}

/// One-click form fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPreset {
    WorkSession,
    QuickBreak,
}

impl QuickPreset {
    pub const ALL: [QuickPreset; 2] = [QuickPreset::WorkSession, QuickPreset::QuickBreak];

    pub fn label(&self) -> &'static str {
        match self {
            QuickPreset::WorkSession => "Work Session",
            QuickPreset::QuickBreak => "Quick Break",
        }
    }

    fn values(&self) -> (ActivityType, u32, FocusLevel) {
        match self {
            QuickPreset::WorkSession => (ActivityType::Work, 60, FocusLevel::High),
            QuickPreset::QuickBreak => (ActivityType::Break, 15, FocusLevel::Low),
        }
    }

    pub fn activity_type(&self) -> ActivityType {
        self.values().0
    }
}

/// Local state of the activity log form
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub user_id: UserId,
    pub activity_type: ActivityType,
    pub duration: u32,
    pub productivity_score: u8,
    pub focus_level: FocusLevel,
    pub notes: String,
    status: SubmitStatus,
}

impl ActivityForm {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::Work,
            duration: DEFAULT_DURATION,
            productivity_score: DEFAULT_SCORE,
            focus_level: FocusLevel::Medium,
            notes: String::new(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Set duration from raw input text; unparseable input is ignored
    pub fn set_duration_input(&mut self, value: &str) {
        if let Ok(minutes) = value.trim().parse() {
            self.duration = minutes;
        }
    }

    /// Set score from raw input text; unparseable input is ignored
    pub fn set_score_input(&mut self, value: &str) {
        if let Ok(score) = value.trim().parse() {
            self.productivity_score = score;
        }
    }

    /// Set activity type from a select value; unknown values are ignored
    pub fn set_activity_type_input(&mut self, value: &str) {
        if let Some(kind) = ActivityType::parse(value) {
            self.activity_type = kind;
        }
    }

    pub fn apply_preset(&mut self, preset: QuickPreset) {
        let (kind, duration, focus) = preset.values();
        self.activity_type = kind;
        self.duration = duration;
        self.focus_level = focus;
    }

    /// Live "Xh Ym" hint under the duration field
    pub fn duration_hint(&self) -> String {
        format_minutes(self.duration)
    }

    pub fn duration_bounds() -> (u32, u32) {
        (MIN_DURATION_MINUTES, MAX_DURATION_MINUTES)
    }

    /// Request body for the current field values
    pub fn to_activity(&self) -> NewActivity {
        let notes = self.notes.trim();
        NewActivity {
            user_id: self.user_id,
            activity_type: self.activity_type,
            duration: self.duration,
            productivity_score: self.productivity_score,
            focus_level: self.focus_level,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    /// Enter `submitting` and return the payload to send
    ///
    /// Returns `None` while a submit is already in flight, or when the input
    /// is out of range (the status then carries the validation message).
    pub fn begin_submit(&mut self) -> Option<NewActivity> {
        if self.is_submitting() {
            return None;
        }

        let activity = self.to_activity();
        if let Err(e) = activity.validate() {
            self.status = SubmitStatus::Error(e.to_string());
            return None;
        }

        self.status = SubmitStatus::Submitting;
        Some(activity)
    }

    /// Settle the submit into `success` or `error`
    pub fn finish_submit(&mut self, result: &ApiResult<ActivityRecord>) {
        self.status = match result {
            Ok(_) => SubmitStatus::Success,
            Err(e) => {
                tracing::error!("Error logging activity: {}", e);
                SubmitStatus::Error(SUBMIT_ERROR.to_string())
            }
        };
    }

    /// Called [`RESET_DELAY_MS`] after a success: clear the banner and the
    /// per-entry fields. No-op unless the form is still showing success.
    pub fn reset_after_success(&mut self) {
        if self.status != SubmitStatus::Success {
            return;
        }
        self.status = SubmitStatus::Idle;
        self.duration = DEFAULT_DURATION;
        self.productivity_score = DEFAULT_SCORE;
        self.notes.clear();
    }

    /// Validate, send, and settle. Returns whether the backend accepted it.
    pub async fn submit<A: ProductivityApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(activity) = self.begin_submit() else {
            return false;
        };
        let result = api.log_activity(&activity).await;
        self.finish_submit(&result);
        result.is_ok()
    }
}

/// Wait on `delay`, then run `reset` if the page is still mounted.
///
/// `delay` is the host's timer for [`RESET_DELAY_MS`] (a gloo
/// `TimeoutFuture` in the browser, a tokio sleep natively). `reset` should
/// call [`ActivityForm::reset_after_success`]. Returns whether it ran.
pub async fn reset_after_delay<D>(delay: D, token: &MountToken, reset: impl FnOnce()) -> bool
where
    D: Future<Output = ()>,
{
    delay.await;
    let ran = token.run(reset).is_some();
    if !ran {
        tracing::debug!("activity form unmounted before reset");
    }
    ran
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn record() -> ActivityRecord {
        ActivityRecord {
            id: 1,
            user_id: 1,
            timestamp: None,
            activity_type: "work".into(),
            duration: 60,
            productivity_score: 7,
            focus_level: "medium".into(),
        }
    }

    #[test]
    fn test_defaults() {
        let form = ActivityForm::new(1);
        assert_eq!(form.activity_type, ActivityType::Work);
        assert_eq!(form.duration, 60);
        assert_eq!(form.productivity_score, 7);
        assert_eq!(form.focus_level, FocusLevel::Medium);
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.duration_hint(), "1h 0m");
    }

    #[test]
    fn test_empty_notes_are_omitted() {
        let mut form = ActivityForm::new(1);
        form.notes = "   ".into();
        assert_eq!(form.to_activity().notes, None);
        form.notes = " deep work ".into();
        assert_eq!(form.to_activity().notes.as_deref(), Some("deep work"));
    }

    #[test]
    fn test_begin_submit_blocks_double_submit() {
        let mut form = ActivityForm::new(1);
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_invalid_duration_never_submits() {
        let mut form = ActivityForm::new(1);
        form.set_duration_input("500");
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.error(),
            Some("Duration must be between 1 and 480 minutes (got 500)")
        );
        assert_eq!(form.duration, 500);
    }

    #[test]
    fn test_success_then_reset_keeps_type_and_focus() {
        let mut form = ActivityForm::new(1);
        form.activity_type = ActivityType::Study;
        form.focus_level = FocusLevel::High;
        form.duration = 90;
        form.productivity_score = 9;
        form.notes = "chapter 3".into();

        form.begin_submit();
        form.finish_submit(&Ok(record()));
        assert_eq!(form.status(), &SubmitStatus::Success);
        assert_eq!(form.duration, 90);

        form.reset_after_success();
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.duration, DEFAULT_DURATION);
        assert_eq!(form.productivity_score, DEFAULT_SCORE);
        assert!(form.notes.is_empty());
        assert_eq!(form.activity_type, ActivityType::Study);
        assert_eq!(form.focus_level, FocusLevel::High);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = ActivityForm::new(1);
        form.duration = 45;
        form.notes = "standup".into();

        form.begin_submit();
        form.finish_submit(&Err(ApiError::Status {
            status: 404,
            message: "User not found".into(),
        }));

        assert_eq!(form.error(), Some(SUBMIT_ERROR));
        assert_eq!(form.duration, 45);
        assert_eq!(form.notes, "standup");

        // A late reset timer must not wipe a form showing an error
        form.reset_after_success();
        assert_eq!(form.notes, "standup");
    }

    #[test]
    fn test_presets() {
        let mut form = ActivityForm::new(1);
        form.productivity_score = 3;
        form.apply_preset(QuickPreset::QuickBreak);
        assert_eq!(form.activity_type, ActivityType::Break);
        assert_eq!(form.duration, 15);
        assert_eq!(form.focus_level, FocusLevel::Low);
        assert_eq!(form.productivity_score, 3);

        form.apply_preset(QuickPreset::WorkSession);
        assert_eq!(form.duration_hint(), "1h 0m");
        assert_eq!(form.focus_level, FocusLevel::High);
    }

    #[test]
    fn test_raw_input_parsing() {
        let mut form = ActivityForm::new(1);
        form.set_duration_input("125");
        assert_eq!(form.duration_hint(), "2h 5m");
        form.set_duration_input("abc");
        assert_eq!(form.duration, 125);
        form.set_score_input("9");
        assert_eq!(form.productivity_score, 9);
        form.set_activity_type_input("hobby");
        assert_eq!(form.activity_type, ActivityType::Hobby);
        form.set_activity_type_input("nap");
        assert_eq!(form.activity_type, ActivityType::Hobby);
    }
}
