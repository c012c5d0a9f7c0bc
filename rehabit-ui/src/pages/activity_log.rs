//! Activity Log Page
//!
//! Form for logging an activity, with quick presets.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use rehabit::format::activity_emoji;
use rehabit::pages::activity_log::{reset_after_delay, RESET_DELAY_MS};
use rehabit::{
    ActivityForm, ActivityType, FocusLevel, MountGuard, ProductivityApi, QuickPreset,
    SubmitStatus,
};

use crate::components::{Card, InlineLoading};
use crate::state::use_app_context;

/// Activity log page component
#[component]
pub fn ActivityLog() -> impl IntoView {
    let ctx = use_app_context();
    let form = create_rw_signal(ActivityForm::new(ctx.user_id));

    // Unmounting cancels the token, which also skips a pending reset
    let guard = MountGuard::new("activity_log");
    let token = guard.token();
    on_cleanup(move || guard.cancel());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(activity) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = ctx.api.clone();
        let token = token.clone();

        spawn_local(async move {
            let result = api.log_activity(&activity).await;
            if !token.is_alive() {
                return;
            }
            form.update(|f| f.finish_submit(&result));

            if result.is_ok() {
                reset_after_delay(TimeoutFuture::new(RESET_DELAY_MS), &token, || {
                    form.update(|f| f.reset_after_success())
                })
                .await;
            }
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());
    let (min_duration, max_duration) = ActivityForm::duration_bounds();

    view! {
        <div class="max-w-2xl mx-auto">
            // Header
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Log Activity 📝"</h1>
                <p class="text-gray-600">
                    "Track your activities to help our AI understand your patterns"
                </p>
            </div>

            <StatusBanner status=Signal::derive(move || form.with(|f| f.status().clone())) />

            <Card>
                <form on:submit=on_submit class="space-y-6">
                    // Activity type
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Activity Type"
                        </label>
                        <select
                            class="input-field"
                            prop:value=move || form.with(|f| f.activity_type.as_str())
                            on:change=move |ev| {
                                form.update(|f| f.set_activity_type_input(&event_target_value(&ev)))
                            }
                        >
                            {ActivityType::ALL
                                .into_iter()
                                .map(|kind| view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || form.with(|f| f.activity_type == kind)
                                    >
                                        {format!("{} {}", activity_emoji(kind.as_str()), kind.label())}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    // Duration
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Duration (minutes)"
                        </label>
                        <input
                            type="number"
                            class="input-field"
                            min=min_duration
                            max=max_duration
                            required
                            prop:value=move || form.with(|f| f.duration.to_string())
                            on:input=move |ev| {
                                form.update(|f| f.set_duration_input(&event_target_value(&ev)))
                            }
                        />
                        <p class="text-sm text-gray-500 mt-1">
                            {move || form.with(|f| f.duration_hint())}
                        </p>
                    </div>

                    // Productivity score
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Productivity Score: "
                            <span class="text-indigo-600">
                                {move || format!("{}/10", form.with(|f| f.productivity_score))}
                            </span>
                        </label>
                        <input
                            type="range"
                            min="1"
                            max="10"
                            class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer accent-indigo-600"
                            prop:value=move || form.with(|f| f.productivity_score.to_string())
                            on:input=move |ev| {
                                form.update(|f| f.set_score_input(&event_target_value(&ev)))
                            }
                        />
                        <div class="flex justify-between text-xs text-gray-500 mt-1">
                            <span>"Low (1)"</span>
                            <span>"Medium (5)"</span>
                            <span>"High (10)"</span>
                        </div>
                    </div>

                    // Focus level
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Focus Level"
                        </label>
                        <div class="grid grid-cols-3 gap-3">
                            {FocusLevel::ALL
                                .into_iter()
                                .map(|level| {
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| form.update(|f| f.focus_level = level)
                                            class=move || {
                                                let base = "px-4 py-3 rounded-lg font-medium capitalize transition-all duration-200";
                                                if form.with(|f| f.focus_level == level) {
                                                    format!("{} bg-indigo-600 text-white shadow-lg scale-105", base)
                                                } else {
                                                    format!("{} bg-gray-100 text-gray-700 hover:bg-gray-200", base)
                                                }
                                            }
                                        >
                                            {level.as_str()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Notes
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Notes (optional)"
                        </label>
                        <textarea
                            class="input-field resize-none"
                            rows="4"
                            placeholder="Any additional thoughts or observations..."
                            prop:value=move || form.with(|f| f.notes.clone())
                            on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                        />
                    </div>

                    // Submit button
                    <button
                        type="submit"
                        disabled=submitting
                        class="w-full btn-primary disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center space-x-2"
                    >
                        {move || if submitting() {
                            view! {
                                <InlineLoading />
                                <span>"Logging Activity..."</span>
                            }
                            .into_view()
                        } else {
                            view! { <span>"Log Activity"</span> }.into_view()
                        }}
                    </button>
                </form>
            </Card>

            // Quick presets
            <div class="mt-8">
                <h3 class="text-sm font-semibold text-gray-700 mb-3">"Quick Log:"</h3>
                <div class="grid grid-cols-2 gap-3">
                    {QuickPreset::ALL
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| form.update(|f| f.apply_preset(preset))
                                    class="bg-white border-2 border-gray-200 rounded-lg p-4 hover:border-indigo-400 hover:bg-indigo-50 transition-all duration-200 text-left"
                                >
                                    <div class="text-2xl mb-1">
                                        {activity_emoji(preset.activity_type().as_str())}
                                    </div>
                                    <div class="text-sm font-medium text-gray-700">{preset.label()}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Success or error banner above the form
#[component]
fn StatusBanner(#[prop(into)] status: Signal<SubmitStatus>) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Success => view! {
            <div class="mb-6 bg-green-50 border border-green-200 rounded-lg p-4 flex items-center space-x-3">
                <span class="text-green-600">"✓"</span>
                <span class="text-green-800 font-medium">"Activity logged successfully! 🎉"</span>
            </div>
        }
        .into_view(),
        SubmitStatus::Error(message) => view! {
            <div class="mb-6 bg-red-50 border border-red-200 rounded-lg p-4 flex items-center space-x-3">
                <span class="text-red-600">"⚠"</span>
                <span class="text-red-800 font-medium">{message}</span>
            </div>
        }
        .into_view(),
        SubmitStatus::Idle | SubmitStatus::Submitting => view! {}.into_view(),
    }
}
