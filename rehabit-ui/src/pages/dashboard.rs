//! Dashboard Page
//!
//! Today's score, work time and streak, the hourly forecast and the
//! AI recommendations.

use leptos::*;

use rehabit::format::{format_date, format_hour_12, format_minutes};
use rehabit::{DashboardPage, DashboardSnapshot, LoadState, MountGuard, ProductivityApi};

use crate::components::{Card, Loading, ProductivityChart, RecommendationCard, StatsCard};
use crate::state::use_app_context;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let page = create_rw_signal(DashboardPage::new(ctx.user_id));

    let guard = MountGuard::new("dashboard");
    let token = guard.token();
    on_cleanup(move || guard.cancel());

    // Fetch on mount and on "Try Again"
    let load = Callback::new(move |_: ()| {
        let Some(attempt) = page.try_update(|p| p.begin_load()) else {
            return;
        };
        let api = ctx.api.clone();
        let token = token.clone();
        let user_id = ctx.user_id;

        spawn_local(async move {
            let result = api.get_dashboard(user_id).await;
            token.run(|| page.update(|p| p.finish_load(attempt, result)));
        });
    });
    load.call(());

    move || match page.with(|p| p.state().clone()) {
        LoadState::Loading => view! {
            <Loading message="Loading your dashboard..." />
        }
        .into_view(),
        LoadState::Error(message) => view! {
            <div class="min-h-[60vh] flex items-center justify-center">
                <div class="text-center">
                    <p class="text-red-600 font-semibold mb-4">{message}</p>
                    <button on:click=move |_| load.call(()) class="btn-primary">
                        "Try Again"
                    </button>
                </div>
            </div>
        }
        .into_view(),
        LoadState::Ready(snapshot) => view! { <DashboardView snapshot=snapshot /> }.into_view(),
    }
}

#[component]
fn DashboardView(snapshot: DashboardSnapshot) -> impl IntoView {
    let (peak_hour, peak_note) = snapshot
        .peak_prediction()
        .map(|p| {
            (
                format_hour_12(p.hour as u32),
                format!("Forecast {:.1}/10", p.score),
            )
        })
        .unwrap_or_else(|| ("-".to_string(), "No forecast yet".to_string()));

    let DashboardSnapshot {
        today_score,
        work_time,
        streak,
        predictions,
        recommendations,
        ..
    } = snapshot;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Welcome back! 👋"</h1>
                <p class="text-gray-600">
                    "Here's your productivity overview for today, "
                    {format_date(chrono::Local::now().date_naive())}
                </p>
            </div>

            // Summary row
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatsCard
                    icon="🎯"
                    label="Today's Productivity"
                    value=format!("{}/10", today_score)
                    color="from-indigo-500 to-purple-600"
                />
                <StatsCard
                    icon="⏱️"
                    label="Work Time"
                    value=format_minutes(work_time)
                    color="from-green-500 to-green-600"
                />
                <StatsCard
                    icon="🔥"
                    label="Current Streak"
                    value=format!("{} days", streak)
                    subtitle="Keep it up! 🔥"
                    color="from-orange-500 to-orange-600"
                />
                <StatsCard
                    icon="📈"
                    label="Best Hour"
                    value=peak_hour
                    subtitle=peak_note
                    color="from-purple-500 to-purple-600"
                />
            </div>

            // Forecast and recommendations
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <Card>
                        <h3 class="text-lg font-bold text-gray-900 mb-4">"📊 Today's Productivity Forecast"</h3>
                        <ProductivityChart predictions=predictions />
                    </Card>
                </div>

                <div class="lg:col-span-1">
                    <Card>
                        <h3 class="text-lg font-bold text-gray-900 mb-4">"🤖 AI Recommendations"</h3>
                        <div class="space-y-3">
                            {if recommendations.is_empty() {
                                view! {
                                    <p class="text-gray-500 text-sm">"No recommendations right now"</p>
                                }
                                .into_view()
                            } else {
                                recommendations
                                    .into_iter()
                                    .map(|rec| view! { <RecommendationCard recommendation=rec /> })
                                    .collect_view()
                            }}
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}
