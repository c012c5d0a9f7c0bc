//! Insights Page
//!
//! Weekly analytics over the sample data set: headline metrics, trend and
//! duration charts, the forecast and personalized tips.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use rehabit::fixtures::{mock_insights, InsightsData};
use rehabit::{InsightsSummary, LoadState, MountGuard};

use crate::components::chart::SCORE_AXIS_MAX;
use crate::components::{Chart, ChartKind, Loading};

/// Simulated fetch delay for the sample data
const SIMULATED_LOAD_MS: u32 = 500;

/// Insights page component
#[component]
pub fn Insights() -> impl IntoView {
    let state = create_rw_signal(LoadState::<(InsightsData, InsightsSummary)>::Loading);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let guard = MountGuard::new("insights");
    let token = guard.token();
    {
        let pending = Rc::clone(&pending);
        on_cleanup(move || {
            guard.cancel();
            pending.borrow_mut().take();
        });
    }

    let load = Callback::new(move |_: ()| {
        state.set(LoadState::Loading);
        let token = token.clone();
        let timer = Timeout::new(SIMULATED_LOAD_MS, move || {
            token.run(|| {
                let data = mock_insights();
                let summary = InsightsSummary::from_activities(&data.activities);
                state.set(LoadState::Ready((data, summary)));
            });
        });
        pending.borrow_mut().replace(timer);
    });
    load.call(());

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Insights"</h1>
                    <p class="text-gray-600 mt-1">"Your productivity analytics and AI recommendations"</p>
                </div>
                <button
                    on:click=move |_| load.call(())
                    class="flex items-center gap-2 bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            {move || match state.get() {
                LoadState::Ready((data, summary)) => {
                    view! { <InsightsView data=data summary=summary /> }.into_view()
                }
                LoadState::Error(message) => {
                    view! { <p class="text-red-600 font-semibold">{message}</p> }.into_view()
                }
                LoadState::Loading => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn InsightsView(data: InsightsData, summary: InsightsSummary) -> impl IntoView {
    let labels: Vec<String> = summary.points.iter().map(|p| p.day.clone()).collect();
    let productivity = summary
        .points
        .iter()
        .map(|p| p.productivity as f64)
        .collect();
    let durations = summary.points.iter().map(|p| p.duration as f64).collect();

    view! {
        // Key metrics
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <MetricTile
                value=format!("{:.1}", summary.weekly_average)
                label="Weekly Avg Score"
                gradient="from-blue-500 to-blue-600"
            />
            <MetricTile
                value=summary.trend.to_string()
                label="Productivity Trend"
                gradient="from-purple-500 to-purple-600"
            />
            <MetricTile
                value=summary.peak_time.clone()
                label="Peak Performance"
                gradient="from-green-500 to-green-600"
            />
            <MetricTile
                value=data.dashboard.current_streak.to_string()
                label="Day Streak"
                gradient="from-orange-500 to-orange-600"
            />
        </div>

        // Charts
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-semibold mb-4">"7-Day Productivity Trend"</h2>
                <Chart
                    kind=ChartKind::Area
                    labels=labels.clone()
                    values=productivity
                    y_max=SCORE_AXIS_MAX
                    color="#3b82f6"
                />
            </div>
            <div class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-semibold mb-4">"Time Spent (Minutes)"</h2>
                <Chart kind=ChartKind::Bar labels=labels values=durations color="#8b5cf6" />
            </div>
        </div>

        // Forecast
        <div class="bg-white rounded-lg shadow-md p-6">
            <h2 class="text-xl font-semibold mb-4">"AI Predictions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="border-2 border-gray-200 rounded-lg p-4">
                    <p class="text-sm text-gray-600 mb-1">"Predicted Score"</p>
                    <p class="text-3xl font-bold text-indigo-600">
                        {format!("{:.1}", data.predictions.predicted_score)}
                    </p>
                </div>
                <div class="border-2 border-gray-200 rounded-lg p-4">
                    <p class="text-sm text-gray-600 mb-1">"Confidence Level"</p>
                    <p class="text-3xl font-bold text-green-600">
                        {format!("{:.0}%", data.predictions.confidence * 100.0)}
                    </p>
                </div>
                <div class="border-2 border-gray-200 rounded-lg p-4">
                    <p class="text-sm text-gray-600 mb-1">"Trend"</p>
                    <p class="text-3xl font-bold text-blue-600 capitalize">
                        {data.predictions.trend.clone()}
                    </p>
                </div>
            </div>
        </div>

        // Tips
        <div class="bg-white rounded-lg shadow-md p-6">
            <h2 class="text-xl font-semibold mb-4">"Personalized Recommendations"</h2>
            <div class="space-y-3">
                {data
                    .recommendations
                    .into_iter()
                    .enumerate()
                    .map(|(index, tip)| view! {
                        <div class="flex items-start gap-3 p-4 bg-gradient-to-r from-green-50 to-emerald-50 border border-green-200 rounded-lg">
                            <div class="bg-green-600 text-white rounded-full w-8 h-8 flex items-center justify-center flex-shrink-0 font-semibold">
                                {index + 1}
                            </div>
                            <div class="flex-1">
                                <p class="text-gray-800 font-medium">{tip.recommendation}</p>
                                {tip.reason.map(|r| view! {
                                    <p class="text-sm text-gray-600 mt-1">{format!("💡 {}", r)}</p>
                                })}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Gradient headline tile
#[component]
fn MetricTile(
    #[prop(into)]
    value: String,
    label: &'static str,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gradient-to-br {} rounded-lg p-6 text-white shadow-lg", gradient)>
            <span class="text-3xl font-bold capitalize">{value}</span>
            <p class="text-sm font-medium opacity-80 mt-2">{label}</p>
        </div>
    }
}
