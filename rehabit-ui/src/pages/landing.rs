//! Landing Page
//!
//! Marketing hero with entry points into the app.

use leptos::*;
use leptos_router::*;

use rehabit::Route;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🧠",
        "AI Predictions",
        "24-hour productivity forecasting using machine learning",
    ),
    (
        "🎯",
        "Pattern Recognition",
        "Automatically discover your peak performance hours",
    ),
    (
        "⚡",
        "Smart Recommendations",
        "Personalized suggestions tailored to your unique patterns",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("85%", "Prediction Accuracy"),
    ("45%", "Productivity Increase"),
    ("7+", "Day Average Streak"),
];

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let navigate = use_navigate();
    let go_dashboard = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| navigate(Route::Dashboard.path(), Default::default())
    };
    let go_activity = move |_: ev::MouseEvent| navigate(Route::ActivityLog.path(), Default::default());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-indigo-500 via-indigo-600 to-purple-600">
            // Hero
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-20 pb-32">
                <div class="flex items-center justify-center mb-8">
                    <div class="w-16 h-16 bg-white/20 rounded-2xl flex items-center justify-center text-3xl">
                        "🧠"
                    </div>
                </div>

                <div class="text-center mb-12">
                    <h1 class="text-5xl sm:text-6xl font-bold text-white mb-6 leading-tight">
                        "Your Personal"
                        <span class="block text-yellow-200">"AI Productivity Coach"</span>
                    </h1>
                    <p class="text-xl sm:text-2xl text-white/90 max-w-3xl mx-auto leading-relaxed">
                        "ML-powered insights to optimize your habits, predict your productivity, and help you achieve your goals"
                    </p>
                </div>

                // Calls to action
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-20">
                    <button
                        on:click=go_dashboard
                        class="bg-white text-indigo-600 px-8 py-4 rounded-xl font-bold text-lg shadow-2xl hover:scale-105 transition-all duration-200"
                    >
                        "Get Started →"
                    </button>
                    <button
                        on:click=go_activity
                        class="bg-white/10 text-white px-8 py-4 rounded-xl font-bold text-lg border-2 border-white/30 hover:bg-white/20 transition-all duration-200"
                    >
                        "Log Activity"
                    </button>
                </div>

                // Features
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| view! {
                            <div class="bg-white/10 rounded-2xl p-6 border border-white/20 hover:scale-105 transition-all duration-200">
                                <div class="w-12 h-12 bg-white/20 rounded-xl flex items-center justify-center mb-4 text-2xl">
                                    {icon}
                                </div>
                                <h3 class="text-xl font-bold text-white mb-2">{title}</h3>
                                <p class="text-white/80 leading-relaxed">{description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            // Headline stats
            <div class="bg-white/10 border-t border-white/20">
                <div class="max-w-7xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    {STATS
                        .into_iter()
                        .map(|(number, label)| view! {
                            <div>
                                <div class="text-4xl font-bold text-white mb-2">{number}</div>
                                <div class="text-white/80">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
