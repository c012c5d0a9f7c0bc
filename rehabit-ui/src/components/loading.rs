//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-page loading spinner with a message
#[component]
pub fn Loading(
    #[prop(into, default = "Loading...".to_string())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4">
            <div class="loading-spinner w-12 h-12" />
            <p class="text-gray-600">{message}</p>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-5 h-5" />
    }
}
