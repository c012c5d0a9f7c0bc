//! Recommendation Card Component
//!
//! One AI recommendation, colored by priority.

use leptos::*;

use rehabit::format::{priority_color, recommendation_icon};
use rehabit::Recommendation;

#[component]
pub fn RecommendationCard(recommendation: Recommendation) -> impl IntoView {
    let Recommendation {
        kind,
        priority,
        message,
        action,
        reason,
    } = recommendation;

    view! {
        <div class=format!("border-l-4 rounded-lg p-4 {}", priority_color(&priority))>
            <div class="flex items-start space-x-3">
                <span class="text-2xl">{recommendation_icon(&kind)}</span>
                <div class="flex-1">
                    <div class="flex items-center justify-between">
                        <span class="text-xs font-semibold uppercase tracking-wide">
                            {format!("{} priority", if priority.is_empty() { "medium" } else { priority.as_str() })}
                        </span>
                        {action.map(|a| view! {
                            <span class="text-xs text-gray-500">{a.replace('_', " ")}</span>
                        })}
                    </div>
                    <p class="text-gray-800 mt-1">{message}</p>
                    {reason.map(|r| view! { <p class="text-sm text-gray-600 mt-1">{r}</p> })}
                </div>
            </div>
        </div>
    }
}
