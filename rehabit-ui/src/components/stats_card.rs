//! Stats Card Component
//!
//! A headline number with an icon, shown in the dashboard summary row.

use leptos::*;

use super::Card;

#[component]
pub fn StatsCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)]
    value: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Tailwind gradient stops for the icon badge, e.g. "from-blue-500 to-blue-600"
    #[prop(default = "from-indigo-500 to-purple-600")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <Card hover=true>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-gray-600 text-sm font-medium">{label}</p>
                    <p class="text-3xl font-bold text-gray-900 mt-2">{value}</p>
                    {subtitle.map(|s| view! { <p class="text-sm text-gray-500 mt-1">{s}</p> })}
                </div>
                <div class=format!(
                    "w-14 h-14 rounded-full bg-gradient-to-br {} flex items-center justify-center text-2xl",
                    color,
                )>
                    {icon}
                </div>
            </div>
        </Card>
    }
}
