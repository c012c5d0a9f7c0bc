//! Card Component
//!
//! White rounded container used by every page.

use leptos::*;

#[component]
pub fn Card(
    /// Extra classes appended to the base style
    #[prop(optional, into)]
    class: String,
    /// Lift the shadow on hover
    #[prop(optional)]
    hover: bool,
    children: Children,
) -> impl IntoView {
    let hover_class = if hover {
        "hover:shadow-xl transition-shadow duration-300"
    } else {
        ""
    };

    view! {
        <div class=format!("bg-white rounded-xl shadow-lg p-6 {} {}", hover_class, class)>
            {children()}
        </div>
    }
}
