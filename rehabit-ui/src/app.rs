//! App Root Component
//!
//! Main application component with routing and the shared context.

use leptos::*;
use leptos_router::*;

use rehabit::routes::navbar_visible;
use rehabit::Route as Page;

use crate::components::Navbar;
use crate::pages::{ActivityLog, Dashboard, Insights, Landing};
use crate::state::provide_app_context;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_context();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 flex flex-col">
                <Navbar />
                <Main />
            </div>
        </Router>
    }
}

/// Routed content; the landing page spans the full width
#[component]
fn Main() -> impl IntoView {
    let location = use_location();

    view! {
        <main class=move || {
            if navbar_visible(&location.pathname.get()) {
                "flex-1 container mx-auto px-4 py-8"
            } else {
                "flex-1"
            }
        }>
            <Routes>
                <Route path=Page::Landing.path() view=Landing />
                <Route path=Page::Dashboard.path() view=Dashboard />
                <Route path=Page::ActivityLog.path() view=ActivityLog />
                <Route path=Page::Insights.path() view=Insights />
                <Route path="/*any" view=NotFound />
            </Routes>
        </main>
    }
}

/// Unknown paths go back to the landing page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Redirect
            path=Page::Landing.path()
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}
