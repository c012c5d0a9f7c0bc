//! Navigation Component
//!
//! Header with brand, page links and the demo user. Hidden on the landing page.

use leptos::*;
use leptos_router::*;

use rehabit::routes::navbar_visible;
use rehabit::Route;

use crate::state::use_app_context;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let user_id = use_app_context().user_id;

    move || {
        if !navbar_visible(&location.pathname.get()) {
            return view! {}.into_view();
        }

        view! {
            <nav class="bg-white shadow-md">
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between h-16">
                        // Logo and brand
                        <A href=Route::Dashboard.path() class="flex items-center space-x-2">
                            <div class="w-10 h-10 rounded-lg bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center">
                                <span class="text-white font-bold text-xl">"R"</span>
                            </div>
                            <span class="text-xl font-bold text-gray-900">"Rehabit"</span>
                        </A>

                        // Navigation links
                        <div class="flex items-center space-x-1">
                            {Route::NAV
                                .into_iter()
                                .map(|route| view! { <NavLink route=route /> })
                                .collect_view()}
                        </div>

                        // Demo user
                        <div class="flex items-center space-x-3">
                            <div class="text-right">
                                <p class="text-sm font-medium text-gray-900">"Demo User"</p>
                                <p class="text-xs text-gray-500">{format!("User #{}", user_id)}</p>
                            </div>
                            <div class="w-10 h-10 rounded-full bg-indigo-100 flex items-center justify-center">
                                <span class="text-indigo-600 font-semibold">"D"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </nav>
        }
        .into_view()
    }
}

/// Individual navigation link
#[component]
fn NavLink(route: Route) -> impl IntoView {
    view! {
        <A
            href=route.path()
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-indigo-600 hover:bg-indigo-50 transition-colors"
            active_class="bg-indigo-50 text-indigo-600"
        >
            {route.label()}
        </A>
    }
}
