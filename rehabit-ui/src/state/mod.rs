//! Application Context
//!
//! Backend client and session identity shared with every page.

use leptos::*;
use std::rc::Rc;

use rehabit::{ApiConfig, SessionConfig, UserId};

use crate::api::{get_api_base, GlooApiClient};

/// Local storage key overriding the demo user id
pub const USER_ID_KEY: &str = "rehabit_user_id";

/// Context provided to all pages
#[derive(Clone)]
pub struct AppContext {
    /// Backend client (one per app)
    pub api: Rc<GlooApiClient>,
    /// The user every page acts on behalf of
    pub user_id: UserId,
}

/// Provide the app context to the component tree
pub fn provide_app_context() {
    let config = ApiConfig::with_base_url(get_api_base());
    let context = AppContext {
        api: Rc::new(GlooApiClient::new(config)),
        user_id: stored_user_id().unwrap_or_else(|| SessionConfig::default().user_id),
    };

    provide_context(context);
}

/// Fetch the app context (panics outside `App`)
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}

fn stored_user_id() -> Option<UserId> {
    let storage = web_sys::window()?.local_storage().ok()??;
    parse_user_id(&storage.get_item(USER_ID_KEY).ok()??)
}

fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}
