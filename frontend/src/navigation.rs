//! Browser location access.
//!
//! Pages are separate document loads: the route is read once when the
//! application mounts, and navigating replaces the document, so every page
//! fetches its data afresh.

use common::routes::Route;
use gloo_console::error;

/// Route of the page the browser is currently showing.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::recognize(&path))
        .unwrap_or(Route::NotFound)
}

/// Loads `route` as a new document, discarding all in-memory page state.
pub fn reload_to(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&route.path()) {
            error!("Navigation failed:", err);
        }
    }
}
