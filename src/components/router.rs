//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the selected topic is derived from
//!   `#/modules/{m}/topics/{t}`
//! - **CourseView never re-renders on navigation**: only its selection changes
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::course::CourseView;
use crate::models::AppRoute;
use crate::utils::dom;

/// Main application router.
///
/// Routes:
/// - `#/` → Course overview
/// - `#/modules/3/topics/12` → Topic 12 of module 3 selected
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Apply the initial route
    apply_current_route(ctx);

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            apply_current_route(ctx);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! { <CourseView /> }
}

/// Read the hash, normalize unknown routes to `#/`, and hand the route to
/// the context.
fn apply_current_route(ctx: AppContext) {
    let hash = dom::get_hash();
    let route = AppRoute::from_hash(&hash);
    if route == AppRoute::Course && !is_overview_hash(&hash) {
        log::debug!("unknown route '{}', showing overview", hash);
        dom::replace_hash(&route.to_hash());
    }
    ctx.apply_route(route);
}

fn is_overview_hash(hash: &str) -> bool {
    matches!(hash, "" | "#" | "#/")
}
