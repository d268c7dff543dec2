//! Main course component.
//!
//! ## Layout
//!
//! - **Default**: module accordion on the left, viewer on the right
//! - **Theater**: enlarged viewer, module tabs and topic playlist below
//! - **Fullscreen**: viewer only

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::{CourseHeader, ModuleList, TheaterBrowser};
use crate::app::AppContext;
use crate::components::viewer::ResourceViewer;
use crate::models::ViewMode;
#[cfg(target_arch = "wasm32")]
use crate::models::Shortcut;
#[cfg(target_arch = "wasm32")]
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/course/course.module.css");

/// Listen for `F`, `T` and `Escape` on the window.
///
/// Shortcuts with modifier keys are left to the browser.
fn setup_keyboard_shortcuts(ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                return;
            }
            let Some(shortcut) = Shortcut::from_key(&ev.key()) else {
                return;
            };
            if ctx.apply_shortcut(shortcut, dom::text_entry_focused()) {
                ev.prevent_default();
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}

fn mode_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Default => css::modeDefault,
        ViewMode::Theater => css::modeTheater,
        ViewMode::Fullscreen => css::modeFullscreen,
    }
}

/// Course view component.
#[component]
pub fn CourseView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    setup_keyboard_shortcuts(ctx);

    let mode = Memo::new(move |_| ctx.layout.with(|l| l.mode));

    view! {
        <div class=move || format!("{} {}", css::course, mode_class(mode.get()))>
            <CourseHeader />

            <div class=css::body>
                // Left panel: module accordion (default view only)
                <Show when=move || mode.get() == ViewMode::Default>
                    <aside class=css::sidebar>
                        <ModuleList />
                    </aside>
                </Show>

                <main class=css::stage>
                    <ResourceViewer />

                    // Below the viewer: tabs + playlist (theater only)
                    <Show when=move || mode.get() == ViewMode::Theater>
                        <TheaterBrowser />
                    </Show>
                </main>
            </div>
        </div>
    }
}
