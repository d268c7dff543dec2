//! Course header component.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{AppRoute, ViewMode};

stylance::import_crate_style!(css, "src/components/course/header.module.css");

/// Title bar with the signed-in role and the single view-mode control.
#[component]
pub fn CourseHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let mode = Memo::new(move |_| ctx.layout.with(|l| l.mode));
    let role = ctx.services().api.session().and_then(|s| s.role);

    let mode_icon = move || {
        let icon = match mode.get() {
            ViewMode::Default => ic::THEATER,
            ViewMode::Theater => ic::FULLSCREEN,
            ViewMode::Fullscreen => ic::EXIT_FULLSCREEN,
        };
        view! { <Icon icon=icon /> }
    };

    view! {
        <header class=css::header>
            <a class=css::brand href=AppRoute::Course.to_hash()>
                {APP_NAME}
            </a>

            <div class=css::actions>
                {role.map(|role| view! {
                    <span class=css::role>{role.label()}</span>
                })}

                <button
                    class=css::modeButton
                    on:click=move |_| ctx.cycle_mode()
                    title=move || mode.get().cycle_title()
                    aria-label=move || mode.get().cycle_title()
                >
                    {mode_icon}
                </button>
            </div>
        </header>
    }
}
