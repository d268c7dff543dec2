//! Theater-mode browser: module tabs and a topic playlist.
//!
//! Tabs switch the browsed module only. The accordion of the default view
//! keeps its own expanded state. A failed module list shows the same
//! retry panel as the sidebar.

use leptos::prelude::*;

use super::{LoadError, TopicList};
use crate::app::AppContext;
use crate::models::Module;

stylance::import_crate_style!(css, "src/components/course/theater.module.css");

#[component]
pub fn TheaterBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let browsing = Memo::new(move |_| ctx.layout.with(|l| l.browsing_module));
    let modules = Memo::new(move |_| ctx.modules.with(|state| state.items().to_vec()));
    let load_error = Memo::new(move |_| ctx.modules.with(|state| state.error().map(String::from)));

    view! {
        <section class=css::theater aria-label="Course browser">
            {move || load_error.get().map(|message| view! {
                <LoadError message=message on_retry=Callback::new(move |_| ctx.load_modules()) />
            })}
            <div class=css::tabs role="tablist">
                <For
                    each=move || modules.get()
                    key=|module| module.id
                    children=move |module: Module| {
                        let id = module.id;
                        let active = Memo::new(move |_| browsing.get() == Some(id));
                        view! {
                            <button
                                role="tab"
                                class=move || {
                                    if active.get() {
                                        format!("{} {}", css::tab, css::tabActive)
                                    } else {
                                        css::tab.to_string()
                                    }
                                }
                                aria-selected=move || active.get().to_string()
                                on:click=move |_| ctx.browse(id)
                            >
                                {module.title}
                            </button>
                        }
                    }
                />
            </div>

            <div class=css::playlist>
                {move || match browsing.get() {
                    Some(module) => view! { <TopicList module=module /> }.into_any(),
                    None => {
                        view! {
                            <p class=css::hint>"Choose a module to browse its topics."</p>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
