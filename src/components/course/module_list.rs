//! Module accordion and topic lists.
//!
//! Expanding a module loads its topics once; collapsing and expanding again
//! reuses the cached list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::ListState;
use crate::models::{Module, ModuleId, Topic, TopicRef};

stylance::import_crate_style!(css, "src/components/course/module_list.module.css");

/// "Could not load" message with a retry action.
#[component]
pub fn LoadError(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::loadError role="alert">
            <span class=css::loadErrorIcon><Icon icon=ic::WARNING /></span>
            <span class=css::loadErrorText>
                "Could not load. "
                <span class=css::loadErrorDetail>{message}</span>
            </span>
            <button class=css::retryButton on:click=move |_| on_retry.run(()) title="Retry">
                <Icon icon=ic::RETRY />
            </button>
        </div>
    }
}

/// Accordion of every module assigned to the user.
#[component]
pub fn ModuleList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::list aria-label="Modules">
            {move || match ctx.modules.get() {
                ListState::Loading => {
                    view! { <p class=css::status>"Loading modules..."</p> }.into_any()
                }
                ListState::Failed(message) => {
                    view! {
                        <LoadError
                            message=message
                            on_retry=Callback::new(move |_| ctx.load_modules())
                        />
                    }
                        .into_any()
                }
                ListState::Ready(modules) if modules.is_empty() => {
                    view! { <p class=css::status>"No modules assigned yet."</p> }.into_any()
                }
                ListState::Ready(modules) => {
                    modules
                        .iter()
                        .cloned()
                        .map(|module| view! { <ModuleItem module=module /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </nav>
    }
}

#[component]
fn ModuleItem(module: Module) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = module.id;
    let expanded = Memo::new(move |_| ctx.layout.with(|l| l.is_expanded(id)));
    let ratio = Memo::new(move |_| ctx.completion_ratio(id));

    let chevron = move || {
        let icon = if expanded.get() {
            ic::CHEVRON_DOWN
        } else {
            ic::CHEVRON_RIGHT
        };
        view! { <Icon icon=icon /> }
    };

    view! {
        <section class=css::module>
            <button
                class=css::moduleHeader
                on:click=move |_| ctx.toggle_module(id)
                aria-expanded=move || expanded.get().to_string()
            >
                <span class=css::chevron>{chevron}</span>
                <span class=css::moduleTitle>{module.title}</span>
                <span class=css::ratio>{move || format!("{}%", ratio.get())}</span>
            </button>

            <div class=css::progressBar>
                <div class=css::progressFill style:width=move || format!("{}%", ratio.get())></div>
            </div>

            {module.description.filter(|d| !d.trim().is_empty()).map(|description| view! {
                <p class=css::moduleDescription>{description}</p>
            })}

            <Show when=move || expanded.get()>
                <TopicList module=id />
            </Show>
        </section>
    }
}

/// Topics of one module, loading them on first display.
///
/// Shared by the accordion and the theater playlist.
#[component]
pub fn TopicList(module: ModuleId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    ctx.ensure_topics(module);
    let state = Memo::new(move |_| ctx.topics.with(|cache| cache.get(module).cloned()));

    view! {
        <div class=css::topics>
            {move || match state.get() {
                None | Some(ListState::Loading) => {
                    view! { <p class=css::status>"Loading topics..."</p> }.into_any()
                }
                Some(ListState::Failed(message)) => {
                    view! {
                        <LoadError
                            message=message
                            on_retry=Callback::new(move |_| ctx.ensure_topics(module))
                        />
                    }
                        .into_any()
                }
                Some(ListState::Ready(topics)) if topics.is_empty() => {
                    view! { <p class=css::status>"No topics in this module."</p> }.into_any()
                }
                Some(ListState::Ready(topics)) => {
                    view! {
                        <ol class=css::topicList>
                            {topics
                                .iter()
                                .cloned()
                                .map(|topic| view! { <TopicItem module=module topic=topic /> })
                                .collect_view()}
                        </ol>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TopicItem(module: ModuleId, topic: Topic) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let at = TopicRef {
        module,
        topic: topic.id,
    };
    let kind = ctx
        .services()
        .resolver
        .classifier()
        .classify(topic.link());

    let is_selected = Memo::new(move |_| ctx.route.with(|r| r.topic() == Some(at)));
    let is_complete = Memo::new(move |_| ctx.progress.with(|p| p.is_complete(at)));

    view! {
        <li>
            <button
                class=move || {
                    if is_selected.get() {
                        format!("{} {}", css::topic, css::topicSelected)
                    } else {
                        css::topic.to_string()
                    }
                }
                on:click=move |_| ctx.select_topic(at)
                title=kind.label()
            >
                <span class=css::topicIcon><Icon icon=ic::for_kind(kind) /></span>
                <span class=css::topicTitle>{topic.title}</span>
                <Show when=move || is_complete.get()>
                    <span class=css::topicDone title="Completed">
                        <Icon icon=ic::COMPLETE />
                    </span>
                </Show>
            </button>
        </li>
    }
}
