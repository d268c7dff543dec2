//! Resource viewer component.
//!
//! Turns a topic's [`RenderDirective`] into DOM and reports completion
//! back to the [`AppContext`]. Completion is idempotent there, so repeated
//! `load` events from a frame are harmless.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::FallbackView;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{CompletionTrigger, ListState, RenderDirective};
use crate::models::{Topic, TopicRef};
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Viewer for the selected topic.
#[component]
pub fn ResourceViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Memo::new(move |_| ctx.selected_topic());

    view! {
        <div class=css::viewer>
            {move || match selected.get() {
                Some((at, topic)) => view! { <TopicViewer at=at topic=topic /> }.into_any(),
                None => view! { <ViewerPlaceholder /> }.into_any(),
            }}
        </div>
    }
}

/// Shown while nothing is selected, or the selection is not loaded.
#[component]
fn ViewerPlaceholder() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let message = move || {
        let Some(selected) = ctx.route.get().topic() else {
            return "Select a topic to start learning.".to_string();
        };
        ctx.topics.with(|cache| match cache.get(selected.module) {
            None | Some(ListState::Loading) => "Loading topic...".to_string(),
            Some(ListState::Failed(message)) => format!("Could not load this topic: {}", message),
            Some(ListState::Ready(_)) => "This topic is no longer available.".to_string(),
        })
    };

    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon><Icon icon=ic::FILE_TEXT /></span>
            <p>{message}</p>
        </div>
    }
}

#[component]
fn TopicViewer(at: TopicRef, topic: Topic) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let resolved = ctx.resolve(&topic);
    let complete = Callback::new(move |_: ()| ctx.mark_complete(at));
    let completion = resolved.directive.completion();

    if completion == CompletionTrigger::Display {
        Effect::new(move || complete.run(()));
    }

    // The external action completes the topic only when nothing else can
    let on_external = Callback::new(move |_: ()| {
        if completion == CompletionTrigger::ExternalOpen {
            complete.run(());
        }
    });

    let notes = match resolved.directive {
        RenderDirective::Text => None,
        _ => Some(topic.body())
            .filter(|body| !body.trim().is_empty())
            .map(markdown_to_html),
    };

    let header_link = resolved
        .directive
        .needs_external_action()
        .then_some(resolved.external_url.clone())
        .flatten()
        .filter(|_| !matches!(resolved.directive, RenderDirective::Fallback(_)));

    let stage = render_directive(resolved.directive, &topic, complete, on_external);

    view! {
        <article class=css::topic>
            <header class=css::header>
                <span class=css::kindBadge>
                    <Icon icon=ic::for_kind(resolved.kind) />
                    {resolved.kind.label()}
                </span>
                <h2 class=css::title>{topic.title.clone()}</h2>
                {header_link.map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=css::headerAction
                        title="Open in new tab"
                        on:click=move |_| on_external.run(())
                    >
                        <Icon icon=ic::EXTERNAL_LINK />
                    </a>
                })}
            </header>

            <div class=css::stage>{stage}</div>

            {notes.map(|html| view! { <div class=css::notes inner_html=html /> })}
        </article>
    }
}

fn render_directive(
    directive: RenderDirective,
    topic: &Topic,
    complete: Callback<()>,
    on_external: Callback<()>,
) -> AnyView {
    let title = topic.title.clone();
    match directive {
        RenderDirective::Text => {
            let body = topic.body();
            if body.trim().is_empty() {
                view! { <p class=css::empty>"This topic has no content yet."</p> }.into_any()
            } else {
                view! { <div class=css::markdown inner_html=markdown_to_html(body) /> }.into_any()
            }
        }
        RenderDirective::Frame(frame) => {
            let hint = frame.may_fail_silently.then(|| {
                view! {
                    <p class=css::frameHint>
                        "If the page stays blank, the site refuses to be embedded. Use the open button above."
                    </p>
                }
            });
            view! {
                <div class=css::frameWrapper>
                    <iframe
                        src=frame.src
                        title=title
                        class=css::frame
                        sandbox=frame.sandbox
                        allow=frame.allow
                        allowfullscreen=true
                        on:load=move |_| complete.run(())
                    />
                </div>
                {hint}
            }
                .into_any()
        }
        RenderDirective::Video { src } => {
            view! {
                <video
                    src=src
                    class=css::video
                    controls=true
                    preload="metadata"
                    on:play=move |_| complete.run(())
                />
            }
                .into_any()
        }
        RenderDirective::Image { src } => {
            view! {
                <div class=css::imageContainer>
                    <img src=src alt=title class=css::image on:load=move |_| complete.run(()) />
                </div>
            }
                .into_any()
        }
        RenderDirective::Fallback(panel) => {
            view! { <FallbackView panel=panel on_open=on_external /> }.into_any()
        }
    }
}
