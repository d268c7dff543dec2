//! Fallback panel for resources that cannot be embedded.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::{FallbackPanel, FallbackReason};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Message panel with a direct link to the resource.
///
/// `on_open` fires when the user follows the link.
#[component]
pub fn FallbackView(panel: FallbackPanel, on_open: Callback<()>) -> impl IntoView {
    let icon = match panel.reason {
        FallbackReason::Blocked => ic::BLOCKED,
        FallbackReason::Audio => ic::FILE_AUDIO,
        _ => ic::WARNING,
    };

    view! {
        <div class=css::fallback role="status">
            <span class=css::fallbackIcon><Icon icon=icon /></span>
            <p class=css::fallbackMessage>{panel.reason.message()}</p>
            {panel.external_url.map(|url| view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class=css::openButton
                    on:click=move |_| on_open.run(())
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                    "Open externally"
                </a>
            })}
        </div>
    }
}
