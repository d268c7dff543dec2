//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shared by every
//! component, and the [`Services`] built once from configuration.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::AppConfig;
use crate::core::{
    ApiClient, ListState, LocalSessionStore, ProgressMap, ResolvedResource, ResourceResolver,
    TopicCache, ViewerLayout,
};
use crate::models::{AppRoute, Module, ModuleId, Shortcut, Topic, TopicRef, ViewMode};
use crate::utils::GlooTransport;

// ============================================================================
// Services
// ============================================================================

/// Non-reactive collaborators, constructed from [`AppConfig`] at startup.
pub struct Services {
    pub config: AppConfig,
    pub api: ApiClient<GlooTransport>,
    pub resolver: ResourceResolver,
}

impl Services {
    pub fn new(config: AppConfig) -> Self {
        let session = Arc::new(LocalSessionStore::new(config.storage.session_key.clone()));
        let api = ApiClient::new(GlooTransport::new(config.api.timeout_ms), &config.api, session);
        let resolver = ResourceResolver::new(&config.viewer);
        Self {
            config,
            api,
            resolver,
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles to the underlying reactive state.
///
/// The progress map and topic cache are only ever replaced as whole values,
/// never patched in place.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route (selected topic).
    pub route: RwSignal<AppRoute>,
    /// View mode, theater tab and accordion state.
    pub layout: RwSignal<ViewerLayout>,
    /// Completed topics.
    pub progress: RwSignal<ProgressMap>,
    /// Topic lists per module.
    pub topics: RwSignal<TopicCache>,
    /// Modules assigned to the user.
    pub modules: RwSignal<ListState<Module>>,
    services: StoredValue<Arc<Services>>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            route: RwSignal::new(AppRoute::Course),
            layout: RwSignal::new(ViewerLayout::default()),
            progress: RwSignal::new(ProgressMap::default()),
            topics: RwSignal::new(TopicCache::default()),
            modules: RwSignal::new(ListState::Loading),
            services: StoredValue::new(Arc::new(services)),
        }
    }

    pub fn services(&self) -> Arc<Services> {
        self.services.get_value()
    }

    // ------------------------------------------------------------------------
    // Data loading
    // ------------------------------------------------------------------------

    /// Fetch every module. A failure leaves an empty list with its message.
    pub fn load_modules(&self) {
        let modules = self.modules;
        let services = self.services();
        modules.set(ListState::Loading);

        spawn_local(async move {
            let result = services.api.list_all_modules().await.map_err(|e| {
                log::warn!("modules could not be loaded: {}", e);
                e.to_string()
            });
            modules.set(result.into());
        });
    }

    /// Fetch a module's topics unless they are cached or already loading.
    pub fn ensure_topics(&self, module: ModuleId) {
        let topics = self.topics;
        let mut next = topics.get_untracked();
        if !next.begin_load(module) {
            return;
        }
        topics.set(next);

        let services = self.services();
        spawn_local(async move {
            let result = services.api.list_topics(module).await.map_err(|e| {
                log::warn!("topics of module {} could not be loaded: {}", module, e);
                e.to_string()
            });
            let mut next = topics.get_untracked();
            next.finish(module, result);
            topics.set(next);
        });
    }

    // ------------------------------------------------------------------------
    // Selection and progress
    // ------------------------------------------------------------------------

    /// Navigate to a topic. The router applies the route on `hashchange`.
    pub fn select_topic(&self, topic: TopicRef) {
        AppRoute::Topic(topic).push();
    }

    /// Apply a route from the URL.
    pub fn apply_route(&self, route: AppRoute) {
        self.route.set(route);
        match route.topic() {
            Some(selected) => {
                self.layout.update(|l| l.select_topic(selected.module));
                self.ensure_topics(selected.module);
            }
            None => self.layout.update(ViewerLayout::reset_mode),
        }
    }

    /// The selected topic, once its module's list has loaded.
    pub fn selected_topic(&self) -> Option<(TopicRef, Topic)> {
        let selected = self.route.get().topic()?;
        self.topics.with(|cache| {
            cache
                .topics(selected.module)
                .iter()
                .find(|t| t.id == selected.topic)
                .map(|t| (selected, t.clone()))
        })
    }

    /// Classify and resolve a topic's resource.
    pub fn resolve(&self, topic: &Topic) -> ResolvedResource {
        self.services.with_value(|s| s.resolver.resolve(topic))
    }

    /// Flag a topic complete. Repeated calls are no-ops.
    pub fn mark_complete(&self, topic: TopicRef) {
        let mut next = self.progress.get_untracked();
        if next.mark_complete(topic) {
            log::debug!(
                "topic {} of module {} complete ({} total)",
                topic.topic,
                topic.module,
                next.completed_count()
            );
            self.progress.set(next);
        }
    }

    /// Completion percentage of a module's loaded topics.
    pub fn completion_ratio(&self, module: ModuleId) -> u32 {
        self.progress.with(|progress| {
            self.topics
                .with(|cache| progress.completion_ratio(module, cache.topics(module)))
        })
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    pub fn cycle_mode(&self) {
        self.layout.update(|l| {
            l.cycle();
        });
        self.sync_browsing_topics();
    }

    /// Apply a keyboard shortcut. Returns whether it was handled.
    pub fn apply_shortcut(&self, shortcut: Shortcut, text_entry_focused: bool) -> bool {
        let mut applied = None;
        self.layout
            .update(|l| applied = l.apply_shortcut(shortcut, text_entry_focused));
        if applied == Some(ViewMode::Theater) {
            self.sync_browsing_topics();
        }
        applied.is_some()
    }

    /// Switch the theater tab strip to a module.
    pub fn browse(&self, module: ModuleId) {
        self.layout.update(|l| l.browse(module));
        self.ensure_topics(module);
    }

    /// Expand or collapse a module in the accordion.
    pub fn toggle_module(&self, module: ModuleId) {
        let mut expanded = false;
        self.layout.update(|l| expanded = l.toggle_expanded(module));
        if expanded {
            self.ensure_topics(module);
        }
    }

    fn sync_browsing_topics(&self) {
        if let Some(module) = self.layout.with_untracked(|l| l.browsing_module) {
            self.ensure_topics(module);
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads configuration and builds the services
/// - Creates and provides the global AppContext
/// - Starts loading the module list
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(Services::new(AppConfig::load()));
    provide_context(ctx);
    ctx.load_modules();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f6f7fb;
                    color: #1f2937;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "The course viewer hit an unexpected error. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #dc2626;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
