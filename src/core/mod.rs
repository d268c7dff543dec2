//! Core logic of the course viewer.
//!
//! This module provides:
//! - [`Classifier`] and [`embed::to_embed_url`] for resource links
//! - [`ResourceResolver`] selecting a [`RenderDirective`] per topic
//! - [`ViewerLayout`], [`ProgressMap`] and [`TopicCache`] view state
//! - [`ApiClient`] and [`session::SessionStore`] for the REST backend

pub mod api;
mod classify;
mod denylist;
pub mod embed;
pub mod error;
mod layout;
mod progress;
pub mod render;
pub mod session;
mod topics;

pub use api::ApiClient;
pub use classify::Classifier;
pub use layout::ViewerLayout;
pub use progress::ProgressMap;
pub use render::{
    CompletionTrigger, FallbackPanel, FallbackReason, RenderDirective, ResolvedResource,
    ResourceResolver,
};
pub use session::LocalSessionStore;
pub use topics::{ListState, TopicCache};
