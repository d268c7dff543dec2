//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Module`], [`Topic`], [`TopicRef`] - Course content from the backend
//! - [`ResourceKind`] - Classification of a topic's resource link
//! - [`ViewMode`], [`Shortcut`] - Viewer layout management
//! - [`AppRoute`] - Hash-based navigation
//! - [`ApiEnvelope`], [`Session`] - Backend wire types

mod api;
mod course;
mod resource;
mod route;
mod session;
mod view;

pub use api::{ApiEnvelope, RefreshRequest, RefreshResponse};
pub use course::{Module, ModuleId, Topic, TopicId, TopicRef, sort_modules, sort_topics};
pub use resource::ResourceKind;
pub use route::AppRoute;
pub use session::{Role, Session};
pub use view::{Shortcut, ViewMode};
