//! Resource viewer components.
//!
//! - [`ResourceViewer`] - Shows the selected topic with its render directive
//! - [`FallbackView`] - Message panel with an "open externally" action

mod fallback;
#[allow(clippy::module_inception)]
mod viewer;

pub use fallback::FallbackView;
pub use viewer::ResourceViewer;
