//! Course browsing UI components.
//!
//! Components:
//! - [`CourseView`] - Main course layout (default, theater, fullscreen)
//! - [`CourseHeader`] - Title bar with the view-mode control
//! - [`ModuleList`] - Accordion of modules with progress
//! - [`TheaterBrowser`] - Module tabs and topic playlist below the viewer

#[allow(clippy::module_inception)]
mod course;
mod header;
mod module_list;
mod theater;

pub use course::CourseView;
pub use header::CourseHeader;
pub use module_list::{LoadError, ModuleList, TopicList};
pub use theater::TheaterBrowser;
