//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`course`] - Course layout, module accordion and theater browser
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`viewer`] - Resource viewer and fallback panel

pub mod course;
pub mod icons;
pub mod router;
pub mod viewer;

pub use router::AppRouter;
