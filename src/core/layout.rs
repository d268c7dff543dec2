//! Viewer layout state machine.
//!
//! Holds everything the course view needs to decide how the viewer and the
//! module browser are arranged: the [`ViewMode`], the module shown in the
//! theater tab strip, and the expanded modules of the default-view
//! accordion. The two module selections are independent; switching tabs
//! never touches the accordion.

use std::collections::BTreeSet;

use crate::models::{ModuleId, Shortcut, ViewMode};

/// Layout state of the course view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerLayout {
    pub mode: ViewMode,
    /// Module whose topics the theater playlist shows.
    pub browsing_module: Option<ModuleId>,
    /// Set when a topic was selected and theater mode has not yet adopted
    /// its module as the browsing module.
    sync_pending: bool,
    /// Modules expanded in the default-view accordion.
    pub expanded: BTreeSet<ModuleId>,
    /// Module of the selected topic.
    selected_module: Option<ModuleId>,
}

impl ViewerLayout {
    /// Record a topic selection from the list or the playlist.
    ///
    /// The module is expanded in the accordion so the selection stays
    /// visible when returning to the default view.
    pub fn select_topic(&mut self, module: ModuleId) {
        self.selected_module = Some(module);
        self.sync_pending = true;
        self.expanded.insert(module);
        if self.mode == ViewMode::Theater {
            self.sync_browsing();
        }
    }

    /// Navigation resets the layout mode, keeping the module selections.
    pub fn reset_mode(&mut self) {
        self.mode = ViewMode::Default;
    }

    /// Advance with the cycle control.
    pub fn cycle(&mut self) -> ViewMode {
        self.set_mode(self.mode.cycled())
    }

    /// Apply a keyboard shortcut.
    ///
    /// Returns `None` without changing anything while a text entry has focus.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut, text_entry_focused: bool) -> Option<ViewMode> {
        if text_entry_focused {
            return None;
        }
        Some(self.set_mode(self.mode.after(shortcut)))
    }

    fn set_mode(&mut self, mode: ViewMode) -> ViewMode {
        self.mode = mode;
        if mode == ViewMode::Theater {
            self.sync_browsing();
        }
        mode
    }

    /// Adopt the selected topic's module as the browsing module, once per
    /// selection.
    fn sync_browsing(&mut self) {
        if self.sync_pending
            && let Some(module) = self.selected_module
        {
            self.browsing_module = Some(module);
            self.sync_pending = false;
        }
    }

    /// Switch the theater tab strip to another module.
    pub fn browse(&mut self, module: ModuleId) {
        self.browsing_module = Some(module);
    }

    /// Toggle a module in the accordion. Returns whether it is now expanded.
    pub fn toggle_expanded(&mut self, module: ModuleId) -> bool {
        if self.expanded.remove(&module) {
            false
        } else {
            self.expanded.insert(module);
            true
        }
    }

    pub fn is_expanded(&self, module: ModuleId) -> bool {
        self.expanded.contains(&module)
    }
}
