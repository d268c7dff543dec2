//! View-mode types for the resource viewer layout.

/// Viewer layout mode.
///
/// Process-local UI state; reset to [`ViewMode::Default`] on navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Module list and viewer side by side (default)
    #[default]
    Default,
    /// Enlarged viewer with module tabs and topic playlist below
    Theater,
    /// Viewer only, list hidden
    Fullscreen,
}

impl ViewMode {
    /// Next mode for the single cycle control.
    pub fn cycled(self) -> Self {
        match self {
            Self::Default => Self::Theater,
            Self::Theater => Self::Fullscreen,
            Self::Fullscreen => Self::Default,
        }
    }

    /// Mode after a keyboard shortcut.
    pub fn after(self, shortcut: Shortcut) -> Self {
        match (shortcut, self) {
            (Shortcut::Fullscreen, Self::Fullscreen) => Self::Default,
            (Shortcut::Fullscreen, _) => Self::Fullscreen,
            (Shortcut::Theater, Self::Theater) => Self::Default,
            (Shortcut::Theater, _) => Self::Theater,
            (Shortcut::Exit, _) => Self::Default,
        }
    }

    /// Title for the cycle control, naming the mode it switches to.
    pub fn cycle_title(self) -> &'static str {
        match self.cycled() {
            Self::Default => "Default view",
            Self::Theater => "Theater mode (T)",
            Self::Fullscreen => "Fullscreen (F)",
        }
    }
}

/// Viewer keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// `F`: fullscreen ↔ default
    Fullscreen,
    /// `T`: theater ↔ default
    Theater,
    /// `Escape`: back to default
    Exit,
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` value to a shortcut.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "f" | "F" => Some(Self::Fullscreen),
            "t" | "T" => Some(Self::Theater),
            "Escape" | "Esc" => Some(Self::Exit),
            _ => None,
        }
    }
}
