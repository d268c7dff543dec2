//! Resource classification tags.

use std::fmt;

use serde::Serialize;

/// Inferred media/document type of a topic's resource link.
///
/// Derived fresh from the link on every render; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Youtube,
    Vimeo,
    Gdrive,
    SmartPresentation,
    Pdf,
    Powerpoint,
    Document,
    Excel,
    Video,
    Image,
    Audio,
    Blocked,
    Webpage,
    Text,
}

impl ResourceKind {
    /// Stable snake_case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
            Self::Gdrive => "gdrive",
            Self::SmartPresentation => "smart_presentation",
            Self::Pdf => "pdf",
            Self::Powerpoint => "powerpoint",
            Self::Document => "document",
            Self::Excel => "excel",
            Self::Video => "video",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Blocked => "blocked",
            Self::Webpage => "webpage",
            Self::Text => "text",
        }
    }

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Vimeo => "Vimeo",
            Self::Gdrive => "Google Drive",
            Self::SmartPresentation => "Presentation",
            Self::Pdf => "PDF",
            Self::Powerpoint => "Slides",
            Self::Document => "Document",
            Self::Excel => "Spreadsheet",
            Self::Video => "Video",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Blocked => "External file",
            Self::Webpage => "Web page",
            Self::Text => "Reading",
        }
    }

    /// Office formats routed through the online document viewer.
    pub fn is_office(self) -> bool {
        matches!(self, Self::Powerpoint | Self::Document | Self::Excel)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
