//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::ResourceKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FileText, LuCheck as Complete, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuCloud as Drive, LuExternalLink as ExternalLink,
        LuFile as FilePdf, LuFileSpreadsheet as FileSheet, LuFileText as FileDoc,
        LuGlobe as Webpage, LuImage as FileImage, LuMaximize as Fullscreen,
        LuMinimize as ExitFullscreen, LuMusic as FileAudio, LuPlay as Play,
        LuPresentation as FileSlides, LuRectangleHorizontal as Theater, LuRotateCw as Retry,
        LuShieldOff as Blocked, LuTriangleAlert as Warning, LuVideo as FileVideo,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Retry, BsAspectRatio as Theater, BsBoxArrowUpRight as ExternalLink,
        BsCameraVideo as FileVideo, BsCheckCircleFill as Complete, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsCloud as Drive, BsExclamationTriangle as Warning,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkSlides as FileSlides,
        BsFileEarmarkSpreadsheet as FileSheet, BsFileEarmarkText as FileText,
        BsFileEarmarkWord as FileDoc, BsFullscreen as Fullscreen,
        BsFullscreenExit as ExitFullscreen, BsGlobe as Webpage, BsPlayBtnFill as Play,
        BsShieldSlash as Blocked,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(PLAY, Play);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_SLIDES, FileSlides);
themed_icon!(FILE_DOC, FileDoc);
themed_icon!(FILE_SHEET, FileSheet);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(DRIVE, Drive);
themed_icon!(WEBPAGE, Webpage);
themed_icon!(BLOCKED, Blocked);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(COMPLETE, Complete);
themed_icon!(THEATER, Theater);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(EXIT_FULLSCREEN, ExitFullscreen);
themed_icon!(WARNING, Warning);
themed_icon!(RETRY, Retry);

/// Icon shown next to a topic of the given kind.
pub fn for_kind(kind: ResourceKind) -> Icon {
    match kind {
        ResourceKind::Youtube | ResourceKind::Vimeo => PLAY,
        ResourceKind::Video => FILE_VIDEO,
        ResourceKind::Gdrive => DRIVE,
        ResourceKind::SmartPresentation | ResourceKind::Powerpoint => FILE_SLIDES,
        ResourceKind::Pdf => FILE_PDF,
        ResourceKind::Document => FILE_DOC,
        ResourceKind::Excel => FILE_SHEET,
        ResourceKind::Image => FILE_IMAGE,
        ResourceKind::Audio => FILE_AUDIO,
        ResourceKind::Blocked => BLOCKED,
        ResourceKind::Webpage => WEBPAGE,
        ResourceKind::Text => FILE_TEXT,
    }
}
