//! Resource link classification.
//!
//! Maps a topic's resource link to a [`ResourceKind`]. Classification is a
//! pure function of the link and the classifier's configuration: no network
//! access, no side effects, and no failure mode. Anything unrecognized
//! degrades to [`ResourceKind::Webpage`].
//!
//! Priority order:
//! 1. Empty link → `Text`
//! 2. Denylisted host → `Blocked`
//! 3. Provider hosts (YouTube, Vimeo, Drive, presentation tools)
//! 4. File extension tables
//! 5. `Webpage`

use url::Url;

use super::denylist::Denylist;
use crate::config::ViewerConfig;
use crate::models::ResourceKind;
use crate::utils::url::{ParsedLink, parse_link};

// =============================================================================
// Extension Tables
// =============================================================================

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "ogg", "m4a", "flac", "wma"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];
const POWERPOINT_EXTENSIONS: &[&str] = &["ppt", "pptx", "pps", "ppsx"];
const DOCUMENT_EXTENSIONS: &[&str] = &["doc", "docx", "txt", "rtf"];
const EXCEL_EXTENSIONS: &[&str] = &["xls", "xlsx", "csv"];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "avi", "mov", "wmv", "flv", "mkv", "m4v", "3gp",
];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

/// Checked in order; the first table containing the extension wins.
const EXTENSION_TABLES: &[(&[&str], ResourceKind)] = &[
    (AUDIO_EXTENSIONS, ResourceKind::Audio),
    (PDF_EXTENSIONS, ResourceKind::Pdf),
    (POWERPOINT_EXTENSIONS, ResourceKind::Powerpoint),
    (DOCUMENT_EXTENSIONS, ResourceKind::Document),
    (EXCEL_EXTENSIONS, ResourceKind::Excel),
    (VIDEO_EXTENSIONS, ResourceKind::Video),
    (IMAGE_EXTENSIONS, ResourceKind::Image),
];

/// Hosts (or host+path prefixes) of interactive presentation tools.
const PRESENTATION_MARKERS: &[&str] = &[
    "gamma.app",
    "canva.com",
    "docs.google.com/presentation",
    "pitch.com",
];

// =============================================================================
// Classifier
// =============================================================================

/// Classifies resource links.
#[derive(Clone, Debug)]
pub struct Classifier {
    denylist: Denylist,
    fallback_base: Option<Url>,
}

impl Classifier {
    /// Build a classifier from viewer configuration.
    ///
    /// An unparsable `fallback_base` is logged and dropped; relative links
    /// then classify as `Webpage`.
    pub fn new(config: &ViewerConfig) -> Self {
        let fallback_base = match Url::parse(&config.fallback_base) {
            Ok(base) => Some(base),
            Err(e) => {
                log::warn!(
                    "fallback base '{}' rejected ({}), relative links will not resolve",
                    config.fallback_base,
                    e
                );
                None
            }
        };
        let denylist = Denylist::new(&config.denylist);
        log::debug!("classifier ready, {} denied hosts", denylist.host_count());
        Self {
            denylist,
            fallback_base,
        }
    }

    /// Best-effort parse of a raw link against the fallback base.
    pub fn parse(&self, raw: &str) -> Option<ParsedLink> {
        parse_link(raw, self.fallback_base.as_ref())
    }

    /// Classify an optional raw link.
    pub fn classify(&self, url: Option<&str>) -> ResourceKind {
        let Some(raw) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return ResourceKind::Text;
        };
        match self.parse(raw) {
            Some(link) => self.classify_link(&link),
            None => ResourceKind::Webpage,
        }
    }

    /// Classify an already parsed link.
    pub fn classify_link(&self, link: &ParsedLink) -> ResourceKind {
        let host = link.host();

        if self.denylist.is_denied(host) {
            return ResourceKind::Blocked;
        }

        if let Some(kind) = classify_provider(host, &link.host_and_path()) {
            return kind;
        }

        link.extension()
            .and_then(|ext| classify_extension(&ext))
            .unwrap_or(ResourceKind::Webpage)
    }
}

/// Provider detection by hostname substrings.
fn classify_provider(host: &str, host_and_path: &str) -> Option<ResourceKind> {
    if host.contains("youtube") || host.contains("youtu.be") {
        return Some(ResourceKind::Youtube);
    }
    if host.contains("vimeo.com") {
        return Some(ResourceKind::Vimeo);
    }
    if host.contains("drive.google.com") {
        return Some(ResourceKind::Gdrive);
    }
    if PRESENTATION_MARKERS
        .iter()
        .any(|marker| host_and_path.contains(marker))
    {
        return Some(ResourceKind::SmartPresentation);
    }
    None
}

/// Look an extension up in the tables.
pub fn classify_extension(ext: &str) -> Option<ResourceKind> {
    EXTENSION_TABLES
        .iter()
        .find(|(table, _)| table.contains(&ext))
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&ViewerConfig::default())
    }

    fn classify(url: &str) -> ResourceKind {
        classifier().classify(Some(url))
    }

    #[test]
    fn test_empty_is_text() {
        assert_eq!(classifier().classify(None), ResourceKind::Text);
        assert_eq!(classify(""), ResourceKind::Text);
        assert_eq!(classify("   "), ResourceKind::Text);
    }

    #[test]
    fn test_video_extensions() {
        for ext in VIDEO_EXTENSIONS {
            let url = format!("https://cdn.example.com/lectures/week1.{}", ext);
            assert_eq!(classify(&url), ResourceKind::Video, "{url}");
        }
        assert_eq!(classify("https://cdn.example.com/a.MKV?dl=1"), ResourceKind::Video);
    }

    #[test]
    fn test_extension_tables() {
        assert_eq!(classify("https://x.org/a.mp3"), ResourceKind::Audio);
        assert_eq!(classify("https://x.org/a.pdf"), ResourceKind::Pdf);
        assert_eq!(classify("https://x.org/a.ppsx"), ResourceKind::Powerpoint);
        assert_eq!(classify("https://x.org/a.rtf"), ResourceKind::Document);
        assert_eq!(classify("https://x.org/a.csv"), ResourceKind::Excel);
        assert_eq!(classify("https://x.org/a.webp"), ResourceKind::Image);
        assert_eq!(classify("https://x.org/a.xyz"), ResourceKind::Webpage);
        assert_eq!(classify("https://x.org/article"), ResourceKind::Webpage);
    }

    #[test]
    fn test_providers() {
        assert_eq!(classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), ResourceKind::Youtube);
        assert_eq!(classify("https://youtu.be/dQw4w9WgXcQ"), ResourceKind::Youtube);
        assert_eq!(classify("https://vimeo.com/76979871"), ResourceKind::Vimeo);
        assert_eq!(
            classify("https://drive.google.com/file/d/ABC123/view"),
            ResourceKind::Gdrive
        );
        assert_eq!(classify("https://gamma.app/docs/Intro-abc"), ResourceKind::SmartPresentation);
        assert_eq!(
            classify("https://www.canva.com/design/DAF1/view"),
            ResourceKind::SmartPresentation
        );
        assert_eq!(
            classify("https://docs.google.com/presentation/d/XYZ/edit"),
            ResourceKind::SmartPresentation
        );
        assert_eq!(classify("https://pitch.com/v/deck-1"), ResourceKind::SmartPresentation);
        // Google Docs outside /presentation is just a page
        assert_eq!(classify("https://docs.google.com/document/d/XYZ/edit"), ResourceKind::Webpage);
    }

    #[test]
    fn test_provider_beats_extension() {
        assert_eq!(
            classify("https://drive.google.com/uc?id=ABC&export=download&name=a.pdf"),
            ResourceKind::Gdrive
        );
    }

    #[test]
    fn test_denylist_has_top_priority() {
        assert_eq!(classify("https://example-mediafire.com/file123"), ResourceKind::Blocked);
        assert_eq!(classify("https://www.mediafire.com/file/x/lecture.mp4"), ResourceKind::Blocked);
        assert_eq!(classify("https://mega.nz/youtube/clip.pdf"), ResourceKind::Blocked);
    }

    #[test]
    fn test_malformed_links_degrade() {
        assert_eq!(classify("not a url at all"), ResourceKind::Webpage);
        assert_eq!(classify("http://"), ResourceKind::Webpage);
        assert_eq!(classify("files/handout.pdf"), ResourceKind::Pdf);
        assert_eq!(classify("youtu.be/dQw4w9WgXcQ"), ResourceKind::Youtube);
    }

    #[test]
    fn test_relative_link_without_base() {
        let classifier = Classifier::new(&ViewerConfig {
            fallback_base: "::not a base::".into(),
            ..ViewerConfig::default()
        });
        assert_eq!(classifier.classify(Some("files/handout.pdf")), ResourceKind::Webpage);
        assert_eq!(classifier.classify(Some("https://x.org/a.pdf")), ResourceKind::Pdf);
    }
}
