//! Provider URL rewriting for embedding.
//!
//! Share links from Google Drive and presentation tools open an editor or
//! a landing page when framed. [`to_embed_url`] rewrites them into the
//! provider's preview/embed form. Every rewrite first checks for its target
//! marker, so feeding an embed URL back in returns it unchanged.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::error::EmbedError;
use crate::models::ResourceKind;

/// Query appended to Google Slides embeds.
const SLIDES_EMBED_SUFFIX: &str = "/embed?start=false&loop=false&delayms=3000";

static DRIVE_PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/file/d/([A-Za-z0-9_-]+)").expect("valid drive path regex"));

static DRIVE_QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([A-Za-z0-9_-]+)").expect("valid drive query regex"));

static SLIDES_EDIT_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:edit|preview)(?:[/?#].*)?$").expect("valid slides tail regex")
});

static SLIDES_EMBED_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/embed(?:[?#].*)?$").expect("valid slides embed regex"));

static SLIDES_BARE_DECK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/presentation/d/[A-Za-z0-9_-]+/?$").expect("valid slides deck regex")
});

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube(?:-nocookie)?\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts|live)/|.*[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("valid youtube regex")
});

// =============================================================================
// Embed Transformer
// =============================================================================

/// Rewrite a provider link into its embeddable form.
///
/// Only `Gdrive` and `SmartPresentation` are rewritten; every other kind is
/// returned unchanged. A Drive link without a file id is
/// [`EmbedError::MissingDriveId`].
pub fn to_embed_url(url: &str, kind: ResourceKind) -> Result<String, EmbedError> {
    match kind {
        ResourceKind::Gdrive => drive_embed(url),
        ResourceKind::SmartPresentation => Ok(presentation_embed(url)),
        _ => Ok(url.to_string()),
    }
}

/// Extract a Drive file id: `/file/d/{id}` first, then `id=`.
pub fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn drive_embed(url: &str) -> Result<String, EmbedError> {
    let id = drive_file_id(url).ok_or(EmbedError::MissingDriveId)?;
    Ok(format!("https://drive.google.com/file/d/{}/preview", id))
}

fn presentation_embed(url: &str) -> String {
    if url.contains("gamma.app") {
        gamma_embed(url)
    } else if url.contains("canva.com") {
        canva_embed(url)
    } else if url.contains("docs.google.com/presentation") {
        slides_embed(url)
    } else {
        // pitch.com links embed as-is
        url.to_string()
    }
}

fn gamma_embed(url: &str) -> String {
    if url.contains("/embed/") {
        return url.to_string();
    }
    url.replacen("/docs/", "/embed/", 1)
}

fn canva_embed(url: &str) -> String {
    if url.contains("/view?embed") {
        return url.to_string();
    }
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.ends_with("/view") {
        format!("{}?embed", trimmed)
    } else {
        format!("{}/view?embed", trimmed)
    }
}

fn slides_embed(url: &str) -> String {
    if SLIDES_EMBED_TAIL.is_match(url) {
        return url.to_string();
    }
    if SLIDES_EDIT_TAIL.is_match(url) {
        return SLIDES_EDIT_TAIL
            .replace(url, SLIDES_EMBED_SUFFIX)
            .into_owned();
    }
    if SLIDES_BARE_DECK.is_match(url) {
        return format!("{}{}", url.trim_end_matches('/'), SLIDES_EMBED_SUFFIX);
    }
    url.to_string()
}

// =============================================================================
// Video Ids
// =============================================================================

/// Extract an 11-character YouTube video id from watch, short, embed,
/// shorts and live URLs.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The last non-empty path segment of a Vimeo URL.
pub fn vimeo_id(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()
        .map(str::to_string)
}

/// Canonical YouTube player URL.
pub fn youtube_player_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", id)
}

/// Canonical Vimeo player URL.
pub fn vimeo_player_url(id: &str) -> String {
    format!("https://player.vimeo.com/video/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed(url: &str, kind: ResourceKind) -> String {
        to_embed_url(url, kind).unwrap()
    }

    fn assert_idempotent(url: &str, kind: ResourceKind) {
        let once = embed(url, kind);
        assert_eq!(embed(&once, kind), once, "{url}");
    }

    #[test]
    fn test_drive_share_link() {
        assert_eq!(
            embed(
                "https://drive.google.com/file/d/ABC123/view?usp=sharing",
                ResourceKind::Gdrive
            ),
            "https://drive.google.com/file/d/ABC123/preview"
        );
    }

    #[test]
    fn test_drive_open_id_param() {
        assert_eq!(
            embed("https://drive.google.com/open?id=1x_Y-z", ResourceKind::Gdrive),
            "https://drive.google.com/file/d/1x_Y-z/preview"
        );
    }

    #[test]
    fn test_drive_path_wins_over_query() {
        assert_eq!(
            drive_file_id("https://drive.google.com/file/d/PATH/view?id=QUERY"),
            Some("PATH")
        );
    }

    #[test]
    fn test_drive_without_id() {
        assert_eq!(
            to_embed_url("https://drive.google.com/drive/my-drive", ResourceKind::Gdrive),
            Err(EmbedError::MissingDriveId)
        );
    }

    #[test]
    fn test_gamma() {
        assert_eq!(
            embed("https://gamma.app/docs/Intro-to-Rust-abc123", ResourceKind::SmartPresentation),
            "https://gamma.app/embed/Intro-to-Rust-abc123"
        );
    }

    #[test]
    fn test_canva() {
        assert_eq!(
            embed(
                "https://www.canva.com/design/DAF1/abc/view",
                ResourceKind::SmartPresentation
            ),
            "https://www.canva.com/design/DAF1/abc/view?embed"
        );
        assert_eq!(
            embed(
                "https://www.canva.com/design/DAF1/abc//?utm_source=share",
                ResourceKind::SmartPresentation
            ),
            "https://www.canva.com/design/DAF1/abc/view?embed"
        );
    }

    #[test]
    fn test_google_slides() {
        let expected =
            "https://docs.google.com/presentation/d/XYZ/embed?start=false&loop=false&delayms=3000";
        assert_eq!(
            embed(
                "https://docs.google.com/presentation/d/XYZ/edit#slide=id.p1",
                ResourceKind::SmartPresentation
            ),
            expected
        );
        assert_eq!(
            embed(
                "https://docs.google.com/presentation/d/XYZ/preview",
                ResourceKind::SmartPresentation
            ),
            expected
        );
        assert_eq!(
            embed("https://docs.google.com/presentation/d/XYZ/", ResourceKind::SmartPresentation),
            expected
        );
    }

    #[test]
    fn test_google_slides_deck_id_starting_with_embed() {
        assert_eq!(
            embed(
                "https://docs.google.com/presentation/d/embedXYZ/edit",
                ResourceKind::SmartPresentation
            ),
            "https://docs.google.com/presentation/d/embedXYZ/embed?start=false&loop=false&delayms=3000"
        );
    }

    #[test]
    fn test_pitch_unchanged() {
        let url = "https://pitch.com/v/deck-1";
        assert_eq!(embed(url, ResourceKind::SmartPresentation), url);
    }

    #[test]
    fn test_other_kinds_unchanged() {
        let url = "https://x.org/a.pdf?x=/file/d/nope";
        assert_eq!(embed(url, ResourceKind::Pdf), url);
        assert_eq!(embed(url, ResourceKind::Webpage), url);
    }

    #[test]
    fn test_transform_is_idempotent() {
        assert_idempotent("https://drive.google.com/file/d/ABC123/view?usp=sharing", ResourceKind::Gdrive);
        assert_idempotent("https://drive.google.com/open?id=ABC123", ResourceKind::Gdrive);
        for url in [
            "https://gamma.app/docs/Intro-abc",
            "https://www.canva.com/design/DAF1/abc/edit",
            "https://www.canva.com/design/DAF1/abc/view",
            "https://docs.google.com/presentation/d/XYZ/edit?usp=sharing",
            "https://docs.google.com/presentation/d/XYZ",
            "https://pitch.com/v/deck-1",
        ] {
            assert_idempotent(url, ResourceKind::SmartPresentation);
        }
    }

    #[test]
    fn test_youtube_ids() {
        assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            youtube_id("https://youtube.com/shorts/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(youtube_id("https://www.youtube.com/@somechannel"), None);
    }

    #[test]
    fn test_vimeo_ids() {
        let id = |s: &str| vimeo_id(&Url::parse(s).unwrap());
        assert_eq!(id("https://vimeo.com/76979871"), Some("76979871".into()));
        assert_eq!(id("https://player.vimeo.com/video/76979871/"), Some("76979871".into()));
        assert_eq!(id("https://vimeo.com/"), None);
    }
}
