//! Lenient URL parsing for resource links.
//!
//! Resource links come from course authors and are frequently malformed:
//! missing schemes, bare file paths, stray whitespace. Everything here
//! degrades instead of failing so classification never has to.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

/// A resource link after best-effort parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLink {
    /// The parsed (possibly base-resolved) URL.
    pub url: Url,
    /// `false` when the raw link had to be resolved against the fallback base.
    pub absolute: bool,
}

impl ParsedLink {
    /// Lowercased hostname, empty when the URL has none.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }

    /// Whether the scheme is `http` or `https`.
    pub fn is_web(&self) -> bool {
        matches!(self.url.scheme(), "http" | "https")
    }

    /// Whether the link points somewhere a public viewer cannot reach.
    ///
    /// Bare paths, non-web schemes (`file:`, drive letters) and
    /// loopback/private hosts all count as local.
    pub fn is_local(&self) -> bool {
        !self.absolute || !self.is_web() || is_local_host(&self.url)
    }

    /// Lowercased file extension of the last path segment, query excluded.
    pub fn extension(&self) -> Option<String> {
        path_extension(self.url.path())
    }

    /// Host and path joined, for substring checks such as
    /// `docs.google.com/presentation`.
    pub fn host_and_path(&self) -> String {
        format!("{}{}", self.host(), self.url.path())
    }
}

/// Parse a raw resource link.
///
/// Order of attempts:
/// 1. Absolute URL as-is
/// 2. Scheme-less host (`www.youtube.com/watch?v=...`, `youtu.be/id`) with `https://`
/// 3. Relative path resolved against `base`
///
/// Returns `None` for empty input, or for a relative link when there is no
/// base or the join fails.
pub fn parse_link(raw: &str, base: Option<&Url>) -> Option<ParsedLink> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(raw) {
        return Some(ParsedLink {
            url,
            absolute: true,
        });
    }

    if looks_like_bare_host(raw)
        && let Ok(url) = Url::parse(&format!("https://{}", raw))
    {
        return Some(ParsedLink {
            url,
            absolute: true,
        });
    }

    base?.join(raw).ok().map(|url| ParsedLink {
        url,
        absolute: false,
    })
}

/// Extract the lowercased extension from a URL path.
pub fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// `www.` prefix or a dotted first segment followed by a path.
fn looks_like_bare_host(raw: &str) -> bool {
    if raw.starts_with('/') || raw.starts_with('.') || raw.contains(char::is_whitespace) {
        return false;
    }
    if raw.starts_with("www.") {
        return true;
    }
    match raw.split_once('/') {
        Some((first, _)) => first.contains('.') && !first.contains(':'),
        None => false,
    }
}

fn is_local_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost" || domain.ends_with(".localhost"),
        Some(Host::Ipv4(addr)) => is_local_ipv4(addr),
        Some(Host::Ipv6(addr)) => is_local_ipv6(addr),
        None => true,
    }
}

fn is_local_ipv4(addr: Ipv4Addr) -> bool {
    addr.is_loopback() || addr.is_unspecified() || addr.is_private() || addr.is_link_local()
}

fn is_local_ipv6(addr: Ipv6Addr) -> bool {
    addr.is_loopback() || addr.is_unspecified()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Option<&'static Url> {
        static BASE: std::sync::LazyLock<Url> =
            std::sync::LazyLock::new(|| Url::parse("http://localhost/").unwrap());
        Some(&*BASE)
    }

    #[test]
    fn test_parse_absolute() {
        let link = parse_link("  https://www.youtube.com/watch?v=abc  ", base()).unwrap();
        assert!(link.absolute);
        assert_eq!(link.host(), "www.youtube.com");
        assert_eq!(link.url.query(), Some("v=abc"));
    }

    #[test]
    fn test_parse_scheme_less_host() {
        let link = parse_link("youtu.be/dQw4w9WgXcQ", base()).unwrap();
        assert!(link.absolute);
        assert_eq!(link.host(), "youtu.be");

        let link = parse_link("www.example.com", base()).unwrap();
        assert_eq!(link.host(), "www.example.com");
    }

    #[test]
    fn test_parse_relative_path() {
        let link = parse_link("files/notes.pdf", base()).unwrap();
        assert!(!link.absolute);
        assert!(link.is_local());
        assert_eq!(link.extension(), Some("pdf".to_string()));

        let link = parse_link("notes.pdf", base()).unwrap();
        assert!(!link.absolute);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_link("", base()), None);
        assert_eq!(parse_link("   ", base()), None);
    }

    #[test]
    fn test_relative_without_base() {
        assert_eq!(parse_link("files/notes.pdf", None), None);
        assert!(parse_link("https://example.org/a.pdf", None).is_some());
    }

    #[test]
    fn test_extension_ignores_query() {
        let link = parse_link("https://cdn.example.com/v/Lecture.MP4?token=x.y", base()).unwrap();
        assert_eq!(link.extension(), Some("mp4".to_string()));
        assert_eq!(path_extension("/dir.v2/readme"), None);
        assert_eq!(path_extension("/trailing."), None);
    }

    #[test]
    fn test_local_hosts() {
        for raw in [
            "http://localhost:3000/a.docx",
            "http://127.0.0.1/a.pdf",
            "http://192.168.1.10/a.pdf",
            "http://[::1]/a.pdf",
            "file:///home/me/a.pdf",
        ] {
            assert!(parse_link(raw, base()).unwrap().is_local(), "{raw}");
        }
        assert!(
            !parse_link("https://files.example.org/a.pdf", base())
                .unwrap()
                .is_local()
        );
    }
}
