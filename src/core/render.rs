//! Rendering strategy selection for topic resources.
//!
//! [`ResourceResolver`] runs the full pipeline for a topic:
//! classify the link, rewrite provider URLs, then pick a
//! [`RenderDirective`]. The directive is plain data; the viewer component
//! turns it into DOM.
//!
//! Every failure on the way (denied host, missing provider id, local file
//! behind a public viewer) degrades to [`RenderDirective::Fallback`], which
//! carries an "open externally" link whenever the link is a public web URL.
//! A [`RenderDirective::Frame`] is only produced for links that can also be
//! opened externally.

use url::form_urlencoded;

use super::classify::Classifier;
use super::embed::{self, to_embed_url};
use super::error::EmbedError;
use crate::config::{FRAME_ALLOW, FRAME_SANDBOX, ViewerConfig};
use crate::models::{ResourceKind, Topic};
use crate::utils::url::ParsedLink;

// =============================================================================
// Directives
// =============================================================================

/// Event that marks the topic complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionTrigger {
    /// As soon as the content is shown
    Display,
    /// Frame or image `load`
    Load,
    /// Video `play`
    PlaybackStart,
    /// User follows the external link
    ExternalOpen,
}

/// Parameters for an `<iframe>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameDirective {
    pub src: String,
    /// `sandbox` attribute; `None` for trusted provider players.
    pub sandbox: Option<&'static str>,
    pub allow: &'static str,
    /// Cross-origin frame busting cannot be detected; the caller must show an
    /// external-open action whatever happens.
    pub may_fail_silently: bool,
    pub completion: CompletionTrigger,
}

/// Why a resource is shown as a panel instead of embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// Host refuses embedding or injects ads
    Blocked,
    /// Audio is not embedded
    Audio,
    /// Document on a local or relative path
    LocalFile,
    /// Relative link with no public address to open
    RelativeLink,
    /// Provider link could not be rewritten
    Untransformable(EmbedError),
    /// Neither http nor https
    UnsupportedScheme,
}

impl FallbackReason {
    /// User-facing explanation.
    pub fn message(self) -> &'static str {
        match self {
            Self::Blocked => "This host does not allow its files to be shown here.",
            Self::Audio => "Audio files open in your browser's player.",
            Self::LocalFile => "This document is stored locally and can't be previewed online.",
            Self::RelativeLink => "This link is incomplete and can't be opened. Ask your instructor for the full address.",
            Self::Untransformable(EmbedError::MissingDriveId) => {
                "This Google Drive link does not point to a single file."
            }
            Self::Untransformable(EmbedError::MissingVideoId(_)) => {
                "The video in this link could not be found."
            }
            Self::UnsupportedScheme => "This link can't be opened inside the course viewer.",
        }
    }
}

/// A message panel with a direct external-open action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallbackPanel {
    pub reason: FallbackReason,
    /// Target of the "open externally" action; `None` when the link is not
    /// a web URL and cannot be opened safely.
    pub external_url: Option<String>,
}

/// How a topic's resource is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDirective {
    /// No resource link: the topic's own content
    Text,
    /// Embedded frame
    Frame(FrameDirective),
    /// Native `<video>`
    Video {
        src: String,
    },
    /// Native `<img>`
    Image {
        src: String,
    },
    /// Message plus external-open action
    Fallback(FallbackPanel),
}

impl RenderDirective {
    /// Name of the strategy, for logs.
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Frame(_) => "iframe",
            Self::Video { .. } => "native-video",
            Self::Image { .. } => "native-image",
            Self::Fallback(FallbackPanel {
                reason: FallbackReason::Audio,
                ..
            }) => "native-audio-fallback",
            Self::Fallback(_) => "fallback-panel",
        }
    }

    /// Event that completes the topic.
    pub fn completion(&self) -> CompletionTrigger {
        match self {
            Self::Text => CompletionTrigger::Display,
            Self::Frame(frame) => frame.completion,
            Self::Video { .. } => CompletionTrigger::PlaybackStart,
            Self::Image { .. } => CompletionTrigger::Load,
            Self::Fallback(_) => CompletionTrigger::ExternalOpen,
        }
    }

    /// Whether the viewer must offer a manual "open externally" action.
    pub fn needs_external_action(&self) -> bool {
        matches!(self, Self::Frame(_) | Self::Fallback(_))
    }
}

/// Classification and directive for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedResource {
    pub kind: ResourceKind,
    pub directive: RenderDirective,
    /// The raw link when it is a web URL, for the header's external action.
    pub external_url: Option<String>,
}

// =============================================================================
// Resolver
// =============================================================================

/// Classifies topic links and selects their rendering strategy.
#[derive(Clone, Debug)]
pub struct ResourceResolver {
    classifier: Classifier,
    document_viewer: String,
}

impl ResourceResolver {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
            document_viewer: config.document_viewer.clone(),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Run the full pipeline for a topic.
    ///
    /// A topic without a link never reaches the classifier.
    pub fn resolve(&self, topic: &Topic) -> ResolvedResource {
        let Some(raw) = topic.link() else {
            return ResolvedResource {
                kind: ResourceKind::Text,
                directive: RenderDirective::Text,
                external_url: None,
            };
        };

        let Some(link) = self.classifier.parse(raw) else {
            log::debug!("topic {}: unparsable link '{}'", topic.id, raw);
            return ResolvedResource {
                kind: ResourceKind::Webpage,
                directive: fallback(FallbackReason::UnsupportedScheme, None),
                external_url: None,
            };
        };

        let kind = self.classifier.classify_link(&link);
        let embed = to_embed_url(link.url.as_str(), kind);
        let directive = self.render(&link, kind, embed);
        let external_url = web_url(&link);

        log::debug!(
            "topic {}: {} -> {}",
            topic.id,
            kind,
            directive.strategy()
        );

        ResolvedResource {
            kind,
            directive,
            external_url,
        }
    }

    /// Select the directive for a classified link.
    pub fn render(
        &self,
        link: &ParsedLink,
        kind: ResourceKind,
        embed: Result<String, EmbedError>,
    ) -> RenderDirective {
        let external = web_url(link);
        let raw = link.url.as_str();

        let directive = match kind {
            ResourceKind::Text => RenderDirective::Text,
            ResourceKind::Blocked => fallback(FallbackReason::Blocked, external.clone()),
            ResourceKind::Audio => fallback(FallbackReason::Audio, external.clone()),

            ResourceKind::Youtube => match embed::youtube_id(raw) {
                Some(id) => player_frame(embed::youtube_player_url(id)),
                None => fallback(
                    FallbackReason::Untransformable(EmbedError::MissingVideoId("YouTube")),
                    external.clone(),
                ),
            },
            ResourceKind::Vimeo => match embed::vimeo_id(&link.url) {
                Some(id) => player_frame(embed::vimeo_player_url(&id)),
                None => fallback(
                    FallbackReason::Untransformable(EmbedError::MissingVideoId("Vimeo")),
                    external.clone(),
                ),
            },

            ResourceKind::Video => RenderDirective::Video {
                src: raw.to_string(),
            },
            ResourceKind::Image => RenderDirective::Image {
                src: raw.to_string(),
            },

            ResourceKind::Pdf | ResourceKind::Document | ResourceKind::Powerpoint
            | ResourceKind::Excel => {
                if link.is_local() {
                    return fallback(FallbackReason::LocalFile, external.clone());
                }
                let src = if kind.is_office() {
                    self.document_viewer_url(raw)
                } else {
                    raw.to_string()
                };
                RenderDirective::Frame(FrameDirective {
                    src,
                    sandbox: Some(FRAME_SANDBOX),
                    allow: FRAME_ALLOW,
                    may_fail_silently: false,
                    completion: CompletionTrigger::Load,
                })
            }

            ResourceKind::Gdrive | ResourceKind::SmartPresentation => match embed {
                Ok(src) => RenderDirective::Frame(FrameDirective {
                    src,
                    sandbox: Some(FRAME_SANDBOX),
                    allow: FRAME_ALLOW,
                    may_fail_silently: false,
                    completion: CompletionTrigger::Load,
                }),
                Err(e) => fallback(FallbackReason::Untransformable(e), external.clone()),
            },

            ResourceKind::Webpage => {
                if !link.is_web() {
                    return fallback(FallbackReason::UnsupportedScheme, None);
                }
                RenderDirective::Frame(FrameDirective {
                    src: raw.to_string(),
                    sandbox: Some(FRAME_SANDBOX),
                    allow: FRAME_ALLOW,
                    may_fail_silently: true,
                    completion: CompletionTrigger::Load,
                })
            }
        };

        // Frames need an external target beside them
        match directive {
            RenderDirective::Frame(_) if external.is_none() => {
                fallback(FallbackReason::RelativeLink, None)
            }
            directive => directive,
        }
    }

    /// Online viewer URL for an office document.
    pub fn document_viewer_url(&self, raw: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(raw.as_bytes()).collect();
        format!("{}{}", self.document_viewer, encoded)
    }
}

fn fallback(reason: FallbackReason, external_url: Option<String>) -> RenderDirective {
    log::warn!("resource shown as fallback panel: {:?}", reason);
    RenderDirective::Fallback(FallbackPanel {
        reason,
        external_url,
    })
}

fn player_frame(src: String) -> RenderDirective {
    RenderDirective::Frame(FrameDirective {
        src,
        sandbox: None,
        allow: FRAME_ALLOW,
        may_fail_silently: false,
        completion: CompletionTrigger::Load,
    })
}

fn web_url(link: &ParsedLink) -> Option<String> {
    (link.absolute && link.is_web()).then(|| link.url.to_string())
}
