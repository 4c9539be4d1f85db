//! Adaptation orchestration.
//!
//! [`adapt`] is a pure function from `(text, profile)` to [`AdaptedOutput`]
//! and recomputes everything on every call; there is no incremental state
//! to invalidate. When the profile comes from an upstream classifier,
//! [`adapt_classified`] converts its failure into a passthrough rendering
//! with a non-fatal notice — adaptation degrades, reading never blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapt::chunk::{Chunk, Paginator};
use crate::adapt::markup::{inject, render_markup};
use crate::adapt::span::{AnnotatedText, MIRROR_LETTERS, Run, SpanKind, VOWELS, classify};
use crate::adapt::style::{StyleRecord, resolve_style};
use crate::adapt::syllable::{apply_syllables, whitespace_groups};
use crate::profile::{ConditionKind, ConditionProfile, DyslexiaSeverity};

/// Category of a degradation notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The upstream classification/adaptation service was unreachable.
    UpstreamUnavailable,
    /// The supplied profile could not be understood and was neutralized.
    MalformedProfile,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKind::UpstreamUnavailable => write!(f, "upstream_unavailable"),
            NoticeKind::MalformedProfile => write!(f, "malformed_profile"),
        }
    }
}

/// A non-blocking notice attached to degraded output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::UpstreamUnavailable,
            message: message.into(),
        }
    }

    pub fn malformed_profile(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::MalformedProfile,
            message: message.into(),
        }
    }
}

/// The rendered body of an adaptation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdaptedBody {
    /// Unstyled text (passthrough, vision, ADHD without adaptations).
    Plain { text: String },
    /// Text carrying inline style-bearing spans.
    Markup { text: String },
    /// Sequential pages with a navigation handle; `highlight` requests the
    /// every-third-word emphasis on each rendered page.
    Paged { pager: Paginator, highlight: bool },
}

/// The final adaptation artifact handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptedOutput {
    pub style: StyleRecord,
    pub body: AdaptedBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl AdaptedOutput {
    /// The text currently in view: the whole body, or the current page.
    pub fn text(&self) -> String {
        match &self.body {
            AdaptedBody::Plain { text } | AdaptedBody::Markup { text } => text.clone(),
            AdaptedBody::Paged { pager, highlight } => pager
                .current_chunk()
                .map(|chunk| render_chunk(chunk, *highlight))
                .unwrap_or_default(),
        }
    }

    /// The pagination handle, when the body is paged.
    pub fn pager_mut(&mut self) -> Option<&mut Paginator> {
        match &mut self.body {
            AdaptedBody::Paged { pager, .. } => Some(pager),
            _ => None,
        }
    }
}

/// Renders one page, applying the word emphasis when requested.
pub fn render_chunk(chunk: &Chunk, highlight: bool) -> String {
    let text = chunk.display_text();
    if highlight {
        render_markup(&highlight_every_third_word(&text))
    } else {
        text
    }
}

/// Adapts `text` for `profile`.
pub fn adapt(text: &str, profile: &ConditionProfile) -> AdaptedOutput {
    let style = resolve_style(profile);
    let body = match profile.kind {
        ConditionKind::None | ConditionKind::Vision => AdaptedBody::Plain {
            text: text.to_string(),
        },
        ConditionKind::Dyslexia => AdaptedBody::Markup {
            text: dyslexia_markup(text, profile.dyslexia_severity),
        },
        ConditionKind::Adhd => adhd_body(text, profile),
    };
    tracing::debug!(profile = %profile.describe(), "adapted text");
    AdaptedOutput {
        style,
        body,
        notice: None,
    }
}

/// Adapts `text` using an upstream classification outcome.
///
/// A failed classification falls back to the unadapted passthrough with an
/// [`NoticeKind::UpstreamUnavailable`] notice; it never propagates the
/// error into the reading path.
pub fn adapt_classified<E: fmt::Display>(
    text: &str,
    classification: Result<ConditionProfile, E>,
) -> AdaptedOutput {
    match classification {
        Ok(profile) => adapt(text, &profile),
        Err(err) => {
            tracing::warn!(error = %err, "classification unavailable, rendering unadapted");
            passthrough(
                text,
                Some(Notice::upstream_unavailable(format!(
                    "condition classification unavailable: {err}"
                ))),
            )
        }
    }
}

/// The unadapted rendering: original text, neutral style.
pub fn passthrough(text: &str, notice: Option<Notice>) -> AdaptedOutput {
    AdaptedOutput {
        style: StyleRecord::neutral(),
        body: AdaptedBody::Plain {
            text: text.to_string(),
        },
        notice,
    }
}

/// Builds the dyslexia rendering: mirror-letter highlighting, and for the
/// severe tier also vowel coloring and syllable breaks. Passes run in that
/// order; each one only touches text the previous passes left plain.
fn dyslexia_markup(text: &str, severity: DyslexiaSeverity) -> String {
    let mut doc = AnnotatedText::plain(text);
    doc = inject(&doc, &classify(&doc, &MIRROR_LETTERS));
    if severity == DyslexiaSeverity::Severe {
        doc = inject(&doc, &classify(&doc, &VOWELS));
        doc = apply_syllables(&doc);
    }
    render_markup(&doc)
}

fn adhd_body(text: &str, profile: &ConditionProfile) -> AdaptedBody {
    let variant = profile.adhd_variant;
    if variant.chunks_sentences() {
        AdaptedBody::Paged {
            pager: Paginator::from_text(text),
            highlight: variant.highlights_words(),
        }
    } else if variant.highlights_words() {
        AdaptedBody::Markup {
            text: render_markup(&highlight_every_third_word(text)),
        }
    } else {
        AdaptedBody::Plain {
            text: text.to_string(),
        }
    }
}

/// Marks every third word for emphasis, preserving whitespace exactly.
fn highlight_every_third_word(text: &str) -> AnnotatedText {
    let mut out = AnnotatedText::from_runs(Vec::new());
    let mut word_index = 0usize;
    for (range, is_word) in whitespace_groups(text) {
        let token = &text[range];
        if is_word {
            word_index += 1;
            if word_index % 3 == 0 {
                out.push(Run::styled(token, SpanKind::Highlight));
                continue;
            }
        }
        out.push(Run::plain(token));
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::adapt::markup::strip_markup;
    use crate::profile::{AdhdVariant, VisionLevel};

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    /// Mild dyslexia highlights mirror letters and nothing else.
    #[test]
    fn test_dyslexia_mild_mirror_only() {
        let output = adapt(FOX, &ConditionProfile::dyslexia(DyslexiaSeverity::Mild));
        let AdaptedBody::Markup { text } = &output.body else {
            panic!("expected markup body");
        };
        // The b of "brown", d of "dog" and q of "quick" are wrapped...
        assert!(text.contains(">b</span>"));
        assert!(text.contains(">d</span>og"));
        assert!(text.contains(">q</span>"));
        // ...with no vowel coloring and no syllable breaks.
        assert!(!text.contains("#dbeafe"));
        assert!(!text.contains('\u{b7}'));
        // Adaptation is additive only.
        assert_eq!(strip_markup(text), FOX);
        assert!(output.notice.is_none());
    }

    /// Severe dyslexia adds vowel coloring and syllable breaks.
    #[test]
    fn test_dyslexia_severe_full_pipeline() {
        let output = adapt(
            "Reading accessibility matters.",
            &ConditionProfile::dyslexia(DyslexiaSeverity::Severe),
        );
        let AdaptedBody::Markup { text } = &output.body else {
            panic!("expected markup body");
        };
        assert!(text.contains("#dbeafe"), "vowel coloring missing");
        assert!(text.contains('\u{b7}'), "syllable separator missing");
    }

    /// Four sentences page into 3+1 with saturating navigation.
    #[test]
    fn test_adhd_hyperactive_pagination() {
        let mut output = adapt(
            "One is first. Two is second. Three is third. Four is last.",
            &ConditionProfile::adhd(AdhdVariant::Hyperactive),
        );
        let pager = output.pager_mut().expect("paged body");
        assert_eq!(pager.len(), 2);
        assert_eq!(pager.current_index(), 0);
        assert!(pager.next());
        assert_eq!(pager.current_index(), 1);
        assert!(!pager.next());
        assert_eq!(pager.current_index(), 1);
    }

    /// Hyperactive pages carry no word emphasis.
    #[test]
    fn test_adhd_hyperactive_no_highlight() {
        let output = adapt(
            "One is first. Two is second.",
            &ConditionProfile::adhd(AdhdVariant::Hyperactive),
        );
        assert!(!output.text().contains("<span"));
    }

    /// Inattentive emphasizes every third word without chunking.
    #[test]
    fn test_adhd_inattentive_highlight() {
        let output = adapt(
            "one two three four five six",
            &ConditionProfile::adhd(AdhdVariant::Inattentive),
        );
        let AdaptedBody::Markup { text } = &output.body else {
            panic!("expected markup body");
        };
        assert!(text.contains(">three</span>"));
        assert!(text.contains(">six</span>"));
        assert!(!text.contains(">one</span>"));
        assert_eq!(strip_markup(text), "one two three four five six");
    }

    /// Combined chunks and emphasizes each rendered page.
    #[test]
    fn test_adhd_combined_highlights_pages() {
        let output = adapt(
            "One is first here. Two is second here. Three is third here. Four ends it all.",
            &ConditionProfile::adhd(AdhdVariant::Combined),
        );
        let page = output.text();
        assert!(page.contains("<span"));
        let AdaptedBody::Paged { pager, highlight } = &output.body else {
            panic!("expected paged body");
        };
        assert!(*highlight);
        assert_eq!(pager.len(), 2);
    }

    /// ADHD normal variant passes text through with the ADHD style.
    #[test]
    fn test_adhd_normal_passthrough() {
        let output = adapt(FOX, &ConditionProfile::adhd(AdhdVariant::Normal));
        assert_eq!(output.text(), FOX);
        assert_eq!(output.style.background, "#f0f4ff");
    }

    /// Vision adapts style only; the text is untouched.
    #[test]
    fn test_vision_style_only() {
        let output = adapt(FOX, &ConditionProfile::vision(VisionLevel::Severe));
        assert_eq!(output.text(), FOX);
        assert_eq!(output.style.font_size_px, crate::adapt::style::MAX_FONT_SIZE_PX);
    }

    /// Empty input yields an empty output for every condition.
    #[test]
    fn test_empty_input() {
        for profile in [
            ConditionProfile::none(),
            ConditionProfile::dyslexia(DyslexiaSeverity::Severe),
            ConditionProfile::adhd(AdhdVariant::Combined),
        ] {
            let output = adapt("", &profile);
            assert_eq!(output.text(), "");
        }
    }

    /// A failed upstream classification degrades to passthrough with a
    /// non-fatal notice.
    #[test]
    fn test_classification_failure_falls_back() {
        let output = adapt_classified(FOX, Err("connection refused"));
        assert_eq!(output.text(), FOX);
        assert_eq!(output.style, StyleRecord::neutral());
        let notice = output.notice.expect("degradation notice");
        assert_eq!(notice.kind, NoticeKind::UpstreamUnavailable);
        assert!(notice.message.contains("connection refused"));
    }

    /// A successful classification adapts normally with no notice.
    #[test]
    fn test_classification_success_adapts() {
        let output = adapt_classified::<&str>(
            FOX,
            Ok(ConditionProfile::dyslexia(DyslexiaSeverity::Mild)),
        );
        assert!(matches!(output.body, AdaptedBody::Markup { .. }));
        assert!(output.notice.is_none());
    }
}
