//! Markup injection and stripping.
//!
//! Injection turns classified spans into styled runs; rendering emits the
//! inline `<span style="…">` markup the presentation layer consumes.
//! Stripping all injected markup from a rendered document reproduces the
//! plain projection exactly, so adaptation is purely additive.

use std::sync::LazyLock;

use regex::Regex;

use crate::adapt::span::{AnnotatedSpan, AnnotatedText, Run, SpanKind};

/// Matches any injected tag. Injected markup never contains a literal `>`
/// inside an attribute value, so the non-greedy tag shape is exact.
static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]*>").expect("markup tag pattern"));

/// Inline visual attributes rendered for one span kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub background: &'static str,
    pub color: &'static str,
    pub padding: &'static str,
    pub border_radius: &'static str,
    pub font_weight: Option<u16>,
    pub border: Option<&'static str>,
    pub box_shadow: Option<&'static str>,
}

impl HighlightStyle {
    /// The amber mirror-letter treatment.
    const MIRROR: HighlightStyle = HighlightStyle {
        background: "#fef3c7",
        color: "#92400e",
        padding: "2px 4px",
        border_radius: "3px",
        font_weight: Some(700),
        border: Some("1px solid #f59e0b"),
        box_shadow: None,
    };

    /// The blue vowel treatment.
    const VOWEL: HighlightStyle = HighlightStyle {
        background: "#dbeafe",
        color: "#1e40af",
        padding: "1px 2px",
        border_radius: "2px",
        font_weight: None,
        border: None,
        box_shadow: None,
    };

    /// The focus-word treatment used by the ADHD renderings.
    const HIGHLIGHT: HighlightStyle = HighlightStyle {
        background: "#fef3c7",
        color: "#92400e",
        padding: "2px 4px",
        border_radius: "3px",
        font_weight: Some(600),
        border: None,
        box_shadow: Some("0 1px 2px rgba(0, 0, 0, 0.1)"),
    };

    /// Returns the treatment for a span kind, or `None` for kinds rendered
    /// as bare text (plain runs and syllable separators).
    pub fn for_kind(kind: SpanKind) -> Option<HighlightStyle> {
        match kind {
            SpanKind::MirrorLetter => Some(Self::MIRROR),
            SpanKind::Vowel => Some(Self::VOWEL),
            SpanKind::Highlight => Some(Self::HIGHLIGHT),
            SpanKind::Plain | SpanKind::SyllableBoundary => None,
        }
    }

    /// Renders the inline CSS declaration list.
    pub fn to_inline_css(&self) -> String {
        let mut css = format!(
            "background-color: {}; padding: {}; border-radius: {}; color: {};",
            self.background, self.padding, self.border_radius, self.color
        );
        if let Some(weight) = self.font_weight {
            css.push_str(&format!(" font-weight: {weight};"));
        }
        if let Some(border) = self.border {
            css.push_str(&format!(" border: {border};"));
        }
        if let Some(shadow) = self.box_shadow {
            css.push_str(&format!(" box-shadow: {shadow};"));
        }
        css
    }
}

/// Applies classified spans to a document, producing a new document.
///
/// Spans must come from [`classify`](crate::adapt::span::classify) over the
/// same document: sorted, disjoint, and covering only plain runs. The whole
/// run list is rebuilt in one left-to-right pass against the original
/// offsets, so insertions can never invalidate spans later in the list (the
/// offset-drift hazard of substitute-as-you-go rewriting). The input
/// document is untouched.
pub fn inject(doc: &AnnotatedText, spans: &[AnnotatedSpan]) -> AnnotatedText {
    if spans.is_empty() {
        return doc.clone();
    }
    let mut out = AnnotatedText::from_runs(Vec::new());
    let mut offset = 0usize;
    let mut pending = spans.iter().peekable();
    for run in doc.runs() {
        let run_start = offset;
        let run_end = offset + run.text.len();
        offset = run_end;

        if !run.kind.is_classifiable() {
            out.push(run.clone());
            continue;
        }

        // Consume the spans that fall inside this run, splitting around them.
        let mut cursor = run_start;
        while let Some(&&span) = pending.peek() {
            if span.start >= run_end {
                break;
            }
            pending.next();
            debug_assert!(span.start >= cursor && span.end <= run_end);
            if span.start > cursor {
                out.push(Run::plain(&run.text[cursor - run_start..span.start - run_start]));
            }
            out.push(Run::styled(
                &run.text[span.start - run_start..span.end - run_start],
                span.kind,
            ));
            cursor = span.end;
        }
        if cursor < run_end {
            out.push(Run::plain(&run.text[cursor - run_start..]));
        }
    }
    out
}

/// Renders a document to markup text, wrapping styled runs in inline spans.
pub fn render_markup(doc: &AnnotatedText) -> String {
    let mut out = String::with_capacity(doc.plain_len());
    for run in doc.runs() {
        match HighlightStyle::for_kind(run.kind) {
            Some(style) => {
                out.push_str("<span style=\"");
                out.push_str(&style.to_inline_css());
                out.push_str("\">");
                out.push_str(&run.text);
                out.push_str("</span>");
            }
            None => out.push_str(&run.text),
        }
    }
    out
}

/// Removes every injected tag from rendered markup.
///
/// For any document, `strip_markup(render_markup(doc)) == doc.plain_text()`.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::adapt::span::{MIRROR_LETTERS, VOWELS, classify};

    /// Injecting no spans leaves the document unchanged.
    #[test]
    fn test_inject_empty_spans() {
        let doc = AnnotatedText::plain("quiet");
        let out = inject(&doc, &[]);
        assert_eq!(out, doc);
    }

    /// Injection splits plain runs around each span.
    #[test]
    fn test_inject_splits_runs() {
        let doc = AnnotatedText::plain("brown");
        let spans = classify(&doc, &MIRROR_LETTERS);
        let out = inject(&doc, &spans);

        let kinds: Vec<SpanKind> = out.runs().iter().map(|r| r.kind).collect();
        // b, r, o, w, n -> mirror(b), plain(ro), mirror(w), plain(n)
        assert_eq!(
            kinds,
            vec![
                SpanKind::MirrorLetter,
                SpanKind::Plain,
                SpanKind::MirrorLetter,
                SpanKind::Plain,
            ]
        );
        assert_eq!(out.plain_text(), "brown");
    }

    /// Two injection passes stay additive: stripping the rendered markup
    /// reproduces the original text exactly.
    #[test]
    fn test_strip_roundtrip_after_two_passes() {
        let original = "The quick brown fox jumps over the lazy dog.";
        let mut doc = AnnotatedText::plain(original);
        doc = inject(&doc, &classify(&doc, &MIRROR_LETTERS));
        doc = inject(&doc, &classify(&doc, &VOWELS));

        let markup = render_markup(&doc);
        assert!(markup.contains("<span style=\""));
        assert_eq!(strip_markup(&markup), original);
        assert_eq!(doc.plain_text(), original);
    }

    /// Rendered markup carries the per-kind visual attributes.
    #[test]
    fn test_render_styles_by_kind() {
        let doc = AnnotatedText::plain("bat");
        let styled = inject(&doc, &classify(&doc, &MIRROR_LETTERS));
        let markup = render_markup(&styled);
        assert!(markup.contains("font-weight: 700"));
        assert!(markup.contains("border: 1px solid #f59e0b"));

        let vowels = inject(&styled, &classify(&styled, &VOWELS));
        let markup = render_markup(&vowels);
        assert!(markup.contains("background-color: #dbeafe"));
    }

    /// Syllable separators render as bare text.
    #[test]
    fn test_syllable_boundary_renders_bare() {
        let doc = AnnotatedText::from_runs(vec![
            Run::plain("ac"),
            Run::styled("\u{b7}", SpanKind::SyllableBoundary),
            Run::plain("ces"),
        ]);
        assert_eq!(render_markup(&doc), "ac\u{b7}ces");
    }

    /// Stripping handles arbitrary externally-supplied markup fragments.
    #[test]
    fn test_strip_markup_external() {
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(
            strip_markup("<span style=\"color: red;\">b</span>rown"),
            "brown"
        );
    }
}
