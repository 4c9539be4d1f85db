//! Letter classification over annotated text.
//!
//! The adaptation passes never scan strings interleaved with markup.
//! Instead a document is an ordered list of runs, each either still-plain
//! text or text claimed by an earlier styling pass. Classification walks
//! only the plain runs, which makes the no-reclassification guarantee
//! structural: a pass cannot see, let alone re-wrap, characters a previous
//! pass already styled.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Role of a run or span within the adapted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Unstyled text, still eligible for classification.
    Plain,
    /// A letter from a visually confusable pair (b/d, p/q, m/w, n/u).
    MirrorLetter,
    /// A vowel, color-coded in the severe-dyslexia rendering.
    Vowel,
    /// A syllable separator inserted by the segmenter.
    SyllableBoundary,
    /// An emphasized word in the ADHD rendering.
    Highlight,
}

impl SpanKind {
    /// Whether text of this kind may still be claimed by a classifier pass.
    pub fn is_classifiable(&self) -> bool {
        matches!(self, SpanKind::Plain)
    }
}

/// A contiguous piece of the document with a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub kind: SpanKind,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A classified span over the plain-text projection of a document.
///
/// Offsets are byte offsets into [`AnnotatedText::plain_text`] and remain
/// valid for the document they were computed against; injection consumes
/// them in a single pass so no offset drift can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl AnnotatedSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A document as an ordered list of runs.
///
/// The plain-text projection (all run text concatenated) is always exactly
/// the original input: styling passes only ever re-label pieces of it,
/// never rewrite them. Rendering to markup and stripping markup back are
/// both defined over this structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedText {
    runs: Vec<Run>,
}

impl AnnotatedText {
    /// Creates a document consisting of a single plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self { runs: Vec::new() };
        }
        Self {
            runs: vec![Run::plain(text)],
        }
    }

    /// Creates a document from pre-built runs, dropping empty ones.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self {
            runs: runs.into_iter().filter(|r| !r.text.is_empty()).collect(),
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The plain-text projection: every run's text in order, markup-free.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Total byte length of the plain-text projection.
    pub fn plain_len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    /// Extracts the sub-document covering `range` of the plain projection.
    ///
    /// Runs overlapping the boundary are split; `range` must lie on UTF-8
    /// character boundaries of the projection (callers derive ranges from
    /// `char_indices`, which guarantees this).
    pub fn slice(&self, range: Range<usize>) -> AnnotatedText {
        let mut out = Vec::new();
        let mut offset = 0usize;
        for run in &self.runs {
            let run_start = offset;
            let run_end = offset + run.text.len();
            offset = run_end;
            let start = range.start.max(run_start);
            let end = range.end.min(run_end);
            if start < end {
                out.push(Run {
                    text: run.text[start - run_start..end - run_start].to_string(),
                    kind: run.kind,
                });
            }
        }
        AnnotatedText::from_runs(out)
    }

    /// Appends every run of `other` to this document.
    pub fn extend(&mut self, other: AnnotatedText) {
        self.runs.extend(other.runs);
    }

    /// Appends a single run, dropping it if empty.
    pub fn push(&mut self, run: Run) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }
}

/// A case-insensitive set of target letters with the span kind they map to.
#[derive(Debug, Clone, Copy)]
pub struct LetterClass {
    kind: SpanKind,
    letters: &'static [char],
}

/// Letters from the mirror pairs b/d, p/q, m/w, n/u.
pub const MIRROR_LETTERS: LetterClass = LetterClass {
    kind: SpanKind::MirrorLetter,
    letters: &['b', 'd', 'p', 'q', 'm', 'w', 'n', 'u'],
};

/// The vowel set a/e/i/o/u.
pub const VOWELS: LetterClass = LetterClass {
    kind: SpanKind::Vowel,
    letters: &['a', 'e', 'i', 'o', 'u'],
};

impl LetterClass {
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Case-insensitive membership test.
    pub fn matches(&self, c: char) -> bool {
        self.letters.contains(&c.to_ascii_lowercase())
    }
}

/// Classifies every occurrence of the target letters in `doc`.
///
/// Only plain runs are scanned; text wrapped by an earlier injection pass
/// is excluded by construction. Spans are returned in document order, are
/// one character wide, and never overlap. Empty documents and documents
/// without target characters yield an empty set.
pub fn classify(doc: &AnnotatedText, class: &LetterClass) -> Vec<AnnotatedSpan> {
    let mut spans = Vec::new();
    let mut offset = 0usize;
    for run in doc.runs() {
        if run.kind.is_classifiable() {
            for (i, c) in run.text.char_indices() {
                if class.matches(c) {
                    spans.push(AnnotatedSpan {
                        start: offset + i,
                        end: offset + i + c.len_utf8(),
                        kind: class.kind(),
                    });
                }
            }
        }
        offset += run.text.len();
    }
    spans
}
