//! Syllable segmentation.
//!
//! A vowel-boundary heuristic, not a phonetic algorithm: it breaks long
//! words at "…vowel | next…" positions so readers can take words in smaller
//! visual units. Accuracy on irregular words is best-effort by design.

use unicode_segmentation::UnicodeSegmentation;

use crate::adapt::markup::strip_markup;
use crate::adapt::span::{AnnotatedText, Run, SpanKind};

/// Words at or below this visible length are never segmented.
pub const MAX_UNSEGMENTED_LEN: usize = 6;

/// Hard floor below which segmentation is never attempted.
const MIN_SEGMENTABLE_LEN: usize = 4;

/// The separator placed between syllables.
pub const SYLLABLE_SEPARATOR: char = '\u{b7}';

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Visible length of a word: grapheme count after stripping any markup.
pub fn visible_len(word: &str) -> usize {
    strip_markup(word).graphemes(true).count()
}

/// Splits a word into syllable-like pieces.
///
/// Scans characters left to right accumulating a buffer; on a vowel that is
/// not the final character, a buffer of two or more characters is emitted
/// as a syllable. A trailing buffer is folded into the last syllable, or
/// becomes the only one.
fn break_syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < MIN_SEGMENTABLE_LEN {
        return vec![word.to_string()];
    }

    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;
    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        current_chars += 1;
        if is_vowel(c) && i < chars.len() - 1 && current_chars >= 2 {
            syllables.push(std::mem::take(&mut current));
            current_chars = 0;
        }
    }
    if !current.is_empty() {
        match syllables.last_mut() {
            Some(last) => last.push_str(&current),
            None => syllables.push(current),
        }
    }
    syllables
}

/// Segments a word for display, joining syllables with a middle dot.
///
/// Words whose visible (markup-stripped) length is at most
/// [`MAX_UNSEGMENTED_LEN`] come back unchanged, markup included. Longer
/// words are segmented from their stripped form; if the heuristic finds
/// only one syllable the original word also comes back unchanged.
pub fn segment_word(word: &str) -> String {
    let clean = strip_markup(word);
    if clean.graphemes(true).count() <= MAX_UNSEGMENTED_LEN {
        return word.to_string();
    }
    let syllables = break_syllables(&clean);
    if syllables.len() > 1 {
        syllables.join(&SYLLABLE_SEPARATOR.to_string())
    } else {
        word.to_string()
    }
}

/// Applies segmentation to every qualifying word of a styled document.
///
/// Words are the whitespace-delimited tokens of the plain projection. A
/// word that segments is replaced by plain syllable runs separated by
/// [`SpanKind::SyllableBoundary`] runs — its earlier letter styling is
/// dropped, matching the renderer this engine reproduces. All other words
/// and all whitespace keep their runs untouched.
pub fn apply_syllables(doc: &AnnotatedText) -> AnnotatedText {
    let projection = doc.plain_text();
    let mut out = AnnotatedText::from_runs(Vec::new());

    for (range, is_word) in whitespace_groups(&projection) {
        let segment = doc.slice(range.clone());
        if !is_word {
            out.extend(segment);
            continue;
        }
        let word = &projection[range];
        let segmented = segment_word(word);
        if segmented == word {
            out.extend(segment);
            continue;
        }
        for (i, syllable) in segmented.split(SYLLABLE_SEPARATOR).enumerate() {
            if i > 0 {
                out.push(Run::styled(
                    SYLLABLE_SEPARATOR.to_string(),
                    SpanKind::SyllableBoundary,
                ));
            }
            out.push(Run::plain(syllable));
        }
    }
    out
}

/// Byte ranges of alternating word / whitespace groups, in order.
pub(crate) fn whitespace_groups(text: &str) -> Vec<(std::ops::Range<usize>, bool)> {
    let mut groups = Vec::new();
    let mut start = 0usize;
    let mut in_word: Option<bool> = None;
    for (i, c) in text.char_indices() {
        let word = !c.is_whitespace();
        match in_word {
            Some(current) if current == word => {}
            Some(current) => {
                groups.push((start..i, current));
                start = i;
                in_word = Some(word);
            }
            None => in_word = Some(word),
        }
    }
    if let Some(current) = in_word {
        groups.push((start..text.len(), current));
    }
    groups
}
