//! Reading-behavior suggestions.
//!
//! Watches coarse activity signals (idle time, upward scrolling, total
//! reading time) and proposes one-tap adjustments. Choice among candidate
//! messages goes through an injected [`SuggestionPicker`] so behavior is
//! deterministic under test; there is no hidden global randomness.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::profile::ConditionKind;

/// Idle seconds before offering a break-related suggestion.
pub const IDLE_THRESHOLD_SECS: u64 = 10;

/// Upward scrolls before offering re-reading help.
pub const REREAD_SCROLL_UPS: u32 = 4;

/// Reading seconds before offering condition-specific help.
pub const CONDITION_READING_SECS: u64 = 60;

/// A snapshot of the reader's recent activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Seconds since the last interaction.
    pub idle_secs: u64,
    /// Upward scroll events observed in the current session.
    pub scroll_ups: u32,
    /// Total active reading seconds in the current session.
    pub reading_secs: u64,
}

/// Family of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Pause,
    Reread,
    ConditionSpecific,
}

/// A proposed adjustment with a stable id for dismissal tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub kind: SuggestionKind,
    pub message: &'static str,
    /// Machine-readable action the presentation layer applies.
    pub action: &'static str,
}

/// Source of the choice among equally-applicable candidates.
pub trait SuggestionPicker {
    /// Returns an index in `0..candidates`. `candidates` is always ≥ 1.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Default picker: rotates through the candidates in order.
#[derive(Debug, Clone, Default)]
pub struct RotatingPicker {
    counter: usize,
}

impl SuggestionPicker for RotatingPicker {
    fn pick(&mut self, candidates: usize) -> usize {
        let index = self.counter % candidates;
        self.counter = self.counter.wrapping_add(1);
        index
    }
}

/// (id, message, action) candidate tables.
const IDLE_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "idle_help",
        "You've been idle for a while. Want me to increase line spacing?",
        "increase_line_spacing",
    ),
    (
        "idle_help",
        "Need a break? Should I turn on Text-to-Speech?",
        "enable_tts",
    ),
    (
        "idle_help",
        "Having trouble focusing? Want me to increase font size?",
        "increase_font_size",
    ),
];

const REREAD_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "reread_help",
        "I notice you're scrolling up frequently. Want me to summarize this text?",
        "summarize_text",
    ),
    (
        "reread_help",
        "Having trouble with comprehension? Should I increase spacing?",
        "increase_spacing",
    ),
    (
        "reread_help",
        "Want me to break this into smaller chunks?",
        "chunk_text",
    ),
];

const ADHD_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "adhd_tldr",
        "Long text detected. Want a TL;DR summary?",
        "generate_summary",
    ),
    (
        "adhd_highlight",
        "Having trouble focusing? Want me to highlight key words?",
        "highlight_keywords",
    ),
];

const DYSLEXIA_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "dyslexia_letters",
        "I can highlight confusing letters like b/d and p/q. Want me to enable this?",
        "highlight_confusing_letters",
    ),
    (
        "dyslexia_font",
        "Want me to switch to a dyslexia-friendly font?",
        "dyslexic_font",
    ),
];

const VISION_CANDIDATES: &[(&str, &str, &str)] = &[
    (
        "vision_contrast",
        "Need better visibility? Want me to increase contrast?",
        "high_contrast",
    ),
    (
        "vision_zoom",
        "Text too small? Should I increase the zoom level?",
        "increase_zoom",
    ),
];

/// Stateful suggestion source.
///
/// Dismissed ids are remembered for the lifetime of the engine and never
/// offered again.
#[derive(Debug)]
pub struct SuggestionEngine<P> {
    picker: P,
    dismissed: HashSet<&'static str>,
}

impl Default for SuggestionEngine<RotatingPicker> {
    fn default() -> Self {
        Self::new(RotatingPicker::default())
    }
}

impl<P: SuggestionPicker> SuggestionEngine<P> {
    pub fn new(picker: P) -> Self {
        Self {
            picker,
            dismissed: HashSet::new(),
        }
    }

    /// Records that the user rejected a suggestion.
    pub fn dismiss(&mut self, suggestion: &Suggestion) {
        self.dismissed.insert(suggestion.id);
    }

    /// Evaluates the thresholds against an activity sample.
    ///
    /// At most one suggestion per family comes back; families whose id set
    /// was fully dismissed stay silent.
    pub fn check(
        &mut self,
        condition: ConditionKind,
        activity: &ActivitySample,
    ) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if activity.idle_secs > IDLE_THRESHOLD_SECS {
            if let Some(s) = self.choose(SuggestionKind::Pause, IDLE_CANDIDATES) {
                suggestions.push(s);
            }
        }
        if activity.scroll_ups >= REREAD_SCROLL_UPS {
            if let Some(s) = self.choose(SuggestionKind::Reread, REREAD_CANDIDATES) {
                suggestions.push(s);
            }
        }
        if activity.reading_secs > CONDITION_READING_SECS {
            let candidates = match condition {
                ConditionKind::Adhd => ADHD_CANDIDATES,
                ConditionKind::Dyslexia => DYSLEXIA_CANDIDATES,
                ConditionKind::Vision => VISION_CANDIDATES,
                ConditionKind::None => &[],
            };
            if let Some(s) = self.choose(SuggestionKind::ConditionSpecific, candidates) {
                suggestions.push(s);
            }
        }

        suggestions
    }

    fn choose(
        &mut self,
        kind: SuggestionKind,
        table: &[(&'static str, &'static str, &'static str)],
    ) -> Option<Suggestion> {
        let available: Vec<_> = table
            .iter()
            .filter(|(id, _, _)| !self.dismissed.contains(id))
            .collect();
        if available.is_empty() {
            return None;
        }
        let (id, message, action) = *available[self.picker.pick(available.len())];
        Some(Suggestion {
            id,
            kind,
            message,
            action,
        })
    }
}
