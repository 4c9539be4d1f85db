//! Deterministic text-adaptation engine.
//!
//! Everything here is a synchronous, pure transform over in-memory text:
//! given the same input text and condition profile, the same adapted output
//! comes back. Adaptation is recomputed in full on every change; nothing is
//! patched incrementally.

pub mod chunk;
pub mod engine;
pub mod markup;
pub mod span;
pub mod style;
pub mod syllable;

pub use chunk::{Chunk, Paginator, SENTENCES_PER_CHUNK, split_sentences};
pub use engine::{
    AdaptedBody, AdaptedOutput, Notice, NoticeKind, adapt, adapt_classified, passthrough,
    render_chunk,
};
pub use markup::{HighlightStyle, inject, render_markup, strip_markup};
pub use span::{
    AnnotatedSpan, AnnotatedText, LetterClass, MIRROR_LETTERS, Run, SpanKind, VOWELS, classify,
};
pub use style::{MAX_FONT_SIZE_PX, StyleRecord, resolve_style};
pub use syllable::{
    MAX_UNSEGMENTED_LEN, SYLLABLE_SEPARATOR, apply_syllables, segment_word, visible_len,
};
