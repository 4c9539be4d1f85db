//! Per-condition style derivation.
//!
//! A [`StyleRecord`] is a pure function of the condition profile: no I/O,
//! no randomness, identical output for identical profiles. Within each
//! condition family the values grow monotonically with severity.

use serde::{Deserialize, Serialize};

use crate::profile::{AdhdVariant, ConditionKind, ConditionProfile, DyslexiaSeverity, VisionLevel};

/// Largest font size any profile resolves to (the severe-vision tier).
pub const MAX_FONT_SIZE_PX: u32 = 32;

const DYSLEXIA_FONT: &str = "\"OpenDyslexic\", \"Comic Sans MS\", Arial, sans-serif";
const SYSTEM_FONT: &str = "system-ui, sans-serif";

/// Concrete typography and color settings for rendering adapted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRecord {
    pub font_family: String,
    pub font_size_px: u32,
    pub line_height: f32,
    pub letter_spacing_em: f32,
    pub word_spacing_em: f32,
    /// Background color, hex.
    pub background: String,
    /// Text color, hex.
    pub foreground: String,
    pub padding_px: u32,
    pub max_width_ch: u32,
}

impl StyleRecord {
    /// The unadapted baseline used for `none` and as the fallback style.
    pub fn neutral() -> Self {
        Self {
            font_family: SYSTEM_FONT.to_string(),
            font_size_px: 16,
            line_height: 1.5,
            letter_spacing_em: 0.0,
            word_spacing_em: 0.0,
            background: "#ffffff".to_string(),
            foreground: "#111827".to_string(),
            padding_px: 16,
            max_width_ch: 80,
        }
    }

    /// Renders the record as an inline CSS declaration list.
    pub fn to_inline_css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}px; line-height: {}; \
             letter-spacing: {}em; word-spacing: {}em; \
             background-color: {}; color: {}; padding: {}px; max-width: {}ch;",
            self.font_family,
            self.font_size_px,
            self.line_height,
            self.letter_spacing_em,
            self.word_spacing_em,
            self.background,
            self.foreground,
            self.padding_px,
            self.max_width_ch,
        )
    }
}

/// Resolves a profile to its style record.
pub fn resolve_style(profile: &ConditionProfile) -> StyleRecord {
    match profile.kind {
        ConditionKind::None => StyleRecord::neutral(),
        ConditionKind::Dyslexia => dyslexia_style(profile.dyslexia_severity),
        ConditionKind::Adhd => adhd_style(profile.adhd_variant),
        ConditionKind::Vision => vision_style(profile.vision_level),
    }
}

fn dyslexia_style(severity: DyslexiaSeverity) -> StyleRecord {
    let base = StyleRecord {
        font_family: DYSLEXIA_FONT.to_string(),
        font_size_px: 18,
        foreground: "#1f2937".to_string(),
        ..StyleRecord::neutral()
    };
    match severity {
        DyslexiaSeverity::Mild => StyleRecord {
            line_height: 2.2,
            letter_spacing_em: 0.15,
            word_spacing_em: 0.2,
            background: "#fffbeb".to_string(),
            padding_px: 20,
            max_width_ch: 70,
            ..base
        },
        DyslexiaSeverity::Severe => StyleRecord {
            line_height: 2.8,
            letter_spacing_em: 0.2,
            word_spacing_em: 0.3,
            background: "#fefce8".to_string(),
            padding_px: 25,
            max_width_ch: 60,
            ..base
        },
    }
}

fn adhd_style(variant: AdhdVariant) -> StyleRecord {
    // Chunked variants get extra line height to slow the eye down.
    let line_height = if variant.chunks_sentences() { 2.2 } else { 1.8 };
    StyleRecord {
        font_family: SYSTEM_FONT.to_string(),
        font_size_px: 18,
        line_height,
        letter_spacing_em: 0.05,
        word_spacing_em: 0.0,
        background: "#f0f4ff".to_string(),
        foreground: "#1e293b".to_string(),
        padding_px: 25,
        max_width_ch: 70,
    }
}

fn vision_style(level: VisionLevel) -> StyleRecord {
    let base = StyleRecord {
        font_family: SYSTEM_FONT.to_string(),
        foreground: "#000000".to_string(),
        ..StyleRecord::neutral()
    };
    match level {
        VisionLevel::Normal => StyleRecord::neutral(),
        VisionLevel::Mild => StyleRecord {
            font_size_px: 22,
            line_height: 1.8,
            letter_spacing_em: 0.05,
            padding_px: 20,
            max_width_ch: 70,
            ..base
        },
        VisionLevel::Moderate => StyleRecord {
            font_size_px: 26,
            line_height: 2.0,
            letter_spacing_em: 0.08,
            background: "#fffbeb".to_string(),
            padding_px: 20,
            max_width_ch: 65,
            ..base
        },
        // High contrast: black on light yellow at the largest size.
        VisionLevel::Severe => StyleRecord {
            font_size_px: MAX_FONT_SIZE_PX,
            line_height: 2.2,
            letter_spacing_em: 0.1,
            background: "#fef3c7".to_string(),
            padding_px: 25,
            max_width_ch: 60,
            ..base
        },
    }
}
