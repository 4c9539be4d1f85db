//! Condition profiles.
//!
//! A [`ConditionProfile`] describes the accessibility condition the engine
//! adapts text for. Profiles come from stored assessment results or from
//! explicit user selection; the engine only ever reads them.

use serde::{Deserialize, Serialize};

/// Accessibility condition driving text adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// No adaptation; text passes through with the neutral style.
    #[default]
    None,
    Dyslexia,
    Adhd,
    Vision,
}

impl ConditionKind {
    /// Returns all condition kinds.
    pub fn all() -> &'static [ConditionKind] {
        &[
            ConditionKind::None,
            ConditionKind::Dyslexia,
            ConditionKind::Adhd,
            ConditionKind::Vision,
        ]
    }

    /// Returns the string identifier used in config files and CLI flags.
    pub fn id(&self) -> &'static str {
        match self {
            ConditionKind::None => "none",
            ConditionKind::Dyslexia => "dyslexia",
            ConditionKind::Adhd => "adhd",
            ConditionKind::Vision => "vision",
        }
    }

    /// Returns the `ConditionKind` for a given id string.
    pub fn from_id(id: &str) -> Option<ConditionKind> {
        match id.to_lowercase().as_str() {
            "none" => Some(ConditionKind::None),
            "dyslexia" => Some(ConditionKind::Dyslexia),
            "adhd" => Some(ConditionKind::Adhd),
            "vision" | "low-vision" => Some(ConditionKind::Vision),
            _ => None,
        }
    }

    /// Returns the human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionKind::None => "No condition",
            ConditionKind::Dyslexia => "Dyslexia",
            ConditionKind::Adhd => "ADHD",
            ConditionKind::Vision => "Low vision",
        }
    }
}

/// Dyslexia severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DyslexiaSeverity {
    #[default]
    Mild,
    Severe,
}

impl DyslexiaSeverity {
    pub fn id(&self) -> &'static str {
        match self {
            DyslexiaSeverity::Mild => "mild",
            DyslexiaSeverity::Severe => "severe",
        }
    }

    pub fn from_id(id: &str) -> Option<DyslexiaSeverity> {
        match id.to_lowercase().as_str() {
            "mild" => Some(DyslexiaSeverity::Mild),
            "severe" => Some(DyslexiaSeverity::Severe),
            _ => None,
        }
    }
}

/// ADHD presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdhdVariant {
    /// Assessed but below adaptation thresholds.
    #[default]
    Normal,
    Inattentive,
    Hyperactive,
    Combined,
}

impl AdhdVariant {
    pub fn id(&self) -> &'static str {
        match self {
            AdhdVariant::Normal => "normal",
            AdhdVariant::Inattentive => "inattentive",
            AdhdVariant::Hyperactive => "hyperactive",
            AdhdVariant::Combined => "combined",
        }
    }

    pub fn from_id(id: &str) -> Option<AdhdVariant> {
        match id.to_lowercase().as_str() {
            "normal" => Some(AdhdVariant::Normal),
            "inattentive" => Some(AdhdVariant::Inattentive),
            "hyperactive" => Some(AdhdVariant::Hyperactive),
            "combined" => Some(AdhdVariant::Combined),
            _ => None,
        }
    }

    /// Whether this variant gets the every-third-word highlight.
    pub fn highlights_words(&self) -> bool {
        matches!(self, AdhdVariant::Inattentive | AdhdVariant::Combined)
    }

    /// Whether this variant gets sentence chunking with pagination.
    pub fn chunks_sentences(&self) -> bool {
        matches!(self, AdhdVariant::Hyperactive | AdhdVariant::Combined)
    }
}

/// Vision impairment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionLevel {
    #[default]
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl VisionLevel {
    pub fn id(&self) -> &'static str {
        match self {
            VisionLevel::Normal => "normal",
            VisionLevel::Mild => "mild",
            VisionLevel::Moderate => "moderate",
            VisionLevel::Severe => "severe",
        }
    }

    pub fn from_id(id: &str) -> Option<VisionLevel> {
        match id.to_lowercase().as_str() {
            "normal" => Some(VisionLevel::Normal),
            "mild" => Some(VisionLevel::Mild),
            "moderate" => Some(VisionLevel::Moderate),
            "severe" => Some(VisionLevel::Severe),
            _ => None,
        }
    }
}

/// The user's active condition with its severity or variant.
///
/// Only the detail matching `kind` is meaningful; the others keep their
/// defaults so a profile is always fully formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionProfile {
    pub kind: ConditionKind,
    pub dyslexia_severity: DyslexiaSeverity,
    pub adhd_variant: AdhdVariant,
    pub vision_level: VisionLevel,
}

impl ConditionProfile {
    /// The neutral profile: no adaptation at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn dyslexia(severity: DyslexiaSeverity) -> Self {
        Self {
            kind: ConditionKind::Dyslexia,
            dyslexia_severity: severity,
            ..Self::default()
        }
    }

    pub fn adhd(variant: AdhdVariant) -> Self {
        Self {
            kind: ConditionKind::Adhd,
            adhd_variant: variant,
            ..Self::default()
        }
    }

    pub fn vision(level: VisionLevel) -> Self {
        Self {
            kind: ConditionKind::Vision,
            vision_level: level,
            ..Self::default()
        }
    }

    /// One-line description for display, e.g. `dyslexia (severe)`.
    pub fn describe(&self) -> String {
        match self.kind {
            ConditionKind::None => "none".to_string(),
            ConditionKind::Dyslexia => format!("dyslexia ({})", self.dyslexia_severity.id()),
            ConditionKind::Adhd => format!("adhd ({})", self.adhd_variant.id()),
            ConditionKind::Vision => format!("vision ({})", self.vision_level.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unknown condition ids resolve to None rather than failing.
    #[test]
    fn test_condition_from_id_unknown() {
        assert_eq!(ConditionKind::from_id("dyslexia"), Some(ConditionKind::Dyslexia));
        assert_eq!(ConditionKind::from_id("ADHD"), Some(ConditionKind::Adhd));
        assert_eq!(ConditionKind::from_id("astigmatism"), None);
    }

    /// Default profile is the neutral passthrough.
    #[test]
    fn test_default_profile_is_none() {
        let profile = ConditionProfile::default();
        assert_eq!(profile.kind, ConditionKind::None);
        assert_eq!(profile, ConditionProfile::none());
    }

    /// ADHD variant capability flags match the adaptation matrix.
    #[test]
    fn test_adhd_variant_capabilities() {
        assert!(AdhdVariant::Inattentive.highlights_words());
        assert!(!AdhdVariant::Inattentive.chunks_sentences());
        assert!(!AdhdVariant::Hyperactive.highlights_words());
        assert!(AdhdVariant::Hyperactive.chunks_sentences());
        assert!(AdhdVariant::Combined.highlights_words());
        assert!(AdhdVariant::Combined.chunks_sentences());
        assert!(!AdhdVariant::Normal.highlights_words());
        assert!(!AdhdVariant::Normal.chunks_sentences());
    }

    /// Vision levels order by severity for monotonicity checks.
    #[test]
    fn test_vision_level_ordering() {
        assert!(VisionLevel::Normal < VisionLevel::Mild);
        assert!(VisionLevel::Mild < VisionLevel::Moderate);
        assert!(VisionLevel::Moderate < VisionLevel::Severe);
    }

    /// Profile serialization uses lowercase ids.
    #[test]
    fn test_profile_serializes_lowercase() {
        let profile = ConditionProfile::dyslexia(DyslexiaSeverity::Severe);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains(r#""kind":"dyslexia""#));
        assert!(json.contains(r#""dyslexia_severity":"severe""#));
    }
}
