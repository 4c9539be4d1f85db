//! Assessment result store.
//!
//! Assessment outcomes are persisted by the assessment flow as a single
//! JSON document. This module only ever reads that document; resolving it
//! to a [`ConditionProfile`] is lenient so a stale or hand-edited store can
//! never block reading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::profile::{
    AdhdVariant, ConditionProfile, DyslexiaSeverity, VisionLevel,
};

/// Stored dyslexia assessment outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DyslexiaResult {
    /// Severity tier as reported by the classifier ("mild" or "severe").
    pub severity: String,
    /// Classifier confidence score in `[0, 1]`.
    pub score: f64,
}

/// Stored ADHD assessment outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdhdResult {
    /// Presentation variant ("inattentive", "hyperactive", "combined", "normal").
    #[serde(rename = "type")]
    pub variant: String,
    /// Classifier confidence score in `[0, 1]`.
    pub score: f64,
}

/// Stored vision assessment outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionResult {
    /// Impairment level ("normal", "mild", "moderate", "severe").
    pub level: String,
    /// Estimated corrective power in diopters, when measured.
    pub power: Option<f64>,
}

/// The assessment store document.
///
/// Every section is optional: a user may have completed any subset of the
/// assessments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentResults {
    pub dyslexia: Option<DyslexiaResult>,
    pub adhd: Option<AdhdResult>,
    pub vision: Option<VisionResult>,
}

impl AssessmentResults {
    /// Loads stored results from `path`.
    ///
    /// A missing file is not an error: it means no assessment has been
    /// taken yet, and resolves to the neutral profile.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read assessment results from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse assessment results from {}", path.display()))
    }

    /// Number of conditions present in the store.
    pub fn condition_count(&self) -> usize {
        usize::from(self.dyslexia.is_some())
            + usize::from(self.adhd.is_some())
            + usize::from(self.vision.is_some())
    }

    /// Whether more than one condition was assessed.
    pub fn multiple_conditions(&self) -> bool {
        self.condition_count() > 1
    }
}

impl ConditionProfile {
    /// Resolves stored assessment results to the active profile.
    ///
    /// Conditions are tried in fixed precedence order (dyslexia, then ADHD,
    /// then vision). A section whose severity/variant/level string is not
    /// recognized is skipped rather than rejected, so the worst case is the
    /// neutral profile.
    pub fn from_assessment(results: &AssessmentResults) -> Self {
        if let Some(dyslexia) = &results.dyslexia
            && let Some(severity) = DyslexiaSeverity::from_id(&dyslexia.severity)
        {
            return ConditionProfile::dyslexia(severity);
        }
        if let Some(adhd) = &results.adhd
            && let Some(variant) = AdhdVariant::from_id(&adhd.variant)
        {
            return ConditionProfile::adhd(variant);
        }
        if let Some(vision) = &results.vision
            && let Some(level) = VisionLevel::from_id(&vision.level)
        {
            return ConditionProfile::vision(level);
        }
        ConditionProfile::none()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::profile::ConditionKind;

    /// Missing store file resolves to the neutral profile.
    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assessment.json");

        let results = AssessmentResults::load_from(&path).unwrap();
        assert_eq!(results.condition_count(), 0);
        assert_eq!(
            ConditionProfile::from_assessment(&results),
            ConditionProfile::none()
        );
    }

    /// A stored dyslexia result resolves to a dyslexia profile.
    #[test]
    fn test_load_dyslexia_result() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assessment.json");
        fs::write(
            &path,
            r#"{"dyslexia": {"severity": "severe", "score": 0.91}}"#,
        )
        .unwrap();

        let results = AssessmentResults::load_from(&path).unwrap();
        let profile = ConditionProfile::from_assessment(&results);
        assert_eq!(profile.kind, ConditionKind::Dyslexia);
        assert_eq!(profile.dyslexia_severity, DyslexiaSeverity::Severe);
    }

    /// Dyslexia wins over other stored conditions.
    #[test]
    fn test_resolution_precedence() {
        let results: AssessmentResults = serde_json::from_str(
            r#"{
                "dyslexia": {"severity": "mild", "score": 0.6},
                "adhd": {"type": "combined", "score": 0.8},
                "vision": {"level": "moderate", "power": 1.5}
            }"#,
        )
        .unwrap();

        assert!(results.multiple_conditions());
        let profile = ConditionProfile::from_assessment(&results);
        assert_eq!(profile.kind, ConditionKind::Dyslexia);
    }

    /// An unrecognized severity falls through to the next condition.
    #[test]
    fn test_unknown_severity_falls_through() {
        let results: AssessmentResults = serde_json::from_str(
            r#"{
                "dyslexia": {"severity": "catastrophic", "score": 1.0},
                "adhd": {"type": "inattentive", "score": 0.7}
            }"#,
        )
        .unwrap();

        let profile = ConditionProfile::from_assessment(&results);
        assert_eq!(profile.kind, ConditionKind::Adhd);
        assert_eq!(profile.adhd_variant, AdhdVariant::Inattentive);
    }

    /// All sections unrecognized resolves to neutral, never an error.
    #[test]
    fn test_all_unknown_resolves_to_none() {
        let results: AssessmentResults = serde_json::from_str(
            r#"{"vision": {"level": "cloudy"}}"#,
        )
        .unwrap();

        assert_eq!(
            ConditionProfile::from_assessment(&results),
            ConditionProfile::none()
        );
    }

    /// Malformed JSON is a boundary error with file context.
    #[test]
    fn test_malformed_store_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assessment.json");
        fs::write(&path, "{not json").unwrap();

        let err = AssessmentResults::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("assessment.json"));
    }
}
