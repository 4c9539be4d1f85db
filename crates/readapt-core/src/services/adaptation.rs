//! Remote text-adaptation service client.
//!
//! The backend runs the heavier prediction models and returns fully adapted
//! text. Callers treat any failure as a signal to fall back to the local
//! engine; this client never decides that policy itself.

use serde::{Deserialize, Serialize};

use crate::adapt::style::StyleRecord;
use crate::profile::{ConditionKind, ConditionProfile};
use crate::services::shared::{ServiceConfig, ServiceResult, post_json};

/// Reader preferences attached to an adaptation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptPreferences {
    pub dyslexia_severity: String,
    pub adhd_type: String,
    pub vision_level: String,
    pub font_size: u32,
    pub line_spacing: f32,
    pub letter_spacing: f32,
    pub color_scheme: String,
    pub multiple_conditions: bool,
}

impl AdaptPreferences {
    /// Builds the request preferences from a profile and its resolved style.
    ///
    /// Conditions other than the active one report "normal" so the backend
    /// applies a single adaptation; `multiple_conditions` tells it whether
    /// the underlying assessment found more than one.
    pub fn from_profile(
        profile: &ConditionProfile,
        style: &StyleRecord,
        multiple_conditions: bool,
    ) -> Self {
        Self {
            dyslexia_severity: match profile.kind {
                ConditionKind::Dyslexia => profile.dyslexia_severity.id().to_string(),
                _ => "normal".to_string(),
            },
            adhd_type: match profile.kind {
                ConditionKind::Adhd => profile.adhd_variant.id().to_string(),
                _ => "normal".to_string(),
            },
            vision_level: match profile.kind {
                ConditionKind::Vision => profile.vision_level.id().to_string(),
                _ => "normal".to_string(),
            },
            font_size: style.font_size_px,
            line_spacing: style.line_height,
            letter_spacing: style.letter_spacing_em,
            color_scheme: color_scheme_for(profile),
            multiple_conditions,
        }
    }
}

/// Color scheme name the backend understands, per condition.
fn color_scheme_for(profile: &ConditionProfile) -> String {
    match profile.kind {
        ConditionKind::Dyslexia => "cream",
        ConditionKind::Adhd => "blue-tint",
        ConditionKind::Vision => "high-contrast",
        ConditionKind::None => "default",
    }
    .to_string()
}

/// Request body for `/adaptation/adapt-text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptTextRequest {
    pub text: String,
    pub preferences: AdaptPreferences,
}

/// Response body from `/adaptation/adapt-text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptTextResponse {
    pub adapted_text: String,
}

/// Adaptation service client.
#[derive(Debug, Clone)]
pub struct AdaptationClient {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl AdaptationClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Requests remotely adapted text.
    ///
    /// # Errors
    /// Returns a [`ServiceError`](crate::services::ServiceError) on any
    /// transport, status, or decoding failure.
    pub async fn adapt_text(&self, request: &AdaptTextRequest) -> ServiceResult<AdaptTextResponse> {
        post_json(&self.http, &self.config, "/adaptation/adapt-text", request).await
    }
}
