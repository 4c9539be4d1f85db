//! Summary service client.

use serde::{Deserialize, Serialize};

use crate::services::shared::{ServiceConfig, ServiceError, ServiceResult, post_json};

/// Summary flavor requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Short, focus-friendly TL;DR summaries.
    Adhd,
    #[default]
    General,
}

impl SummaryType {
    pub fn id(&self) -> &'static str {
        match self {
            SummaryType::Adhd => "adhd",
            SummaryType::General => "general",
        }
    }

    pub fn from_id(id: &str) -> Option<SummaryType> {
        match id.to_lowercase().as_str() {
            "adhd" => Some(SummaryType::Adhd),
            "general" => Some(SummaryType::General),
            _ => None,
        }
    }
}

/// Request body for `/summary/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    pub summary_type: SummaryType,
    pub max_length: u32,
}

/// Response body from `/summary/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: String,
}

/// Summary service client.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl SummaryClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Requests a summary, surfacing backend-reported failure as an error.
    ///
    /// # Errors
    /// Returns a [`ServiceError`] on transport/status/decoding failure, or
    /// an `Api`-kind error when the backend reports `success: false`.
    pub async fn generate(&self, request: &SummaryRequest) -> ServiceResult<SummaryResponse> {
        let response: SummaryResponse =
            post_json(&self.http, &self.config, "/summary/generate", request).await?;
        if !response.success {
            return Err(ServiceError::api("summary generation failed"));
        }
        Ok(response)
    }
}
