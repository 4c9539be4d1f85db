//! Text-to-speech service client.
//!
//! Only the remote synthesis request lives here; playback and any local
//! platform speech fallback belong to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::services::shared::{ServiceConfig, ServiceResult, post_json};

/// Request body for `/tts/speak`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
}

/// Response body from `/tts/speak`: a reference to the synthesized audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsResponse {
    pub audio_url: String,
}

/// TTS service client.
#[derive(Debug, Clone)]
pub struct TtsClient {
    config: ServiceConfig,
    http: reqwest::Client,
}

impl TtsClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Requests synthesis of `request.text`.
    ///
    /// # Errors
    /// Returns a [`ServiceError`](crate::services::ServiceError) on any
    /// transport, status, or decoding failure.
    pub async fn speak(&self, request: &TtsRequest) -> ServiceResult<TtsResponse> {
        post_json(&self.http, &self.config, "/tts/speak", request).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::shared::ServiceErrorKind;

    fn test_config(base_url: String) -> ServiceConfig {
        ServiceConfig {
            base_url,
            timeout: Some(std::time::Duration::from_secs(2)),
        }
    }

    /// A successful call returns the audio reference.
    #[tokio::test]
    async fn test_speak_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tts/speak"))
            .and(body_partial_json(serde_json::json!({"voice": "nova", "speed": 1.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audio_url": "https://cdn.example.com/audio/42.mp3"
            })))
            .mount(&server)
            .await;

        let client = TtsClient::new(test_config(server.uri()));
        let response = client
            .speak(&TtsRequest {
                text: "Read this aloud.".to_string(),
                voice: "nova".to_string(),
                speed: 1.5,
            })
            .await
            .unwrap();
        assert_eq!(response.audio_url, "https://cdn.example.com/audio/42.mp3");
    }

    /// Status failures surface as HttpStatus errors.
    #[tokio::test]
    async fn test_speak_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tts/speak"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = TtsClient::new(test_config(server.uri()));
        let err = client
            .speak(&TtsRequest {
                text: "x".to_string(),
                voice: "default".to_string(),
                speed: 1.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ServiceErrorKind::HttpStatus);
    }
}
