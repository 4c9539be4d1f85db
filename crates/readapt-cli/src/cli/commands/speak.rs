//! Speak command handler.

use std::path::Path;

use anyhow::{Context, Result};
use readapt_core::config::Config;
use readapt_core::services::{ServiceConfig, TtsClient, TtsRequest};

pub async fn run(
    text: Option<&str>,
    file: Option<&Path>,
    voice: Option<String>,
    speed: Option<f32>,
    config: &Config,
) -> Result<()> {
    let text = super::read_input(text, file)?;

    let service = ServiceConfig::from_config(config)?;
    let client = TtsClient::new(service);
    let response = client
        .speak(&TtsRequest {
            text,
            voice: voice.unwrap_or_else(|| config.tts.voice.clone()),
            speed: speed.unwrap_or(config.tts.speed),
        })
        .await
        .context("synthesize speech")?;

    println!("{}", response.audio_url);
    Ok(())
}
