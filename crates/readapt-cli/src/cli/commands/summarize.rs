//! Summarize command handler.

use std::path::Path;

use anyhow::{Context, Result};
use readapt_core::config::Config;
use readapt_core::services::{ServiceConfig, SummaryClient, SummaryRequest, SummaryType};

pub async fn run(
    text: Option<&str>,
    file: Option<&Path>,
    summary_type: &str,
    max_length: u32,
    config: &Config,
) -> Result<()> {
    let text = super::read_input(text, file)?;
    let summary_type = SummaryType::from_id(summary_type).unwrap_or_default();

    let service = ServiceConfig::from_config(config)?;
    let client = SummaryClient::new(service);
    let response = client
        .generate(&SummaryRequest {
            text,
            summary_type,
            max_length,
        })
        .await
        .context("generate summary")?;

    println!("{}", response.summary);
    Ok(())
}
