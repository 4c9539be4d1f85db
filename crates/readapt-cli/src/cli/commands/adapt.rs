//! Adapt command handler.

use std::path::PathBuf;

use anyhow::Result;
use readapt_core::adapt::{
    AdaptedBody, AdaptedOutput, Notice, adapt, adapt_classified, render_chunk,
};
use readapt_core::assessment::AssessmentResults;
use readapt_core::config::Config;
use readapt_core::profile::{
    AdhdVariant, ConditionKind, ConditionProfile, DyslexiaSeverity, VisionLevel,
};
use readapt_core::services::{
    AdaptPreferences, AdaptTextRequest, AdaptationClient, ServiceConfig,
};

pub struct AdaptOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub condition: String,
    pub severity: String,
    pub adhd_type: String,
    pub vision_level: String,
    pub assessment: Option<PathBuf>,
    pub remote: bool,
    pub json: bool,
}

pub async fn run(options: AdaptOptions, config: &Config) -> Result<()> {
    let text = super::read_input(options.text.as_deref(), options.file.as_deref())?;

    let resolution = resolve_profile(&options);
    let mut output = match &resolution {
        ProfileResolution::Known { profile, .. } => adapt(&text, profile),
        ProfileResolution::Failed(message) => adapt_classified(&text, Err(message.as_str())),
    };

    if options.remote
        && let ProfileResolution::Known {
            profile,
            multiple_conditions,
        } = &resolution
    {
        match remote_adapt(&text, profile, &output, *multiple_conditions, config).await {
            Ok(adapted_text) => {
                output.body = AdaptedBody::Markup { text: adapted_text };
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote adaptation failed, using local rendering");
                output.notice = Some(Notice::upstream_unavailable(format!(
                    "remote adaptation unavailable: {err}"
                )));
            }
        }
    }

    render(&output, options.json)
}

enum ProfileResolution {
    Known {
        profile: ConditionProfile,
        multiple_conditions: bool,
    },
    /// The assessment store could not be read; adaptation degrades.
    Failed(String),
}

/// Resolves the profile from the assessment store or from the flags.
///
/// Unrecognized flag values neutralize to their defaults rather than
/// failing: a bad profile must never prevent reading.
fn resolve_profile(options: &AdaptOptions) -> ProfileResolution {
    if let Some(path) = &options.assessment {
        return match AssessmentResults::load_from(path) {
            Ok(results) => ProfileResolution::Known {
                profile: ConditionProfile::from_assessment(&results),
                multiple_conditions: results.multiple_conditions(),
            },
            Err(err) => ProfileResolution::Failed(format!("{err:#}")),
        };
    }

    let kind = ConditionKind::from_id(&options.condition).unwrap_or_else(|| {
        tracing::warn!(condition = %options.condition, "unknown condition, using none");
        ConditionKind::None
    });
    let profile = match kind {
        ConditionKind::None => ConditionProfile::none(),
        ConditionKind::Dyslexia => ConditionProfile::dyslexia(
            DyslexiaSeverity::from_id(&options.severity).unwrap_or_default(),
        ),
        ConditionKind::Adhd => {
            ConditionProfile::adhd(AdhdVariant::from_id(&options.adhd_type).unwrap_or_default())
        }
        ConditionKind::Vision => ConditionProfile::vision(
            VisionLevel::from_id(&options.vision_level).unwrap_or_default(),
        ),
    };
    ProfileResolution::Known {
        profile,
        multiple_conditions: false,
    }
}

async fn remote_adapt(
    text: &str,
    profile: &ConditionProfile,
    output: &AdaptedOutput,
    multiple_conditions: bool,
    config: &Config,
) -> Result<String> {
    let service = ServiceConfig::from_config(config)?;
    let client = AdaptationClient::new(service);
    let request = AdaptTextRequest {
        text: text.to_string(),
        preferences: AdaptPreferences::from_profile(profile, &output.style, multiple_conditions),
    };
    let response = client.adapt_text(&request).await?;
    Ok(response.adapted_text)
}

fn render(output: &AdaptedOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }

    if let Some(notice) = &output.notice {
        eprintln!("note: {}", notice.message);
    }

    match &output.body {
        AdaptedBody::Plain { text } | AdaptedBody::Markup { text } => println!("{text}"),
        AdaptedBody::Paged { pager, highlight } => {
            for (i, chunk) in pager.chunks().iter().enumerate() {
                println!("-- page {}/{} --", i + 1, pager.len());
                println!("{}", render_chunk(chunk, *highlight));
            }
        }
    }
    Ok(())
}
