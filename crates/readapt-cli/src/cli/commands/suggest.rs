//! Suggest command handler.

use anyhow::Result;
use readapt_core::profile::ConditionKind;
use readapt_core::suggestions::{ActivitySample, SuggestionEngine};

pub fn run(condition: &str, idle_secs: u64, scroll_ups: u32, reading_secs: u64) -> Result<()> {
    let condition = ConditionKind::from_id(condition).unwrap_or_else(|| {
        tracing::warn!(%condition, "unknown condition, using none");
        ConditionKind::None
    });
    let sample = ActivitySample {
        idle_secs,
        scroll_ups,
        reading_secs,
    };

    let mut engine = SuggestionEngine::default();
    let suggestions = engine.check(condition, &sample);
    if suggestions.is_empty() {
        println!("no suggestions");
        return Ok(());
    }
    for suggestion in suggestions {
        println!("[{}] {}", suggestion.action, suggestion.message);
    }
    Ok(())
}
