//! Profile command handler.

use std::path::Path;

use anyhow::Result;
use readapt_core::adapt::resolve_style;
use readapt_core::assessment::AssessmentResults;
use readapt_core::config;
use readapt_core::profile::ConditionProfile;

pub fn run(assessment: Option<&Path>) -> Result<()> {
    let path = assessment
        .map(Path::to_path_buf)
        .unwrap_or_else(config::paths::assessment_path);

    let results = AssessmentResults::load_from(&path)?;
    let profile = ConditionProfile::from_assessment(&results);
    let style = resolve_style(&profile);

    println!("profile: {}", profile.describe());
    if results.multiple_conditions() {
        println!("note: multiple conditions assessed, adapting for the first by precedence");
    }
    println!("style:");
    println!("  font:           {} ({}px)", style.font_family, style.font_size_px);
    println!("  line height:    {}", style.line_height);
    println!("  letter spacing: {}em", style.letter_spacing_em);
    println!("  word spacing:   {}em", style.word_spacing_em);
    println!("  colors:         {} on {}", style.foreground, style.background);
    println!("  max width:      {}ch", style.max_width_ch);
    Ok(())
}
