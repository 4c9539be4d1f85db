//! Command handlers.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub mod adapt;
pub mod config;
pub mod profile;
pub mod speak;
pub mod suggest;
pub mod summarize;

/// Reads the input text from a flag, a file, or stdin.
pub(crate) fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(file) = file {
        return fs::read_to_string(file)
            .with_context(|| format!("read input from {}", file.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("read input from stdin")?;
    Ok(buffer)
}
