//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use vqa_runtime::{InputFormat, RuntimeInputs, sample_inputs};

/// Load runtime inputs from a YAML or JSON file, or fall back to the built-in sample.
pub fn resolve_inputs(path: Option<&str>) -> Result<RuntimeInputs> {
    let Some(path) = path else {
        info!("no input file given, using the built-in sample");
        return Ok(sample_inputs());
    };

    let path_obj = Path::new(path);
    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    vqa_runtime::load_inputs(path_obj).with_context(|| format!("Failed to load inputs: {path}"))
}

/// Parse an output format name.
pub fn parse_format(name: &str) -> Result<InputFormat> {
    InputFormat::from_name(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown format: '{name}'. Available: yaml, json"))
}

/// Render a nanosecond count with thousands separators.
pub fn group_digits(ns: i64) -> String {
    let digits = ns.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if ns < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
