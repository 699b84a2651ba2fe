//! Sample command implementation.
//!
//! `vqa-estimate sample [--stages N] [--gates N] [--format yaml|json] [--output <file>]`

use anyhow::Context;
use console::style;
use std::path::Path;

use vqa_runtime::SampleShape;
use vqa_runtime::export::inputs_to_string;

use super::common::parse_format;

/// Execute the sample command.
pub fn execute(
    stages: usize,
    gates: usize,
    format: &str,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let format = parse_format(format)?;
    let inputs = SampleShape {
        stages,
        gates_per_stage: gates,
    }
    .build();
    let text = inputs_to_string(&inputs, format)?;

    if let Some(path) = output {
        std::fs::write(Path::new(path), text)
            .with_context(|| format!("Failed to write sample inputs: {path}"))?;
        eprintln!("{} Sample inputs written to {}", style("OK").green().bold(), path);
    } else {
        println!("{text}");
    }

    Ok(())
}
