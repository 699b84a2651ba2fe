//! Estimate command implementation.
//!
//! `vqa-estimate estimate [--input <inputs.yaml>] [--breakdown] [--export <report.json>]`

use console::style;
use std::path::Path;

use vqa_runtime::{Estimate, EstimateReport, RuntimeEstimator};

use super::common::{group_digits, resolve_inputs};

/// Execute the estimate command.
pub fn execute(input: Option<&str>, breakdown: bool, export: Option<&str>) -> anyhow::Result<()> {
    println!("VQA runtime estimation");

    let inputs = match resolve_inputs(input) {
        Ok(inputs) => inputs,
        Err(e) => {
            println!("ERROR occurred. Exit.");
            return Err(e);
        }
    };

    let estimate = match RuntimeEstimator::new().estimate(&inputs) {
        Ok(estimate) => estimate,
        Err(e) => {
            println!("ERROR occurred. Exit.");
            return Err(e.into());
        }
    };

    println!(
        "Total estimated simulation time for the given VQA = {} ns",
        estimate.total_ns
    );

    if breakdown {
        print_breakdown(&estimate);
    }

    if let Some(path) = export {
        EstimateReport::new(inputs, estimate).to_file(Path::new(path))?;
        eprintln!("{} Report written to {}", style("OK").green().bold(), path);
    }

    Ok(())
}

fn print_breakdown(estimate: &Estimate) {
    println!();
    println!("{}", style("Breakdown").bold().underlined());
    for stage in &estimate.stages {
        println!(
            "  Stage {:<4} swap {:>12} ns + gate {:>12} ns = {:>14} ns",
            stage.index,
            group_digits(stage.swap_ns),
            group_digits(stage.max_gate_ns),
            group_digits(stage.subtotal_ns),
        );
    }
    println!(
        "  Overhead:   {} ns per stage (measurement + QEC)",
        group_digits(estimate.per_stage_overhead_ns)
    );
    println!("  Quantum:    {} ns", group_digits(estimate.quantum_ns));
    println!(
        "  Hybrid:     {} ns over {} shots",
        group_digits(estimate.hybrid_ns),
        estimate.total_shots
    );
    println!("  Compiler:   {} ns", group_digits(estimate.compiler_ns));
    println!("  Analysis:   {} ns", group_digits(estimate.final_analysis_ns));
    println!(
        "  Total:      {}",
        style(format!("{} ns", group_digits(estimate.total_ns))).cyan().bold()
    );
}
