//! Runtime estimator: closed-form wall-clock time of a VQA execution.
//!
//! ```text
//! quantum = Σ_s (swap[s] + max(gate[s])) + stages * (measurement + qec_detection + qec_repair)
//! hybrid  = (quantum + classical) * samples_per_iteration * iteration_count
//! total   = compiler + hybrid + final_analysis
//! ```
//!
//! Every addition and multiplication is checked. A term that does not fit
//! in `i64` nanoseconds (about 292 years) is reported as
//! [`EstimateError::Overflow`] instead of wrapping.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EstimateError, EstimateResult};
use crate::inputs::{Nanos, RuntimeInputs};
use crate::stage::StageEstimate;

/// Breakdown of an estimated VQA runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Per-stage costs, in stage order.
    pub stages: Vec<StageEstimate>,
    /// Measurement plus QEC overhead of one stage.
    pub per_stage_overhead_ns: Nanos,
    /// Time of one circuit execution.
    pub quantum_ns: Nanos,
    /// `samples_per_iteration * iteration_count`.
    pub total_shots: u128,
    /// Time spent in the hybrid quantum-classical loop.
    pub hybrid_ns: Nanos,
    /// Compiler overhead.
    pub compiler_ns: Nanos,
    /// Final analysis overhead.
    pub final_analysis_ns: Nanos,
    /// Total estimated wall-clock time.
    pub total_ns: Nanos,
}

/// Stateless estimator over [`RuntimeInputs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeEstimator;

impl RuntimeEstimator {
    /// Create a new estimator.
    pub fn new() -> Self {
        Self
    }

    /// Estimate the total runtime and return the full breakdown.
    ///
    /// Stages are evaluated in order; the first stage without gate timings
    /// aborts the estimate.
    pub fn estimate(&self, inputs: &RuntimeInputs) -> EstimateResult<Estimate> {
        inputs.validate()?;

        let mut stages = Vec::with_capacity(inputs.stage_count);
        let mut circuit_ns: Nanos = 0;
        for (index, (&swap_ns, gate_row)) in inputs
            .qubit_swap_time_ns
            .iter()
            .zip(&inputs.gate_time_ns)
            .enumerate()
        {
            let stage = StageEstimate::compute(index, swap_ns, gate_row)?;
            debug!(
                stage = index,
                swap_ns = stage.swap_ns,
                max_gate_ns = stage.max_gate_ns,
                "stage estimated"
            );
            circuit_ns = checked_add(circuit_ns, stage.subtotal_ns, "circuit stages")?;
            stages.push(stage);
        }

        let per_stage_overhead_ns = checked_add(
            checked_add(
                inputs.measurement_time_ns,
                inputs.qec_detection_time_ns,
                "per-stage overhead",
            )?,
            inputs.qec_repair_time_ns,
            "per-stage overhead",
        )?;
        let stage_count = Nanos::try_from(inputs.stage_count)
            .map_err(|_| EstimateError::Overflow("stage count"))?;
        let overhead_ns = checked_mul(stage_count, per_stage_overhead_ns, "stage overhead")?;
        let quantum_ns = checked_add(circuit_ns, overhead_ns, "quantum time")?;

        let total_shots =
            u128::from(inputs.samples_per_iteration) * u128::from(inputs.iteration_count);
        let iteration_ns = checked_add(quantum_ns, inputs.classical_time_ns, "hybrid iteration")?;
        // Widened so a zero factor yields zero however large the others are.
        let hybrid_ns = i128::from(iteration_ns)
            .checked_mul(i128::from(inputs.samples_per_iteration))
            .and_then(|ns| ns.checked_mul(i128::from(inputs.iteration_count)))
            .and_then(|ns| Nanos::try_from(ns).ok())
            .ok_or(EstimateError::Overflow("hybrid loop"))?;

        let total_ns = checked_add(
            checked_add(inputs.compiler_time_ns, hybrid_ns, "total")?,
            inputs.final_analysis_time_ns,
            "total",
        )?;

        info!(
            stages = inputs.stage_count,
            quantum_ns, hybrid_ns, total_ns, "VQA runtime estimated"
        );

        Ok(Estimate {
            stages,
            per_stage_overhead_ns,
            quantum_ns,
            total_shots,
            hybrid_ns,
            compiler_ns: inputs.compiler_time_ns,
            final_analysis_ns: inputs.final_analysis_time_ns,
            total_ns,
        })
    }

    /// Estimate the total runtime in nanoseconds.
    pub fn total(&self, inputs: &RuntimeInputs) -> EstimateResult<Nanos> {
        self.estimate(inputs).map(|e| e.total_ns)
    }
}

fn checked_add(a: Nanos, b: Nanos, term: &'static str) -> EstimateResult<Nanos> {
    a.checked_add(b).ok_or(EstimateError::Overflow(term))
}

fn checked_mul(a: Nanos, b: Nanos, term: &'static str) -> EstimateResult<Nanos> {
    a.checked_mul(b).ok_or(EstimateError::Overflow(term))
}
