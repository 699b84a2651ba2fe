//! Runtime inputs: the timing parameters of a single VQA execution.
//!
//! All durations are nanoseconds stored as `i64`. The aggregate carries its
//! stage and gate counts explicitly so that files written by hand can be
//! checked against the tables they describe.

use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};

/// Duration in nanoseconds.
pub type Nanos = i64;

/// Timing parameters of a VQA run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInputs {
    /// One-time compilation and optimization overhead.
    pub compiler_time_ns: Nanos,
    /// Number of quantum circuit stages.
    pub stage_count: usize,
    /// Number of gates evaluated per stage.
    pub max_gates_per_stage: usize,
    /// Qubit swap overhead, one entry per stage.
    pub qubit_swap_time_ns: Vec<Nanos>,
    /// Gate execution times, one row per stage.
    pub gate_time_ns: Vec<Vec<Nanos>>,
    /// Measurement overhead paid once per stage.
    pub measurement_time_ns: Nanos,
    /// QEC error detection overhead paid once per stage.
    pub qec_detection_time_ns: Nanos,
    /// QEC repair overhead paid once per stage.
    pub qec_repair_time_ns: Nanos,
    /// Classical post-processing per hybrid iteration.
    pub classical_time_ns: Nanos,
    /// Shots per optimization iteration.
    pub samples_per_iteration: u64,
    /// Number of optimization iterations.
    pub iteration_count: u64,
    /// One-time final data analysis overhead.
    pub final_analysis_time_ns: Nanos,
}

impl RuntimeInputs {
    /// Create inputs from per-stage tables, deriving the stage and gate counts.
    ///
    /// `max_gates_per_stage` is taken from the first row (zero when there are
    /// no stages). All scalar overheads start at zero; use the `with_*`
    /// methods to set them.
    pub fn from_stages(qubit_swap_time_ns: Vec<Nanos>, gate_time_ns: Vec<Vec<Nanos>>) -> Self {
        let max_gates_per_stage = gate_time_ns.first().map_or(0, Vec::len);
        Self {
            compiler_time_ns: 0,
            stage_count: gate_time_ns.len(),
            max_gates_per_stage,
            qubit_swap_time_ns,
            gate_time_ns,
            measurement_time_ns: 0,
            qec_detection_time_ns: 0,
            qec_repair_time_ns: 0,
            classical_time_ns: 0,
            samples_per_iteration: 0,
            iteration_count: 0,
            final_analysis_time_ns: 0,
        }
    }

    /// Set the compiler overhead.
    pub fn with_compiler_time(mut self, ns: Nanos) -> Self {
        self.compiler_time_ns = ns;
        self
    }

    /// Set the per-stage measurement and QEC overheads.
    pub fn with_stage_overheads(
        mut self,
        measurement: Nanos,
        detection: Nanos,
        repair: Nanos,
    ) -> Self {
        self.measurement_time_ns = measurement;
        self.qec_detection_time_ns = detection;
        self.qec_repair_time_ns = repair;
        self
    }

    /// Set the hybrid loop parameters.
    pub fn with_hybrid_loop(mut self, classical: Nanos, samples: u64, iterations: u64) -> Self {
        self.classical_time_ns = classical;
        self.samples_per_iteration = samples;
        self.iteration_count = iterations;
        self
    }

    /// Set the final analysis overhead.
    pub fn with_final_analysis_time(mut self, ns: Nanos) -> Self {
        self.final_analysis_time_ns = ns;
        self
    }

    /// Scalar duration fields paired with their names.
    pub fn scalar_durations(&self) -> [(&'static str, Nanos); 6] {
        [
            ("compiler_time_ns", self.compiler_time_ns),
            ("measurement_time_ns", self.measurement_time_ns),
            ("qec_detection_time_ns", self.qec_detection_time_ns),
            ("qec_repair_time_ns", self.qec_repair_time_ns),
            ("classical_time_ns", self.classical_time_ns),
            ("final_analysis_time_ns", self.final_analysis_time_ns),
        ]
    }

    /// Check the table shapes and that no duration is negative.
    ///
    /// A gate count of zero is accepted here; the estimator rejects the
    /// resulting empty rows when it reaches the first stage.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.qubit_swap_time_ns.len() != self.stage_count {
            return Err(EstimateError::InvalidInput(format!(
                "qubit_swap_time_ns has {} entries, expected {} (stage_count)",
                self.qubit_swap_time_ns.len(),
                self.stage_count
            )));
        }
        if self.gate_time_ns.len() != self.stage_count {
            return Err(EstimateError::InvalidInput(format!(
                "gate_time_ns has {} rows, expected {} (stage_count)",
                self.gate_time_ns.len(),
                self.stage_count
            )));
        }

        for (stage, row) in self.gate_time_ns.iter().enumerate() {
            if row.len() != self.max_gates_per_stage {
                return Err(EstimateError::InvalidInput(format!(
                    "gate_time_ns[{stage}] has {} entries, expected {} (max_gates_per_stage)",
                    row.len(),
                    self.max_gates_per_stage
                )));
            }
            if let Some(gate) = row.iter().position(|&t| t < 0) {
                return Err(EstimateError::InvalidInput(format!(
                    "gate_time_ns[{stage}][{gate}] is negative ({} ns)",
                    row[gate]
                )));
            }
        }

        if let Some(stage) = self.qubit_swap_time_ns.iter().position(|&t| t < 0) {
            return Err(EstimateError::InvalidInput(format!(
                "qubit_swap_time_ns[{stage}] is negative ({} ns)",
                self.qubit_swap_time_ns[stage]
            )));
        }

        for (name, value) in self.scalar_durations() {
            if value < 0 {
                return Err(EstimateError::InvalidInput(format!(
                    "{name} is negative ({value} ns)"
                )));
            }
        }

        Ok(())
    }
}
