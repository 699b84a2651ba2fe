//! Deterministic synthetic inputs.
//!
//! Stage `i` swaps in `(i+1) * 100` ns and its gate `j` runs in
//! `(i+1) * 10000 + (j+1) * 1000` ns. Scalar overheads are fixed small
//! values so the result is easy to check by hand.

use crate::inputs::{Nanos, RuntimeInputs};

/// Dimensions of a synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleShape {
    /// Number of circuit stages.
    pub stages: usize,
    /// Gates per stage.
    pub gates_per_stage: usize,
}

impl Default for SampleShape {
    fn default() -> Self {
        Self {
            stages: 2,
            gates_per_stage: 3,
        }
    }
}

impl SampleShape {
    /// Build the synthetic inputs for this shape.
    pub fn build(&self) -> RuntimeInputs {
        let qubit_swap_time_ns: Vec<Nanos> =
            (0..self.stages).map(|i| (i as Nanos + 1) * 100).collect();
        let gate_time_ns: Vec<Vec<Nanos>> = (0..self.stages)
            .map(|i| {
                (0..self.gates_per_stage)
                    .map(|j| (i as Nanos + 1) * 10_000 + (j as Nanos + 1) * 1_000)
                    .collect()
            })
            .collect();

        let mut inputs = RuntimeInputs::from_stages(qubit_swap_time_ns, gate_time_ns)
            .with_compiler_time(1)
            .with_stage_overheads(4, 5, 6)
            .with_hybrid_loop(7, 8, 9)
            .with_final_analysis_time(10);
        inputs.max_gates_per_stage = self.gates_per_stage;
        inputs
    }
}

/// The default two-stage, three-gate sample.
pub fn sample_inputs() -> RuntimeInputs {
    SampleShape::default().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_tables() {
        let inputs = sample_inputs();
        assert_eq!(inputs.stage_count, 2);
        assert_eq!(inputs.max_gates_per_stage, 3);
        assert_eq!(inputs.qubit_swap_time_ns, vec![100, 200]);
        assert_eq!(
            inputs.gate_time_ns,
            vec![vec![11_000, 12_000, 13_000], vec![21_000, 22_000, 23_000]]
        );
        assert_eq!(inputs.measurement_time_ns, 4);
        assert_eq!(inputs.iteration_count, 9);
    }

    #[test]
    fn test_custom_shape_is_valid() {
        let inputs = SampleShape {
            stages: 5,
            gates_per_stage: 7,
        }
        .build();
        assert_eq!(inputs.gate_time_ns.len(), 5);
        assert_eq!(inputs.gate_time_ns[4][6], 57_000);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_gateless_shape_keeps_stage_count() {
        let inputs = SampleShape {
            stages: 2,
            gates_per_stage: 0,
        }
        .build();
        assert_eq!(inputs.stage_count, 2);
        assert_eq!(inputs.max_gates_per_stage, 0);
        assert!(inputs.validate().is_ok());
    }
}
