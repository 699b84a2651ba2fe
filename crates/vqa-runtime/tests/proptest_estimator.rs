//! Property-based tests for the runtime estimator.
//!
//! Durations are kept small enough that no term can overflow, so every
//! generated input is expected to produce an estimate.

use proptest::prelude::*;
use vqa_runtime::{Nanos, RuntimeEstimator, RuntimeInputs, max_duration};

const MAX_NS: Nanos = 1_000_000;

/// Generate valid inputs with 0-6 stages and 1-6 gates per stage.
fn arb_inputs() -> impl Strategy<Value = RuntimeInputs> {
    (0_usize..=6, 1_usize..=6).prop_flat_map(|(stages, gates)| {
        (
            prop::collection::vec(0..MAX_NS, stages),
            prop::collection::vec(prop::collection::vec(0..MAX_NS, gates), stages),
            prop::array::uniform6(0..MAX_NS),
            0_u64..=100,
            0_u64..=100,
        )
            .prop_map(move |(swaps, gate_rows, scalars, samples, iterations)| {
                let mut inputs = RuntimeInputs::from_stages(swaps, gate_rows)
                    .with_compiler_time(scalars[0])
                    .with_stage_overheads(scalars[1], scalars[2], scalars[3])
                    .with_hybrid_loop(scalars[4], samples, iterations)
                    .with_final_analysis_time(scalars[5]);
                inputs.max_gates_per_stage = gates;
                inputs
            })
    })
}

/// Which single duration field to bump.
#[derive(Debug, Clone, Copy)]
enum Field {
    Compiler,
    Swap,
    Gate,
    Measurement,
    QecDetection,
    QecRepair,
    Classical,
    FinalAnalysis,
}

fn arb_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Compiler),
        Just(Field::Swap),
        Just(Field::Gate),
        Just(Field::Measurement),
        Just(Field::QecDetection),
        Just(Field::QecRepair),
        Just(Field::Classical),
        Just(Field::FinalAnalysis),
    ]
}

fn bump(inputs: &mut RuntimeInputs, field: Field, by: Nanos) {
    match field {
        Field::Compiler => inputs.compiler_time_ns += by,
        Field::Swap => {
            if let Some(t) = inputs.qubit_swap_time_ns.first_mut() {
                *t += by;
            }
        }
        Field::Gate => {
            if let Some(t) = inputs.gate_time_ns.last_mut().and_then(|row| row.first_mut()) {
                *t += by;
            }
        }
        Field::Measurement => inputs.measurement_time_ns += by,
        Field::QecDetection => inputs.qec_detection_time_ns += by,
        Field::QecRepair => inputs.qec_repair_time_ns += by,
        Field::Classical => inputs.classical_time_ns += by,
        Field::FinalAnalysis => inputs.final_analysis_time_ns += by,
    }
}

proptest! {
    /// The maximum is an element of the sequence and bounds every element.
    #[test]
    fn test_max_duration_is_upper_bound(values in prop::collection::vec(any::<i64>(), 1..50)) {
        let max = max_duration(&values).unwrap();
        prop_assert!(values.contains(&max));
        prop_assert!(values.iter().all(|&v| v <= max));
    }

    /// Raising any one duration never lowers the estimate.
    #[test]
    fn test_estimate_monotonic(
        inputs in arb_inputs(),
        field in arb_field(),
        by in 0..MAX_NS,
    ) {
        let estimator = RuntimeEstimator::new();
        let before = estimator.total(&inputs).unwrap();

        let mut raised = inputs.clone();
        bump(&mut raised, field, by);
        let after = estimator.total(&raised).unwrap();

        prop_assert!(after >= before, "{:?} +{} lowered total {} -> {}", field, by, before, after);
    }

    /// Without stages only the classical part of the hybrid loop remains.
    #[test]
    fn test_zero_stages_formula(inputs in arb_inputs()) {
        let mut inputs = inputs;
        inputs.stage_count = 0;
        inputs.qubit_swap_time_ns.clear();
        inputs.gate_time_ns.clear();

        let shots = (inputs.samples_per_iteration * inputs.iteration_count) as Nanos;
        let expected = inputs.compiler_time_ns
            + inputs.classical_time_ns * shots
            + inputs.final_analysis_time_ns;
        prop_assert_eq!(RuntimeEstimator::new().total(&inputs).unwrap(), expected);
    }

    /// The breakdown adds up to the total.
    #[test]
    fn test_breakdown_consistent(inputs in arb_inputs()) {
        let estimate = RuntimeEstimator::new().estimate(&inputs).unwrap();
        let stages: Nanos = estimate.stages.iter().map(|s| s.subtotal_ns).sum();

        prop_assert_eq!(estimate.stages.len(), inputs.stage_count);
        prop_assert_eq!(
            estimate.quantum_ns,
            stages + inputs.stage_count as Nanos * estimate.per_stage_overhead_ns
        );
        prop_assert_eq!(
            estimate.total_ns,
            estimate.compiler_ns + estimate.hybrid_ns + estimate.final_analysis_ns
        );
    }

    /// Emptying any one gate row makes the estimate fail with invalid input.
    #[test]
    fn test_empty_row_rejected(inputs in arb_inputs(), pick in any::<prop::sample::Index>()) {
        prop_assume!(inputs.stage_count > 0);
        let mut inputs = inputs;
        let stage = pick.index(inputs.stage_count);
        inputs.gate_time_ns[stage].clear();

        let err = RuntimeEstimator::new().total(&inputs).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }
}
