//! Per-stage gate timing.
//!
//! Gates within a stage run in parallel, so a stage costs as much as its
//! slowest gate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EstimateError, EstimateResult};
use crate::inputs::Nanos;

/// Return the largest duration in `durations`.
///
/// Fails with [`EstimateError::InvalidInput`] when the slice is empty.
pub fn max_duration(durations: &[Nanos]) -> EstimateResult<Nanos> {
    durations.iter().copied().max().ok_or_else(|| {
        warn!("maximum requested over an empty duration sequence");
        EstimateError::InvalidInput("empty duration sequence".into())
    })
}

/// Cost of a single circuit stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEstimate {
    /// Stage index.
    pub index: usize,
    /// Qubit swap overhead of the stage.
    pub swap_ns: Nanos,
    /// Slowest gate of the stage.
    pub max_gate_ns: Nanos,
    /// `swap_ns + max_gate_ns`.
    pub subtotal_ns: Nanos,
}

impl StageEstimate {
    /// Compute the cost of stage `index` from its swap overhead and gate row.
    pub fn compute(index: usize, swap_ns: Nanos, gate_row: &[Nanos]) -> EstimateResult<Self> {
        let max_gate_ns = max_duration(gate_row).map_err(|_| {
            EstimateError::InvalidInput(format!("stage {index} has no gate timings"))
        })?;
        let subtotal_ns = swap_ns
            .checked_add(max_gate_ns)
            .ok_or(EstimateError::Overflow("stage subtotal"))?;

        Ok(Self {
            index,
            swap_ns,
            max_gate_ns,
            subtotal_ns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_duration() {
        assert_eq!(max_duration(&[11000, 13000, 12000]), Ok(13000));
        assert_eq!(max_duration(&[7]), Ok(7));
    }

    #[test]
    fn test_max_duration_negative_values() {
        // -1 is an ordinary value here, not an error code.
        assert_eq!(max_duration(&[-1]), Ok(-1));
        assert_eq!(max_duration(&[-5, -1, -3]), Ok(-1));
    }

    #[test]
    fn test_max_duration_empty() {
        let err = max_duration(&[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_stage_estimate() {
        let stage = StageEstimate::compute(1, 200, &[21000, 22000, 23000]).unwrap();
        assert_eq!(stage.max_gate_ns, 23000);
        assert_eq!(stage.subtotal_ns, 23200);
    }

    #[test]
    fn test_stage_estimate_empty_row() {
        let err = StageEstimate::compute(3, 100, &[]).unwrap_err();
        assert_eq!(
            err,
            EstimateError::InvalidInput("stage 3 has no gate timings".into())
        );
    }

    #[test]
    fn test_stage_estimate_overflow() {
        let err = StageEstimate::compute(0, Nanos::MAX, &[1]).unwrap_err();
        assert_eq!(err, EstimateError::Overflow("stage subtotal"));
    }
}
