//! VQA Runtime Estimation
//!
//! Estimates the wall-clock runtime of a variational quantum algorithm from
//! per-stage circuit timings and the parameters of the hybrid
//! quantum-classical loop.
//!
//! # Overview
//!
//! - **Inputs**: [`RuntimeInputs`] holds gate, swap, measurement and QEC
//!   timings plus compiler, classical and final-analysis overheads
//! - **Stages**: [`max_duration`] reduces a stage to its slowest gate
//! - **Estimator**: [`RuntimeEstimator`] evaluates the closed-form runtime
//!   with overflow-checked 64-bit arithmetic
//! - **Export**: YAML/JSON input files and JSON [`EstimateReport`]s
//!
//! # Architecture
//!
//! ```text
//! [RuntimeInputs] -> validate -> per-stage max_duration
//!                                     |
//!                                     v
//!                     quantum -> hybrid loop -> total
//!                                     |
//!                                     v
//!                                 [Estimate]
//! ```
//!
//! # Example
//!
//! ```rust
//! use vqa_runtime::{RuntimeEstimator, sample_inputs};
//!
//! let inputs = sample_inputs();
//! let total = RuntimeEstimator::new().total(&inputs).unwrap();
//! assert_eq!(total, 2_616_275);
//! ```

pub mod error;
pub mod estimator;
pub mod export;
pub mod inputs;
pub mod sample;
pub mod stage;

pub use error::{EstimateError, EstimateResult};
pub use estimator::{Estimate, RuntimeEstimator};
pub use export::{EstimateReport, InputFormat, load_inputs, save_inputs};
pub use inputs::{Nanos, RuntimeInputs};
pub use sample::{SampleShape, sample_inputs};
pub use stage::{StageEstimate, max_duration};
