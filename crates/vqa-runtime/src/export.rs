//! Input loading and report export.
//!
//! Runtime inputs are read from YAML or JSON. Estimates are written as
//! JSON reports that carry the inputs they were computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{EstimateError, EstimateResult};
use crate::estimator::Estimate;
use crate::inputs::RuntimeInputs;

/// On-disk encoding of runtime inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Yaml,
    Json,
}

impl InputFormat {
    /// Pick a format from a file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }

    /// Parse a format name (`yaml`, `yml`, `json`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "json" => Some(InputFormat::Json),
            _ => None,
        }
    }
}

/// Decode runtime inputs from a string.
pub fn inputs_from_str(source: &str, format: InputFormat) -> EstimateResult<RuntimeInputs> {
    match format {
        InputFormat::Yaml => serde_yaml_ng::from_str(source).map_err(EstimateError::parse),
        InputFormat::Json => serde_json::from_str(source).map_err(EstimateError::parse),
    }
}

/// Encode runtime inputs to a string.
pub fn inputs_to_string(inputs: &RuntimeInputs, format: InputFormat) -> EstimateResult<String> {
    match format {
        InputFormat::Yaml => serde_yaml_ng::to_string(inputs).map_err(EstimateError::export),
        InputFormat::Json => serde_json::to_string_pretty(inputs).map_err(EstimateError::export),
    }
}

/// Load runtime inputs from a YAML or JSON file.
pub fn load_inputs(path: &Path) -> EstimateResult<RuntimeInputs> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| EstimateError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let format = InputFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading runtime inputs");
    inputs_from_str(&source, format)
}

/// Write runtime inputs to a file, choosing the format from its extension.
pub fn save_inputs(inputs: &RuntimeInputs, path: &Path) -> EstimateResult<()> {
    let text = inputs_to_string(inputs, InputFormat::from_path(path))?;
    std::fs::write(path, text)
        .map_err(|e| EstimateError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// An estimate together with the inputs it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Crate version that produced the report.
    pub version: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Inputs of the estimate.
    pub inputs: RuntimeInputs,
    /// Runtime breakdown.
    pub estimate: Estimate,
}

impl EstimateReport {
    /// Create a report stamped with the current time.
    pub fn new(inputs: RuntimeInputs, estimate: Estimate) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            inputs,
            estimate,
        }
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> EstimateResult<String> {
        serde_json::to_string_pretty(self).map_err(EstimateError::export)
    }

    /// Write the report to a JSON file.
    pub fn to_file(&self, path: &Path) -> EstimateResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| EstimateError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
