//! Preset validation.
//!
//! Checks waveform names, the modulation frequency and the sample rate hint
//! against what the effect accepts. Ranges come from the core
//! [`ParamDescriptor`], so the validator and the kernel never disagree.
//!
//! # Example
//!
//! ```rust
//! use tremulant_config::{Preset, validate_preset};
//!
//! let preset = Preset::new("Fine").with_frequency(6.0);
//! assert!(validate_preset(&preset).is_ok());
//!
//! let preset = Preset::new("Too fast").with_frequency(60.0);
//! assert!(validate_preset(&preset).is_err());
//! ```

use thiserror::Error;
use tremulant_core::{ParamDescriptor, Waveform};

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown waveform name.
    #[error("unknown waveform '{0}' (expected one of: {names})", names = waveform_names())]
    UnknownWaveform(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Sample rate hint of zero.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn waveform_names() -> String {
    Waveform::ALL
        .iter()
        .map(|w| w.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a waveform name and resolve it.
pub fn validate_waveform(name: &str) -> ValidationResult<Waveform> {
    Waveform::from_name(name).ok_or_else(|| ValidationError::UnknownWaveform(name.to_string()))
}

/// Validate a modulation frequency against the Frequency descriptor.
///
/// NaN is never in range.
pub fn validate_frequency(value: f32) -> ValidationResult<()> {
    let desc = ParamDescriptor::frequency();
    if desc.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: desc.string_id.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        })
    }
}

/// Validate a sample rate hint.
pub fn validate_sample_rate(sample_rate: u32) -> ValidationResult<()> {
    if sample_rate == 0 {
        Err(ValidationError::InvalidSampleRate(sample_rate))
    } else {
        Ok(())
    }
}

/// Validate every field of a preset.
///
/// All problems are reported, not just the first.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = validate_waveform(&preset.waveform) {
        errors.push(e);
    }
    if let Err(e) = validate_frequency(preset.frequency) {
        errors.push(e);
    }
    if let Err(e) = validate_sample_rate(preset.sample_rate) {
        errors.push(e);
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
