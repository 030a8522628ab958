//! Configuration and preset management for the tremulant effect.
//!
//! # Features
//!
//! - **Preset System**: Load and save waveform/frequency presets as TOML
//! - **Validation**: Check waveform names and parameter ranges
//! - **Paths**: Platform-specific preset directories
//! - **Factory Presets**: Built-in presets covering every waveform
//!
//! # Example
//!
//! ```rust,no_run
//! use tremulant_config::{Preset, user_presets_dir, validate_preset};
//! use tremulant_core::Waveform;
//!
//! let preset = Preset::new("Wobble")
//!     .with_description("Medium-speed triangle")
//!     .with_waveform(Waveform::Triangle)
//!     .with_frequency(6.5);
//! validate_preset(&preset).unwrap();
//!
//! preset.save(user_presets_dir().join("wobble.toml")).unwrap();
//!
//! let effect = Preset::load("wobble.toml").unwrap().build_effect(48000.0, 2).unwrap();
//! assert_eq!(effect.frequency(), 6.5);
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets.
#[cfg(feature = "std")]
pub mod paths;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
#[cfg(feature = "std")]
pub use paths::{
    ensure_user_presets_dir, find_preset, list_system_presets, list_user_presets,
    preset_name_from_path, system_presets_dir, user_presets_dir,
};
pub use preset::Preset;
pub use validation::{
    ValidationError, ValidationResult, validate_frequency, validate_preset, validate_sample_rate,
    validate_waveform,
};
