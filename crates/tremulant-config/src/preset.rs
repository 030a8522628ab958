//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tremulant_core::{DEFAULT_FREQUENCY_HZ, ModulationEffect, Waveform};

use crate::error::ConfigError;

/// Preset file format for the tremulant effect.
///
/// A preset captures everything a host needs to recreate a sound: the
/// waveform the table is built from and the modulation frequency. Presets
/// can be loaded from files, created programmatically, and saved to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "Slow Swell"
/// description = "Gentle sine swell"
/// sample_rate = 48000
/// waveform = "sine"
/// frequency = 2.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    /// Hosts normally use the rate of the stream being processed instead.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Waveform name (see [`Waveform::name`]).
    #[serde(default = "default_waveform")]
    pub waveform: String,

    /// Modulation frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f32,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_waveform() -> String {
    Waveform::default().name().to_string()
}

fn default_frequency() -> f32 {
    DEFAULT_FREQUENCY_HZ
}

impl Preset {
    /// Create a preset with default waveform and frequency.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            waveform: default_waveform(),
            frequency: default_frequency(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the waveform.
    pub fn with_waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform.name().to_string();
        self
    }

    /// Set the modulation frequency in Hz.
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the waveform name.
    pub fn waveform(&self) -> Result<Waveform, ConfigError> {
        Waveform::from_name(&self.waveform)
            .ok_or_else(|| ConfigError::UnknownWaveform(self.waveform.clone()))
    }

    /// Push the preset's frequency into a running effect.
    ///
    /// The waveform is fixed when an effect is built; use
    /// [`build_effect`](Self::build_effect) to get a matching table.
    pub fn apply(&self, effect: &ModulationEffect) {
        effect.set_frequency(self.frequency);
    }

    /// Build an effect with this preset's waveform and frequency.
    pub fn build_effect(
        &self,
        sample_rate: f32,
        channels: usize,
    ) -> Result<ModulationEffect, ConfigError> {
        let effect = ModulationEffect::with_waveform(sample_rate, channels, self.waveform()?);
        self.apply(&effect);
        Ok(effect)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
