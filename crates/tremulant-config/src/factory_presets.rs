//! Factory presets bundled with the tremulant library.
//!
//! These presets are always available without external files. They cover
//! every built-in waveform and span the usable frequency range.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["default", "slow_swell", "pulse", "chop", "flutter"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("default", DEFAULT_PRESET),
    ("slow_swell", SLOW_SWELL_PRESET),
    ("pulse", PULSE_PRESET),
    ("chop", CHOP_PRESET),
    ("flutter", FLUTTER_PRESET),
];

/// Same values as a freshly constructed effect.
const DEFAULT_PRESET: &str = r#"
name = "Default"
description = "Sine modulation at 5 Hz"
sample_rate = 48000
waveform = "sine"
frequency = 5.0
"#;

const SLOW_SWELL_PRESET: &str = r#"
name = "Slow Swell"
description = "Gentle sine swell near the bottom of the range"
sample_rate = 48000
waveform = "sine"
frequency = 2.5
"#;

const PULSE_PRESET: &str = r#"
name = "Pulse"
description = "Rectified sine, two soft pulses per cycle"
sample_rate = 48000
waveform = "rectified_sine"
frequency = 4.0
"#;

const CHOP_PRESET: &str = r#"
name = "Chop"
description = "Hard on/off gating"
sample_rate = 48000
waveform = "square"
frequency = 8.0
"#;

const FLUTTER_PRESET: &str = r#"
name = "Flutter"
description = "Fast triangle at the top of the range"
sample_rate = 48000
waveform = "triangle"
frequency = 18.0
"#;

/// All factory presets, in [`FACTORY_PRESET_NAMES`] order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Look up a factory preset by internal name or display name
/// (case-insensitive).
///
/// # Example
///
/// ```rust
/// use tremulant_config::get_factory_preset;
///
/// let chop = get_factory_preset("chop").unwrap();
/// assert_eq!(chop.name, "Chop");
/// assert!(get_factory_preset("Slow Swell").is_some());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    FACTORY_PRESETS_TOML.iter().find_map(|(id, toml)| {
        let preset = Preset::from_toml(toml).ok()?;
        (id.eq_ignore_ascii_case(name) || preset.name.eq_ignore_ascii_case(name)).then_some(preset)
    })
}

/// Internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Returns `true` if `name` matches a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_preset;
    use tremulant_core::{DEFAULT_FREQUENCY_HZ, FACTORY_PRESETS, Waveform};

    #[test]
    fn test_factory_presets_load() {
        let presets = factory_presets();
        assert_eq!(presets.len(), FACTORY_PRESET_NAMES.len());

        let names: Vec<_> = presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Default", "Slow Swell", "Pulse", "Chop", "Flutter"]);
    }

    #[test]
    fn test_all_factory_presets_valid() {
        for (name, toml) in FACTORY_PRESETS_TOML {
            let preset = Preset::from_toml(toml).unwrap();
            assert!(preset.description.is_some(), "preset '{name}' should have a description");
            assert!(validate_preset(&preset).is_ok(), "preset '{name}' should validate");
        }
    }

    #[test]
    fn test_every_waveform_is_covered() {
        let presets = factory_presets();
        for waveform in Waveform::ALL {
            assert!(
                presets.iter().any(|p| p.waveform().ok() == Some(waveform)),
                "no factory preset uses {waveform}"
            );
        }
    }

    #[test]
    fn test_default_matches_effect_default() {
        let preset = get_factory_preset("default").unwrap();
        assert_eq!(preset.frequency, DEFAULT_FREQUENCY_HZ);
        assert_eq!(preset.frequency, FACTORY_PRESETS[0].frequency);
        assert_eq!(preset.name, FACTORY_PRESETS[0].name);
        assert_eq!(preset.waveform().unwrap(), Waveform::default());
    }

    #[test]
    fn test_get_factory_preset() {
        assert_eq!(get_factory_preset("flutter").unwrap().name, "Flutter");
        assert_eq!(get_factory_preset("SLOW_SWELL").unwrap().name, "Slow Swell");
        assert_eq!(get_factory_preset("slow swell").unwrap().name, "Slow Swell");
        assert!(get_factory_preset("nonexistent").is_none());

        assert!(is_factory_preset("Pulse"));
        assert!(!is_factory_preset("wobble"));
        assert_eq!(factory_preset_names().len(), 5);
    }
}
