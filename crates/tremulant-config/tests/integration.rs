//! Integration tests for tremulant-config.
//!
//! These tests verify end-to-end functionality across modules: presets on
//! disk, validation, and effects built from presets.

use tempfile::TempDir;
use tremulant_config::{
    ConfigError, Preset, ValidationError, factory_presets, get_factory_preset, paths,
    validate_preset,
};
use tremulant_core::{ModulationEffect, Waveform};

/// Save a preset, load it back and build an effect from it.
#[test]
fn test_preset_file_to_effect() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("wobble.toml");

    let preset = Preset::new("Wobble")
        .with_description("Medium-speed triangle")
        .with_waveform(Waveform::Triangle)
        .with_frequency(6.5);
    preset.save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, preset);
    assert!(validate_preset(&loaded).is_ok());

    let mut effect = loaded.build_effect(48000.0, 2).unwrap();
    assert_eq!(effect.waveform(), Waveform::Triangle);
    assert_eq!(effect.frequency(), 6.5);

    let input = vec![0.5f32; 1024];
    let mut out_l = vec![0.0f32; 1024];
    let mut out_r = vec![0.0f32; 1024];
    effect.process_planar(
        &[&input[..], &input[..]],
        &mut [&mut out_l[..], &mut out_r[..]],
        false,
    );
    assert_eq!(out_l, out_r);
    assert!(out_l.iter().all(|&s| (0.0..=0.5).contains(&s)));
}

/// Every factory preset builds an effect whose output stays bounded.
#[test]
fn test_factory_presets_build_effects() {
    for preset in factory_presets() {
        let mut effect = preset.build_effect(44100.0, 1).unwrap();
        assert_eq!(effect.frequency(), preset.frequency, "{}", preset.name);

        let input = vec![1.0f32; 4096];
        let mut output = vec![0.0f32; 4096];
        effect.process_planar(&[&input[..]], &mut [&mut output[..]], false);
        assert!(
            output.iter().all(|&s| (0.0..=1.0).contains(&s)),
            "factory preset '{}' produced out-of-range gain",
            preset.name
        );
    }
}

/// Applying a preset to a running effect changes only the frequency.
#[test]
fn test_apply_factory_preset_to_running_effect() {
    let effect = ModulationEffect::with_waveform(48000.0, 1, Waveform::Sine);
    let chop = get_factory_preset("chop").unwrap();
    chop.apply(&effect);

    assert_eq!(effect.frequency(), chop.frequency);
    assert_eq!(effect.waveform(), Waveform::Sine);
}

/// Hand-edited files with bad values load, then fail validation.
#[test]
fn test_invalid_preset_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(
        &path,
        "name = \"Broken\"\nwaveform = \"saw\"\nfrequency = 45.0\n",
    )
    .unwrap();

    let preset = Preset::load(&path).unwrap();
    match validate_preset(&preset) {
        Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("expected two validation errors, got {other:?}"),
    }

    let err: ConfigError = validate_preset(&preset).unwrap_err().into();
    assert!(err.to_string().starts_with("validation failed"));
}

/// Malformed TOML and missing files surface as typed errors.
#[test]
fn test_load_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.toml");
    assert!(matches!(
        Preset::load(&missing),
        Err(ConfigError::ReadFile { ref path, .. }) if path == &missing
    ));

    let garbled = temp_dir.path().join("garbled.toml");
    std::fs::write(&garbled, "name = [unterminated").unwrap();
    assert!(matches!(
        Preset::load(&garbled),
        Err(ConfigError::TomlParse(_))
    ));

    let nameless = temp_dir.path().join("nameless.toml");
    std::fs::write(&nameless, "frequency = 4.0").unwrap();
    assert!(matches!(
        Preset::load(&nameless),
        Err(ConfigError::TomlParse(_))
    ));
}

/// Saved presets are found by name when listed from their directory.
#[test]
fn test_saved_presets_are_listed() {
    let temp_dir = TempDir::new().unwrap();
    for preset in factory_presets() {
        let file = temp_dir
            .path()
            .join(format!("{}.toml", preset.name.to_lowercase().replace(' ', "_")));
        preset.save(&file).unwrap();
    }

    let listed = paths::list_presets_in_dir(temp_dir.path());
    assert_eq!(listed.len(), factory_presets().len());

    let swell = listed
        .iter()
        .find(|p| paths::preset_name_from_path(p).as_deref() == Some("slow_swell"))
        .unwrap();
    let found = paths::find_preset(swell.to_str().unwrap()).unwrap();
    assert_eq!(Preset::load(found).unwrap().frequency, 2.5);
}
