//! Shared CLI helpers used across multiple commands.

use tremulant_config::{Preset, find_preset, get_factory_preset};

/// Load a preset by name or path.
///
/// Searches in this order:
/// 1. Factory presets (by internal or display name)
/// 2. A TOML file at the given path
/// 3. User presets, then system presets (by name)
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    if let Some(preset) = get_factory_preset(name) {
        tracing::debug!(name, "using factory preset");
        return Ok(preset);
    }

    if let Some(path) = find_preset(name) {
        tracing::debug!(path = %path.display(), "loading preset file");
        return Ok(Preset::load(&path)?);
    }

    anyhow::bail!("Preset '{name}' not found. Use 'tremulant presets list' to see available presets.")
}

/// Format a linear level in dBFS, flooring silence at -120 dB.
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}

/// RMS level across all samples of all channels.
pub fn rms(channels: &[Vec<f32>]) -> f32 {
    let count: usize = channels.iter().map(Vec::len).sum();
    if count == 0 {
        return 0.0;
    }
    let sum: f32 = channels.iter().flatten().map(|s| s * s).sum();
    (sum / count as f32).sqrt()
}

/// Absolute peak across all channels.
pub fn peak(channels: &[Vec<f32>]) -> f32 {
    channels.iter().flatten().map(|s| s.abs()).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        let channels = vec![vec![0.5, -0.5], vec![-1.0, 1.0]];
        assert_eq!(peak(&channels), 1.0);
        assert!((rms(&channels) - 0.625f32.sqrt()).abs() < 1e-6);
        assert_eq!(rms(&[]), 0.0);
        assert_eq!(linear_to_db(0.0), -120.0);
        assert!((linear_to_db(1.0)).abs() < 1e-6);
    }

    #[test]
    fn factory_presets_resolve_first() {
        assert_eq!(load_preset("flutter").unwrap().name, "Flutter");
        assert!(load_preset("no_such_preset_anywhere").is_err());
    }
}
