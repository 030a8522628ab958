//! Preset management commands.
//!
//! Provides commands to list, show, save, and locate presets.

use crate::commands::common::load_preset;
use clap::{Args, Subcommand};
use tremulant_config::{
    Preset, ensure_user_presets_dir, factory_presets, get_factory_preset, list_user_presets,
    preset_name_from_path, system_presets_dir, user_presets_dir, validate_preset,
    validate_waveform,
};
use tremulant_core::DEFAULT_FREQUENCY_HZ;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a waveform/frequency pair as a user preset
    Save {
        /// Name for the new preset
        name: String,

        /// Waveform: sine, rectified_sine, square, triangle
        #[arg(short, long, default_value = "sine")]
        waveform: String,

        /// Modulation frequency in Hz
        #[arg(short, long, default_value_t = DEFAULT_FREQUENCY_HZ)]
        frequency: f32,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            waveform,
            frequency,
            description,
            force,
        } => save_preset(&name, &waveform, frequency, description.as_deref(), force),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            println!(
                "  {:14} {:>15} {:>6.2} Hz - {}",
                preset.name,
                preset.waveform,
                preset.frequency,
                preset.description.as_deref().unwrap_or("")
            );
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: tremulant presets save <name> --waveform square --frequency 8\n");
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
                match Preset::load(&path) {
                    Ok(preset) => println!(
                        "  {:14} {:>15} {:>6.2} Hz - {}",
                        name,
                        preset.waveform,
                        preset.frequency,
                        preset.description.as_deref().unwrap_or("")
                    ),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "{e}");
                        println!("  {name:14} (error loading)");
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    println!("Waveform:    {}", preset.waveform);
    println!("Frequency:   {} Hz", preset.frequency);
    println!("Sample Rate: {} Hz", preset.sample_rate);

    if let Err(e) = validate_preset(&preset) {
        println!();
        println!("Warning: {e}");
    }

    Ok(())
}

fn save_preset(
    name: &str,
    waveform: &str,
    frequency: f32,
    description: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    if get_factory_preset(name).is_some() {
        anyhow::bail!("'{name}' is a factory preset name. Choose a different name.");
    }

    let mut preset = Preset::new(name)
        .with_waveform(validate_waveform(waveform)?)
        .with_frequency(frequency);
    if let Some(desc) = description {
        preset = preset.with_description(desc);
    }
    validate_preset(&preset)?;

    let preset_path = ensure_user_presets_dir()?.join(format!("{name}.toml"));
    if preset_path.exists() && !force {
        anyhow::bail!("Preset '{name}' already exists. Use --force to overwrite.");
    }

    preset.save(&preset_path)?;
    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets:   {}", user_presets_dir().display());
    println!("System presets: {}", system_presets_dir().display());

    Ok(())
}
