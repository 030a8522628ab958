//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use serde::Serialize;
use tremulant_core::{
    COMPONENT_MANUFACTURER, COMPONENT_SUBTYPE, FACTORY_PRESETS, ModulationEffect, ParamDescriptor,
    ParamFlags, ParamScale, ParameterInfo, VERSION, Waveform,
};

#[derive(Args)]
pub struct ParamsArgs {
    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ParamJson {
    index: usize,
    id: u32,
    string_id: &'static str,
    name: &'static str,
    short_name: &'static str,
    unit: &'static str,
    min: f32,
    max: f32,
    default: f32,
    step: f32,
    scale: &'static str,
    automatable: bool,
}

impl ParamJson {
    fn new(index: usize, desc: &ParamDescriptor) -> Self {
        Self {
            index,
            id: desc.id.0,
            string_id: desc.string_id,
            name: desc.name,
            short_name: desc.short_name,
            unit: desc.unit.suffix().trim_start(),
            min: desc.min,
            max: desc.max,
            default: desc.default,
            step: desc.step,
            scale: match desc.scale {
                ParamScale::Linear => "linear",
                ParamScale::Logarithmic => "logarithmic",
            },
            automatable: desc.flags.contains(ParamFlags::AUTOMATABLE),
        }
    }
}

#[derive(Serialize)]
struct EffectJson {
    version: String,
    subtype: String,
    manufacturer: String,
    latency_samples: usize,
    tail_secs: f32,
    waveforms: Vec<&'static str>,
    factory_presets: Vec<&'static str>,
    params: Vec<ParamJson>,
}

fn version_string(version: u32) -> String {
    format!(
        "{}.{}.{}",
        version >> 16,
        (version >> 8) & 0xff,
        version & 0xff
    )
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let effect = ModulationEffect::new(48000.0, 1);
    let params: Vec<ParamJson> = (0..effect.param_count())
        .filter_map(|i| effect.param_info(i).map(|d| ParamJson::new(i, &d)))
        .collect();

    if args.json {
        let report = EffectJson {
            version: version_string(VERSION),
            subtype: String::from_utf8_lossy(&COMPONENT_SUBTYPE).into_owned(),
            manufacturer: String::from_utf8_lossy(&COMPONENT_MANUFACTURER).into_owned(),
            latency_samples: effect.latency_samples(),
            tail_secs: effect.tail_time_secs(),
            waveforms: Waveform::ALL.iter().map(|w| w.name()).collect(),
            factory_presets: FACTORY_PRESETS.iter().map(|p| p.name).collect(),
            params,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "tremulant {} ({}/{})",
        version_string(VERSION),
        String::from_utf8_lossy(&COMPONENT_MANUFACTURER),
        String::from_utf8_lossy(&COMPONENT_SUBTYPE)
    );
    println!();
    println!("Parameters:");
    println!();
    println!(
        "  {:3}  {:12}  {:8}  {:>8}  {:>8}  {:>8}  {}",
        "#", "Name", "Id", "Min", "Max", "Default", "Scale"
    );
    println!(
        "  {:3}  {:12}  {:8}  {:>8}  {:>8}  {:>8}  {}",
        "-", "----", "--", "---", "---", "-------", "-----"
    );
    for p in &params {
        println!(
            "  {:3}  {:12}  {:8}  {:>8}  {:>8}  {:>8}  {}",
            p.index,
            p.name,
            p.string_id,
            format!("{} {}", p.min, p.unit),
            format!("{} {}", p.max, p.unit),
            format!("{} {}", p.default, p.unit),
            p.scale
        );
    }

    println!();
    println!(
        "Waveforms: {}",
        Waveform::ALL.map(|w| w.name()).join(", ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_formats_as_semver() {
        assert_eq!(version_string(VERSION), "1.0.0");
        assert_eq!(version_string(0x0002_0103), "2.1.3");
    }
}
