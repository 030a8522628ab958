//! File-based effect processing command.
//!
//! Runs one kernel per channel over fixed-size blocks. A block in which every
//! channel is exactly zero is passed as silence: the kernels skip it and the
//! output is zero-filled here.

use crate::commands::common::{linear_to_db, load_preset, peak, rms};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tremulant_config::{Preset, validate_frequency, validate_waveform};
use tremulant_io::{PlanarBuffer, WavSpec, read_wav, write_wav};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Modulation frequency in Hz (overrides the preset)
    #[arg(short, long)]
    frequency: Option<f32>,

    /// Waveform: sine, rectified_sine, square, triangle (overrides the preset)
    #[arg(short, long)]
    waveform: Option<String>,

    /// Preset name or TOML file
    #[arg(short, long)]
    preset: Option<String>,

    /// Processing block size in frames
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("Block size must be at least 1");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("Unsupported bit depth {} (use 16, 24, or 32)", args.bit_depth);
    }

    let mut preset = match &args.preset {
        Some(name) => load_preset(name)?,
        None => Preset::new("Command line"),
    };
    if let Some(name) = &args.waveform {
        preset = preset.with_waveform(validate_waveform(name)?);
    }
    if let Some(hz) = args.frequency {
        preset = preset.with_frequency(hz);
    }
    if let Err(e) = validate_frequency(preset.frequency) {
        tracing::warn!("{e}; the effect will clamp it");
    }

    println!("Reading {}...", args.input.display());
    let (input, spec) = read_wav(&args.input)?;
    let frames = input.frames();
    let channels = input.channel_count();
    println!(
        "  {} frames x {} channel(s), {} Hz, {:.2}s",
        frames,
        channels,
        spec.sample_rate,
        frames as f32 / spec.sample_rate as f32
    );

    let mut effect = preset.build_effect(spec.sample_rate as f32, channels)?;
    println!(
        "Modulating with {} at {:.2} Hz ({})",
        effect.waveform(),
        preset.frequency,
        preset.name
    );

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = PlanarBuffer::silent(channels, frames);
    let mut silent_blocks = 0usize;
    let mut start = 0;
    while start < frames {
        let end = (start + args.block_size).min(frames);

        let ins: Vec<&[f32]> = input.channels().iter().map(|c| &c[start..end]).collect();
        let mut outs: Vec<&mut [f32]> = output
            .channels_mut()
            .iter_mut()
            .map(|c| &mut c[start..end])
            .collect();

        let silence = ins.iter().all(|c| c.iter().all(|&s| s == 0.0));
        if silence {
            silent_blocks += 1;
            for out in &mut outs {
                out.fill(0.0);
            }
        }
        effect.process_planar(&ins, &mut outs, silence);

        start = end;
        pb.set_position(start as u64);
    }

    pb.finish_with_message("done");
    tracing::debug!(silent_blocks, block_size = args.block_size, "processing finished");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(input.channels())),
        linear_to_db(peak(input.channels()))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(output.channels())),
        linear_to_db(peak(output.channels()))
    );

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}
