//! Display WAV file metadata and how the effect would run over it.

use clap::Args;
use tremulant_core::{DEFAULT_FREQUENCY_HZ, ParamDescriptor, TABLE_SIZE};
use tremulant_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,

    /// Modulation frequency to report cycle timing for (Hz)
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY_HZ)]
    pub frequency: f32,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );

    let frequency = ParamDescriptor::frequency().clamp(args.frequency);
    let samples_per_cycle = f64::from(info.sample_rate) / f64::from(frequency);
    println!();
    println!("Modulation at {frequency:.2} Hz:");
    println!("  Cycle:     {samples_per_cycle:.1} samples");
    println!(
        "  Step:      {:.4} table entries per sample",
        TABLE_SIZE as f64 / samples_per_cycle
    );
    println!(
        "  Cycles:    {:.1} over the file",
        info.num_frames as f64 / samples_per_cycle
    );

    Ok(())
}
