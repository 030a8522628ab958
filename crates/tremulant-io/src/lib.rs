//! WAV file I/O for the tremulant effect.
//!
//! This crate provides:
//!
//! - **Metadata**: [`read_wav_info`] reads the header only
//! - **Planar I/O**: [`read_wav`] and [`write_wav`] load and save
//!   multi-channel audio as one buffer per channel, the layout the
//!   modulation effect processes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tremulant_io::{read_wav, write_wav};
//!
//! let (mut audio, spec) = read_wav("input.wav")?;
//! for channel in audio.channels_mut() {
//!     for sample in channel.iter_mut() {
//!         *sample *= 0.5;
//!     }
//! }
//! write_wav("output.wav", &audio, spec)?;
//! # Ok::<(), tremulant_io::Error>(())
//! ```

mod wav;

pub use wav::{PlanarBuffer, WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Channel layout of the samples does not match the file spec.
    #[error("Channel mismatch: expected {expected}, found {found}")]
    ChannelMismatch {
        /// Channels (or frames per channel) required.
        expected: usize,
        /// Channels (or frames per channel) supplied.
        found: usize,
    },

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
