//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let path = path.as_ref();
    let reader = WavReader::new(BufReader::new(File::open(path)?))?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    tracing::debug!(path = %path.display(), channels = spec.channels, num_frames, "read WAV header");

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
///
/// 32-bit files are written as IEEE float, smaller depths as integer PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24 or 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Multi-channel audio stored one `Vec` per channel.
///
/// Every channel has the same number of frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarBuffer {
    channels: Vec<Vec<f32>>,
}

impl PlanarBuffer {
    /// `channels` channels of `frames` zeros each.
    pub fn silent(channels: usize, frames: usize) -> Self {
        Self {
            channels: vec![vec![0.0; frames]; channels],
        }
    }

    /// Wrap per-channel buffers. All channels must have the same length.
    pub fn from_channels(channels: Vec<Vec<f32>>) -> Result<Self> {
        if let Some(first) = channels.first() {
            let frames = first.len();
            if let Some(bad) = channels.iter().find(|c| c.len() != frames) {
                return Err(Error::ChannelMismatch {
                    expected: frames,
                    found: bad.len(),
                });
            }
        }
        Ok(Self { channels })
    }

    /// Split interleaved samples into channels. A trailing partial frame is
    /// dropped.
    pub fn from_interleaved(samples: &[f32], channels: usize) -> Self {
        if channels == 0 {
            return Self::default();
        }
        let frames = samples.len() / channels;
        let mut buffer = Self::silent(channels, frames);
        for (frame, chunk) in samples.chunks_exact(channels).enumerate() {
            for (ch, &sample) in chunk.iter().enumerate() {
                buffer.channels[ch][frame] = sample;
            }
        }
        buffer
    }

    /// Interleave all channels frame by frame.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for frame in 0..frames {
            out.extend(self.channels.iter().map(|c| c[frame]));
        }
        out
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Returns `true` if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Samples of channel `index`.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channels.
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// All channels, mutably. Lengths must not change.
    pub fn channels_mut(&mut self) -> &mut [Vec<f32>] {
        &mut self.channels
    }

    /// Consume the buffer, returning the channels.
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }
}

fn int_scale(bits: u16) -> Result<f32> {
    match bits {
        8 | 16 | 24 | 32 => Ok((1i64 << (bits - 1)) as f32),
        other => Err(Error::UnsupportedFormat(format!("{other}-bit integer PCM"))),
    }
}

/// Read a WAV file as planar `f32` samples along with the spec.
///
/// Integer PCM is scaled to `[-1.0, 1.0)`. Every channel is kept.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(PlanarBuffer, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::new(BufReader::new(File::open(path)?))?;
    let hound_spec = reader.spec();
    let spec = WavSpec::from(hound_spec);

    let interleaved: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => {
            if spec.bits_per_sample != 32 {
                return Err(Error::UnsupportedFormat(format!(
                    "{}-bit float",
                    spec.bits_per_sample
                )));
            }
            reader
                .into_samples::<f32>()
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
        SampleFormat::Int => {
            let max_val = int_scale(spec.bits_per_sample)?;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let buffer = PlanarBuffer::from_interleaved(&interleaved, usize::from(spec.channels));
    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        frames = buffer.frames(),
        "read WAV"
    );
    Ok((buffer, spec))
}

/// Write planar samples to a WAV file.
///
/// `spec.channels` must equal the buffer's channel count. Integer output is
/// clamped to the format range.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &PlanarBuffer, spec: WavSpec) -> Result<()> {
    let path = path.as_ref();
    if usize::from(spec.channels) != samples.channel_count() {
        return Err(Error::ChannelMismatch {
            expected: usize::from(spec.channels),
            found: samples.channel_count(),
        });
    }

    let int_max = if spec.bits_per_sample == 32 {
        None
    } else {
        Some(int_scale(spec.bits_per_sample)?)
    };

    let file = BufWriter::new(File::create(path)?);
    let mut writer = WavWriter::new(file, hound::WavSpec::from(spec))?;

    for frame in 0..samples.frames() {
        for channel in samples.channels() {
            let sample = channel[frame];
            match int_max {
                None => writer.write_sample(sample)?,
                Some(max_val) => {
                    let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
                    writer.write_sample(int_sample)?;
                }
            }
        }
    }

    writer.finalize()?;
    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        bits = spec.bits_per_sample,
        frames = samples.frames(),
        "wrote WAV"
    );
    Ok(())
}
