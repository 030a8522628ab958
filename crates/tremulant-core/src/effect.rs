//! Multi-channel effect built from one kernel per channel.
//!
//! [`ModulationEffect`] is the n-in/n-out unit a host instantiates. It builds
//! the wave table and the parameter store once and hands both, shared, to a
//! [`ModulationKernel`] per channel. Each kernel keeps its own phase, so the
//! channels are not phase-locked to one another; they only agree because they
//! start together and read the same Frequency.
//!
//! ## Design Decisions
//!
//! - **Shared, immutable table**: built before any kernel exists and never
//!   written again, so it sits behind an `Arc` without synchronization.
//! - **Lock-free parameters**: the UI/automation thread writes
//!   [`Parameters`]; kernels read it once per block.
//! - **No allocation while processing**: interleaved audio is split through
//!   scratch buffers sized at construction.

#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::kernel::{Kernel, ModulationKernel};
use crate::param_info::{DEFAULT_FREQUENCY_HZ, ParamDescriptor, ParameterInfo};
use crate::params::{PARAM_COUNT, Parameters};
use crate::wavetable::{WaveTable, Waveform};

/// Effect version reported to hosts (major.minor.patch as `0xMMMMmmpp`).
pub const VERSION: u32 = 0x0001_0000;

/// Four-character component subtype.
pub const COMPONENT_SUBTYPE: [u8; 4] = *b"alpf";

/// Four-character manufacturer code.
pub const COMPONENT_MANUFACTURER: [u8; 4] = *b"Niem";

/// Frames moved through the scratch buffers per interleaved chunk.
const SCRATCH_FRAMES: usize = 256;

/// A named parameter snapshot shipped with the effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactoryPreset {
    /// Display name.
    pub name: &'static str,
    /// Frequency in Hz.
    pub frequency: f32,
}

/// Built-in presets. Index 0 matches the parameter defaults.
pub const FACTORY_PRESETS: &[FactoryPreset] = &[FactoryPreset {
    name: "Default",
    frequency: DEFAULT_FREQUENCY_HZ,
}];

/// Index of the preset that matches a freshly constructed effect.
pub const DEFAULT_PRESET: usize = 0;

/// Amplitude-modulation effect with one kernel per channel.
///
/// # Example
///
/// ```rust
/// use tremulant_core::{ModulationEffect, Waveform};
///
/// let mut effect = ModulationEffect::with_waveform(48000.0, 2, Waveform::Triangle);
/// effect.set_frequency(6.0);
///
/// let left = [0.25f32; 128];
/// let right = [0.5f32; 128];
/// let mut out_l = [0.0f32; 128];
/// let mut out_r = [0.0f32; 128];
/// effect.process_planar(&[&left[..], &right[..]], &mut [&mut out_l[..], &mut out_r[..]], false);
/// ```
#[derive(Debug, Clone)]
pub struct ModulationEffect {
    sample_rate: f32,
    waveform: Waveform,
    table: Arc<WaveTable>,
    params: Arc<Parameters>,
    kernels: Vec<ModulationKernel>,
    current_preset: Option<usize>,
    scratch_in: Vec<f32>,
    scratch_out: Vec<f32>,
}

impl ModulationEffect {
    /// Create an effect for `channels` channels with the default waveform.
    pub fn new(sample_rate: f32, channels: usize) -> Self {
        Self::with_waveform(sample_rate, channels, Waveform::default())
    }

    /// Create an effect for `channels` channels with a standard table of
    /// `waveform`.
    pub fn with_waveform(sample_rate: f32, channels: usize, waveform: Waveform) -> Self {
        Self::with_parts(
            sample_rate,
            channels,
            waveform,
            Arc::new(WaveTable::new(waveform)),
            Arc::new(Parameters::new()),
        )
    }

    /// Create an effect around an existing table and parameter store.
    ///
    /// `waveform` is informational only; the kernels read `table`.
    pub fn with_parts(
        sample_rate: f32,
        channels: usize,
        waveform: Waveform,
        table: Arc<WaveTable>,
        params: Arc<Parameters>,
    ) -> Self {
        let kernels = (0..channels)
            .map(|_| ModulationKernel::new(sample_rate, Arc::clone(&table), Arc::clone(&params)))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            channels,
            waveform = waveform.name(),
            table_len = table.len(),
            "modulation effect created"
        );

        Self {
            sample_rate,
            waveform,
            table,
            params,
            kernels,
            current_preset: Some(DEFAULT_PRESET),
            scratch_in: vec![0.0; SCRATCH_FRAMES],
            scratch_out: vec![0.0; SCRATCH_FRAMES],
        }
    }

    /// Sample rate in Hz, fixed at construction.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of channels (and kernels).
    pub fn channels(&self) -> usize {
        self.kernels.len()
    }

    /// Waveform the table was built from.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// The table shared by all kernels.
    pub fn table(&self) -> &Arc<WaveTable> {
        &self.table
    }

    /// The parameter store shared by all kernels.
    ///
    /// Clone the `Arc` to write parameters from another thread.
    pub fn parameters(&self) -> &Arc<Parameters> {
        &self.params
    }

    /// Kernel for `channel`.
    pub fn kernel(&self, channel: usize) -> Option<&ModulationKernel> {
        self.kernels.get(channel)
    }

    /// All kernels in channel order.
    pub fn kernels(&self) -> &[ModulationKernel] {
        &self.kernels
    }

    /// Requested modulation frequency in Hz, as written.
    pub fn frequency(&self) -> f32 {
        self.params.frequency()
    }

    /// Request a modulation frequency in Hz. Kernels clamp it to the
    /// descriptor range when they read it.
    pub fn set_frequency(&self, hz: f32) {
        self.params.set_frequency(hz);
    }

    /// Process one block of planar audio; kernel `k` handles channel `k`.
    ///
    /// `inputs` and `outputs` hold one slice per channel, all of the same
    /// length. With `silence` set nothing is written.
    pub fn process_planar(&mut self, inputs: &[&[f32]], outputs: &mut [&mut [f32]], silence: bool) {
        debug_assert_eq!(inputs.len(), self.kernels.len(), "one input per channel");
        debug_assert_eq!(outputs.len(), self.kernels.len(), "one output per channel");

        for ((kernel, input), output) in self
            .kernels
            .iter_mut()
            .zip(inputs.iter())
            .zip(outputs.iter_mut())
        {
            kernel.process(input, output, 1, silence);
        }
    }

    /// Process one block of interleaved audio.
    ///
    /// `input.len()` must be a multiple of [`channels`](Self::channels) and
    /// equal to `output.len()`. With `silence` set nothing is written.
    pub fn process_interleaved(&mut self, input: &[f32], output: &mut [f32], silence: bool) {
        let channels = self.kernels.len();
        if silence || channels == 0 {
            return;
        }
        debug_assert_eq!(input.len(), output.len(), "Input and output buffers must have same length");
        debug_assert_eq!(input.len() % channels, 0, "partial frame in interleaved buffer");

        let chunk = SCRATCH_FRAMES * channels;
        for (in_chunk, out_chunk) in input.chunks(chunk).zip(output.chunks_mut(chunk)) {
            let frames = in_chunk.len() / channels;
            for (ch, kernel) in self.kernels.iter_mut().enumerate() {
                for (frame, slot) in self.scratch_in[..frames].iter_mut().enumerate() {
                    *slot = in_chunk[frame * channels + ch];
                }
                kernel.process(
                    &self.scratch_in[..frames],
                    &mut self.scratch_out[..frames],
                    1,
                    false,
                );
                for (frame, &sample) in self.scratch_out[..frames].iter().enumerate() {
                    out_chunk[frame * channels + ch] = sample;
                }
            }
        }
    }

    /// Reset every kernel to its initial phase.
    pub fn reset(&mut self) {
        for kernel in &mut self.kernels {
            kernel.reset();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(channels = self.kernels.len(), "modulation effect reset");
    }

    /// Index into [`FACTORY_PRESETS`] of the last applied preset.
    pub fn current_preset(&self) -> Option<usize> {
        self.current_preset
    }

    /// Load the factory preset at `index`. Unknown indices change nothing.
    pub fn apply_factory_preset(&mut self, index: usize) -> Option<&'static FactoryPreset> {
        let preset = FACTORY_PRESETS.get(index)?;
        self.params.set_frequency(preset.frequency);
        self.current_preset = Some(index);
        Some(preset)
    }

    /// The effect keeps producing output after its input stops.
    pub fn supports_tail(&self) -> bool {
        true
    }

    /// Output stops the moment the input does: gain is applied per sample.
    pub fn tail_time_secs(&self) -> f32 {
        0.0
    }

    /// Processing latency in samples.
    pub fn latency_samples(&self) -> usize {
        0
    }
}

impl ParameterInfo for ModulationEffect {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.params.descriptor(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        self.params.get(index).unwrap_or(0.0)
    }

    fn set_param(&mut self, index: usize, value: f32) {
        self.params.set(index, value);
    }
}
