//! Per-channel wavetable amplitude-modulation kernel.
//!
//! A [`ModulationKernel`] multiplies each input sample by a gain read from a
//! shared [`WaveTable`]. The table position is not accumulated incrementally;
//! it is derived from the number of samples processed since the last reset:
//!
//! ```text
//! index = floor(samples_processed * current_scale) mod table_len
//! ```
//!
//! where `current_scale` is the number of table entries to advance per
//! sample. A new scale requested through the Frequency parameter is held as
//! `pending_scale` and adopted only on a sample whose index is exactly zero,
//! i.e. at the start of a waveform cycle. Rate changes therefore never cut a
//! cycle short and never jump the gain mid-cycle.
//!
//! The sample counter is also folded back to zero at a cycle start once it
//! reaches [`SAMPLE_LIMIT`], which keeps the multiplication well inside the
//! precise range of `f64` without changing the index sequence.
//!
//! One kernel handles exactly one channel. Multi-channel effects create one
//! kernel per channel (see [`ModulationEffect`](crate::ModulationEffect)).

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::params::Parameters;
use crate::wavetable::WaveTable;

/// Sample count after which the counter is folded back to zero at the next
/// cycle start. About 100 seconds of 96 kHz audio.
pub const SAMPLE_LIMIT: u64 = 10_000_000;

/// Block processing contract between a host and a single-channel kernel.
///
/// The host calls [`process`](Self::process) with contiguous blocks in order,
/// never concurrently, and calls [`reset`](Self::reset) between blocks when
/// the stream restarts.
pub trait Kernel {
    /// Process one block of `input` into `output`.
    ///
    /// `channels` is always 1: a kernel owns a single channel. When `silence`
    /// is set the input is known to be all zeros; the kernel does nothing and
    /// leaves `output` for the host to fill.
    ///
    /// `input` and `output` must have the same length.
    fn process(&mut self, input: &[f32], output: &mut [f32], channels: u32, silence: bool);

    /// Return to the initial state. Idempotent.
    fn reset(&mut self);
}

/// Snapshot of a kernel's phase bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelState {
    /// Samples processed since the last scale change or counter fold.
    pub samples_processed: u64,
    /// Table entries advanced per sample, in effect.
    pub current_scale: f64,
    /// Table entries advanced per sample, most recently requested.
    pub pending_scale: f64,
}

impl KernelState {
    /// State of a freshly built or reset kernel.
    pub const INITIAL: Self = Self {
        samples_processed: 0,
        current_scale: 0.0,
        pending_scale: 0.0,
    };
}

/// Single-channel amplitude-modulation kernel.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tremulant_core::{Kernel, ModulationKernel, Parameters, WaveTable, Waveform};
///
/// let table = Arc::new(WaveTable::new(Waveform::Sine));
/// let params = Arc::new(Parameters::new());
/// params.set_frequency(4.0);
///
/// let mut kernel = ModulationKernel::new(48000.0, table, params);
/// let input = [0.5f32; 256];
/// let mut output = [0.0f32; 256];
/// kernel.process(&input, &mut output, 1, false);
/// assert!(output.iter().all(|s| (0.0..=0.5).contains(s)));
/// ```
#[derive(Debug, Clone)]
pub struct ModulationKernel {
    table: Arc<WaveTable>,
    params: Arc<Parameters>,
    sample_rate: f32,
    samples_processed: u64,
    current_scale: f64,
    pending_scale: f64,
}

impl ModulationKernel {
    /// Create a kernel for a stream running at `sample_rate` Hz.
    ///
    /// The sample rate is fixed for the lifetime of the kernel.
    pub fn new(sample_rate: f32, table: Arc<WaveTable>, params: Arc<Parameters>) -> Self {
        Self {
            table,
            params,
            sample_rate,
            samples_processed: 0,
            current_scale: 0.0,
            pending_scale: 0.0,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The shared gain table.
    pub fn table(&self) -> &Arc<WaveTable> {
        &self.table
    }

    /// The shared parameter store.
    pub fn parameters(&self) -> &Arc<Parameters> {
        &self.params
    }

    /// Current phase bookkeeping.
    pub fn state(&self) -> KernelState {
        KernelState {
            samples_processed: self.samples_processed,
            current_scale: self.current_scale,
            pending_scale: self.pending_scale,
        }
    }

    /// Table index the next sample starts from, before any pending switch.
    #[inline]
    pub fn current_index(&self) -> usize {
        let position = libm::floor(self.samples_processed as f64 * self.current_scale);
        (position as u64 % self.table.len() as u64) as usize
    }

    /// Table entries advanced per sample for `frequency` Hz, after clamping
    /// to the Frequency descriptor range.
    pub fn scale_for(&self, frequency: f32) -> f64 {
        let frequency = self.params.frequency_descriptor().clamp(frequency);
        let samples_per_cycle = f64::from(self.sample_rate) / f64::from(frequency);
        self.table.len() as f64 / samples_per_cycle
    }

    /// Process one block at an explicit modulation frequency.
    ///
    /// Same algorithm as [`Kernel::process`], for hosts that keep the
    /// parameter value themselves instead of in the shared store.
    pub fn process_at(&mut self, frequency: f32, input: &[f32], output: &mut [f32], silence: bool) {
        if silence {
            return;
        }
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );

        self.pending_scale = self.scale_for(frequency);

        for (inp, out) in input.iter().zip(output.iter_mut()) {
            let index = self.current_index();

            // Rate changes wait for the start of a cycle.
            if self.pending_scale != self.current_scale && index == 0 {
                self.current_scale = self.pending_scale;
                self.samples_processed = 0;
            }

            if self.samples_processed >= SAMPLE_LIMIT && index == 0 {
                self.samples_processed = 0;
            }

            *out = *inp * self.table.gain(index);
            self.samples_processed += 1;
        }
    }
}

impl Kernel for ModulationKernel {
    fn process(&mut self, input: &[f32], output: &mut [f32], channels: u32, silence: bool) {
        debug_assert_eq!(channels, 1, "a kernel processes exactly one channel");
        let frequency = self.params.frequency();
        self.process_at(frequency, input, output, silence);
    }

    fn reset(&mut self) {
        self.samples_processed = 0;
        self.current_scale = 0.0;
        self.pending_scale = 0.0;
    }
}
