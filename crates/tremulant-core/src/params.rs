//! Host-owned parameter values shared with the audio thread.
//!
//! [`Parameters`] stores each value as an `f32` bit-cast into an
//! [`AtomicU32`], so a UI or automation thread can write while the audio
//! thread reads without locks. Kernels hold the store behind an `Arc` and
//! read it once per processed block.
//!
//! Values are kept exactly as written. Range enforcement belongs to the
//! reader: a kernel clamps the Frequency it reads to the descriptor range, so
//! an out-of-range request is corrected rather than rejected.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::param_info::{FREQUENCY_PARAM, ParamDescriptor};

/// Number of parameters the effect exposes.
pub const PARAM_COUNT: usize = 1;

/// Lock-free parameter store.
///
/// ```rust
/// use tremulant_core::Parameters;
///
/// let params = Parameters::new();
/// params.set_frequency(8.0);
/// assert_eq!(params.frequency(), 8.0);
///
/// // Stored as written; the kernel clamps on read.
/// params.set_frequency(100.0);
/// assert_eq!(params.frequency(), 100.0);
/// ```
#[derive(Debug)]
pub struct Parameters {
    descriptors: [ParamDescriptor; PARAM_COUNT],
    values: [AtomicU32; PARAM_COUNT],
}

impl Parameters {
    /// Store with the standard Frequency descriptor, set to its default.
    pub fn new() -> Self {
        Self::with_descriptor(ParamDescriptor::frequency())
    }

    /// Store whose Frequency parameter uses `frequency` as its descriptor.
    pub fn with_descriptor(frequency: ParamDescriptor) -> Self {
        Self {
            descriptors: [frequency],
            values: [AtomicU32::new(frequency.default.to_bits())],
        }
    }

    /// Descriptor at `index`.
    pub fn descriptor(&self, index: usize) -> Option<&ParamDescriptor> {
        self.descriptors.get(index)
    }

    /// All descriptors in index order.
    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.descriptors
    }

    /// Descriptor of the Frequency parameter.
    pub fn frequency_descriptor(&self) -> &ParamDescriptor {
        &self.descriptors[FREQUENCY_PARAM]
    }

    /// Current value at `index` (lock-free).
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values
            .get(index)
            .map(|v| f32::from_bits(v.load(Ordering::Acquire)))
    }

    /// Writes the value at `index` (lock-free). Unknown indices are ignored.
    #[inline]
    pub fn set(&self, index: usize, value: f32) {
        if let Some(v) = self.values.get(index) {
            v.store(value.to_bits(), Ordering::Release);
        }
    }

    /// Requested modulation frequency in Hz, as last written.
    #[inline]
    pub fn frequency(&self) -> f32 {
        f32::from_bits(self.values[FREQUENCY_PARAM].load(Ordering::Acquire))
    }

    /// Writes the requested modulation frequency in Hz.
    #[inline]
    pub fn set_frequency(&self, hz: f32) {
        self.set(FREQUENCY_PARAM, hz);
    }

    /// Restores every value to its descriptor default.
    pub fn reset_to_defaults(&self) {
        for (value, desc) in self.values.iter().zip(self.descriptors.iter()) {
            value.store(desc.default.to_bits(), Ordering::Release);
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}
