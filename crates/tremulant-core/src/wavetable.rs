//! Precomputed gain tables for one cycle of a periodic waveform.
//!
//! A [`WaveTable`] is built once, before the first block is processed, and is
//! immutable afterwards. Kernels hold it behind an `Arc` so every channel of
//! an effect reads the same table.
//!
//! All built-in waveforms are unipolar: every entry lies in `[0.0, 1.0]` and
//! is used directly as a gain factor.
//!
//! # Example
//!
//! ```rust
//! use tremulant_core::{TABLE_SIZE, WaveTable, Waveform};
//!
//! let table = WaveTable::new(Waveform::Square);
//! assert_eq!(table.len(), TABLE_SIZE);
//! assert_eq!(table.gain(0), 1.0);
//! assert_eq!(table.gain(TABLE_SIZE - 1), 0.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::f32::consts::TAU;
use core::fmt;
use libm::{fabsf, sinf};

/// Number of points in a standard wave table.
pub const TABLE_SIZE: usize = 2000;

/// Shape of one modulation cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Unipolar sine, `(sin + 1) / 2`. Starts at half gain, rising.
    #[default]
    Sine,
    /// Full-wave rectified sine, `|sin|`. Two gain humps per cycle.
    RectifiedSine,
    /// Full gain for the first half of the cycle, silence for the second.
    Square,
    /// Unipolar triangle, rising from silence to full gain and back.
    Triangle,
}

impl Waveform {
    /// Every waveform, in index order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::RectifiedSine,
        Waveform::Square,
        Waveform::Triangle,
    ];

    /// Stable lowercase name, as used in presets and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::RectifiedSine => "rectified_sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }

    /// Index of this waveform in [`Waveform::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Waveform::Sine => 0,
            Waveform::RectifiedSine => 1,
            Waveform::Square => 2,
            Waveform::Triangle => 3,
        }
    }

    /// Waveform at `index` in [`Waveform::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a waveform name (case-insensitive, `-` accepted for `_`).
    ///
    /// ```rust
    /// use tremulant_core::Waveform;
    ///
    /// assert_eq!(Waveform::from_name("Rectified-Sine"), Some(Waveform::RectifiedSine));
    /// assert_eq!(Waveform::from_name("saw"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| {
            let canonical = w.name();
            canonical.len() == name.len()
                && canonical
                    .bytes()
                    .zip(name.bytes())
                    .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'_' && b == b'-'))
        })
    }

    /// Gain at position `index` of a `len`-point table.
    #[inline]
    pub fn sample(self, index: usize, len: usize) -> f32 {
        let phase = index as f32 / len as f32;
        match self {
            Waveform::Sine => (sinf(phase * TAU) + 1.0) * 0.5,
            Waveform::RectifiedSine => fabsf(sinf(phase * TAU)),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Waveform::Triangle => {
                if phase < 0.5 {
                    2.0 * phase
                } else {
                    2.0 - 2.0 * phase
                }
            }
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from building a [`WaveTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveTableError {
    /// A table needs at least one entry to be indexed modulo its length.
    Empty,
}

impl fmt::Display for WaveTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "wave table must contain at least one value"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaveTableError {}

/// Fixed-length table of gain values covering one waveform cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTable {
    values: Vec<f32>,
}

impl WaveTable {
    /// Build a standard [`TABLE_SIZE`]-point table for `waveform`.
    pub fn new(waveform: Waveform) -> Self {
        Self::build(TABLE_SIZE, |i, len| waveform.sample(i, len))
    }

    /// Build a `len`-point table for `waveform`.
    pub fn with_len(waveform: Waveform, len: usize) -> Result<Self, WaveTableError> {
        Self::from_fn(len, |i, n| waveform.sample(i, n))
    }

    /// Build a `len`-point table from a generator `f(index, len)`.
    ///
    /// The generator is called exactly once per entry, in index order.
    pub fn from_fn<F>(len: usize, f: F) -> Result<Self, WaveTableError>
    where
        F: FnMut(usize, usize) -> f32,
    {
        if len == 0 {
            return Err(WaveTableError::Empty);
        }
        Ok(Self::build(len, f))
    }

    /// Wrap an explicit sequence of gains.
    ///
    /// ```rust
    /// use tremulant_core::WaveTable;
    ///
    /// let table = WaveTable::from_values([0.0, 1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(table.len(), 4);
    /// assert!(WaveTable::from_values(Vec::<f32>::new()).is_err());
    /// ```
    pub fn from_values(values: impl Into<Vec<f32>>) -> Result<Self, WaveTableError> {
        let values = values.into();
        if values.is_empty() {
            return Err(WaveTableError::Empty);
        }
        Ok(Self { values })
    }

    fn build<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let values = (0..len).map(|i| f(i, len)).collect();
        Self { values }
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: construction rejects empty tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gain stored at `index`. Panics if `index >= len()`.
    #[inline]
    pub fn gain(&self, index: usize) -> f32 {
        self.values[index]
    }

    /// All gains in index order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

impl Default for WaveTable {
    fn default() -> Self {
        Self::new(Waveform::default())
    }
}
