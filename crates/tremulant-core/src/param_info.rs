//! Parameter metadata for hosts and user interfaces.
//!
//! The effect exposes a single parameter, "Frequency", but hosts discover it
//! the same way they would discover any number of parameters: through the
//! index-based [`ParameterInfo`] trait and the [`ParamDescriptor`] it returns.
//!
//! A descriptor carries everything a host needs to draw a control and to
//! record automation: display names, unit, range, default, a stable
//! [`ParamId`], capability [`ParamFlags`] and the [`ParamScale`] used to map
//! the plain value onto a normalized `[0.0, 1.0]` control position.
//!
//! # Example
//!
//! ```rust
//! use tremulant_core::{ParamDescriptor, ParamScale, ParamUnit};
//!
//! let freq = ParamDescriptor::frequency();
//! assert_eq!(freq.unit, ParamUnit::Hertz);
//! assert_eq!(freq.scale, ParamScale::Logarithmic);
//! assert_eq!(freq.clamp(100.0), freq.max);
//! ```
//!
//! # no_std Support
//!
//! This module is fully `no_std` compatible with no heap allocations required.

/// Lowest accepted modulation frequency in Hz.
pub const MIN_FREQUENCY_HZ: f32 = 2.0;

/// Highest accepted modulation frequency in Hz.
pub const MAX_FREQUENCY_HZ: f32 = 20.0;

/// Frequency used on construction and by the default factory preset.
pub const DEFAULT_FREQUENCY_HZ: f32 = 5.0;

/// Index of the Frequency parameter.
pub const FREQUENCY_PARAM: usize = 0;

/// Scaling curve between a plain value and a normalized control position.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value / min) / ln(max / min)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values. Requires `min > 0.0`.
    Logarithmic,
}

/// Stable parameter identifier that survives reordering.
///
/// Used for automation recording and preset persistence; once assigned it
/// never changes for a given parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use tremulant_core::ParamFlags;
///
/// let flags = ParamFlags::READABLE.union(ParamFlags::WRITABLE);
/// assert!(flags.contains(ParamFlags::READABLE));
/// assert!(!flags.contains(ParamFlags::AUTOMATABLE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host may read the current value.
    pub const READABLE: Self = Self(1 << 0);
    /// Host may write the value.
    pub const WRITABLE: Self = Self(1 << 1);
    /// Host may record and play back automation.
    pub const AUTOMATABLE: Self = Self(1 << 2);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::READABLE
            .union(Self::WRITABLE)
            .union(Self::AUTOMATABLE)
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz, for rates and frequencies.
    Hertz,
    /// Dimensionless value.
    None,
}

impl ParamUnit {
    /// Suffix appended to a formatted value.
    ///
    /// ```rust
    /// use tremulant_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

/// Metadata describing one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full display name.
    pub name: &'static str,
    /// Short name for narrow displays, at most 8 characters.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Lowest accepted value.
    pub min: f32,
    /// Highest accepted value.
    pub max: f32,
    /// Value on construction and after loading the default preset.
    pub default: f32,
    /// Suggested increment for stepped controls.
    pub step: f32,
    /// Stable numeric id.
    pub id: ParamId,
    /// Stable string id used in presets and on the command line.
    pub string_id: &'static str,
    /// Control curve.
    pub scale: ParamScale,
    /// Host capabilities.
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// The modulation "Frequency" parameter: 2–20 Hz, default 5 Hz,
    /// logarithmic control.
    pub const fn frequency() -> Self {
        Self::frequency_range(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ, DEFAULT_FREQUENCY_HZ)
    }

    /// A Frequency parameter with a custom range.
    ///
    /// For hosts that want a wider or narrower rate control than
    /// [`frequency`](Self::frequency). `min` must be positive for the
    /// logarithmic scale to be meaningful.
    pub const fn frequency_range(min: f32, max: f32, default: f32) -> Self {
        Self {
            name: "Frequency",
            short_name: "Freq",
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 0.1,
            id: ParamId(0),
            string_id: "frequency",
            scale: ParamScale::Logarithmic,
            flags: ParamFlags::READABLE
                .union(ParamFlags::WRITABLE)
                .union(ParamFlags::AUTOMATABLE),
        }
    }

    /// Sets the stable id and string id.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the control curve.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the capability flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Clamps a value to `[min, max]`.
    ///
    /// NaN is not a position in the range; it maps to `default`.
    ///
    /// ```rust
    /// use tremulant_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::frequency();
    /// assert_eq!(desc.clamp(0.5), 2.0);
    /// assert_eq!(desc.clamp(f32::INFINITY), 20.0);
    /// assert_eq!(desc.clamp(f32::NAN), desc.default);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Converts a plain value to a normalized control position in `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let value = self.clamp(value);
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return (value - self.min) / range;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized control position back to a plain value.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let normalized = normalized.clamp(0.0, 1.0);
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min + normalized * (self.max - self.min);
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}

/// Index-based parameter introspection.
///
/// Indices are stable for the lifetime of the implementor and range over
/// `0..param_count()`. Out-of-range indices yield `None` / `0.0` and writes
/// to them are ignored.
pub trait ParameterInfo {
    /// Number of exposed parameters.
    fn param_count(&self) -> usize;

    /// Descriptor at `index`, or `None` for an unknown parameter.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value at `index`; `0.0` for an unknown parameter.
    fn get_param(&self, index: usize) -> f32;

    /// Writes the value at `index`. Unknown indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Finds a parameter by name, short name or string id (case-insensitive).
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|d| {
                d.name.eq_ignore_ascii_case(name)
                    || d.short_name.eq_ignore_ascii_case(name)
                    || d.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}
