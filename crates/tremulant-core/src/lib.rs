//! Tremulant Core - wavetable amplitude modulation
//!
//! This crate provides the real-time part of the tremulant effect: a per-channel
//! kernel that multiplies audio by a gain read from a precomputed wave table,
//! and the multi-channel effect that owns one kernel per channel.
//!
//! # Core Abstractions
//!
//! ## Tables
//!
//! - [`WaveTable`] - Immutable gain table covering one waveform cycle
//! - [`Waveform`] - Built-in unipolar shapes (sine, rectified sine, square, triangle)
//!
//! ## Processing
//!
//! - [`Kernel`] - Block processing contract for a single channel
//! - [`ModulationKernel`] - Sample-count driven table reader with cycle-aligned rate changes
//! - [`ModulationEffect`] - n-in/n-out effect, one kernel per channel
//!
//! ## Parameters
//!
//! - [`Parameters`] - Lock-free store shared between host and kernels
//! - [`ParamDescriptor`] - Range, default and scaling metadata
//! - [`ParameterInfo`] - Host-facing parameter introspection
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tremulant-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature to log lifecycle events (construction and
//! reset). Nothing is logged from the processing path.
//!
//! # Example
//!
//! ```rust
//! use tremulant_core::{ModulationEffect, Waveform};
//!
//! let mut effect = ModulationEffect::with_waveform(44100.0, 1, Waveform::Sine);
//! effect.set_frequency(4.0);
//!
//! let input = [1.0f32; 512];
//! let mut output = [0.0f32; 512];
//! effect.process_planar(&[&input[..]], &mut [&mut output[..]], false);
//!
//! assert!(output.iter().all(|&g| (0.0..=1.0).contains(&g)));
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations, locks or logging while processing
//! - **Drift-free phase**: Table position derives from a sample count, never accumulated
//! - **Click-free rate changes**: New rates take effect only at a cycle start

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod effect;
pub mod kernel;
pub mod param_info;
pub mod params;
pub mod wavetable;

// Re-export main types at crate root
pub use effect::{
    COMPONENT_MANUFACTURER, COMPONENT_SUBTYPE, DEFAULT_PRESET, FACTORY_PRESETS, FactoryPreset,
    ModulationEffect, VERSION,
};
pub use kernel::{Kernel, KernelState, ModulationKernel, SAMPLE_LIMIT};
pub use param_info::{
    DEFAULT_FREQUENCY_HZ, FREQUENCY_PARAM, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, ParamDescriptor,
    ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo,
};
pub use params::{PARAM_COUNT, Parameters};
pub use wavetable::{TABLE_SIZE, WaveTable, WaveTableError, Waveform};
