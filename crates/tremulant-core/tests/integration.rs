//! Integration tests for tremulant-core.
//!
//! Drives the kernel and the multi-channel effect through the public API and
//! checks the gain sequence sample by sample: table playback at exact scales,
//! cycle-aligned rate changes under automation, and cross-thread parameter
//! writes.

use std::sync::Arc;

use tremulant_core::{
    FREQUENCY_PARAM, Kernel, ModulationEffect, ModulationKernel, ParamDescriptor, ParameterInfo,
    Parameters, TABLE_SIZE, WaveTable, Waveform,
};

/// 40 kHz and 20 Hz give exactly one table entry per sample.
const UNIT_RATE: f32 = 40000.0;

fn kernel_with(waveform: Waveform, sample_rate: f32, frequency: f32) -> (ModulationKernel, Arc<Parameters>) {
    let params = Arc::new(Parameters::new());
    params.set_frequency(frequency);
    let table = Arc::new(WaveTable::new(waveform));
    (
        ModulationKernel::new(sample_rate, table, Arc::clone(&params)),
        params,
    )
}

fn run(kernel: &mut ModulationKernel, len: usize) -> Vec<f32> {
    let input = vec![1.0f32; len];
    let mut output = vec![0.0f32; len];
    kernel.process(&input, &mut output, 1, false);
    output
}

// ============================================================================
// Table playback
// ============================================================================

#[test]
fn unit_scale_replays_the_table() {
    for waveform in Waveform::ALL {
        let (mut kernel, _) = kernel_with(waveform, UNIT_RATE, 20.0);
        let table = WaveTable::new(waveform);

        let output = run(&mut kernel, 2 * TABLE_SIZE);
        assert_eq!(&output[..TABLE_SIZE], table.as_slice(), "{waveform} first cycle");
        assert_eq!(&output[TABLE_SIZE..], table.as_slice(), "{waveform} second cycle");
    }
}

#[test]
fn half_scale_holds_each_entry_for_two_samples() {
    let (mut kernel, _) = kernel_with(Waveform::Triangle, UNIT_RATE, 10.0);
    let table = WaveTable::new(Waveform::Triangle);

    let output = run(&mut kernel, 2 * TABLE_SIZE);
    for (n, &gain) in output.iter().enumerate() {
        assert_eq!(gain, table.gain(n / 2), "sample {n}");
    }
}

#[test]
fn output_is_input_times_gain() {
    let (mut kernel, _) = kernel_with(Waveform::Sine, UNIT_RATE, 20.0);
    let table = WaveTable::new(Waveform::Sine);

    let input: Vec<f32> = (0..TABLE_SIZE).map(|n| (n as f32 * 0.37).cos()).collect();
    let mut output = vec![0.0f32; TABLE_SIZE];
    kernel.process(&input, &mut output, 1, false);

    for n in 0..TABLE_SIZE {
        assert_eq!(output[n], input[n] * table.gain(n), "sample {n}");
    }
}

// ============================================================================
// Automation
// ============================================================================

#[test]
fn automation_mid_cycle_waits_for_next_cycle() {
    let (mut kernel, params) = kernel_with(Waveform::Triangle, UNIT_RATE, 20.0);
    let table = WaveTable::new(Waveform::Triangle);

    let head = run(&mut kernel, 500);
    assert_eq!(head.as_slice(), &table.as_slice()[..500]);

    // Halve the rate a quarter of the way through the cycle.
    params.set_frequency(10.0);
    let tail = run(&mut kernel, 1500 + 2 * TABLE_SIZE);

    // The rest of the first cycle still plays at the old rate.
    assert_eq!(&tail[..1500], &table.as_slice()[500..]);

    // The next cycle starts over at half rate.
    for (n, &gain) in tail[1500..].iter().enumerate() {
        assert_eq!(gain, table.gain(n / 2), "sample {n} after switch");
    }
    assert_eq!(kernel.state().current_scale, 0.5);
}

#[test]
fn out_of_range_automation_is_clamped() {
    let (mut fast, fast_params) = kernel_with(Waveform::Square, UNIT_RATE, 20.0);
    let (mut reference, _) = kernel_with(Waveform::Square, UNIT_RATE, 20.0);

    fast_params.set_frequency(250.0);
    assert_eq!(run(&mut fast, 5000), run(&mut reference, 5000));

    fast_params.set_frequency(f32::NAN);
    let (mut default_rate, _) = kernel_with(Waveform::Square, UNIT_RATE, 5.0);
    let mut fresh_fast = fast.clone();
    fresh_fast.reset();
    assert_eq!(run(&mut fresh_fast, 9000), run(&mut default_rate, 9000));
}

#[test]
fn custom_range_allows_faster_rates() {
    let params = Arc::new(Parameters::with_descriptor(ParamDescriptor::frequency_range(
        1.0, 100.0, 40.0,
    )));
    let table = Arc::new(WaveTable::new(Waveform::Square));
    let mut kernel = ModulationKernel::new(UNIT_RATE, Arc::clone(&table), params);

    // 40 Hz at 40 kHz advances two entries per sample.
    let output = run(&mut kernel, TABLE_SIZE);
    for (n, &gain) in output.iter().enumerate() {
        assert_eq!(gain, table.gain((2 * n) % TABLE_SIZE), "sample {n}");
    }
}

#[test]
fn parameter_writes_from_another_thread() {
    let mut effect = ModulationEffect::new(48000.0, 1);
    let params = Arc::clone(effect.parameters());

    let writer = std::thread::spawn(move || {
        for i in 0..1000 {
            params.set_frequency(2.0 + (i % 19) as f32);
        }
    });

    let input = vec![0.8f32; 256];
    let mut output = vec![0.0f32; 256];
    for _ in 0..200 {
        effect.process_planar(&[&input[..]], &mut [&mut output[..]], false);
        assert!(output.iter().all(|&s| (0.0..=0.8).contains(&s)));
    }
    writer.join().unwrap();
}

// ============================================================================
// Effect
// ============================================================================

#[test]
fn stereo_effect_keeps_channels_in_step() {
    let mut effect = ModulationEffect::with_waveform(UNIT_RATE, 2, Waveform::Sine);
    effect.set_param(FREQUENCY_PARAM, 20.0);
    let table = WaveTable::new(Waveform::Sine);

    let left = vec![1.0f32; TABLE_SIZE];
    let right = vec![-0.5f32; TABLE_SIZE];
    let mut out_l = vec![0.0f32; TABLE_SIZE];
    let mut out_r = vec![0.0f32; TABLE_SIZE];
    for start in (0..TABLE_SIZE).step_by(128) {
        let end = (start + 128).min(TABLE_SIZE);
        effect.process_planar(
            &[&left[start..end], &right[start..end]],
            &mut [&mut out_l[start..end], &mut out_r[start..end]],
            false,
        );
    }

    for n in 0..TABLE_SIZE {
        assert_eq!(out_l[n], table.gain(n));
        assert_eq!(out_r[n], -0.5 * table.gain(n));
    }
}

#[test]
fn effect_reset_restarts_the_cycle() {
    let mut effect = ModulationEffect::with_waveform(UNIT_RATE, 1, Waveform::Triangle);
    effect.set_frequency(20.0);

    let input = vec![1.0f32; 700];
    let mut first = vec![0.0f32; 700];
    let mut second = vec![0.0f32; 700];
    effect.process_interleaved(&input, &mut first, false);
    effect.reset();
    effect.process_interleaved(&input, &mut second, false);

    assert_eq!(first, second);
}
