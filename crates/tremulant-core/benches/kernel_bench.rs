//! Criterion benchmarks for the modulation kernel and effect
//!
//! Run with: cargo bench -p tremulant-core
#![allow(missing_docs)]

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tremulant_core::{
    Kernel, ModulationEffect, ModulationKernel, Parameters, WaveTable, Waveform,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("ModulationKernel");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        let mut output = vec![0.0f32; block_size];

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, _| {
                let params = Arc::new(Parameters::new());
                let table = Arc::new(WaveTable::new(Waveform::Sine));
                let mut kernel = ModulationKernel::new(SAMPLE_RATE, table, params);
                b.iter(|| {
                    kernel.process(black_box(&input), black_box(&mut output), 1, false);
                });
            },
        );
    }

    // Rate automated every block, so switches land at each cycle start
    group.bench_function("process_automated_512", |b| {
        let input = generate_test_signal(512);
        let mut output = vec![0.0f32; 512];
        let params = Arc::new(Parameters::new());
        let table = Arc::new(WaveTable::new(Waveform::Triangle));
        let mut kernel = ModulationKernel::new(SAMPLE_RATE, table, Arc::clone(&params));
        let mut step = 0u32;
        b.iter(|| {
            step = step.wrapping_add(1);
            params.set_frequency(2.0 + (step % 18) as f32);
            kernel.process(black_box(&input), black_box(&mut output), 1, false);
        });
    });

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("WaveTable");

    for waveform in Waveform::ALL {
        group.bench_function(waveform.name(), |b| {
            b.iter(|| black_box(WaveTable::new(black_box(waveform))));
        });
    }

    group.finish();
}

fn bench_effect(c: &mut Criterion) {
    let mut group = c.benchmark_group("ModulationEffect");

    for &block_size in BLOCK_SIZES {
        let left = generate_test_signal(block_size);
        let right = generate_test_signal(block_size);
        let interleaved: Vec<f32> = left
            .iter()
            .zip(right.iter())
            .flat_map(|(&l, &r)| [l, r])
            .collect();

        group.bench_with_input(
            BenchmarkId::new("stereo_planar", block_size),
            &block_size,
            |b, &size| {
                let mut effect = ModulationEffect::new(SAMPLE_RATE, 2);
                let mut out_l = vec![0.0f32; size];
                let mut out_r = vec![0.0f32; size];
                b.iter(|| {
                    effect.process_planar(
                        black_box(&[&left[..], &right[..]]),
                        &mut [&mut out_l[..], &mut out_r[..]],
                        false,
                    );
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("stereo_interleaved", block_size),
            &block_size,
            |b, &size| {
                let mut effect = ModulationEffect::new(SAMPLE_RATE, 2);
                let mut output = vec![0.0f32; size * 2];
                b.iter(|| {
                    effect.process_interleaved(black_box(&interleaved), &mut output, false);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_table_build, bench_effect);
criterion_main!(benches);
