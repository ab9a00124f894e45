use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lanebits::config::{CapabilityTier, ExecutionContext};
use lanebits::dispatch::Kernels;

const WORDS: usize = 1024;

// Spread-out words so every rotate amount moves set bits
fn generate_data(size: usize) -> Vec<u64> {
    (0..size as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

fn strategy_benchmarks(c: &mut Criterion) {
    let data = generate_data(WORDS);

    let mut group = c.benchmark_group("Primitive strategies per tier");

    for tier in CapabilityTier::ALL {
        let k = Kernels::resolve(ExecutionContext::Lane, tier, true);

        group.bench_with_input(format!("rotl64 ({tier})"), &data, |b, data| {
            b.iter(|| {
                data.iter()
                    .enumerate()
                    .fold(0u64, |acc, (i, &x)| acc ^ (k.rotl64)(black_box(x), i as u32 & 63))
            })
        });

        group.bench_with_input(format!("swab64 ({tier})"), &data, |b, data| {
            b.iter(|| data.iter().fold(0u64, |acc, &x| acc ^ (k.swab64)(black_box(x))))
        });
    }

    let fused = Kernels::resolve(ExecutionContext::Lane, CapabilityTier::Baseline, true);
    let generic = Kernels::REFERENCE;
    for (label, k) in [("fused", fused), ("generic", generic)] {
        group.bench_with_input(format!("xor8 + xandx ({label})"), &data, |b, data| {
            b.iter(|| {
                data.chunks_exact(8).fold(0u64, |acc, w| {
                    let x = (k.xor8)(w[0], w[1], w[2], w[3], w[4], w[5], w[6], w[7]);
                    (k.xandx)(black_box(x), acc, w[0])
                })
            })
        });
    }

    group.finish();
}

criterion_group!(benches, strategy_benchmarks);
criterion_main!(benches);
