use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oscr_mdl::{build_code, encode, estimate_sizes, write_cells};

/// Two homogeneous blocks, the fully separated state.
fn generate_blocks(size: usize) -> Vec<char> {
    let half = size / 2;
    ("1".repeat(half) + &"0".repeat(size - half))
        .chars()
        .collect()
}

/// Pseudo-random binary cells (simulating a well-mixed state)
fn generate_mixed(size: usize) -> Vec<char> {
    let mut seed = 12345u64;
    let mut cells = Vec::with_capacity(size);

    for _ in 0..size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        cells.push(if (seed >> 16) & 1 == 1 { '1' } else { '0' });
    }
    cells
}

/// Packs up to eight '0'/'1' cells into one symbol.
fn pack_bits(chunk: &[char]) -> u32 {
    chunk
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit == '1'))
}

/// A serialized grid with a boundary region, as produced by a simulation.
fn generate_grid(side: usize) -> Vec<char> {
    let rows: Vec<Vec<u8>> = (0..side)
        .map(|r| (0..side).map(|c| u8::from(r + c < side)).collect())
        .collect();
    write_cells(&rows).chars().collect()
}

fn bench_encode(c: &mut Criterion) {
    let sizes = [100, 400, 1_000];
    let mut group = c.benchmark_group("encode");

    for size in sizes.iter() {
        let blocks = generate_blocks(*size);
        let mixed = generate_mixed(*size);

        group.bench_with_input(BenchmarkId::new("blocks", size), &blocks, |b, data| {
            b.iter(|| black_box(encode(black_box(data), 2, 400)))
        });

        group.bench_with_input(BenchmarkId::new("mixed", size), &mixed, |b, data| {
            b.iter(|| black_box(encode(black_box(data), 2, 400)))
        });
    }

    group.finish();
}

fn bench_build_code(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("build_code");

    for size in sizes.iter() {
        let data: Vec<u32> = generate_mixed(*size)
            .chunks(8)
            .map(pack_bits)
            .collect();

        group.bench_with_input(BenchmarkId::new("bytes", size), &data, |b, data| {
            b.iter(|| black_box(build_code(black_box(data))))
        });
    }

    group.finish();
}

fn bench_estimate_grid(c: &mut Criterion) {
    let sides = [8, 16, 24];
    let mut group = c.benchmark_group("estimate_grid");

    for side in sides.iter() {
        let data = generate_grid(*side);

        group.bench_with_input(BenchmarkId::new("diagonal", side), &data, |b, data| {
            b.iter(|| black_box(estimate_sizes(black_box(data))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_build_code, bench_estimate_grid);
criterion_main!(benches);
