//! trisvg benchmarks
//!
//! Run with: cargo bench -p trisvg-bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trisvg_bench::generate_svg;
use trisvg_core::{convert_str, extract_paths, normalize, parse_scene, ConvertConfig};

const SIZES: [(&str, usize); 3] = [("small", 100), ("medium", 2_000), ("large", 20_000)];

fn extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for (name, n) in SIZES {
        let svg = generate_svg(n);
        group.throughput(Throughput::Bytes(svg.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract_paths", name), &svg, |b, svg| {
            b.iter(|| extract_paths(svg))
        });
        group.bench_with_input(BenchmarkId::new("parse_scene", name), &svg, |b, svg| {
            b.iter(|| parse_scene(svg))
        });
    }

    group.finish();
}

fn normalize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let config = ConvertConfig::default();

    for (name, n) in SIZES {
        let Ok(scene) = parse_scene(&generate_svg(n)) else {
            continue;
        };
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("normalize", name), &scene, |b, scene| {
            b.iter(|| normalize(scene, &config.normalize))
        });
    }

    group.finish();
}

fn pipeline_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = ConvertConfig::default();

    for (name, n) in SIZES {
        let svg = generate_svg(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("convert_str", name), &svg, |b, svg| {
            b.iter(|| convert_str(svg, &config))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    extraction_benchmarks,
    normalize_benchmarks,
    pipeline_benchmarks,
);

criterion_main!(benches);
