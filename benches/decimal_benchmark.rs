// ============================================================================
// BigDecimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - String to BigDecimal at several magnitudes
// 2. Arithmetic - Exact add/multiply and precision-bounded division
// 3. Conversion - Exact f64 decimalization and lossy readback
// 4. Display - Canonical string rendering
// ============================================================================

use bigdec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SMALL: &str = "3.14159";
const MEDIUM: &str = "892.49845085";
const LARGE: &str = "538437127.6885624128534910641217728402198359240468586590941685041824626303457064763881241742881658983536931930686654161047875956955570297142562156688348779691316235515151564826986236851388676597509";

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (label, input) in [("small", SMALL), ("medium", MEDIUM), ("large", LARGE)] {
        group.bench_with_input(BenchmarkId::new("parse", label), &input, |b, input| {
            b.iter(|| black_box(input.parse::<BigDecimal>().unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let small: BigDecimal = SMALL.parse().unwrap();
    let medium: BigDecimal = MEDIUM.parse().unwrap();
    let large: BigDecimal = LARGE.parse().unwrap();

    group.bench_function("add_aligned_exponents", |b| {
        b.iter(|| black_box(&small + &small));
    });

    group.bench_function("add_cross_magnitude", |b| {
        b.iter(|| black_box(&small + &large));
    });

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(&medium * &large));
    });

    for precision in [10u32, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("divide", precision),
            &precision,
            |b, &precision| {
                b.iter(|| black_box(large.div_with_precision(&medium, precision)));
            },
        );
    }

    group.bench_function("pow_2_1800", |b| {
        b.iter(|| black_box(BigDecimal::pow(2.0, 1800.0).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("from_f64_exact", |b| {
        b.iter(|| black_box(BigDecimal::try_from_f64(3.14159).unwrap()));
    });

    let large: BigDecimal = LARGE.parse().unwrap();
    group.bench_function("to_f64_lossy", |b| {
        b.iter(|| black_box(large.to_f64()));
    });

    group.finish();
}

// ============================================================================
// Display Benchmarks
// ============================================================================

fn benchmark_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    for (label, input) in [("small", SMALL), ("large", LARGE)] {
        let value: BigDecimal = input.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("to_string", label), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_conversion,
    benchmark_display
);
criterion_main!(benches);
