use std::hint::black_box;
use std::str::FromStr;

use criterion::{Criterion, criterion_group, criterion_main};

use bigdec::{BigDecimal, Context};

fn bench_addition(c: &mut Criterion) {
    c.bench_function("bigdec_addition", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        let y = BigDecimal::from_str("987654321 E-6").unwrap();
        b.iter(|| black_box(black_box(&x) + black_box(&y)));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("bigdec_subtraction", |b| {
        let x = BigDecimal::from_str("987654321 E-6").unwrap();
        let y = BigDecimal::from_str("123456789 E-6").unwrap();
        b.iter(|| black_box(black_box(&x) - black_box(&y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("bigdec_multiplication", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        let y = BigDecimal::from_str("9876543 E-6").unwrap();
        b.iter(|| black_box(black_box(&x) * black_box(&y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("bigdec_division", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        let y = BigDecimal::from_str("9876543 E-6").unwrap();
        let cx = Context::default();
        b.iter(|| black_box(black_box(&x).try_div(black_box(&y), &cx).unwrap()));
    });
}

fn bench_sqrt(c: &mut Criterion) {
    c.bench_function("bigdec_sqrt", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        let cx = Context::default();
        b.iter(|| black_box(black_box(&x).try_sqrt(&cx).unwrap()));
    });
}

fn bench_comparison(c: &mut Criterion) {
    c.bench_function("bigdec_comparison", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        let y = BigDecimal::from_str("12345679 E-5").unwrap();
        b.iter(|| black_box(black_box(&x) < black_box(&y)));
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("bigdec_parsing", |b| {
        b.iter(|| black_box(BigDecimal::from_str("123456789 E-6").unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("bigdec_formatting", |b| {
        let x = BigDecimal::from_str("123456789 E-6").unwrap();
        b.iter(|| black_box(x.to_string()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_sqrt,
    bench_comparison,
    bench_parsing,
    bench_formatting,
);
criterion_main!(benches);
