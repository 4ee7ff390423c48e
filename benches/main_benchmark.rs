use ratio64::{best_approximation, Rational};

fn test_harmonic_sum() {
    // The denominators grow quickly, and stress the lcm and the reduction.
    let mut sum = Rational::ZERO;
    for i in 1..40 {
        sum += Rational::new(1, i);
    }
    black_box(sum);
}

fn test_checked_ops() {
    let a = Rational::new(123417, 23572);
    let b = Rational::new(-355, 113);
    for _ in 0..100 {
        black_box(a.overflowing_add(b));
        black_box(a.overflowing_sub(b));
        black_box(a.overflowing_mul(b));
        black_box(a.overflowing_div(b));
        black_box(a.overflowing_rem(b));
    }
}

fn test_compare() {
    let a = Rational::new(i64::MAX - 1, i64::MAX);
    let b = Rational::new(i64::MAX - 2, i64::MAX - 1);
    for _ in 0..100 {
        black_box(a < b);
        black_box(a == b);
    }
}

fn test_approx_pi() {
    black_box(best_approximation(std::f64::consts::PI, 1e-15));
}

fn test_approx_sqrt_2() {
    black_box(Rational::from_f64(std::f64::consts::SQRT_2));
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_harmonic_sum", |b| b.iter(test_harmonic_sum));
    c.bench_function("test_checked_ops", |b| b.iter(test_checked_ops));
    c.bench_function("test_compare", |b| b.iter(test_compare));
    c.bench_function("test_approx_pi", |b| b.iter(test_approx_pi));
    c.bench_function("test_approx_sqrt_2", |b| b.iter(test_approx_sqrt_2));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
