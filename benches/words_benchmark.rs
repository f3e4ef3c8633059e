// ============================================================================
// Jewellery Pricing Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Grouping - Raw spell-out per lexicon at each magnitude
// 2. Formatting - Full two-language rendering with rounding and suffixes
// 3. Quoting - End-to-end price quote including four word renderings
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jewellery_pricing::prelude::*;
use rust_decimal::Decimal;

const MAGNITUDES: [u64; 5] = [7, 999, 99_999, 12_34_567, 98_76_54_32_101];

fn benchmark_spell_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_out");

    for n in MAGNITUDES.iter() {
        group.bench_with_input(BenchmarkId::new("en-IN", n), n, |b, &n| {
            b.iter(|| black_box(spell_out(&IndianEnglish, n)));
        });
        group.bench_with_input(BenchmarkId::new("hi-IN", n), n, |b, &n| {
            b.iter(|| black_box(spell_out(&Hindi, n)));
        });
    }

    group.finish();
}

fn benchmark_format_amount(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_amount");

    for n in MAGNITUDES.iter() {
        let amount = *n as f64 + 0.5;
        group.bench_with_input(BenchmarkId::from_parameter(n), &amount, |b, &amount| {
            b.iter(|| black_box(format_amount(Some(amount))));
        });
    }

    group.finish();
}

fn benchmark_quote(c: &mut Criterion) {
    let calculator = match PriceCalculator::new(PricingConfig::default()) {
        Ok(calculator) => calculator,
        Err(err) => panic!("default configuration is invalid: {}", err),
    };
    let id = ItemId::new("1");

    c.bench_function("quote_gold_10g", |b| {
        b.iter(|| black_box(calculator.quote(Metal::Gold, &id, Decimal::from(10))));
    });
}

criterion_group!(
    benches,
    benchmark_spell_out,
    benchmark_format_amount,
    benchmark_quote
);
criterion_main!(benches);
