use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symbols_benches::{unicode_data, unihan_data};
use symbols_prepare::{output, tables};
use symbols_source::properties::MAX_LEGAL_UTF32;
use symbols_source::{unicode, unihan, ParseOptions};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

fn symbols(c: &mut Criterion)
{
    let text = unicode_data(MAX_LEGAL_UTF32);
    let data = unicode::parse(text.as_bytes(), ParseOptions::default()).unwrap();
    let prepared = tables::prepare_symbol_tables(&data);

    let mut group = c.benchmark_group("symbols");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));
    group.sample_size(10);

    group.bench_function("parse", |b| {
        b.iter(|| unicode::parse(black_box(text.as_bytes()), ParseOptions::default()))
    });

    group.bench_function("prepare", |b| {
        b.iter(|| tables::prepare_symbol_tables(black_box(&data)).len())
    });

    group.bench_function("write", |b| {
        b.iter(|| output::write_symbol_tables(&mut io::sink(), black_box(&prepared)))
    });

    group.finish();
}

fn unihan(c: &mut Criterion)
{
    // CJK Ideograph Extension A ..= Extension H
    let text = unihan_data(0x3400, 0x323AF);
    let data = unihan::parse(text.as_bytes()).unwrap();
    let prepared = tables::prepare_unihan_table(&data);

    let mut group = c.benchmark_group("unihan");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    group.bench_function("parse", |b| b.iter(|| unihan::parse(black_box(text.as_bytes()))));

    group.bench_function("prepare", |b| {
        b.iter(|| tables::prepare_unihan_table(black_box(&data)).size)
    });

    group.bench_function("write", |b| {
        b.iter(|| output::write_unihan_table(&mut io::sink(), black_box(&prepared)))
    });

    group.finish();
}

criterion_group!(benches, symbols, unihan);
criterion_main!(benches);
