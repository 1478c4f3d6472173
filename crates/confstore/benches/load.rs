//! Load and lookup benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench load
//! ```

#![allow(clippy::expect_used)]

use confstore::{ConfigStore, find_tag};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;

/// Generate a configuration with `sections` sections of 20 keys each.
fn generate(sections: usize) -> String {
    let mut text = String::from("; generated\n");
    for s in 0..sections {
        let _ = writeln!(text, "[section{s}]");
        for k in 0..20 {
            let _ = writeln!(text, "db{k}.Host = 10.0.{s}.{k}");
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for sections in [10, 100, 1000] {
        let text = generate(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &text, |b, text| {
            b.iter(|| black_box(text.parse::<ConfigStore>().expect("generated config parses")));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let store: ConfigStore = generate(100).parse().expect("generated config parses");
    c.bench_function("get_nested_path", |b| {
        b.iter(|| black_box(store.get(black_box("section50.db10.Host"))));
    });
}

fn bench_find_tag(c: &mut Criterion) {
    let mut text = generate(100);
    text.push_str("Port = 3306\n");
    c.bench_function("find_tag_last_line", |b| {
        b.iter(|| black_box(find_tag(black_box(&text), "Port")));
    });
}

criterion_group!(benches, bench_parse, bench_lookup, bench_find_tag);
criterion_main!(benches);
