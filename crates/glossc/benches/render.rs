//! Rendering throughput over wide and deep synthetic values.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gloss_fmt::{render, render_with_config, LayoutConfig};
use gloss_ir::{FieldValue, Value};

/// A map with many small record entries, typical of dumped state tables.
fn wide_value(entries: i64) -> Value {
    Value::map(
        (0..entries)
            .map(|i| {
                let record = Value::record(
                    "Entry",
                    vec![
                        FieldValue::new("id", Value::int(i)),
                        FieldValue::new("name", Value::str(format!("entry-{i}"))),
                    ],
                );
                (Value::str(format!("key-{i}")), record)
            })
            .collect(),
    )
}

/// A list nested `depth` levels deep.
fn deep_value(depth: usize) -> Value {
    let mut value = Value::int(0);
    for _ in 0..depth {
        value = Value::list(vec![value]);
    }
    value
}

fn bench_render(c: &mut Criterion) {
    let wide = wide_value(1_000);
    c.bench_function("render_wide_map", |b| b.iter(|| render(black_box(&wide))));

    let deep = deep_value(200);
    let narrow = LayoutConfig::with_max_width(40);
    c.bench_function("render_deep_list_narrow", |b| {
        b.iter(|| render_with_config(black_box(&deep), &narrow))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
