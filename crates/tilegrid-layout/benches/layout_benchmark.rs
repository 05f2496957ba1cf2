//! Layout resolution benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilegrid_core::{CompactType, Layout, LayoutItem};
use tilegrid_layout::{compact, move_element, MoveOptions};

/// A dashboard-sized layout: a static header and staggered cards below it.
fn dashboard(cards: u32) -> Layout {
    let header = LayoutItem::fixed("header", 0, 0, 12, 1);
    let items = (0..cards).map(|i| {
        let w = 2 + i % 3;
        LayoutItem::new(format!("card{i}"), (i * 3) % (12 - w + 1), 1 + i * 2, w, 1 + i % 2)
    });
    Layout::from_items(std::iter::once(header).chain(items)).unwrap_or_default()
}

fn compact_small(c: &mut Criterion) {
    let layout = dashboard(12);
    c.bench_function("compact_small", |b| {
        b.iter(|| compact(black_box(&layout), CompactType::Vertical, 12))
    });
}

fn compact_large(c: &mut Criterion) {
    let layout = dashboard(200);
    c.bench_function("compact_large", |b| {
        b.iter(|| compact(black_box(&layout), CompactType::Vertical, 12))
    });
}

fn move_cascade(c: &mut Criterion) {
    let layout = compact(&dashboard(60), CompactType::Vertical, 12);
    let options = MoveOptions::new(12);
    c.bench_function("move_cascade", |b| {
        b.iter(|| move_element(black_box(&layout), "card0", 0, 1, &options))
    });
}

criterion_group!(benches, compact_small, compact_large, move_cascade);
criterion_main!(benches);
