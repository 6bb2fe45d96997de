// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation operations.
//!
//! Measures the performance of:
//! - Gallery page scanning (building the collection from markup)
//! - Navigation steps (next/previous with wraparound)
//! - Frame snapshot production

use criterion::{criterion_group, criterion_main, Criterion};
use iced_lightbox::gallery_scanner::Collection;
use iced_lightbox::lightbox::{Direction, Lightbox};
use iced_lightbox::media::MediaItem;
use std::hint::black_box;

fn synthetic_collection(size: usize) -> Collection {
    let items = (0..size)
        .map(|i| {
            if i % 5 == 0 {
                MediaItem::video(format!("clips/clip{i}.mp4"), format!("clip {i}"))
            } else {
                MediaItem::image(format!("images/img{i}.jpg"), String::new(), String::new())
            }
        })
        .collect();
    Collection::from_items(items)
}

fn synthetic_markup(figures: usize) -> String {
    let mut markup = String::from("<html><body><div class=\"gallery\">");
    for i in 0..figures {
        markup.push_str(&format!(
            "<figure><img src=\"images/img{i}.jpg\" alt=\"\"/><figcaption>item {i}</figcaption></figure>"
        ));
    }
    markup.push_str("</div></body></html>");
    markup
}

/// Benchmark scanning a gallery page into a collection.
fn bench_scan_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let markup = synthetic_markup(200);
    group.bench_function("scan_markup_200_figures", |b| {
        b.iter(|| {
            let collection = Collection::scan_markup(black_box(&markup)).unwrap();
            black_box(collection.len());
        });
    });

    group.finish();
}

/// Benchmark navigation steps over a large collection.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let mut viewer = Lightbox::new(synthetic_collection(1000));
    viewer.open(0);

    group.bench_function("navigate_next", |b| {
        b.iter(|| {
            viewer.navigate(Direction::Next);
            black_box(viewer.current_index());
        });
    });

    group.bench_function("navigate_previous", |b| {
        b.iter(|| {
            viewer.navigate(Direction::Previous);
            black_box(viewer.current_index());
        });
    });

    group.finish();
}

/// Benchmark producing the rendering snapshot.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let mut viewer = Lightbox::new(synthetic_collection(1000));
    viewer.open(500);

    group.bench_function("frame_snapshot", |b| {
        b.iter(|| {
            black_box(viewer.frame());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan_markup, bench_navigate, bench_frame);
criterion_main!(benches);
