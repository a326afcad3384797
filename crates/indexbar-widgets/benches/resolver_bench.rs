//! Benchmark: active-anchor resolution and sticky layout per scroll.
//!
//! Run with: `cargo bench -p indexbar-widgets --bench resolver_bench`
//!
//! A scroll handler runs on every scroll frame, so resolution plus layout
//! must stay well under a frame budget even for long lists.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use indexbar_core::geometry::Rect;
use indexbar_core::scroll::{ElementId, ScrollHost, VirtualScroller};
use indexbar_widgets::index_bar::{
    AnchorSection, ChildRect, IndexBar, IndexBarConfig, StickyContext, resolve_active,
};

const SECTION_HEIGHT: f32 = 240.0;
const HEADER_HEIGHT: f32 = 28.0;

fn rects(n: usize) -> Vec<ChildRect> {
    (0..n)
        .map(|i| ChildRect {
            height: HEADER_HEIGHT,
            top: i as f32 * SECTION_HEIGHT,
        })
        .collect()
}

fn sections(n: usize) -> Vec<AnchorSection> {
    (0..n)
        .map(|i| {
            AnchorSection::new(format!("S{i}"), ElementId::new(i as u64))
                .height(HEADER_HEIGHT)
                .rect_top(i as f32 * SECTION_HEIGHT)
                .parent_height(SECTION_HEIGHT)
        })
        .collect()
}

// ===========================================================================
// Resolver alone
// ===========================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_active");
    for n in [26usize, 256, 4096] {
        let rects = rects(n);
        let bottom = n as f32 * SECTION_HEIGHT;
        group.bench_with_input(BenchmarkId::new("top", n), &rects, |b, rects| {
            b.iter(|| black_box(resolve_active(black_box(0.0), rects, 0.0)));
        });
        group.bench_with_input(BenchmarkId::new("bottom", n), &rects, |b, rects| {
            b.iter(|| black_box(resolve_active(black_box(bottom), rects, 0.0)));
        });
    }
    group.finish();
}

// ===========================================================================
// Sticky layout
// ===========================================================================

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sticky_layout");
    for n in [26usize, 256] {
        let rects = rects(n);
        let sections = sections(n);
        let scroll_top = (n / 2) as f32 * SECTION_HEIGHT + 10.0;
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let active = resolve_active(scroll_top, &rects, 0.0);
                let ctx = StickyContext {
                    active,
                    scroll_top,
                    rects: &rects,
                    scroller_rect: Rect::default(),
                    sticky_offset_top: 0.0,
                };
                black_box(ctx.layout(sections.iter()))
            });
        });
    }
    group.finish();
}

// ===========================================================================
// Full scroll pass through the widget
// ===========================================================================

fn bench_on_scroll(c: &mut Criterion) {
    let n = 256;
    let mut host = VirtualScroller::window(800.0, n as f32 * SECTION_HEIGHT);
    let mut bar = IndexBar::new(IndexBarConfig::default());
    for section in sections(n) {
        host.set_element(section.element, section.rect_top);
        bar.register(section);
    }
    bar.mount(&host);

    let max = host.max_scroll_top();
    let mut offset = 0.0_f32;
    c.bench_function("index_bar/on_scroll/256", |b| {
        b.iter(|| {
            offset = (offset + 37.0) % max;
            host.set_scroll_top(offset);
            black_box(bar.on_scroll(&host).pinned);
            black_box(host.scroll_top())
        });
    });
}

criterion_group!(benches, bench_resolve, bench_layout, bench_on_scroll);
criterion_main!(benches);
