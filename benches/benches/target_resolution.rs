// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tour::testing::{MockElement, MockPage};
use understory_tour::{
    Sizing, SizingEvent, SizingPhase, Step, Target, highlighted_rect, resolve_element,
};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// A page with a `cols x rows` grid of `.cell-N` elements; every third one is hidden.
fn grid_page(cols: usize, rows: usize) -> (MockPage, Vec<String>) {
    let mut page = MockPage::new(VIEWPORT).with_document_size(Size::new(1280.0, 8000.0));
    page.add("#target", Rect::new(600.0, 380.0, 680.0, 420.0));
    let mut selectors = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            let i = y * cols + x;
            let selector = format!(".cell-{i}");
            let x0 = x as f64 * 40.0;
            let y0 = y as f64 * 30.0;
            let el = page.add(&selector, Rect::new(x0, y0, x0 + 36.0, y0 + 26.0));
            if i % 3 == 0 {
                page.set_display_none(el, true);
            }
            selectors.push(selector);
        }
    }
    (page, selectors)
}

fn bench_highlighted_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlighted_rect");
    for &n in &[8usize, 16, 32] {
        let (page, selectors) = grid_page(n, n);
        let target = resolve_element(&page, &Target::from("#target"));
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("bypass_n{n}"), |b| {
            b.iter(|| black_box(highlighted_rect(&page, target.as_ref(), &selectors, true)));
        });
        group.bench_function(format!("merge_n{n}"), |b| {
            b.iter(|| black_box(highlighted_rect(&page, target.as_ref(), &selectors, false)));
        });
    }
    group.finish();
}

fn bench_scroll_to_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sizing");
    let step = Step::new("#far");
    group.bench_function("scroll_to_settle", |b| {
        b.iter_batched(
            || {
                let mut page = MockPage::new(VIEWPORT)
                    .with_document_size(Size::new(1280.0, 8000.0))
                    .with_scroll_speed(200.0);
                page.add("#far", Rect::new(100.0, 6000.0, 400.0, 6100.0));
                (page, Sizing::<MockElement>::default())
            },
            |(mut page, mut sizing)| {
                sizing.handle(&mut page, Some(&step), SizingEvent::StepChanged);
                while sizing.phase() == SizingPhase::Scrolling {
                    page.advance_frame();
                    sizing.handle(&mut page, Some(&step), SizingEvent::AnimationFrame);
                }
                black_box(sizing.sizes());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_highlighted_rect, bench_scroll_to_settle);
criterion_main!(benches);
