// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect, Size};
use understory_placement::{
    AvailableSpace, InViewThreshold, Overflow, PositionSpec, Side, TargetRect, auto_side,
    is_in_view, place,
};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Targets scattered over and around the viewport, including partially offscreen ones.
fn gen_targets(count: usize, seed: u64) -> Vec<TargetRect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (VIEWPORT.width + 400.0) - 200.0;
            let y = rng.next_f64() * (VIEWPORT.height + 400.0) - 200.0;
            let w = 20.0 + rng.next_f64() * 400.0;
            let h = 20.0 + rng.next_f64() * 200.0;
            TargetRect::from_rect(Rect::new(x, y, x + w, y + h))
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    let targets = gen_targets(4096, 0x9E37_79B9_7F4A_7C15);
    let popover = Size::new(320.0, 160.0);
    let padding = Insets::uniform(10.0);
    group.throughput(Throughput::Elements(targets.len() as u64));
    for side in [Side::Bottom, Side::Right, Side::Center] {
        let requested = PositionSpec::from(side);
        group.bench_function(format!("side_{side:?}").to_lowercase(), |b| {
            b.iter(|| {
                for t in &targets {
                    black_box(place(&requested, t, popover, VIEWPORT, padding));
                }
            });
        });
    }
    let computed = PositionSpec::computed(|cx| {
        if cx.target.top() > cx.viewport.height / 2.0 {
            Side::Top.into()
        } else {
            Side::Bottom.into()
        }
    });
    group.bench_function("computed", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(place(&computed, t, popover, VIEWPORT, padding));
            }
        });
    });
    let literal = PositionSpec::from([5000.0, -40.0]);
    group.bench_function("literal_offscreen", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(place(&literal, t, popover, VIEWPORT, padding));
            }
        });
    });
    group.finish();
}

fn bench_auto_side(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_side");
    let targets = gen_targets(4096, 42);
    let popover = Size::new(320.0, 160.0);
    group.throughput(Throughput::Elements(targets.len() as u64));
    group.bench_function("ranked_fit", |b| {
        b.iter(|| {
            for t in &targets {
                let space = AvailableSpace::around(t.bounds, VIEWPORT);
                let overflow = Overflow::detect(t.bounds, popover, VIEWPORT);
                black_box(auto_side(&space, popover, Insets::ZERO, overflow));
            }
        });
    });
    group.bench_function("in_view", |b| {
        let threshold = InViewThreshold::new(8.0, 24.0);
        b.iter(|| {
            let visible = targets
                .iter()
                .filter(|t| is_in_view(t.bounds, VIEWPORT, threshold))
                .count();
            black_box(visible);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_place, bench_auto_side);
criterion_main!(benches);
