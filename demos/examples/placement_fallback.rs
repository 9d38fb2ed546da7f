// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover placement near the viewport edges.
//!
//! Requests a bottom placement for targets in different corners of the
//! viewport and prints where the popover ends up once overflow and fit checks
//! have run.
//!
//! Run:
//! - `cargo run -p understory_tour_demos --example placement_fallback`

use kurbo::{Insets, Rect, Size};
use understory_placement::{AvailableSpace, Overflow, PositionSpec, Side, TargetRect, place};

fn main() {
    let viewport = Size::new(1024.0, 768.0);
    let popover = Size::new(280.0, 160.0);
    let padding = Insets::uniform(10.0);
    let requested = PositionSpec::from(Side::Bottom);

    let targets = [
        ("top-left", Rect::new(20.0, 20.0, 220.0, 60.0)),
        ("bottom-left", Rect::new(20.0, 700.0, 220.0, 750.0)),
        ("bottom-right", Rect::new(820.0, 700.0, 1000.0, 750.0)),
        ("right-edge", Rect::new(900.0, 300.0, 1010.0, 340.0)),
        ("full-width", Rect::new(0.0, 100.0, 1024.0, 700.0)),
    ];

    for (name, bounds) in targets {
        let target = TargetRect::from_rect(bounds);
        let space = AvailableSpace::around(bounds, viewport);
        let overflow = Overflow::detect(bounds, popover, viewport);
        let p = place(&requested, &target, popover, viewport, padding);
        println!(
            "{name:>12}: space(t={:.0} r={:.0} b={:.0} l={:.0}) overflow={overflow:?} -> {:?} at ({:.0}, {:.0}) align={:?}/{:?}",
            space.top,
            space.right,
            space.bottom,
            space.left,
            p.side,
            p.coords.x,
            p.coords.y,
            p.vertical_align,
            p.horizontal_align,
        );
    }

    // Explicit coordinates that would land the popover off screen are centered per axis.
    let off = place(
        &PositionSpec::from([5000.0, 40.0]),
        &TargetRect::ZERO,
        popover,
        viewport,
        padding,
    );
    println!("  off-screen: {:?} at ({:.0}, {:.0})", off.side, off.coords.x, off.coords.y);
}
