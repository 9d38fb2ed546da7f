// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for rectangle merging, padding normalization, and placement.

use kurbo::{Insets, Rect, Size};
use proptest::prelude::*;
use understory_placement::{
    EdgePadding, InViewThreshold, PlacedSide, PositionSpec, Side, TargetRect, contains,
    is_in_view, merge, place,
};

fn coord() -> impl Strategy<Value = f64> {
    -2000.0..2000.0_f64
}

fn rect() -> impl Strategy<Value = Rect> {
    (coord(), coord(), 0.0..800.0_f64, 0.0..800.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Right),
        Just(Side::Bottom),
        Just(Side::Left),
        Just(Side::Center),
    ]
}

proptest! {
    #[test]
    fn merge_contains_both_and_keeps_extent_invariant(a in rect(), b in rect()) {
        let m = merge(a, b);
        prop_assert!(contains(m, a));
        prop_assert!(contains(m, b));
        prop_assert_eq!(m.width(), m.x1 - m.x0);
        prop_assert_eq!(m.height(), m.y1 - m.y0);
    }

    #[test]
    fn merge_is_commutative(a in rect(), b in rect()) {
        prop_assert_eq!(merge(a, b), merge(b, a));
    }

    #[test]
    fn normalized_padding_is_never_negative(values in prop::collection::vec(-50.0..50.0_f64, 1..=4)) {
        let insets = EdgePadding::from_values(&values).unwrap().insets();
        prop_assert!(insets.x0 >= 0.0 && insets.y0 >= 0.0);
        prop_assert!(insets.x1 >= 0.0 && insets.y1 >= 0.0);
    }

    #[test]
    fn oversized_targets_from_above_are_always_in_view(
        overhang in 1.0..500.0_f64,
        extra in 1.0..500.0_f64,
        threshold in 0.0..300.0_f64,
    ) {
        let viewport = Size::new(1024.0, 768.0);
        let r = Rect::new(0.0, -overhang, 300.0, viewport.height + extra);
        prop_assert!(is_in_view(r, viewport, InViewThreshold::uniform(threshold)));
    }

    #[test]
    fn placement_always_returns_finite_coords(
        target in rect(),
        requested in side(),
        w in 1.0..600.0_f64,
        h in 1.0..600.0_f64,
        pad in 0.0..40.0_f64,
    ) {
        let viewport = Size::new(1280.0, 800.0);
        let p = place(
            &PositionSpec::from(requested),
            &TargetRect::from_rect(target),
            Size::new(w, h),
            viewport,
            Insets::uniform(pad),
        );
        prop_assert!(p.coords.x.is_finite() && p.coords.y.is_finite());
        prop_assert!(p.side != PlacedSide::Custom);
    }
}
