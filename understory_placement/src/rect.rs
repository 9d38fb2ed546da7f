// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle model: the highlighted target rectangle and pure helpers over [`kurbo::Rect`].
//!
//! All rectangles are in viewport (client) coordinates, with `y` growing downwards.
//! `x0`/`y0` are the left/top edges and `x1`/`y1` the right/bottom edges, so
//! `width = right - left` and `height = bottom - top` always hold.

use kurbo::{Point, Rect, Size};

/// Returns `0.0` for negative input, otherwise `value` unchanged.
///
/// Used wherever an offset or size is about to escape into rendering, so that
/// paddings and cut-outs never go negative.
#[inline]
pub fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 { 0.0 } else { value }
}

/// Smallest rectangle containing both `a` and `b`.
///
/// Unlike [`Rect::union`] this makes no attempt to normalize its inputs: an
/// inverted accumulator (left edge past the right edge) is a valid seed and
/// simply collapses onto the first real rectangle merged into it.
#[inline]
pub fn merge(a: Rect, b: Rect) -> Rect {
    Rect::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

/// Whether `outer` fully contains `inner` (edges may touch).
#[inline]
pub fn contains(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// The rectangle a tour step highlights.
///
/// `bounds` is the box used for the mask cut-out and as the popover anchor.
/// `anchor` is the primary target's own origin. The two differ when the
/// highlighted area was merged from additional selectors: the merged box is
/// what gets rendered, while consumers that care about the raw target position
/// read the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetRect {
    /// Highlighted box in viewport coordinates.
    pub bounds: Rect,
    /// Origin of the primary target element.
    pub anchor: Point,
}

impl TargetRect {
    /// The all-zero rectangle, used for missing targets and during transitions.
    pub const ZERO: Self = Self {
        bounds: Rect::ZERO,
        anchor: Point::ZERO,
    };

    /// Creates a target rect from explicit bounds and anchor.
    pub const fn new(bounds: Rect, anchor: Point) -> Self {
        Self { bounds, anchor }
    }

    /// Creates a target rect whose anchor is the origin of `bounds`.
    pub fn from_rect(bounds: Rect) -> Self {
        Self {
            bounds,
            anchor: bounds.origin(),
        }
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> f64 {
        self.bounds.y0
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.bounds.x1
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bounds.y1
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> f64 {
        self.bounds.x0
    }

    /// Width of the highlighted box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Height of the highlighted box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Horizontal anchor coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.anchor.x
    }

    /// Vertical anchor coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.anchor.y
    }

    /// Size of the highlighted box.
    #[inline]
    pub fn size(&self) -> Size {
        self.bounds.size()
    }
}

impl From<Rect> for TargetRect {
    fn from(bounds: Rect) -> Self {
        Self::from_rect(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_only_touches_negatives() {
        assert_eq!(clamp_non_negative(-3.5), 0.0);
        assert_eq!(clamp_non_negative(0.0), 0.0);
        assert_eq!(clamp_non_negative(12.0), 12.0);
    }

    #[test]
    fn merge_grows_to_cover_both() {
        let a = Rect::new(10.0, 20.0, 30.0, 40.0);
        let b = Rect::new(25.0, 5.0, 60.0, 35.0);
        let m = merge(a, b);
        assert_eq!(m, Rect::new(10.0, 5.0, 60.0, 40.0));
        assert_eq!(m.width(), 50.0);
        assert_eq!(m.height(), 35.0);
        assert!(contains(m, a));
        assert!(contains(m, b));
    }

    // An inverted seed collapses onto the first merged rect.
    #[test]
    fn merge_inverted_seed() {
        let seed = Rect::new(1024.0, 768.0, 0.0, 0.0);
        assert!(seed.width() < 0.0);
        let r = Rect::new(100.0, 50.0, 200.0, 80.0);
        assert_eq!(merge(seed, r), r);
    }

    #[test]
    fn target_rect_accessors() {
        let t = TargetRect::new(Rect::new(5.0, 6.0, 25.0, 46.0), Point::new(7.0, 8.0));
        assert_eq!(
            (t.top(), t.right(), t.bottom(), t.left()),
            (6.0, 25.0, 46.0, 5.0)
        );
        assert_eq!((t.width(), t.height()), (20.0, 40.0));
        assert_eq!((t.x(), t.y()), (7.0, 8.0));
        assert_eq!(TargetRect::from(Rect::new(1.0, 2.0, 3.0, 4.0)).anchor, Point::new(1.0, 2.0));
        assert_eq!(TargetRect::default(), TargetRect::ZERO);
    }
}
