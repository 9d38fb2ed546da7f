// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mask geometry: the darkened canvas and the cut-out around the highlighted target.

use kurbo::{Insets, Point, Rect, Size};

use crate::rect::{TargetRect, clamp_non_negative};

/// Geometry of the overlay mask for one frame.
///
/// The canvas covers the viewport minus the wrapper insets and is positioned at
/// `canvas_origin`. The cut-out is expressed in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskGeometry {
    /// Position of the canvas in the viewport.
    pub canvas_origin: Point,
    /// Size of the darkened canvas.
    pub canvas: Size,
    /// Transparent window over the target, in canvas coordinates.
    pub cutout: Rect,
}

impl MaskGeometry {
    /// Computes the mask for `target`.
    ///
    /// `padding` grows the cut-out around the target; `wrapper` insets the
    /// canvas from the viewport edges. Offsets and sizes are clamped so they
    /// never go negative.
    pub fn new(target: &TargetRect, padding: Insets, wrapper: Insets, viewport: Size) -> Self {
        let left = clamp_non_negative(target.left() - padding.x0 - wrapper.x0);
        let top = clamp_non_negative(target.top() - padding.y0 - wrapper.y0);
        let width = clamp_non_negative(target.width() + padding.x0 + padding.x1);
        let height = clamp_non_negative(target.height() + padding.y0 + padding.y1);
        Self {
            canvas_origin: Point::new(wrapper.x0, wrapper.y0),
            canvas: Size::new(
                clamp_non_negative(viewport.width - wrapper.x0 - wrapper.x1),
                clamp_non_negative(viewport.height - wrapper.y0 - wrapper.y1),
            ),
            cutout: Rect::new(left, top, left + width, top + height),
        }
    }

    /// Polygon covering the canvas except the cut-out.
    ///
    /// Walks down the left canvas edge, in and around the cut-out, and back out
    /// along the bottom and right edges. Use it as a clip path for the area
    /// that should swallow clicks.
    pub fn click_area_outline(&self) -> [Point; 10] {
        let Size { width, height } = self.canvas;
        let Rect { x0, y0, x1, y1 } = self.cutout;
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, height),
            Point::new(x0, height),
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
            Point::new(x0, height),
            Point::new(width, height),
            Point::new(width, 0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    #[test]
    fn cutout_grows_by_padding() {
        let t = TargetRect::from_rect(Rect::new(100.0, 200.0, 300.0, 260.0));
        let m = MaskGeometry::new(&t, Insets::uniform(10.0), Insets::ZERO, VIEWPORT);
        assert_eq!(m.canvas, VIEWPORT);
        assert_eq!(m.canvas_origin, Point::ZERO);
        assert_eq!(m.cutout, Rect::new(90.0, 190.0, 310.0, 270.0));
    }

    #[test]
    fn wrapper_shrinks_canvas_and_shifts_cutout() {
        let t = TargetRect::from_rect(Rect::new(100.0, 200.0, 300.0, 260.0));
        let m = MaskGeometry::new(
            &t,
            Insets::ZERO,
            Insets::new(20.0, 10.0, 20.0, 10.0),
            VIEWPORT,
        );
        assert_eq!(m.canvas, Size::new(960.0, 780.0));
        assert_eq!(m.canvas_origin, Point::new(20.0, 10.0));
        assert_eq!(m.cutout, Rect::new(80.0, 190.0, 280.0, 250.0));
    }

    #[test]
    fn offsets_never_go_negative() {
        let t = TargetRect::from_rect(Rect::new(2.0, 3.0, 12.0, 13.0));
        let m = MaskGeometry::new(&t, Insets::uniform(10.0), Insets::ZERO, VIEWPORT);
        assert_eq!((m.cutout.x0, m.cutout.y0), (0.0, 0.0));
        assert_eq!(m.cutout.size(), Size::new(30.0, 30.0));
        let zero = MaskGeometry::new(&TargetRect::ZERO, Insets::ZERO, Insets::ZERO, VIEWPORT);
        assert_eq!(zero.cutout, Rect::ZERO);
    }

    #[test]
    fn outline_wraps_the_cutout() {
        let t = TargetRect::from_rect(Rect::new(100.0, 100.0, 200.0, 150.0));
        let m = MaskGeometry::new(&t, Insets::ZERO, Insets::ZERO, VIEWPORT);
        let outline = m.click_area_outline();
        assert_eq!(outline[0], Point::ZERO);
        assert_eq!(outline[3], Point::new(100.0, 100.0));
        assert_eq!(outline[5], Point::new(200.0, 150.0));
        assert_eq!(outline[9], Point::new(1000.0, 0.0));
    }
}
