// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-view evaluation against the viewport.

use kurbo::{Rect, Size};

/// Margin a rectangle must keep from the viewport edges to count as in view.
///
/// `x` applies to the left and right edges, `y` to the top and bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InViewThreshold {
    /// Horizontal margin.
    pub x: f64,
    /// Vertical margin.
    pub y: f64,
}

impl InViewThreshold {
    /// No margin on either axis.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a threshold with separate horizontal and vertical margins.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same margin on both axes.
    pub const fn uniform(margin: f64) -> Self {
        Self {
            x: margin,
            y: margin,
        }
    }

    /// Creates a threshold from optional per-axis margins; missing axes are zero.
    pub fn from_axes(x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            x: x.unwrap_or(0.0),
            y: y.unwrap_or(0.0),
        }
    }
}

impl From<f64> for InViewThreshold {
    fn from(margin: f64) -> Self {
        Self::uniform(margin)
    }
}

/// Whether `rect` is sufficiently inside a viewport of size `viewport`.
///
/// A rectangle taller than the viewport that already starts above it counts as
/// in view: it covers the screen, and scrolling would never make it fit.
/// Otherwise every edge must lie inside the viewport shrunk by `threshold`.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::in_view::{is_in_view, InViewThreshold};
///
/// let viewport = Size::new(800.0, 600.0);
/// assert!(is_in_view(Rect::new(0.0, 0.0, 800.0, 600.0), viewport, InViewThreshold::ZERO));
/// assert!(!is_in_view(Rect::new(0.0, 1.0, 800.0, 601.0), viewport, InViewThreshold::ZERO));
/// ```
pub fn is_in_view(rect: Rect, viewport: Size, threshold: InViewThreshold) -> bool {
    let covers_viewport = rect.y0 < 0.0 && rect.height() > viewport.height;
    covers_viewport
        || (rect.y0 >= threshold.y
            && rect.x0 >= threshold.x
            && rect.y1 <= viewport.height - threshold.y
            && rect.x1 <= viewport.width - threshold.x)
}
