// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover placement relative to a highlighted target.
//!
//! ## Algorithm
//!
//! 1. A [`PositionSpec`] is resolved once, against a [`PositionContext`], to a
//!    [`Position`]: either a [`Side`] or explicit coordinates.
//! 2. Explicit coordinates are used as is, except that an axis on which the
//!    popover would land fully outside the viewport is centered instead.
//! 3. For a side, candidate coordinates are computed for every side. The
//!    requested side is used if it is [`Side::Center`], or if it fits and the
//!    popover does not [`Overflow`] the viewport when anchored at the target.
//! 4. Otherwise the cardinal sides are ranked by [`AvailableSpace`] (largest
//!    first, ties in `top, right, bottom, left` order), restricted to the sides
//!    that make sense for the overflowing axis, and the first one that fits
//!    wins. If none fits, the popover is centered in the viewport.
//!
//! Placement never fails.
//!
//! ```
//! use kurbo::{Insets, Rect, Size};
//! use understory_placement::{PlacedSide, PositionSpec, Side, TargetRect, place};
//!
//! let target = TargetRect::from_rect(Rect::new(100.0, 100.0, 200.0, 140.0));
//! let p = place(
//!     &PositionSpec::from(Side::Bottom),
//!     &target,
//!     Size::new(150.0, 80.0),
//!     Size::new(1024.0, 768.0),
//!     Insets::uniform(10.0),
//! );
//! assert_eq!(p.side, PlacedSide::Bottom);
//! assert_eq!((p.coords.x, p.coords.y), (90.0, 150.0));
//! ```

use alloc::sync::Arc;
use core::cmp::Ordering;

use bitflags::bitflags;
use kurbo::{Insets, Point, Rect, Size};

use crate::rect::TargetRect;

/// A side of the target the popover can be placed on, or the viewport center.
///
/// The declaration order is the tie-break order used when ranking sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the target.
    Top,
    /// Right of the target.
    Right,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Centered in the viewport.
    Center,
}

impl Side {
    /// The four sides considered by auto-placement, in tie-break order.
    pub const CARDINAL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Whether this side places the popover beside the target (left or right).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// A resolved popover position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Place relative to the target (or center).
    Side(Side),
    /// Explicit top-left coordinates of the popover, in viewport pixels.
    At(Point),
}

impl Default for Position {
    fn default() -> Self {
        Self::Side(Side::Bottom)
    }
}

impl From<Side> for Position {
    fn from(side: Side) -> Self {
        Self::Side(side)
    }
}

impl From<Point> for Position {
    fn from(at: Point) -> Self {
        Self::At(at)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::At(Point::new(x, y))
    }
}

/// Inputs handed to a computed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionContext {
    /// The highlighted target.
    pub target: TargetRect,
    /// Measured popover size.
    pub popover: Size,
    /// Current viewport size.
    pub viewport: Size,
}

/// Signature of a computed position.
pub type PositionFn = dyn Fn(&PositionContext) -> Position + Send + Sync;

/// A requested position: a literal, or a callback evaluated once per placement.
#[derive(Clone)]
pub enum PositionSpec {
    /// Fixed position.
    Literal(Position),
    /// Position computed from the current geometry.
    Computed(Arc<PositionFn>),
}

impl PositionSpec {
    /// Wraps a callback as a computed position.
    pub fn computed(f: impl Fn(&PositionContext) -> Position + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Resolves to a concrete position for the given geometry.
    pub fn resolve(&self, cx: &PositionContext) -> Position {
        match self {
            Self::Literal(position) => *position,
            Self::Computed(f) => f(cx),
        }
    }
}

impl core::fmt::Debug for PositionSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Literal(position) => f.debug_tuple("Literal").field(position).finish(),
            Self::Computed(_) => f.debug_tuple("Computed").finish_non_exhaustive(),
        }
    }
}

impl PartialEq for PositionSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Computed(a), Self::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Literal positions serialize as a [`Position`]. Computed positions cannot be
/// serialized.
#[cfg(feature = "serde")]
impl serde::Serialize for PositionSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(position) => serde::Serialize::serialize(position, serializer),
            Self::Computed(_) => Err(serde::ser::Error::custom(
                "computed positions cannot be serialized",
            )),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PositionSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Position as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::Literal)
    }
}

impl Default for PositionSpec {
    fn default() -> Self {
        Self::Literal(Position::default())
    }
}

impl From<Position> for PositionSpec {
    fn from(position: Position) -> Self {
        Self::Literal(position)
    }
}

impl From<Side> for PositionSpec {
    fn from(side: Side) -> Self {
        Self::Literal(side.into())
    }
}

impl From<[f64; 2]> for PositionSpec {
    fn from(at: [f64; 2]) -> Self {
        Self::Literal(at.into())
    }
}

bitflags! {
    /// Axes on which a popover anchored at the target would leave the viewport.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Overflow: u8 {
        /// `target.left + popover.width` exceeds the viewport width.
        const X = 0b0000_0001;
        /// `target.bottom + popover.height` exceeds the viewport height.
        const Y = 0b0000_0010;
    }
}

impl Default for Overflow {
    fn default() -> Self {
        Self::empty()
    }
}

impl Overflow {
    /// Overflow flags for a popover of `popover` size anchored at `target`.
    pub fn detect(target: Rect, popover: Size, viewport: Size) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::X, target.x0 + popover.width > viewport.width);
        flags.set(Self::Y, target.y1 + popover.height > viewport.height);
        flags
    }

    /// Whether auto-placement may consider `side` under these flags.
    ///
    /// Vertical overflow restricts candidates to the left/right sides;
    /// otherwise horizontal overflow restricts them to top/bottom.
    pub fn allows(self, side: Side) -> bool {
        if self.contains(Self::Y) {
            matches!(side, Side::Left | Side::Right)
        } else if self.contains(Self::X) {
            matches!(side, Side::Top | Side::Bottom)
        } else {
            side != Side::Center
        }
    }
}

/// Label of the side a popover ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacedSide {
    /// Above the target.
    Top,
    /// Right of the target.
    Right,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
    /// Viewport center.
    Center,
    /// Explicit coordinates.
    Custom,
}

impl From<Side> for PlacedSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Right => Self::Right,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Center => Self::Center,
        }
    }
}

/// Which popover edge lines up with the target vertically (arrow hint).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    /// Popover top aligned with the target top.
    #[default]
    Top,
    /// Popover bottom aligned with the target bottom.
    Bottom,
}

/// Which way the popover extends horizontally from its anchor (arrow hint).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlign {
    /// Pulled left to stay inside the viewport.
    Left,
    /// Extends to the right of the target's left edge.
    #[default]
    Right,
}

/// Space between each target edge and the matching viewport edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AvailableSpace {
    /// Above the target.
    pub top: f64,
    /// Right of the target.
    pub right: f64,
    /// Below the target.
    pub bottom: f64,
    /// Left of the target.
    pub left: f64,
}

impl AvailableSpace {
    /// Measures the space around `target` inside `viewport`.
    pub fn around(target: Rect, viewport: Size) -> Self {
        Self {
            top: target.y0,
            right: viewport.width - target.x1,
            bottom: viewport.height - target.y1,
            left: target.x0,
        }
    }

    /// Space on `side`; the center has none.
    pub fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Center => 0.0,
        }
    }

    /// Cardinal sides by descending space, filtered by `overflow`.
    ///
    /// Equal spaces keep `top, right, bottom, left` order.
    pub fn ranked(&self, overflow: Overflow) -> impl Iterator<Item = Side> + use<> {
        let mut order = Side::CARDINAL;
        order.sort_unstable_by(|a, b| {
            self.on(*b)
                .partial_cmp(&self.on(*a))
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(b))
        });
        order.into_iter().filter(move |side| overflow.allows(*side))
    }

    /// Whether a popover of `popover` size fits on `side`, given the padding
    /// between popover and target.
    ///
    /// Right never fits under horizontal overflow and bottom never fits under
    /// vertical overflow; the center is not a fitting candidate.
    pub fn fits(&self, side: Side, popover: Size, padding: Insets, overflow: Overflow) -> bool {
        match side {
            Side::Top => self.top > popover.height + padding.y1,
            Side::Right => {
                !overflow.contains(Overflow::X) && self.right > popover.width + padding.x0
            }
            Side::Bottom => {
                !overflow.contains(Overflow::Y) && self.bottom > popover.height + padding.y0
            }
            Side::Left => self.left > popover.width + padding.x1,
            Side::Center => false,
        }
    }
}

/// Popover top-left coordinates for every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideCoords {
    /// Above the target.
    pub top: Point,
    /// Right of the target.
    pub right: Point,
    /// Below the target.
    pub bottom: Point,
    /// Left of the target.
    pub left: Point,
    /// Viewport center.
    pub center: Point,
}

impl SideCoords {
    /// Coordinates for `side`.
    pub fn on(&self, side: Side) -> Point {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Center => self.center,
        }
    }
}

/// One auto-placement candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Candidate side.
    pub side: Side,
    /// Popover coordinates on that side.
    pub coords: Point,
    /// Space available on that side.
    pub available: f64,
}

/// Result of [`place`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Popover top-left corner in viewport pixels.
    pub coords: Point,
    /// Side the popover ended up on.
    pub side: PlacedSide,
    /// Vertical alignment hint.
    pub vertical_align: VerticalAlign,
    /// Horizontal alignment hint.
    pub horizontal_align: HorizontalAlign,
    /// Overflow detected while placing.
    pub overflow: Overflow,
}

/// Viewport-centered coordinates for a popover of the given size.
pub fn centered(popover: Size, viewport: Size) -> Point {
    Point::new(
        viewport.width / 2.0 - popover.width / 2.0,
        viewport.height / 2.0 - popover.height / 2.0,
    )
}

/// Places a popover of size `popover` next to `target`.
///
/// `padding` is the gap between target and popover: `y0` (top) and `x0` (left)
/// offset bottom/right placements, `y1` (bottom) and `x1` (right) offset
/// top/left placements.
pub fn place(
    requested: &PositionSpec,
    target: &TargetRect,
    popover: Size,
    viewport: Size,
    padding: Insets,
) -> Placement {
    let cx = PositionContext {
        target: *target,
        popover,
        viewport,
    };
    match requested.resolve(&cx) {
        Position::At(at) => place_at(at, popover, viewport),
        Position::Side(side) => place_on_side(side, target.bounds, popover, viewport, padding),
    }
}

/// Explicit coordinates, centering any axis the popover would fully leave.
fn place_at(at: Point, popover: Size, viewport: Size) -> Placement {
    let center = centered(popover, viewport);
    let out_x = at.x > viewport.width || at.x + popover.width < 0.0;
    let out_y = at.y > viewport.height || at.y + popover.height < 0.0;
    let mut overflow = Overflow::empty();
    overflow.set(Overflow::X, out_x);
    overflow.set(Overflow::Y, out_y);
    Placement {
        coords: Point::new(
            if out_x { center.x } else { at.x },
            if out_y { center.y } else { at.y },
        ),
        side: PlacedSide::Custom,
        vertical_align: VerticalAlign::default(),
        horizontal_align: HorizontalAlign::default(),
        overflow,
    }
}

/// Candidate coordinates for every side.
pub fn side_coords(target: Rect, popover: Size, viewport: Size, padding: Insets) -> SideCoords {
    let available = AvailableSpace::around(target, viewport);
    let overflow = Overflow::detect(target, popover, viewport);

    let x = if overflow.contains(Overflow::X) {
        target.x0.min(viewport.width - popover.width)
    } else {
        target.x0.max(0.0)
    };
    let y = if !overflow.contains(Overflow::Y) {
        target.y0
    } else if popover.height > available.bottom {
        (target.y1 - popover.height).max(0.0)
    } else {
        target.y0.max(0.0)
    };

    SideCoords {
        top: Point::new(x - padding.x0, target.y0 - popover.height - padding.y1),
        right: Point::new(target.x1 + padding.x0, y - padding.y0),
        bottom: Point::new(x - padding.x0, target.y1 + padding.y0),
        left: Point::new(target.x0 - popover.width - padding.x1, y - padding.y0),
        center: centered(popover, viewport),
    }
}

/// Auto-placement candidates in preference order.
pub fn candidates(
    target: Rect,
    popover: Size,
    viewport: Size,
    padding: Insets,
) -> impl Iterator<Item = Candidate> + use<> {
    let available = AvailableSpace::around(target, viewport);
    let overflow = Overflow::detect(target, popover, viewport);
    let coords = side_coords(target, popover, viewport, padding);
    available.ranked(overflow).map(move |side| Candidate {
        side,
        coords: coords.on(side),
        available: available.on(side),
    })
}

/// The best fitting side for auto-placement, or `None` when nothing fits.
pub fn auto_side(
    available: &AvailableSpace,
    popover: Size,
    padding: Insets,
    overflow: Overflow,
) -> Option<Side> {
    available
        .ranked(overflow)
        .find(|side| available.fits(*side, popover, padding, overflow))
}

fn place_on_side(
    requested: Side,
    target: Rect,
    popover: Size,
    viewport: Size,
    padding: Insets,
) -> Placement {
    let available = AvailableSpace::around(target, viewport);
    let overflow = Overflow::detect(target, popover, viewport);
    let coords = side_coords(target, popover, viewport, padding);

    let vertical_align = if overflow.contains(Overflow::Y) && popover.height > available.bottom {
        VerticalAlign::Bottom
    } else {
        VerticalAlign::Top
    };
    let horizontal_align = if overflow.contains(Overflow::X) {
        HorizontalAlign::Left
    } else {
        HorizontalAlign::Right
    };

    let side = if requested == Side::Center
        || (overflow.is_empty() && available.fits(requested, popover, padding, overflow))
    {
        requested
    } else if let Some(side) = auto_side(&available, popover, padding, overflow) {
        side
    } else {
        #[cfg(feature = "tracing")]
        tracing::trace!(?requested, ?overflow, "no side fits; centering popover");
        Side::Center
    };

    Placement {
        coords: coords.on(side),
        side: side.into(),
        vertical_align,
        horizontal_align,
        overflow,
    }
}
