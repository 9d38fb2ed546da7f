// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native geometry for guided-tour overlays.
//!
//! Understory Placement is the pure half of a product-tour overlay: given the
//! rectangle of a highlighted element, it answers where the mask cut-out goes,
//! whether the element is in view, and where the popover should sit.
//!
//! - [`rect`]: the highlighted [`TargetRect`] and rectangle helpers ([`merge`], [`clamp_non_negative`]).
//! - [`padding`]: CSS-style padding shorthand normalized to [`kurbo::Insets`].
//! - [`in_view`]: viewport containment with per-axis thresholds.
//! - [`placement`]: explicit, computed, and auto popover placement with a centered fallback.
//! - [`mask`]: mask canvas, cut-out, and click-area outline.
//!
//! Everything here is a synchronous function of its inputs. Reading element
//! rectangles and viewport sizes from a host, scrolling, and the per-step
//! lifecycle live in `understory_tour`.
//!
//! ## Coordinates
//!
//! All geometry is in viewport (client) pixels with `y` growing downwards.
//! Rectangles use Kurbo's convention: `x0`/`y0` left/top, `x1`/`y1` right/bottom.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_placement::{
//!     InViewThreshold, MaskGeometry, Padding, PlacedSide, PositionSpec, Side, TargetRect,
//!     is_in_view, place,
//! };
//!
//! let viewport = Size::new(1280.0, 720.0);
//! let target = TargetRect::from_rect(Rect::new(40.0, 600.0, 240.0, 700.0));
//! assert!(is_in_view(target.bounds, viewport, InViewThreshold::ZERO));
//!
//! let padding = Padding::from(8.0).resolve();
//! let mask = MaskGeometry::new(&target, padding.mask, padding.wrapper, viewport);
//! assert_eq!(mask.cutout, Rect::new(32.0, 592.0, 248.0, 708.0));
//!
//! // No room below: the popover moves beside the target.
//! let popover = place(
//!     &PositionSpec::from(Side::Bottom),
//!     &target,
//!     Size::new(300.0, 120.0),
//!     viewport,
//!     padding.popover,
//! );
//! assert_eq!(popover.side, PlacedSide::Right);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod in_view;
pub mod mask;
pub mod padding;
pub mod placement;
pub mod rect;

pub use in_view::{InViewThreshold, is_in_view};
pub use mask::MaskGeometry;
pub use padding::{DEFAULT_PADDING, EdgePadding, Padding, PaddingError, ResolvedPadding};
pub use placement::{
    AvailableSpace, Candidate, HorizontalAlign, Overflow, PlacedSide, Placement, Position,
    PositionContext, PositionFn, PositionSpec, Side, SideCoords, VerticalAlign, auto_side,
    candidates, centered, place, side_coords,
};
pub use rect::{TargetRect, clamp_non_negative, contains, merge};
