// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padding normalization.
//!
//! Paddings are accepted in CSS shorthand order and normalized to
//! [`kurbo::Insets`] (`x0` left, `y0` top, `x1` right, `y1` bottom).
//! Normalized insets never contain negative components.
//!
//! ```
//! use understory_placement::padding::EdgePadding;
//!
//! let p = EdgePadding::from([5.0, 10.0]).insets();
//! assert_eq!((p.y0, p.x1, p.y1, p.x0), (5.0, 10.0, 5.0, 10.0));
//! ```

use kurbo::Insets;

use crate::rect::clamp_non_negative;

/// Padding applied to the mask and popover when none is given.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Error returned when a padding shorthand cannot be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaddingError {
    /// Shorthand lists take between one and four values.
    #[error("padding shorthand takes 1 to 4 values, got {0}")]
    Arity(usize),
}

/// Per-edge padding in CSS shorthand form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePadding {
    /// Same value on all four edges.
    Uniform(f64),
    /// Vertical (top/bottom) and horizontal (left/right) values.
    Symmetric {
        /// Top and bottom.
        vertical: f64,
        /// Left and right.
        horizontal: f64,
    },
    /// Top, shared left/right, and bottom.
    TopSidesBottom {
        /// Top edge.
        top: f64,
        /// Left and right.
        sides: f64,
        /// Bottom edge.
        bottom: f64,
    },
    /// Explicit value per edge.
    Edges {
        /// Top edge.
        top: f64,
        /// Right edge.
        right: f64,
        /// Bottom edge.
        bottom: f64,
        /// Left edge.
        left: f64,
    },
}

impl EdgePadding {
    /// Interprets a shorthand list of 1 to 4 values.
    pub fn from_values(values: &[f64]) -> Result<Self, PaddingError> {
        match *values {
            [all] => Ok(Self::Uniform(all)),
            [vertical, horizontal] => Ok(Self::Symmetric {
                vertical,
                horizontal,
            }),
            [top, sides, bottom] => Ok(Self::TopSidesBottom { top, sides, bottom }),
            [top, right, bottom, left] => Ok(Self::Edges {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(PaddingError::Arity(values.len())),
        }
    }

    /// Normalized per-edge insets, negative components clamped to zero.
    pub fn insets(self) -> Insets {
        let (top, right, bottom, left) = match self {
            Self::Uniform(all) => (all, all, all, all),
            Self::Symmetric {
                vertical,
                horizontal,
            } => (vertical, horizontal, vertical, horizontal),
            Self::TopSidesBottom { top, sides, bottom } => (top, sides, bottom, sides),
            Self::Edges {
                top,
                right,
                bottom,
                left,
            } => (top, right, bottom, left),
        };
        Insets::new(
            clamp_non_negative(left),
            clamp_non_negative(top),
            clamp_non_negative(right),
            clamp_non_negative(bottom),
        )
    }
}

impl Default for EdgePadding {
    fn default() -> Self {
        Self::Uniform(DEFAULT_PADDING)
    }
}

impl From<f64> for EdgePadding {
    fn from(all: f64) -> Self {
        Self::Uniform(all)
    }
}

impl From<[f64; 2]> for EdgePadding {
    fn from([vertical, horizontal]: [f64; 2]) -> Self {
        Self::Symmetric {
            vertical,
            horizontal,
        }
    }
}

impl From<[f64; 3]> for EdgePadding {
    fn from([top, sides, bottom]: [f64; 3]) -> Self {
        Self::TopSidesBottom { top, sides, bottom }
    }
}

impl From<[f64; 4]> for EdgePadding {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::Edges {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Padding for a tour step: either shared, or split per overlay layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Padding {
    /// Applies to both the mask cut-out and the popover; the wrapper gets none.
    Shared(EdgePadding),
    /// Separate values per layer; missing entries use the layer default.
    Split {
        /// Space between the target and the mask cut-out edge.
        mask: Option<EdgePadding>,
        /// Space between the target and the popover.
        popover: Option<EdgePadding>,
        /// Inset of the whole mask canvas from the viewport edges.
        wrapper: Option<EdgePadding>,
    },
}

impl Padding {
    /// Normalizes every layer to insets.
    pub fn resolve(&self) -> ResolvedPadding {
        match *self {
            Self::Shared(p) => ResolvedPadding {
                mask: p.insets(),
                popover: p.insets(),
                wrapper: Insets::ZERO,
            },
            Self::Split {
                mask,
                popover,
                wrapper,
            } => ResolvedPadding {
                mask: mask.unwrap_or_default().insets(),
                popover: popover.unwrap_or_default().insets(),
                wrapper: wrapper.map_or(Insets::ZERO, EdgePadding::insets),
            },
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::Shared(EdgePadding::default())
    }
}

impl From<EdgePadding> for Padding {
    fn from(p: EdgePadding) -> Self {
        Self::Shared(p)
    }
}

impl From<f64> for Padding {
    fn from(all: f64) -> Self {
        Self::Shared(all.into())
    }
}

impl From<[f64; 2]> for Padding {
    fn from(values: [f64; 2]) -> Self {
        Self::Shared(values.into())
    }
}

impl From<[f64; 4]> for Padding {
    fn from(values: [f64; 4]) -> Self {
        Self::Shared(values.into())
    }
}

/// Normalized padding for each overlay layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedPadding {
    /// Mask cut-out padding.
    pub mask: Insets,
    /// Popover offset padding.
    pub popover: Insets,
    /// Mask canvas inset.
    pub wrapper: Insets,
}

impl Default for ResolvedPadding {
    fn default() -> Self {
        Padding::default().resolve()
    }
}
