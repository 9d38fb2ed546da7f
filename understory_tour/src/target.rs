// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a step to the rectangle that should be highlighted.
//!
//! A step's target is resolved to an element (selectors match the first
//! element, misses resolve to nothing). Highlighted selectors then contribute
//! every visible match to one of two running unions:
//!
//! - the *merged* union, seeded with the target's own rectangle;
//! - the *bypass* union, seeded with an inverted rectangle (left/top at the
//!   viewport's far edges, right/bottom at zero) so the first match replaces it.
//!
//! The bypass union wins when the step bypasses the target (or there is no
//! target) and it ended up with a positive area. Either way the returned
//! [`TargetRect`] keeps the target's own origin as its anchor.

use alloc::string::String;

use kurbo::{Point, Rect};
use understory_placement::{TargetRect, merge};

use crate::provider::GeometryProvider;
use crate::step::{Step, Target};
use crate::viewport::viewport_size;

/// Result of [`highlighted_rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightedRect {
    /// Area to highlight, anchored at the target's origin.
    pub rect: TargetRect,
    /// Whether at least one highlighted selector matched a visible element.
    pub has_highlighted_elements: bool,
}

/// Resolves `target` to an element.
pub fn resolve_element<P>(provider: &P, target: &Target<P::Element>) -> Option<P::Element>
where
    P: GeometryProvider + ?Sized,
{
    match target {
        Target::Element(element) => Some(element.clone()),
        Target::Selector(selector) => {
            let found = provider.query_element(selector);
            #[cfg(feature = "tracing")]
            if found.is_none() {
                tracing::trace!(selector = selector.as_str(), "tour target not found");
            }
            found
        }
    }
}

/// Computes the highlighted area for an already resolved `element`.
pub fn highlighted_rect<P>(
    provider: &P,
    element: Option<&P::Element>,
    selectors: &[String],
    bypass_target: bool,
) -> HighlightedRect
where
    P: GeometryProvider + ?Sized,
{
    let target = element.map_or(Rect::ZERO, |e| provider.bounding_rect(e));
    let anchor = Point::new(target.x0, target.y0);
    if selectors.is_empty() {
        return HighlightedRect {
            rect: TargetRect::new(target, anchor),
            has_highlighted_elements: false,
        };
    }

    let viewport = viewport_size(provider);
    let mut merged = target;
    let mut bypass = Rect::new(viewport.width, viewport.height, 0.0, 0.0);
    let bypassing = bypass_target || element.is_none();
    let mut has_highlighted_elements = false;

    for selector in selectors {
        let Some(found) = provider.query_element(selector) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(selector = selector.as_str(), "highlighted selector not found");
            continue;
        };
        if !provider.is_visible(&found) {
            #[cfg(feature = "tracing")]
            tracing::trace!(selector = selector.as_str(), "highlighted element is hidden");
            continue;
        }
        has_highlighted_elements = true;
        let rect = provider.bounding_rect(&found);
        if bypassing {
            bypass = merge(bypass, rect);
        } else {
            merged = merge(merged, rect);
        }
    }

    let bounds = if bypassing && bypass.width() > 0.0 && bypass.height() > 0.0 {
        bypass
    } else {
        merged
    };
    HighlightedRect {
        rect: TargetRect::new(bounds, anchor),
        has_highlighted_elements,
    }
}

/// Resolves `step` and computes its highlighted area.
///
/// Returns the resolved element alongside, since callers usually need it to
/// scroll.
pub fn resolve<P>(provider: &P, step: &Step<P::Element>) -> (Option<P::Element>, HighlightedRect)
where
    P: GeometryProvider + ?Sized,
{
    let element = resolve_element(provider, &step.target);
    let highlighted = highlighted_rect(
        provider,
        element.as_ref(),
        &step.highlighted_selectors,
        step.bypass_target,
    );
    (element, highlighted)
}
