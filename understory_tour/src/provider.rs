// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the engine reads geometry from.
//!
//! The engine never touches a document directly. A host (a browser binding, a
//! native toolkit, or [`MockPage`](crate::testing::MockPage) in tests)
//! implements [`GeometryProvider`] for reads and [`ScrollHost`] for the one
//! side effect the engine needs.

use kurbo::{Rect, Size};

use crate::scroll::ScrollIntoView;

/// Read-only access to element geometry and viewport size.
pub trait GeometryProvider {
    /// Handle to a live element.
    type Element: Clone;

    /// First element matching `selector`, if any.
    fn query_element(&self, selector: &str) -> Option<Self::Element>;

    /// Bounding rectangle of `element` in viewport coordinates.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Whether `element` is rendered.
    ///
    /// Elements with `display: none` or `visibility: hidden` report `false`.
    fn is_visible(&self, element: &Self::Element) -> bool {
        let _ = element;
        true
    }

    /// Client size of the document root.
    fn client_size(&self) -> Size;

    /// Inner size of the window.
    ///
    /// Some mobile browsers report a more accurate value here than through
    /// [`client_size`](Self::client_size). Hosts without the distinction can
    /// keep the default.
    fn inner_size(&self) -> Size {
        Size::ZERO
    }
}

/// A provider that can also scroll elements into view.
pub trait ScrollHost: GeometryProvider {
    /// Starts a (possibly animated) scroll that brings `element` into view.
    ///
    /// Returns immediately; the engine detects completion by polling
    /// [`GeometryProvider::bounding_rect`] once per animation frame.
    fn scroll_into_view(&mut self, element: &Self::Element, options: &ScrollIntoView);
}
