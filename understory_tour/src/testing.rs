// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page for tests, demos, and benchmarks.
//!
//! [`MockPage`] keeps a flat list of elements with document-space rectangles and
//! a vertical scroll offset. Smooth scrolls advance a fixed number of pixels per
//! [`advance_frame`](MockPage::advance_frame) call; instant scrolls jump.
//!
//! Selector matching is exact string equality against the selector an element
//! was added with.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::provider::{GeometryProvider, ScrollHost};
use crate::scroll::{ScrollAlign, ScrollBehavior, ScrollIntoView};

/// Default smooth-scroll speed of a [`MockPage`], in pixels per frame.
pub const DEFAULT_SCROLL_SPEED: f64 = 120.0;

/// Handle to an element of a [`MockPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MockElement(usize);

#[derive(Clone, Debug)]
struct Node {
    selector: String,
    rect: Rect,
    attached: bool,
    display_none: bool,
    visibility_hidden: bool,
}

/// A scrollable page of absolutely positioned elements.
#[derive(Clone, Debug)]
pub struct MockPage {
    nodes: Vec<Node>,
    client: Size,
    inner: Size,
    document: Size,
    scroll_y: f64,
    scroll_target: Option<f64>,
    scroll_speed: f64,
    scroll_calls: usize,
}

impl MockPage {
    /// Creates an empty page whose client and inner sizes equal `viewport`.
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: Vec::new(),
            client: viewport,
            inner: viewport,
            document: viewport,
            scroll_y: 0.0,
            scroll_target: None,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            scroll_calls: 0,
        }
    }

    /// Overrides the window inner size.
    pub fn with_inner_size(mut self, inner: Size) -> Self {
        self.inner = inner;
        self
    }

    /// Sets the minimum document size. The document also grows to fit every element.
    pub fn with_document_size(mut self, document: Size) -> Self {
        self.document = document;
        self
    }

    /// Sets the smooth-scroll speed in pixels per frame.
    pub fn with_scroll_speed(mut self, speed: f64) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Adds an element at `rect` (document coordinates).
    pub fn add(&mut self, selector: &str, rect: Rect) -> MockElement {
        self.nodes.push(Node {
            selector: selector.into(),
            rect,
            attached: true,
            display_none: false,
            visibility_hidden: false,
        });
        MockElement(self.nodes.len() - 1)
    }

    /// Moves or resizes an element.
    pub fn set_rect(&mut self, element: MockElement, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.rect = rect;
        }
    }

    /// Detaches an element; selector queries no longer find it.
    pub fn remove(&mut self, element: MockElement) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attached = false;
        }
    }

    /// Toggles `display: none`.
    pub fn set_display_none(&mut self, element: MockElement, hidden: bool) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.display_none = hidden;
        }
    }

    /// Toggles `visibility: hidden`.
    pub fn set_visibility_hidden(&mut self, element: MockElement, hidden: bool) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.visibility_hidden = hidden;
        }
    }

    /// Resizes the window; client and inner sizes both follow.
    pub fn resize(&mut self, viewport: Size) {
        self.client = viewport;
        self.inner = viewport;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Current vertical scroll offset.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    /// Jumps to a vertical scroll offset, cancelling any smooth scroll.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_target = None;
        self.scroll_y = offset.clamp(0.0, self.max_scroll());
    }

    /// Number of [`ScrollHost::scroll_into_view`] calls received.
    pub fn scroll_calls(&self) -> usize {
        self.scroll_calls
    }

    /// Whether a smooth scroll is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Advances a smooth scroll by one frame. Returns whether the page moved.
    pub fn advance_frame(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        let delta = target - self.scroll_y;
        if delta > self.scroll_speed {
            self.scroll_y += self.scroll_speed;
        } else if delta < -self.scroll_speed {
            self.scroll_y -= self.scroll_speed;
        } else {
            self.scroll_y = target;
            self.scroll_target = None;
        }
        delta != 0.0
    }

    fn viewport_height(&self) -> f64 {
        self.client.height.max(self.inner.height)
    }

    fn document_height(&self) -> f64 {
        self.nodes
            .iter()
            .filter(|n| n.attached)
            .fold(self.document.height, |h, n| h.max(n.rect.y1))
    }

    fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }

    fn aligned_offset(&self, rect: Rect, align: ScrollAlign) -> f64 {
        let vh = self.viewport_height();
        match align {
            ScrollAlign::Start => rect.y0,
            ScrollAlign::Center => rect.center().y - vh / 2.0,
            ScrollAlign::End => rect.y1 - vh,
            ScrollAlign::Nearest => {
                if rect.y0 < self.scroll_y {
                    rect.y0
                } else if rect.y1 > self.scroll_y + vh {
                    rect.y1 - vh
                } else {
                    self.scroll_y
                }
            }
        }
    }
}

impl GeometryProvider for MockPage {
    type Element = MockElement;

    fn query_element(&self, selector: &str) -> Option<MockElement> {
        self.nodes
            .iter()
            .position(|n| n.attached && n.selector == selector)
            .map(MockElement)
    }

    fn bounding_rect(&self, element: &MockElement) -> Rect {
        match self.nodes.get(element.0) {
            Some(node) if node.attached && !node.display_none => {
                node.rect - Vec2::new(0.0, self.scroll_y)
            }
            _ => Rect::ZERO,
        }
    }

    fn is_visible(&self, element: &MockElement) -> bool {
        self.nodes
            .get(element.0)
            .is_some_and(|n| n.attached && !n.display_none && !n.visibility_hidden)
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn inner_size(&self) -> Size {
        self.inner
    }
}

impl ScrollHost for MockPage {
    fn scroll_into_view(&mut self, element: &MockElement, options: &ScrollIntoView) {
        self.scroll_calls += 1;
        let Some(node) = self.nodes.get(element.0) else {
            return;
        };
        let target = self
            .aligned_offset(node.rect, options.block)
            .clamp(0.0, self.max_scroll());
        match options.behavior {
            ScrollBehavior::Instant => self.scroll_to(target),
            ScrollBehavior::Auto | ScrollBehavior::Smooth => self.scroll_target = Some(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_follow_the_scroll_offset() {
        let mut page = MockPage::new(Size::new(400.0, 300.0));
        let el = page.add("#a", Rect::new(10.0, 500.0, 60.0, 540.0));
        page.scroll_to(200.0);
        assert_eq!(page.bounding_rect(&el), Rect::new(10.0, 300.0, 60.0, 340.0));
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let mut page = MockPage::new(Size::new(400.0, 300.0));
        page.add("#a", Rect::new(0.0, 500.0, 50.0, 540.0));
        page.scroll_to(10_000.0);
        assert_eq!(page.scroll_offset(), 240.0);
    }

    #[test]
    fn hidden_and_removed_elements() {
        let mut page = MockPage::new(Size::new(400.0, 300.0));
        let a = page.add(".a", Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = page.add(".b", Rect::new(0.0, 0.0, 10.0, 10.0));
        page.set_visibility_hidden(a, true);
        page.remove(b);
        assert!(!page.is_visible(&a));
        assert_eq!(page.query_element(".b"), None);
        assert_eq!(page.bounding_rect(&b), Rect::ZERO);
    }
}
