// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling a target into view and detecting when the scroll has settled.
//!
//! Scrolling itself is delegated to the [`ScrollHost`]. Completion is detected
//! by a [`SettleWatch`]: the host polls it once per animation frame, and it
//! reports [`ScrollStatus::Settled`] once the element's top edge has stayed put
//! for more than [`SETTLE_FRAMES`] consecutive frames.
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_tour::scroll::{ScrollOptions, ScrollStatus, scroll_into_view};
//! use understory_tour::testing::MockPage;
//!
//! let mut page = MockPage::new(Size::new(800.0, 600.0));
//! let el = page.add("#far", Rect::new(0.0, 2000.0, 100.0, 2050.0));
//!
//! let mut watch = scroll_into_view(&mut page, Some(&el), &ScrollOptions::default()).unwrap();
//! let status = loop {
//!     page.advance_frame();
//!     let status = watch.poll(&page);
//!     if status.is_done() {
//!         break status;
//!     }
//! };
//! assert_eq!(status, ScrollStatus::Settled);
//! ```

use understory_placement::InViewThreshold;

use crate::provider::{GeometryProvider, ScrollHost};

/// Number of consecutive unchanged frames that must be exceeded before a
/// scroll counts as settled.
pub const SETTLE_FRAMES: u32 = 2;

/// Default ceiling on settle polling, in frames (about ten seconds at 60 Hz).
pub const DEFAULT_MAX_SETTLE_FRAMES: u32 = 600;

/// Alignment of the element inside the scroll container, per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollAlign {
    /// Align the element's leading edge.
    Start,
    /// Center the element.
    Center,
    /// Align the element's trailing edge.
    End,
    /// Scroll the minimum distance that makes the element visible.
    #[default]
    Nearest,
}

/// How the host animates the scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollBehavior {
    /// Let the host decide.
    Auto,
    /// Animate.
    #[default]
    Smooth,
    /// Jump.
    Instant,
}

/// Arguments forwarded to [`ScrollHost::scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollIntoView {
    /// Vertical alignment.
    pub block: ScrollAlign,
    /// Horizontal alignment.
    pub inline: ScrollAlign,
    /// Animation behavior.
    pub behavior: ScrollBehavior,
}

impl Default for ScrollIntoView {
    fn default() -> Self {
        Self {
            block: ScrollAlign::Center,
            inline: ScrollAlign::Nearest,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Scroll configuration for a tour.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Alignment and behavior passed to the host.
    pub scroll: ScrollIntoView,
    /// Margin the target must keep from the viewport edges to count as in view.
    pub in_view_threshold: InViewThreshold,
    /// Give up waiting for the scroll to settle after this many frames.
    ///
    /// `None` polls until the element stops moving.
    pub max_settle_frames: Option<u32>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            scroll: ScrollIntoView::default(),
            in_view_threshold: InViewThreshold::ZERO,
            max_settle_frames: Some(DEFAULT_MAX_SETTLE_FRAMES),
        }
    }
}

impl ScrollOptions {
    /// Sets the alignment and behavior passed to the host.
    pub fn with_scroll(mut self, scroll: ScrollIntoView) -> Self {
        self.scroll = scroll;
        self
    }

    /// Sets the in-view threshold.
    pub fn with_in_view_threshold(mut self, threshold: impl Into<InViewThreshold>) -> Self {
        self.in_view_threshold = threshold.into();
        self
    }

    /// Sets the settle-frame ceiling.
    pub fn with_max_settle_frames(mut self, frames: Option<u32>) -> Self {
        self.max_settle_frames = frames;
        self
    }
}

/// Errors from [`scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScrollError {
    /// No element was given to scroll to.
    #[error("scroll target is not an element")]
    NotAnElement,
}

/// Progress of a [`SettleWatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollStatus {
    /// The element is still moving, or has not been still for long enough.
    Pending,
    /// The element stopped moving.
    Settled,
    /// The frame ceiling was reached before the element stopped moving.
    TimedOut,
}

impl ScrollStatus {
    /// Whether polling is over, either way.
    pub fn is_done(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Cooperative settle detector for one scroll.
#[derive(Clone, Debug)]
pub struct SettleWatch<E> {
    element: E,
    last_top: Option<f64>,
    unchanged: u32,
    frames: u32,
    max_frames: Option<u32>,
    status: ScrollStatus,
}

impl<E> SettleWatch<E> {
    /// Starts watching `element`.
    pub fn new(element: E, max_frames: Option<u32>) -> Self {
        Self {
            element,
            last_top: None,
            unchanged: 0,
            frames: 0,
            max_frames,
            status: ScrollStatus::Pending,
        }
    }

    /// The watched element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Frames observed so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Current status.
    pub fn status(&self) -> ScrollStatus {
        self.status
    }

    /// Feeds the element's top edge for one frame.
    ///
    /// Once the watch is done, further observations are ignored.
    pub fn observe(&mut self, top: f64) -> ScrollStatus {
        if self.status.is_done() {
            return self.status;
        }
        self.frames += 1;
        if self.last_top == Some(top) {
            let unchanged = self.unchanged;
            self.unchanged += 1;
            if unchanged > SETTLE_FRAMES {
                self.status = ScrollStatus::Settled;
                #[cfg(feature = "tracing")]
                tracing::debug!(frames = self.frames, top, "scroll settled");
                return self.status;
            }
        } else {
            self.unchanged = 0;
            self.last_top = Some(top);
        }
        if matches!(self.max_frames, Some(max) if self.frames >= max) {
            self.status = ScrollStatus::TimedOut;
            #[cfg(feature = "tracing")]
            tracing::debug!(frames = self.frames, "scroll did not settle before the frame ceiling");
        }
        self.status
    }

    /// Reads the element's current top edge from `provider` and observes it.
    pub fn poll<P>(&mut self, provider: &P) -> ScrollStatus
    where
        P: GeometryProvider<Element = E> + ?Sized,
    {
        let top = provider.bounding_rect(&self.element).y0;
        self.observe(top)
    }
}

/// Starts scrolling `element` into view and returns a watch for completion.
///
/// Fails with [`ScrollError::NotAnElement`] when `element` is `None`.
pub fn scroll_into_view<H>(
    host: &mut H,
    element: Option<&H::Element>,
    options: &ScrollOptions,
) -> Result<SettleWatch<H::Element>, ScrollError>
where
    H: ScrollHost + ?Sized,
{
    let element = element.ok_or(ScrollError::NotAnElement)?;
    Ok(start(host, element, options))
}

/// Infallible core of [`scroll_into_view`] for callers that already hold an element.
pub(crate) fn start<H>(host: &mut H, element: &H::Element, options: &ScrollOptions) -> SettleWatch<H::Element>
where
    H: ScrollHost + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(
        block = ?options.scroll.block,
        inline = ?options.scroll.inline,
        behavior = ?options.scroll.behavior,
        "scrolling target into view"
    );
    host.scroll_into_view(element, &options.scroll);
    SettleWatch::new(element.clone(), options.max_settle_frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPage;
    use kurbo::{Rect, Size};

    #[test]
    fn missing_element_is_rejected() {
        let mut page = MockPage::new(Size::new(800.0, 600.0));
        let err = scroll_into_view(&mut page, None, &ScrollOptions::default()).unwrap_err();
        assert_eq!(err, ScrollError::NotAnElement);
        assert_eq!(page.scroll_calls(), 0);
    }

    #[test]
    fn stationary_element_settles_on_the_fifth_frame() {
        let mut watch = SettleWatch::new((), None);
        for _ in 0..4 {
            assert_eq!(watch.observe(120.0), ScrollStatus::Pending);
        }
        assert_eq!(watch.observe(120.0), ScrollStatus::Settled);
        assert_eq!(watch.frames(), 5);
    }

    #[test]
    fn movement_resets_the_count() {
        let mut watch = SettleWatch::new((), None);
        for top in [300.0, 200.0, 200.0, 200.0, 150.0, 150.0, 150.0, 150.0] {
            assert_eq!(watch.observe(top), ScrollStatus::Pending);
        }
        assert_eq!(watch.observe(150.0), ScrollStatus::Settled);
    }

    #[test]
    fn ceiling_times_out_and_sticks() {
        let mut watch = SettleWatch::new((), Some(3));
        assert_eq!(watch.observe(1.0), ScrollStatus::Pending);
        assert_eq!(watch.observe(2.0), ScrollStatus::Pending);
        assert_eq!(watch.observe(3.0), ScrollStatus::TimedOut);
        assert_eq!(watch.observe(3.0), ScrollStatus::TimedOut);
        assert_eq!(watch.frames(), 3);
    }

    #[test]
    fn smooth_scroll_settles_with_target_in_view() {
        let mut page = MockPage::new(Size::new(800.0, 600.0))
            .with_document_size(Size::new(800.0, 4000.0));
        let el = page.add("#far", Rect::new(0.0, 2000.0, 100.0, 2050.0));
        let mut watch = scroll_into_view(&mut page, Some(&el), &ScrollOptions::default()).unwrap();
        assert_eq!(page.scroll_calls(), 1);

        let mut status = ScrollStatus::Pending;
        for _ in 0..200 {
            page.advance_frame();
            status = watch.poll(&page);
            if status.is_done() {
                break;
            }
        }
        assert_eq!(status, ScrollStatus::Settled);
        // Centered in the viewport.
        assert_eq!(page.bounding_rect(&el).y0, 275.0);
    }
}
