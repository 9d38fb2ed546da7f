// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tour --heading-base-level=0

//! Understory Tour: a deterministic guided-tour engine over an injected geometry provider.
//!
//! A tour is an ordered list of [`Step`]s, each pointing at an element of the
//! host's page. For the current step this crate resolves the highlighted area,
//! scrolls it into view when needed, and hands the presentation layer an
//! [`OverlayFrame`] describing the mask and the popover request. The pure
//! geometry (padding, in-view tests, placement, mask cut-out) lives in
//! [`understory_placement`].
//!
//! - [`provider`]: the [`GeometryProvider`] and [`ScrollHost`] capabilities a host implements.
//! - [`viewport`]: viewport size from the host's size sources.
//! - [`target`]: resolving a step to its highlighted rectangle.
//! - [`scroll`]: scrolling into view and detecting settlement.
//! - [`sizing`]: the per-step [`Sizing`] state machine.
//! - [`navigation`]: keyboard navigation between steps.
//! - [`config`]: tour-wide defaults.
//! - [`testing`]: an in-memory [`MockPage`](testing::MockPage).
//!
//! ## Driving a tour
//!
//! The engine never schedules work on its own. The host forwards events:
//! step changes, resizes, mutations of observed elements, and one
//! [`SizingEvent::AnimationFrame`] per frame while a scroll is in flight.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_tour::testing::MockPage;
//! use understory_tour::{Sizing, SizingEvent, SizingPhase, Step, TourConfig};
//!
//! let mut page = MockPage::new(Size::new(1024.0, 768.0))
//!     .with_document_size(Size::new(1024.0, 4000.0));
//! page.add("#intro", Rect::new(40.0, 40.0, 240.0, 90.0));
//! page.add("#footer", Rect::new(40.0, 3600.0, 600.0, 3700.0));
//!
//! let steps = [Step::new("#intro"), Step::new("#footer")];
//! let config = TourConfig::default();
//! let mut sizing = Sizing::new(config.scroll);
//!
//! // The footer is far below the fold: the engine scrolls to it.
//! sizing.handle(&mut page, Some(&steps[1]), SizingEvent::StepChanged);
//! assert!(sizing.in_transition());
//!
//! while sizing.phase() == SizingPhase::Scrolling {
//!     page.advance_frame();
//!     sizing.handle(&mut page, Some(&steps[1]), SizingEvent::AnimationFrame);
//! }
//!
//! let frame = sizing.frame(&page, Some(&steps[1]), &config);
//! assert!(!frame.in_transition);
//! let popover = frame.place_popover(Size::new(280.0, 120.0));
//! assert!(popover.coords.y >= 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo.
//! - `libm`: `no_std` float support through Kurbo.
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events for missing
//!   targets, hidden highlighted elements, and scroll start/settle.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod navigation;
pub mod provider;
pub mod scroll;
pub mod sizing;
pub mod step;
pub mod target;
pub mod testing;
pub mod viewport;

pub use config::TourConfig;
pub use navigation::{KeyboardOptions, NavAction, NavKey, NavKeys, TourState};
pub use provider::{GeometryProvider, ScrollHost};
pub use scroll::{
    ScrollAlign, ScrollBehavior, ScrollError, ScrollIntoView, ScrollOptions, ScrollStatus,
    SettleWatch, scroll_into_view,
};
pub use sizing::{OverlayFrame, Sizing, SizingChanges, SizingEvent, SizingPhase};
pub use step::{Step, Target};
pub use target::{HighlightedRect, highlighted_rect, resolve_element};
pub use viewport::viewport_size;

pub use understory_placement;
