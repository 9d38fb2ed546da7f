// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-step sizing: measure the highlighted area, scroll it into view, and
//! measure again once the scroll settles.
//!
//! [`Sizing`] is an explicit state machine. Hosts feed it [`SizingEvent`]s,
//! either directly through [`Sizing::handle`] or queued with [`Sizing::push`]
//! and drained by [`Sizing::process`], and read the results back through
//! accessors or a [`OverlayFrame`].
//!
//! ## Lifecycle
//!
//! - [`SizingEvent::StepChanged`] resolves the step, measures it, and checks
//!   whether the result is in view.
//! - [`SizingEvent::ResizeSignaled`] measures again and checks the view when
//!   the rectangle or the viewport size changed.
//! - When the rectangle is out of view and the step has a target, a scroll is
//!   started and the sizing enters its transition. While in transition the
//!   mask collapses and the popover uses the transition position.
//! - [`SizingEvent::AnimationFrame`] polls the scroll. When it settles (or
//!   gives up, see [`ScrollOptions::max_settle_frames`]), the transition ends
//!   and the step is measured once more, unless a
//!   [`SizingEvent::MutationSignaled`] is already queued behind it.
//! - [`SizingEvent::MutationSignaled`] measures immediately and records whether
//!   any highlighted selector matched. It never scrolls.
//!
//! A step change while a scroll is in flight does not cancel it. Only one
//! scroll is tracked at a time; starting another replaces the watch.

use alloc::collections::VecDeque;

use bitflags::bitflags;
use kurbo::{Insets, Size};
use understory_placement::{
    MaskGeometry, Placement, PositionSpec, ResolvedPadding, TargetRect, is_in_view, place,
};

use crate::config::TourConfig;
use crate::provider::{GeometryProvider, ScrollHost};
use crate::scroll::{self, ScrollOptions, SettleWatch};
use crate::step::Step;
use crate::target::{self, HighlightedRect};
use crate::viewport::viewport_size;

/// Inputs to [`Sizing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizingEvent {
    /// The current step (or the step list) changed.
    StepChanged,
    /// The window or an observed element was resized.
    ResizeSignaled,
    /// An observed subtree mutated.
    MutationSignaled,
    /// An animation frame elapsed.
    AnimationFrame,
    /// The host knows the scroll is over without waiting for it to settle.
    ScrollSettled,
}

/// Coarse state of a [`Sizing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizingPhase {
    /// Nothing measured yet.
    #[default]
    Idle,
    /// Waiting for a scroll to settle.
    Scrolling,
    /// Measured and in view, or nothing left to scroll to.
    Done,
}

bitflags! {
    /// Outputs of a [`Sizing`] that changed while handling events.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SizingChanges: u8 {
        /// [`Sizing::sizes`] changed.
        const RECT = 0b0000_0001;
        /// [`Sizing::in_transition`] changed.
        const TRANSITION = 0b0000_0010;
        /// [`Sizing::is_highlighting_observed`] changed.
        const HIGHLIGHTING = 0b0000_0100;
    }
}

impl Default for SizingChanges {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sizing state for the current step of a tour.
#[derive(Clone, Debug)]
pub struct Sizing<E> {
    options: ScrollOptions,
    sizes: TargetRect,
    target: Option<E>,
    in_transition: bool,
    highlighting_observed: bool,
    viewport: Size,
    watch: Option<SettleWatch<E>>,
    phase: SizingPhase,
    queue: VecDeque<SizingEvent>,
}

impl<E: Clone> Sizing<E> {
    /// Creates an idle sizing.
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            sizes: TargetRect::ZERO,
            target: None,
            in_transition: false,
            highlighting_observed: false,
            viewport: Size::ZERO,
            watch: None,
            phase: SizingPhase::Idle,
            queue: VecDeque::new(),
        }
    }

    /// Last measured highlighted area.
    pub fn sizes(&self) -> TargetRect {
        self.sizes
    }

    /// Element the current step resolved to.
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    /// Whether a scroll to the target is in progress.
    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Whether the last mutation refresh found a visible highlighted element.
    pub fn is_highlighting_observed(&self) -> bool {
        self.highlighting_observed
    }

    /// Current phase.
    pub fn phase(&self) -> SizingPhase {
        self.phase
    }

    /// The in-flight scroll, if any.
    pub fn watch(&self) -> Option<&SettleWatch<E>> {
        self.watch.as_ref()
    }

    /// Scroll options.
    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Replaces the scroll options. An in-flight scroll keeps its ceiling.
    pub fn set_options(&mut self, options: ScrollOptions) {
        self.options = options;
    }

    /// Queues an event for [`process`](Self::process).
    pub fn push(&mut self, event: SizingEvent) {
        self.queue.push_back(event);
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Handles every queued event in order.
    pub fn process<H>(&mut self, host: &mut H, step: Option<&Step<E>>) -> SizingChanges
    where
        H: ScrollHost<Element = E> + ?Sized,
    {
        let mut changes = SizingChanges::empty();
        while let Some(event) = self.queue.pop_front() {
            changes |= self.handle(host, step, event);
        }
        changes
    }

    /// Handles one event against the current `step`.
    pub fn handle<H>(
        &mut self,
        host: &mut H,
        step: Option<&Step<E>>,
        event: SizingEvent,
    ) -> SizingChanges
    where
        H: ScrollHost<Element = E> + ?Sized,
    {
        let before = (self.sizes, self.in_transition, self.highlighting_observed);
        match event {
            SizingEvent::StepChanged => {
                self.highlighting_observed = false;
                self.measure(&*host, step);
                self.check_in_view(host);
            }
            SizingEvent::ResizeSignaled => {
                if self.measure(&*host, step) {
                    self.check_in_view(host);
                }
            }
            SizingEvent::MutationSignaled => self.refresh(&*host, step),
            SizingEvent::AnimationFrame => {
                let done = match self.watch.as_mut() {
                    Some(watch) => watch.poll(&*host).is_done(),
                    None => false,
                };
                if done {
                    self.settle(host, step);
                }
            }
            SizingEvent::ScrollSettled => {
                if self.watch.is_some() {
                    self.settle(host, step);
                }
            }
        }

        let mut changes = SizingChanges::empty();
        changes.set(SizingChanges::RECT, before.0 != self.sizes);
        changes.set(SizingChanges::TRANSITION, before.1 != self.in_transition);
        changes.set(SizingChanges::HIGHLIGHTING, before.2 != self.highlighting_observed);
        changes
    }

    /// Render outputs for the current state.
    pub fn frame<P>(&self, provider: &P, step: Option<&Step<E>>, config: &TourConfig) -> OverlayFrame
    where
        P: GeometryProvider + ?Sized,
    {
        let viewport = viewport_size(provider);
        let mut padding = step
            .and_then(|s| s.padding)
            .unwrap_or(config.padding)
            .resolve();
        let mask_rect = if self.in_transition {
            padding.mask = Insets::ZERO;
            TargetRect::ZERO
        } else {
            self.sizes
        };
        let popover_position = if self.in_transition {
            config.transition_position.clone()
        } else {
            step.and_then(|s| s.position.clone())
                .unwrap_or_else(|| config.position.clone())
        };
        OverlayFrame {
            sizes: self.sizes,
            mask: MaskGeometry::new(&mask_rect, padding.mask, padding.wrapper, viewport),
            mask_rect,
            padding,
            popover_position,
            blocks_interaction: step.map_or(config.disable_interaction, |s| {
                s.blocks_interaction(config.disable_interaction)
            }),
            in_transition: self.in_transition,
            highlighting_observed: self.highlighting_observed,
            viewport,
        }
    }

    /// Measures `step` and stores the result. Returns whether the rectangle or
    /// the viewport it was measured in changed.
    fn measure<P>(&mut self, provider: &P, step: Option<&Step<E>>) -> bool
    where
        P: GeometryProvider<Element = E> + ?Sized,
    {
        let (element, highlighted) = self.resolve(provider, step);
        self.target = element;
        let viewport = viewport_size(provider);
        if highlighted.rect == self.sizes && viewport == self.viewport {
            return false;
        }
        self.sizes = highlighted.rect;
        self.viewport = viewport;
        true
    }

    fn refresh<P>(&mut self, provider: &P, step: Option<&Step<E>>)
    where
        P: GeometryProvider<Element = E> + ?Sized,
    {
        let (element, highlighted) = self.resolve(provider, step);
        self.target = element;
        self.sizes = highlighted.rect;
        self.viewport = viewport_size(provider);
        self.highlighting_observed = highlighted.has_highlighted_elements;
    }

    fn resolve<P>(&self, provider: &P, step: Option<&Step<E>>) -> (Option<E>, HighlightedRect)
    where
        P: GeometryProvider<Element = E> + ?Sized,
    {
        match step {
            Some(step) => target::resolve(provider, step),
            None => (None, HighlightedRect::default()),
        }
    }

    fn check_in_view<H>(&mut self, host: &mut H)
    where
        H: ScrollHost<Element = E> + ?Sized,
    {
        let viewport = viewport_size(&*host);
        let in_view = is_in_view(self.sizes.bounds, viewport, self.options.in_view_threshold);
        let element = match &self.target {
            Some(element) if !in_view => element,
            _ => {
                if self.watch.is_none() {
                    self.phase = SizingPhase::Done;
                }
                return;
            }
        };
        let watch = scroll::start(host, element, &self.options);
        self.watch = Some(watch);
        self.in_transition = true;
        self.phase = SizingPhase::Scrolling;
    }

    fn settle<H>(&mut self, host: &mut H, step: Option<&Step<E>>)
    where
        H: ScrollHost<Element = E> + ?Sized,
    {
        self.watch = None;
        self.in_transition = false;
        self.phase = SizingPhase::Done;
        // A queued refresh measures right after this.
        if self.queue.contains(&SizingEvent::MutationSignaled) {
            return;
        }
        if self.measure(&*host, step) {
            self.check_in_view(host);
        }
    }
}

impl<E: Clone> Default for Sizing<E> {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}

/// Everything a presentation layer needs to draw one frame of the overlay.
#[derive(Clone, Debug)]
pub struct OverlayFrame {
    /// Measured highlighted area; the popover anchors here even in transition.
    pub sizes: TargetRect,
    /// Area the mask cuts out; zero while in transition.
    pub mask_rect: TargetRect,
    /// Resolved padding; the mask padding is zero while in transition.
    pub padding: ResolvedPadding,
    /// Mask canvas and cut-out.
    pub mask: MaskGeometry,
    /// Position to request from [`place`].
    pub popover_position: PositionSpec,
    /// Whether the cut-out swallows pointer input.
    pub blocks_interaction: bool,
    /// Whether a scroll is in progress.
    pub in_transition: bool,
    /// Whether a highlighted selector was observed.
    pub highlighting_observed: bool,
    /// Viewport size the frame was computed for.
    pub viewport: Size,
}

impl OverlayFrame {
    /// Places a popover of the given size.
    pub fn place_popover(&self, popover: Size) -> Placement {
        place(
            &self.popover_position,
            &self.sizes,
            popover,
            self.viewport,
            self.padding.popover,
        )
    }
}
