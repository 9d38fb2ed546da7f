// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour steps.

use alloc::string::String;
use alloc::vec::Vec;

use understory_placement::{Padding, PositionSpec};

/// What a step points at: a live element, or a selector resolved on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<E> {
    /// Used as is.
    Element(E),
    /// Resolved to the first matching element each time the step is measured.
    Selector(String),
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.into())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

/// One step of a tour.
///
/// ```
/// use understory_placement::Side;
/// use understory_tour::Step;
///
/// let step: Step<()> = Step::new("#save")
///     .with_highlighted_selectors(["#save", "#save-menu"])
///     .with_position(Side::Right)
///     .with_padding([4.0, 8.0]);
/// assert!(step.bypass_target);
/// ```
#[derive(Clone, Debug)]
pub struct Step<E> {
    /// Element to highlight and anchor the popover to.
    pub target: Target<E>,
    /// Additional elements whose union forms the highlighted area.
    pub highlighted_selectors: Vec<String>,
    /// Popover position for this step; falls back to the tour default.
    pub position: Option<PositionSpec>,
    /// Padding for this step; falls back to the tour default.
    pub padding: Option<Padding>,
    /// When set, the union of highlighted selectors replaces the target's own
    /// rectangle instead of being merged with it.
    pub bypass_target: bool,
    /// Whether the highlighted area accepts pointer input; overrides the tour default.
    ///
    /// Any `Some` value wins, so `Some(false)` blocks input even when the tour
    /// allows it. Leave this `None` to inherit the tour-wide flag.
    pub interaction: Option<bool>,
    /// Selectors whose subtree mutations should trigger [`SizingEvent::MutationSignaled`].
    ///
    /// [`SizingEvent::MutationSignaled`]: crate::SizingEvent::MutationSignaled
    pub mutation_observables: Vec<String>,
    /// Selectors whose resizes should trigger [`SizingEvent::ResizeSignaled`].
    ///
    /// [`SizingEvent::ResizeSignaled`]: crate::SizingEvent::ResizeSignaled
    pub resize_observables: Vec<String>,
}

impl<E> Step<E> {
    /// A step targeting `target` with every other field defaulted.
    pub fn new(target: impl Into<Target<E>>) -> Self {
        Self {
            target: target.into(),
            highlighted_selectors: Vec::new(),
            position: None,
            padding: None,
            bypass_target: true,
            interaction: None,
            mutation_observables: Vec::new(),
            resize_observables: Vec::new(),
        }
    }

    /// A step targeting a live element.
    pub fn element(element: E) -> Self {
        Self::new(Target::Element(element))
    }

    /// Sets the highlighted selectors.
    pub fn with_highlighted_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlighted_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the popover position.
    pub fn with_position(mut self, position: impl Into<PositionSpec>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    /// Sets whether highlighted selectors replace the target rectangle.
    pub fn with_bypass_target(mut self, bypass: bool) -> Self {
        self.bypass_target = bypass;
        self
    }

    /// Sets whether the highlighted area accepts pointer input.
    pub fn with_interaction(mut self, allowed: bool) -> Self {
        self.interaction = Some(allowed);
        self
    }

    /// Sets the selectors watched for mutations.
    pub fn with_mutation_observables<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutation_observables = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the selectors watched for resizes.
    pub fn with_resize_observables<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resize_observables = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the highlighted area swallows pointer input, given the tour-wide
    /// `disable_interaction` flag.
    pub fn blocks_interaction(&self, disable_interaction: bool) -> bool {
        match self.interaction {
            Some(allowed) => !allowed,
            None => disable_interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let step: Step<u32> = Step::new("#a");
        assert_eq!(step.target, Target::Selector("#a".into()));
        assert!(step.bypass_target);
        assert!(step.highlighted_selectors.is_empty());
        assert!(step.position.is_none() && step.padding.is_none());
    }

    #[test]
    fn step_interaction_overrides_tour_flag() {
        let step: Step<u32> = Step::element(7);
        assert!(step.blocks_interaction(true));
        assert!(!step.blocks_interaction(false));
        let step = step.with_interaction(true);
        assert!(!step.blocks_interaction(true));
        let step = step.with_interaction(false);
        assert!(step.blocks_interaction(false));
        assert!(step.blocks_interaction(true));
    }

    #[test]
    fn unset_interaction_inherits_tour_flag() {
        let step: Step<u32> = Step::new("#a");
        assert_eq!(step.interaction, None);
        assert!(step.blocks_interaction(true));
        assert!(!step.blocks_interaction(false));
    }
}
