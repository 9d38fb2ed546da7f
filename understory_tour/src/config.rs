// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour-wide defaults.

use understory_placement::{Padding, Position, PositionSpec, Side};

use crate::navigation::KeyboardOptions;
use crate::scroll::ScrollOptions;

/// Settings shared by every step of a tour.
///
/// Steps override `padding`, `position`, and `disable_interaction` individually.
///
/// ```
/// use understory_placement::Side;
/// use understory_tour::TourConfig;
///
/// let config = TourConfig::default()
///     .with_padding(4.0)
///     .with_position(Side::Right)
///     .with_disable_interaction(true);
/// assert!(config.disable_interaction);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TourConfig {
    /// Padding for steps that do not set their own.
    pub padding: Padding,
    /// Popover position for steps that do not set their own.
    ///
    /// Only literal positions round-trip through `serde`.
    pub position: PositionSpec,
    /// Popover position while the target is being scrolled into view.
    pub transition_position: PositionSpec,
    /// Whether the highlighted area swallows pointer input by default.
    pub disable_interaction: bool,
    /// Scrolling and in-view detection.
    pub scroll: ScrollOptions,
    /// Keyboard navigation.
    pub keyboard: KeyboardOptions,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            position: PositionSpec::default(),
            transition_position: PositionSpec::Literal(Position::Side(Side::Center)),
            disable_interaction: false,
            scroll: ScrollOptions::default(),
            keyboard: KeyboardOptions::default(),
        }
    }
}

impl TourConfig {
    /// Sets the default padding.
    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the default popover position.
    pub fn with_position(mut self, position: impl Into<PositionSpec>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the popover position used while scrolling.
    pub fn with_transition_position(mut self, position: impl Into<PositionSpec>) -> Self {
        self.transition_position = position.into();
        self
    }

    /// Sets whether the highlighted area swallows pointer input by default.
    pub fn with_disable_interaction(mut self, disable: bool) -> Self {
        self.disable_interaction = disable;
        self
    }

    /// Sets the scroll options.
    pub fn with_scroll(mut self, scroll: ScrollOptions) -> Self {
        self.scroll = scroll;
        self
    }

    /// Sets the keyboard options.
    pub fn with_keyboard(mut self, keyboard: KeyboardOptions) -> Self {
        self.keyboard = keyboard;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn defaults() {
        let config = TourConfig::default();
        assert_eq!(config.position, PositionSpec::Literal(Side::Bottom.into()));
        assert_eq!(
            config.transition_position,
            PositionSpec::Literal(Side::Center.into())
        );
        assert!(!config.disable_interaction);
    }

    #[test]
    fn tour_wide_positions_may_be_computed() {
        let config = TourConfig::default()
            .with_position(PositionSpec::computed(|cx| {
                [cx.target.left(), cx.target.bottom()].into()
            }))
            .with_transition_position([8.0, 8.0]);
        assert!(matches!(config.position, PositionSpec::Computed(_)));
        assert_eq!(
            config.transition_position,
            PositionSpec::Literal(Position::At(Point::new(8.0, 8.0)))
        );
        assert_eq!(config.clone(), config);
    }
}
