// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation between steps.
//!
//! Key handling is split in two: [`TourState::handle_key`] maps a key to a
//! [`NavAction`] without side effects, and [`TourState::apply`] performs it.
//! Hosts that want to intercept or veto an action can do so in between.
//!
//! ```
//! use understory_tour::navigation::{KeyboardOptions, NavAction, NavKey, TourState};
//!
//! let mut state = TourState::new(3);
//! let keys = KeyboardOptions::default();
//!
//! let action = state.handle_key(NavKey::ArrowRight, &keys);
//! assert_eq!(action, Some(NavAction::GoTo(1)));
//! state.apply(NavAction::GoTo(1));
//!
//! // Right-to-left layouts swap the arrows.
//! let rtl = KeyboardOptions::default().with_rtl(true);
//! assert_eq!(state.handle_key(NavKey::ArrowRight, &rtl), Some(NavAction::GoTo(0)));
//! ```

use bitflags::bitflags;

/// Keys the tour reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Close the tour.
    Escape,
    /// Previous step (next in right-to-left layouts).
    ArrowLeft,
    /// Next step (previous in right-to-left layouts).
    ArrowRight,
}

impl NavKey {
    /// Maps a legacy DOM `keyCode` (27, 37, 39) to a key.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            27 => Some(Self::Escape),
            37 => Some(Self::ArrowLeft),
            39 => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// Maps a DOM `KeyboardEvent.key` value to a key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    fn flag(self) -> NavKeys {
        match self {
            Self::Escape => NavKeys::ESC,
            Self::ArrowLeft => NavKeys::LEFT,
            Self::ArrowRight => NavKeys::RIGHT,
        }
    }
}

bitflags! {
    /// A set of navigation keys.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NavKeys: u8 {
        /// Escape.
        const ESC = 0b0000_0001;
        /// Left arrow.
        const LEFT = 0b0000_0010;
        /// Right arrow.
        const RIGHT = 0b0000_0100;
    }
}

impl Default for NavKeys {
    fn default() -> Self {
        Self::empty()
    }
}

/// Keyboard behavior of a tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyboardOptions {
    /// Keys that are ignored. [`NavKeys::all()`] disables keyboard navigation.
    pub disabled: NavKeys,
    /// Swap the arrow keys for right-to-left layouts.
    pub rtl: bool,
}

impl KeyboardOptions {
    /// Options with every key disabled.
    pub fn disabled() -> Self {
        Self {
            disabled: NavKeys::all(),
            rtl: false,
        }
    }

    /// Sets the disabled keys.
    pub fn with_disabled(mut self, keys: NavKeys) -> Self {
        self.disabled = keys;
        self
    }

    /// Sets right-to-left mode.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

/// What a key press asks the tour to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Close the tour.
    Close,
    /// Show the step at this index.
    GoTo(usize),
}

/// Current step and open state of a tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourState {
    current: usize,
    len: usize,
    open: bool,
    actions_disabled: bool,
}

impl TourState {
    /// An open tour of `len` steps at the first step.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            open: true,
            actions_disabled: false,
        }
    }

    /// Index of the current step.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tour has no steps.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the tour is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the tour.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the tour. The current step is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Changes the number of steps, clamping the current index.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current = self.clamp(self.current);
    }

    /// Temporarily ignores every key, for example while a step runs an action.
    pub fn set_actions_disabled(&mut self, disabled: bool) {
        self.actions_disabled = disabled;
    }

    /// Index of the next step, clamped to the last one.
    pub fn next_index(&self) -> usize {
        self.clamp(self.current.saturating_add(1))
    }

    /// Index of the previous step, clamped to the first one.
    pub fn prev_index(&self) -> usize {
        self.current.saturating_sub(1)
    }

    /// Maps `key` to an action, or `None` when the key is ignored.
    pub fn handle_key(&self, key: NavKey, options: &KeyboardOptions) -> Option<NavAction> {
        if !self.open || self.actions_disabled || options.disabled.contains(key.flag()) {
            return None;
        }
        let forward = match key {
            NavKey::Escape => return Some(NavAction::Close),
            NavKey::ArrowRight => !options.rtl,
            NavKey::ArrowLeft => options.rtl,
        };
        Some(NavAction::GoTo(if forward { self.next_index() } else { self.prev_index() }))
    }

    /// Performs `action`. Returns whether the state changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = *self;
        match action {
            NavAction::Close => self.close(),
            NavAction::GoTo(index) => self.current = self.clamp(index),
        }
        *self != before
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_clamp_at_both_ends() {
        let mut state = TourState::new(2);
        let keys = KeyboardOptions::default();
        assert_eq!(state.handle_key(NavKey::ArrowLeft, &keys), Some(NavAction::GoTo(0)));
        assert!(state.apply(NavAction::GoTo(1)));
        assert_eq!(state.handle_key(NavKey::ArrowRight, &keys), Some(NavAction::GoTo(1)));
        assert!(!state.apply(NavAction::GoTo(1)));
    }

    #[test]
    fn escape_closes() {
        let mut state = TourState::new(4);
        let action = state.handle_key(NavKey::Escape, &KeyboardOptions::default());
        assert_eq!(action, Some(NavAction::Close));
        assert!(state.apply(NavAction::Close));
        assert!(!state.is_open());
        assert_eq!(state.handle_key(NavKey::ArrowRight, &KeyboardOptions::default()), None);
    }

    #[test]
    fn per_key_and_global_disable() {
        let state = TourState::new(4);
        let no_esc = KeyboardOptions::default().with_disabled(NavKeys::ESC);
        assert_eq!(state.handle_key(NavKey::Escape, &no_esc), None);
        assert_eq!(state.handle_key(NavKey::ArrowRight, &no_esc), Some(NavAction::GoTo(1)));
        let off = KeyboardOptions::disabled();
        assert_eq!(state.handle_key(NavKey::ArrowRight, &off), None);
    }

    #[test]
    fn disabled_actions_ignore_keys() {
        let mut state = TourState::new(4);
        state.set_actions_disabled(true);
        assert_eq!(state.handle_key(NavKey::Escape, &KeyboardOptions::default()), None);
        state.set_actions_disabled(false);
        assert!(state.handle_key(NavKey::Escape, &KeyboardOptions::default()).is_some());
    }

    #[test]
    fn key_codes_and_names() {
        assert_eq!(NavKey::from_key_code(39), Some(NavKey::ArrowRight));
        assert_eq!(NavKey::from_key_code(13), None);
        assert_eq!(NavKey::from_key_name("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key_name("Enter"), None);
    }

    #[test]
    fn empty_tour_stays_at_zero() {
        let mut state = TourState::new(0);
        assert!(state.is_empty());
        assert_eq!(state.next_index(), 0);
        state.set_len(3);
        state.apply(NavAction::GoTo(9));
        assert_eq!(state.current(), 2);
        state.set_len(1);
        assert_eq!(state.current(), 0);
    }
}
