// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use perch_position::{DEFAULT_OFFSET, Placement};
use perch_trigger::{TriggerConfig, TriggerMode};

/// Configuration for a [`Popover`](crate::Popover).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopoverConfig {
    /// Preferred side of the trigger.
    pub placement: Placement,
    /// How the trigger opens and closes the panel.
    pub trigger: TriggerConfig,
    /// Gap between trigger and panel, in pixels.
    pub offset: f64,
    /// Close when a pointer press lands outside the trigger and the panel.
    pub close_on_click_outside: bool,
    /// Close when Escape is pressed.
    pub close_on_escape: bool,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            trigger: TriggerConfig::default(),
            offset: DEFAULT_OFFSET,
            close_on_click_outside: true,
            close_on_escape: true,
        }
    }
}

impl PopoverConfig {
    /// Set [`PopoverConfig::placement`].
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger mode, keeping the hover delay.
    #[must_use]
    pub fn with_mode(mut self, mode: TriggerMode) -> Self {
        self.trigger.mode = mode;
        self
    }

    /// Set the hover close delay, in milliseconds.
    #[must_use]
    pub fn with_hover_delay(mut self, ms: u64) -> Self {
        self.trigger.hover_delay_ms = ms;
        self
    }

    /// Set [`PopoverConfig::offset`].
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set [`PopoverConfig::close_on_click_outside`].
    #[must_use]
    pub fn with_close_on_click_outside(mut self, close: bool) -> Self {
        self.close_on_click_outside = close;
        self
    }

    /// Set [`PopoverConfig::close_on_escape`].
    #[must_use]
    pub fn with_close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }
}
