// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger modes and their configuration.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::Listeners;

/// Default delay before a hover-opened panel closes, in milliseconds.
pub const DEFAULT_HOVER_DELAY_MS: u64 = 200;

/// Which DOM events open and close a panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TriggerMode {
    /// No listeners; the owner toggles the open flag directly.
    Manual,
    /// Clicking the trigger toggles the panel.
    #[default]
    Click,
    /// Pointer over the trigger opens; leaving trigger and panel closes after a delay.
    Hover,
    /// Focus entering the trigger opens; focus leaving trigger and panel closes.
    Focus,
}

impl TriggerMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 4] = [Self::Manual, Self::Click, Self::Hover, Self::Focus];

    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Focus => "focus",
        }
    }

    /// Listeners this mode binds on the trigger element.
    #[must_use]
    pub const fn trigger_listeners(self) -> Listeners {
        match self {
            Self::Manual => Listeners::empty(),
            Self::Click => Listeners::TRIGGER_CLICK,
            Self::Hover => Listeners::TRIGGER_POINTER_ENTER.union(Listeners::TRIGGER_POINTER_LEAVE),
            Self::Focus => Listeners::TRIGGER_FOCUS_IN.union(Listeners::TRIGGER_FOCUS_OUT),
        }
    }

    /// Listeners this mode binds on the panel element while it is mounted.
    #[must_use]
    pub const fn panel_listeners(self) -> Listeners {
        match self {
            Self::Manual | Self::Click => Listeners::empty(),
            Self::Hover => Listeners::PANEL_POINTER_ENTER.union(Listeners::PANEL_POINTER_LEAVE),
            Self::Focus => Listeners::PANEL_FOCUS_OUT,
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`TriggerMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown trigger mode `{0}`, expected one of: manual, click, hover, focus")]
pub struct ParseTriggerModeError(String);

impl FromStr for TriggerMode {
    type Err = ParseTriggerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTriggerModeError(s.to_string()))
    }
}

/// Configuration for a [`TriggerController`](crate::TriggerController).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TriggerConfig {
    /// Active mode.
    pub mode: TriggerMode,
    /// Close delay for [`TriggerMode::Hover`], in milliseconds.
    pub hover_delay_ms: u64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            mode: TriggerMode::default(),
            hover_delay_ms: DEFAULT_HOVER_DELAY_MS,
        }
    }
}

impl TriggerConfig {
    /// Default configuration with `mode`.
    #[must_use]
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set [`TriggerConfig::hover_delay_ms`].
    #[must_use]
    pub const fn with_hover_delay(mut self, ms: u64) -> Self {
        self.hover_delay_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HOVER_DELAY_MS, TriggerConfig, TriggerMode};
    use crate::Listeners;

    #[test]
    fn manual_binds_nothing() {
        assert!(TriggerMode::Manual.trigger_listeners().is_empty());
        assert!(TriggerMode::Manual.panel_listeners().is_empty());
    }

    #[test]
    fn listener_sets_stay_on_their_surface() {
        for mode in TriggerMode::ALL {
            assert!(Listeners::TRIGGER_ALL.contains(mode.trigger_listeners()));
            assert!(Listeners::PANEL_ALL.contains(mode.panel_listeners()));
        }
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("hover".parse(), Ok(TriggerMode::Hover));
        assert_eq!("FOCUS".parse(), Ok(TriggerMode::Focus));
        assert!("longpress".parse::<TriggerMode>().is_err());
    }

    #[test]
    fn config_defaults() {
        let config = TriggerConfig::new(TriggerMode::Hover).with_hover_delay(100);
        assert_eq!(config.mode, TriggerMode::Hover);
        assert_eq!(config.hover_delay_ms, 100);
        assert_eq!(TriggerConfig::default().hover_delay_ms, DEFAULT_HOVER_DELAY_MS);
        assert_eq!(TriggerConfig::default().mode, TriggerMode::Click);
    }
}
