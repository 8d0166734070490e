// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toast records and the requests that create them.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Visual flavour of a toast.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ToastVariant {
    /// Neutral information.
    #[default]
    Info,
    /// Something finished.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
}

impl ToastVariant {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ToastVariant`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown toast variant `{0}`, expected one of: info, success, warning, error")]
pub struct ParseToastVariantError(String);

impl FromStr for ToastVariant {
    type Err = ParseToastVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseToastVariantError(s.to_string()))
    }
}

/// Screen corner or edge a toast stacks at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ToastPosition {
    /// Top left.
    TopLeft,
    /// Top, horizontally centered.
    TopCenter,
    /// Top right.
    #[default]
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom, horizontally centered.
    BottomCenter,
    /// Bottom right.
    BottomRight,
}

impl ToastPosition {
    /// All positions, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Kebab-case name, for example `"top-right"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Whether toasts at this position stack downwards from the top edge.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ToastPosition`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown toast position `{0}`")]
pub struct ParseToastPositionError(String);

impl FromStr for ToastPosition {
    type Err = ParseToastPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseToastPositionError(s.to_string()))
    }
}

/// Identifier of a toast within its [`ToastStore`](crate::ToastStore).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastId(pub u64);

/// What to show. Passed to [`ToastStore::push`](crate::ToastStore::push).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToastRequest {
    /// Text of the toast.
    pub message: String,
    /// Visual flavour.
    pub variant: ToastVariant,
    /// Where it stacks.
    pub position: ToastPosition,
    /// Name of the region the toast belongs to, when a page has several.
    pub target: Option<String>,
    /// Lifetime in milliseconds. `None` uses the store default; `Some(0)` stays
    /// until dismissed.
    pub duration_ms: Option<u64>,
}

impl ToastRequest {
    /// An info toast with default position and duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: ToastVariant::default(),
            position: ToastPosition::default(),
            target: None,
            duration_ms: None,
        }
    }

    /// Set [`ToastRequest::variant`].
    #[must_use]
    pub fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set [`ToastRequest::position`].
    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Set [`ToastRequest::target`].
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set [`ToastRequest::duration_ms`].
    #[must_use]
    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

/// A toast held by a [`ToastStore`](crate::ToastStore).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toast {
    /// Identifier.
    pub id: ToastId,
    /// Text of the toast.
    pub message: String,
    /// Visual flavour.
    pub variant: ToastVariant,
    /// Where it stacks.
    pub position: ToastPosition,
    /// Region it belongs to.
    pub target: Option<String>,
    /// How many identical requests it stands for (at least 1).
    pub count: u32,
    /// When the most recent identical request arrived.
    pub updated_at: u64,
    /// When it disappears, or `None` if it stays until dismissed.
    pub expires_at: Option<u64>,
}

impl Toast {
    /// Whether `request` would be folded into this toast.
    pub fn matches(&self, request: &ToastRequest) -> bool {
        self.message == request.message
            && self.variant == request.variant
            && self.position == request.position
            && self.target == request.target
    }

    /// Whether it has expired at `now`.
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}
