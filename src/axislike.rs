//! Tools for classifying dual-axis input samples into a dominant axis and direction

use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

/// One of the two input channels making up a dual-axis sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum TapAxis {
    /// The X-axis (typically horizontal movement).
    Horizontal,

    /// The Y-axis (typically vertical movement).
    Vertical,
}

impl TapAxis {
    /// Returns the axis with the greater magnitude in `value`.
    ///
    /// Returns `None` for a neutral sample, where both components are exactly `0.0`.
    /// When both magnitudes are equal, [`TapAxis::Vertical`] wins.
    ///
    /// ```rust
    /// use bevy::prelude::Vec2;
    /// use double_tap_axis::axislike::TapAxis;
    ///
    /// assert_eq!(TapAxis::dominant(Vec2::ZERO), None);
    /// assert_eq!(TapAxis::dominant(Vec2::new(-0.8, 0.3)), Some(TapAxis::Horizontal));
    /// assert_eq!(TapAxis::dominant(Vec2::new(0.5, -0.5)), Some(TapAxis::Vertical));
    /// ```
    #[must_use]
    #[inline]
    pub fn dominant(value: Vec2) -> Option<Self> {
        let abs = value.abs();
        if abs.x == 0.0 && abs.y == 0.0 {
            None
        } else if abs.x > abs.y {
            Some(Self::Horizontal)
        } else {
            Some(Self::Vertical)
        }
    }

    /// Returns the signed value along the current axis.
    #[must_use]
    #[inline]
    pub const fn get_value(&self, value: Vec2) -> f32 {
        match self {
            Self::Horizontal => value.x,
            Self::Vertical => value.y,
        }
    }
}

/// The sign of a tap along its [`TapAxis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum TapDirection {
    /// Negative direction (left or down).
    Negative,

    /// Positive direction (right or up).
    Positive,
}

impl TapDirection {
    /// Returns the direction `value` points towards, or `None` if it is `0.0`.
    #[must_use]
    #[inline]
    pub fn from_value(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Positive)
        } else if value < 0.0 {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Checks if the given `value` represents an active input in this direction.
    #[must_use]
    #[inline]
    pub fn is_active(&self, value: f32) -> bool {
        match self {
            Self::Negative => value < 0.0,
            Self::Positive => value > 0.0,
        }
    }
}
