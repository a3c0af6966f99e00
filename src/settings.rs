//! Configuration for a [`TapAxisDetector`](crate::detector::TapAxisDetector)

use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

use crate::errors::DoubleTapSettingsError;

/// How many taps make up a gesture, and how quickly they must follow one another.
///
/// Settings are fixed once a detector has been built from them.
/// Missing fields fall back to their defaults when deserializing.
///
/// ```rust
/// use double_tap_axis::prelude::*;
///
/// let settings = DoubleTapSettings::default()
///     .with_taps_required(3)
///     .with_time_between_taps(0.25);
/// assert!(settings.validate().is_ok());
///
/// let invalid = DoubleTapSettings::default().with_taps_required(0);
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct DoubleTapSettings {
    /// The number of consecutive same-axis, same-direction taps needed to complete a gesture.
    ///
    /// Must be at least `1`.
    pub taps_required: u32,

    /// The longest pause, in seconds, between one tap and the next before the sequence is discarded.
    ///
    /// Must be finite and greater than `0.0`.
    pub time_between_taps: f32,

    /// Whether newly created detectors are listening for taps straight away.
    pub auto_start: bool,
}

impl Default for DoubleTapSettings {
    /// Two taps, at most 0.4 seconds apart, listening immediately.
    #[inline]
    fn default() -> Self {
        Self {
            taps_required: 2,
            time_between_taps: 0.4,
            auto_start: true,
        }
    }
}

impl DoubleTapSettings {
    /// Returns a copy requiring `taps_required` taps per gesture.
    #[inline]
    pub fn with_taps_required(mut self, taps_required: u32) -> Self {
        self.taps_required = taps_required;
        self
    }

    /// Returns a copy allowing at most `seconds` between taps.
    #[inline]
    pub fn with_time_between_taps(mut self, seconds: f32) -> Self {
        self.time_between_taps = seconds;
        self
    }

    /// Returns a copy that starts detectors running (`true`) or stopped (`false`).
    #[inline]
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Checks that these settings describe a usable detector.
    ///
    /// # Errors
    ///
    /// - [`DoubleTapSettingsError::InvalidTapsRequired`] if `taps_required` is `0`.
    /// - [`DoubleTapSettingsError::InvalidTimeWindow`] if `time_between_taps` is not finite or not positive.
    pub fn validate(&self) -> Result<(), DoubleTapSettingsError> {
        if self.taps_required < 1 {
            return Err(DoubleTapSettingsError::InvalidTapsRequired {
                taps_required: self.taps_required,
            });
        }

        if !self.time_between_taps.is_finite() || self.time_between_taps <= 0.0 {
            return Err(DoubleTapSettingsError::InvalidTimeWindow {
                time_between_taps: self.time_between_taps,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn defaults_are_valid() {
        let settings = DoubleTapSettings::default();
        assert_eq!(settings.taps_required, 2);
        assert_eq!(settings.time_between_taps, 0.4);
        assert!(settings.auto_start);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn single_tap_is_valid() {
        let settings = DoubleTapSettings::default().with_taps_required(1);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn zero_taps_are_rejected() {
        let settings = DoubleTapSettings::default().with_taps_required(0);
        assert_eq!(
            settings.validate(),
            Err(DoubleTapSettingsError::InvalidTapsRequired { taps_required: 0 })
        );
    }

    #[test]
    fn non_positive_windows_are_rejected() {
        for seconds in [0.0, -0.1] {
            let settings = DoubleTapSettings::default().with_time_between_taps(seconds);
            assert_eq!(
                settings.validate(),
                Err(DoubleTapSettingsError::InvalidTimeWindow {
                    time_between_taps: seconds
                })
            );
        }
    }

    #[test]
    fn non_finite_windows_are_rejected() {
        let infinite = DoubleTapSettings::default().with_time_between_taps(f32::INFINITY);
        assert!(matches!(
            infinite.validate(),
            Err(DoubleTapSettingsError::InvalidTimeWindow { .. })
        ));

        let nan = DoubleTapSettings::default().with_time_between_taps(f32::NAN);
        assert!(matches!(
            nan.validate(),
            Err(DoubleTapSettingsError::InvalidTimeWindow { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let error = DoubleTapSettingsError::InvalidTapsRequired { taps_required: 0 };
        assert_eq!(error.to_string(), "`taps_required` must be at least 1, got 0");
    }

    #[test]
    fn serde_representation() {
        assert_tokens(
            &DoubleTapSettings::default(),
            &[
                Token::Struct {
                    name: "DoubleTapSettings",
                    len: 3,
                },
                Token::Str("taps_required"),
                Token::U32(2),
                Token::Str("time_between_taps"),
                Token::F32(0.4),
                Token::Str("auto_start"),
                Token::Bool(true),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_de_tokens(
            &DoubleTapSettings::default().with_taps_required(3),
            &[
                Token::Struct {
                    name: "DoubleTapSettings",
                    len: 1,
                },
                Token::Str("taps_required"),
                Token::U32(3),
                Token::StructEnd,
            ],
        );
    }
}
