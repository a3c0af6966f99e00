//! The double tap state machine.
//!
//! A [`TapAxisDetector`] is fed one dual-axis sample per frame, along with a monotonic clock reading,
//! and reports a [`GestureEvent`] on the frame where the final tap of a gesture lands.

use bevy::log::{debug, trace};
use bevy::prelude::{Component, Reflect, Vec2};
use serde::{Deserialize, Serialize};

use crate::axislike::{TapAxis, TapDirection};
use crate::errors::DoubleTapSettingsError;
use crate::settings::DoubleTapSettings;

/// A completed tap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct GestureEvent {
    /// The axis every tap in the gesture was made on.
    pub axis: TapAxis,

    /// The direction every tap in the gesture was made in.
    pub direction: TapDirection,

    /// The normalized input vector of the final tap.
    pub velocity: Vec2,

    /// The number of taps that made up the gesture.
    pub taps: u32,
}

/// Recognizes repeated taps in one direction along one axis.
///
/// A tap is counted when the input leaves neutral (both axes exactly `0.0`)
/// on the same [`TapAxis`] and in the same [`TapDirection`] as the first tap of the sequence.
/// Off-axis or off-direction input is ignored rather than cancelling the sequence:
/// progress is only discarded once the input rests at neutral for longer than
/// [`DoubleTapSettings::time_between_taps`].
///
/// ```rust
/// use double_tap_axis::prelude::*;
///
/// let mut detector = TapAxisDetector::default();
///
/// assert_eq!(detector.tick(0.0, 0.0, 0.0), None);
/// assert_eq!(detector.tick(0.8, 0.0, 0.05), None);
/// assert_eq!(detector.tick(0.0, 0.0, 0.1), None);
///
/// let gesture = detector.tick(0.9, 0.0, 0.2).unwrap();
/// assert_eq!(gesture.axis, TapAxis::Horizontal);
/// assert_eq!(gesture.direction, TapDirection::Positive);
/// ```
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct TapAxisDetector {
    settings: DoubleTapSettings,
    current_tap_count: u32,
    last_tap_time: f32,
    was_last_frame_input: bool,
    previous_axis: Option<TapAxis>,
    previous_direction: Option<TapDirection>,
    is_running: bool,
}

impl Default for TapAxisDetector {
    /// Creates a running detector with the default [`DoubleTapSettings`].
    fn default() -> Self {
        Self::from_valid_settings(DoubleTapSettings::default())
    }
}

impl TapAxisDetector {
    /// Creates a detector from the given `settings`.
    ///
    /// The detector starts running if [`DoubleTapSettings::auto_start`] is set.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`DoubleTapSettings::validate`].
    pub fn new(settings: DoubleTapSettings) -> Result<Self, DoubleTapSettingsError> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: DoubleTapSettings) -> Self {
        Self {
            settings,
            current_tap_count: 0,
            last_tap_time: 0.0,
            was_last_frame_input: false,
            previous_axis: None,
            previous_direction: None,
            is_running: settings.auto_start,
        }
    }

    /// Starts listening for taps. Any sequence in progress is kept.
    #[inline]
    pub fn start(&mut self) {
        self.is_running = true;
    }

    /// Stops listening for taps until [`start`](Self::start) is called.
    ///
    /// The sequence in progress is kept, and resumes from where it left off once restarted.
    #[inline]
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Discards the tap sequence in progress.
    pub fn reset(&mut self) {
        self.current_tap_count = 0;
        self.previous_axis = None;
        self.previous_direction = None;
    }

    /// Processes one frame of input.
    ///
    /// `axis_x` and `axis_y` are the horizontal and vertical axis values, usually within `[-1.0, 1.0]`.
    /// `now` is the current time in seconds, and must never decrease between calls.
    /// As an `f32`, it resolves to about 8 ms after a day of uptime,
    /// which is still well below any useful `time_between_taps`.
    ///
    /// Returns the completed gesture on the frame its final tap is recognized.
    /// Does nothing while the detector is stopped.
    pub fn tick(&mut self, axis_x: f32, axis_y: f32, now: f32) -> Option<GestureEvent> {
        if !self.is_running {
            return None;
        }

        let value = Vec2::new(axis_x, axis_y);
        let Some(axis) = TapAxis::dominant(value) else {
            self.was_last_frame_input = false;

            if now - self.last_tap_time > self.settings.time_between_taps {
                if self.current_tap_count > 0 {
                    trace!(
                        "Tap sequence of {} timed out on {:?}",
                        self.current_tap_count,
                        self.previous_axis
                    );
                }
                self.reset();
            }

            return None;
        };

        if self.previous_axis.is_some_and(|previous| previous != axis) {
            return None;
        }

        let axis_value = axis.get_value(value);
        if self
            .previous_direction
            .is_some_and(|previous| !previous.is_active(axis_value))
        {
            return None;
        }

        if self.was_last_frame_input {
            return None;
        }

        self.process_tap(axis, axis_value, value, now)
    }

    fn process_tap(
        &mut self,
        axis: TapAxis,
        axis_value: f32,
        value: Vec2,
        now: f32,
    ) -> Option<GestureEvent> {
        self.last_tap_time = now;
        self.was_last_frame_input = true;
        self.current_tap_count += 1;

        // A dominant axis value is never zero, but an opposing NaN component can make it so.
        let direction = TapDirection::from_value(axis_value).unwrap_or(TapDirection::Negative);

        if self.current_tap_count == self.settings.taps_required {
            let gesture = GestureEvent {
                axis,
                direction,
                velocity: value.normalize_or_zero(),
                taps: self.current_tap_count,
            };
            debug!(
                "{} taps on axis {:?} in direction {:?} with velocity {}",
                gesture.taps, gesture.axis, gesture.direction, gesture.velocity
            );

            self.reset();
            Some(gesture)
        } else {
            self.previous_axis = Some(axis);
            self.previous_direction = Some(direction);
            None
        }
    }

    /// The settings this detector was built with.
    #[must_use]
    #[inline]
    pub fn settings(&self) -> &DoubleTapSettings {
        &self.settings
    }

    /// Is the detector listening for taps?
    #[must_use]
    #[inline]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// The number of taps counted towards the current gesture.
    ///
    /// Always less than [`DoubleTapSettings::taps_required`].
    #[must_use]
    #[inline]
    pub fn current_tap_count(&self) -> u32 {
        self.current_tap_count
    }

    /// The time of the most recently recognized tap, in seconds.
    #[must_use]
    #[inline]
    pub fn last_tap_time(&self) -> f32 {
        self.last_tap_time
    }

    /// Did the last processed frame carry a recognized tap that has not yet returned to neutral?
    #[must_use]
    #[inline]
    pub fn was_last_frame_input(&self) -> bool {
        self.was_last_frame_input
    }

    /// The axis of the current sequence, or `None` if no tap has been counted.
    #[must_use]
    #[inline]
    pub fn previous_axis(&self) -> Option<TapAxis> {
        self.previous_axis
    }

    /// The direction of the current sequence, or `None` if no tap has been counted.
    #[must_use]
    #[inline]
    pub fn previous_direction(&self) -> Option<TapDirection> {
        self.previous_direction
    }
}
