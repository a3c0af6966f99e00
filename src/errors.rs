//! Errors that may occur when configuring a double tap detector

use derive_more::{Display, Error};

/// The supplied [`DoubleTapSettings`](crate::settings::DoubleTapSettings) or
/// [`TapInputSource`](crate::input_source::TapInputSource) cannot describe a usable detector.
///
/// These are only ever produced at construction time:
/// once a [`TapAxisDetector`](crate::detector::TapAxisDetector) exists, ticking it cannot fail.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq)]
pub enum DoubleTapSettingsError {
    /// At least one tap is needed to complete a gesture.
    #[display(fmt = "`taps_required` must be at least 1, got {}", taps_required)]
    InvalidTapsRequired {
        /// The rejected tap count.
        taps_required: u32,
    },

    /// The window between taps must be a finite, strictly positive number of seconds.
    #[display(
        fmt = "`time_between_taps` must be finite and greater than 0, got {}",
        time_between_taps
    )]
    InvalidTimeWindow {
        /// The rejected window, in seconds.
        time_between_taps: f32,
    },

    /// Dead zones are applied per axis and must leave some of the `[-1.0, 1.0]` range live.
    #[display(fmt = "`dead_zone` must be within [0.0, 1.0), got {}", dead_zone)]
    InvalidDeadZone {
        /// The rejected dead zone.
        dead_zone: f32,
    },
}
