#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod axislike;
pub mod detector;
pub mod errors;
pub mod input_source;
pub mod plugin;
pub mod settings;
pub mod systems;

/// Everything you need to get started
pub mod prelude {
    pub use crate::axislike::{TapAxis, TapDirection};
    pub use crate::detector::{GestureEvent, TapAxisDetector};
    pub use crate::errors::DoubleTapSettingsError;
    pub use crate::input_source::{GamepadStick, TapInputKind, TapInputSource, VirtualDPad};
    pub use crate::plugin::{DoubleTapBundle, DoubleTapEvent, DoubleTapPlugin, DoubleTapSystem};
    pub use crate::settings::DoubleTapSettings;
}
