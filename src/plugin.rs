//! Contains main plugin exported by this crate.

use bevy::app::{App, Plugin, PreUpdate};
use bevy::ecs::prelude::*;
use bevy::input::InputSystem;

use crate::detector::{GestureEvent, TapAxisDetector};
use crate::errors::DoubleTapSettingsError;
use crate::input_source::TapInputSource;
use crate::settings::DoubleTapSettings;

/// A [`Plugin`] that feeds every [`TapAxisDetector`] from the [`TapInputSource`] on the same entity,
/// reporting completed gestures as [`DoubleTapEvent`]s.
///
/// Requires Bevy's [`InputPlugin`](bevy::input::InputPlugin) (part of `DefaultPlugins`).
///
/// ## Systems
///
/// **WARNING:** [`detect_double_taps`](crate::systems::detect_double_taps) runs during [`PreUpdate`],
/// after [`InputSystem`], in [`DoubleTapSystem::Detect`].
/// Systems reading [`DoubleTapEvent`]s in [`Update`](bevy::app::Update) see them on the same frame.
///
/// To pause detection for an entity, call [`TapAxisDetector::stop`] on its component.
#[derive(Debug, Default)]
pub struct DoubleTapPlugin;

impl Plugin for DoubleTapPlugin {
    fn build(&self, app: &mut App) {
        use crate::systems::*;

        app.add_event::<DoubleTapEvent>()
            .configure_sets(PreUpdate, DoubleTapSystem::Detect.after(InputSystem))
            .add_systems(
                PreUpdate,
                detect_double_taps.in_set(DoubleTapSystem::Detect),
            );

        app.register_type::<TapAxisDetector>()
            .register_type::<TapInputSource>()
            .register_type::<GestureEvent>();
    }
}

/// [`SystemSet`]s for the systems added by [`DoubleTapPlugin`]
#[derive(SystemSet, Clone, Copy, Hash, Debug, PartialEq, Eq)]
pub enum DoubleTapSystem {
    /// Reads inputs, ticks the detectors and sends [`DoubleTapEvent`]s
    Detect,
}

/// Sent when the [`TapAxisDetector`] on `entity` recognizes a full gesture.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapEvent {
    /// The entity whose detector completed the gesture.
    pub entity: Entity,

    /// The completed gesture.
    pub gesture: GestureEvent,
}

/// This [`Bundle`] lets an entity detect tap gestures.
///
/// Use with [`DoubleTapPlugin`].
#[derive(Bundle, Debug, Clone)]
pub struct DoubleTapBundle {
    /// The tap state machine.
    pub detector: TapAxisDetector,

    /// The input feeding [`DoubleTapBundle::detector`].
    pub source: TapInputSource,
}

impl DoubleTapBundle {
    /// Creates a bundle detecting gestures described by `settings` on `source`.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`DoubleTapSettings::validate`].
    pub fn new(
        settings: DoubleTapSettings,
        source: TapInputSource,
    ) -> Result<Self, DoubleTapSettingsError> {
        Ok(Self {
            detector: TapAxisDetector::new(settings)?,
            source,
        })
    }
}
