//! The systems that power the [`DoubleTapPlugin`](crate::plugin::DoubleTapPlugin).

use bevy::ecs::prelude::*;
use bevy::input::{
    gamepad::{GamepadAxis, Gamepads},
    keyboard::KeyCode,
    Axis, ButtonInput,
};
use bevy::time::Time;

use crate::detector::TapAxisDetector;
use crate::input_source::TapInputSource;
use crate::plugin::DoubleTapEvent;

/// Ticks every running [`TapAxisDetector`] with the current value of its [`TapInputSource`].
///
/// The clock is [`Time::elapsed_seconds`] of the virtual clock, so pausing it also pauses the tap window.
/// Being `f32`, it loses sub-millisecond precision over long sessions;
/// hosts needing more can tick detectors themselves.
pub fn detect_double_taps(
    time: Res<Time>,
    gamepads: Res<Gamepads>,
    gamepad_axes: Res<Axis<GamepadAxis>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(Entity, &mut TapAxisDetector, &TapInputSource)>,
    mut events: EventWriter<DoubleTapEvent>,
) {
    let now = time.elapsed_seconds();

    for (entity, mut detector, source) in query.iter_mut() {
        if !detector.is_running() {
            continue;
        }

        let value = source.read(&gamepads, &gamepad_axes, &keys);
        if let Some(gesture) = detector.tick(value.x, value.y, now) {
            events.send(DoubleTapEvent { entity, gesture });
        }
    }
}
