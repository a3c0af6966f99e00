//! Where a [`TapAxisDetector`](crate::detector::TapAxisDetector) reads its two axis values from.
//!
//! Gamepad sticks are read from [`Axis<GamepadAxis>`],
//! while keyboard keys are combined into a virtual D-pad from [`ButtonInput<KeyCode>`].

use bevy::input::gamepad::{Gamepad, GamepadAxis, GamepadAxisType, Gamepads};
use bevy::input::keyboard::KeyCode;
use bevy::input::{Axis, ButtonInput};
use bevy::prelude::{Component, Reflect, Vec2};
use serde::{Deserialize, Serialize};

use crate::errors::DoubleTapSettingsError;

/// One of the two analog sticks of a gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub enum GamepadStick {
    /// The left analog stick.
    Left,

    /// The right analog stick.
    Right,
}

impl GamepadStick {
    /// Returns the X and Y [`GamepadAxisType`]s of this stick.
    #[inline]
    pub const fn axis_types(&self) -> (GamepadAxisType, GamepadAxisType) {
        match self {
            Self::Left => (GamepadAxisType::LeftStickX, GamepadAxisType::LeftStickY),
            Self::Right => (GamepadAxisType::RightStickX, GamepadAxisType::RightStickY),
        }
    }
}

/// Four keys emulating a dual-axis input.
///
/// Each pressed key contributes a full `1.0` in its direction, so opposite keys cancel out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[must_use]
pub struct VirtualDPad {
    /// The key for the upward direction.
    pub up: KeyCode,

    /// The key for the downward direction.
    pub down: KeyCode,

    /// The key for the leftward direction.
    pub left: KeyCode,

    /// The key for the rightward direction.
    pub right: KeyCode,
}

impl VirtualDPad {
    /// The [`VirtualDPad`] using the common arrow key mappings.
    ///
    /// - [`KeyCode::ArrowUp`] for upward direction.
    /// - [`KeyCode::ArrowDown`] for downward direction.
    /// - [`KeyCode::ArrowLeft`] for leftward direction.
    /// - [`KeyCode::ArrowRight`] for rightward direction.
    #[inline]
    pub const fn arrow_keys() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    /// The [`VirtualDPad`] using the common WASD key mappings.
    ///
    /// - [`KeyCode::KeyW`] for upward direction.
    /// - [`KeyCode::KeyS`] for downward direction.
    /// - [`KeyCode::KeyA`] for leftward direction.
    /// - [`KeyCode::KeyD`] for rightward direction.
    #[inline]
    pub const fn wasd() -> Self {
        Self {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
        }
    }

    /// Retrieves the current dual-axis value of the keys.
    #[must_use]
    pub fn axis_pair(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let value = |key: KeyCode| f32::from(u8::from(keys.pressed(key)));
        Vec2::new(
            value(self.right) - value(self.left),
            value(self.up) - value(self.down),
        )
    }
}

/// The device an input source reads from.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub enum TapInputKind {
    /// An analog stick.
    GamepadStick {
        /// The gamepad to read from, or `None` for the first connected one.
        gamepad: Option<Gamepad>,

        /// The stick to read.
        stick: GamepadStick,
    },

    /// Four keyboard keys.
    VirtualDPad(VirtualDPad),
}

/// The input feeding a [`TapAxisDetector`](crate::detector::TapAxisDetector) on the same entity.
///
/// Values whose magnitude is within the dead zone read as exactly `0.0`,
/// so that a resting but slightly drifting stick still registers as neutral.
///
/// ```rust
/// use double_tap_axis::prelude::*;
///
/// let source = TapInputSource::left_stick().with_dead_zone(0.1).unwrap();
/// assert_eq!(source.dead_zone(), 0.1);
///
/// assert!(TapInputSource::arrow_keys().with_dead_zone(1.0).is_err());
/// ```
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTapInputSource")]
#[must_use]
pub struct TapInputSource {
    kind: TapInputKind,
    dead_zone: f32,
}

/// The serialized form of a [`TapInputSource`], before its dead zone is validated.
#[derive(Deserialize)]
#[serde(rename = "TapInputSource")]
struct UncheckedTapInputSource {
    kind: TapInputKind,
    #[serde(default)]
    dead_zone: f32,
}

impl TryFrom<UncheckedTapInputSource> for TapInputSource {
    type Error = DoubleTapSettingsError;

    fn try_from(unchecked: UncheckedTapInputSource) -> Result<Self, Self::Error> {
        Self::new(unchecked.kind).with_dead_zone(unchecked.dead_zone)
    }
}

impl TapInputSource {
    /// Reads from the given `kind` of input, without a dead zone.
    #[inline]
    pub const fn new(kind: TapInputKind) -> Self {
        Self {
            kind,
            dead_zone: 0.0,
        }
    }

    /// Reads from the left stick of the first connected gamepad.
    #[inline]
    pub const fn left_stick() -> Self {
        Self::gamepad_stick(None, GamepadStick::Left)
    }

    /// Reads from the right stick of the first connected gamepad.
    #[inline]
    pub const fn right_stick() -> Self {
        Self::gamepad_stick(None, GamepadStick::Right)
    }

    /// Reads from a `stick` of a specific `gamepad`, or of the first connected one if `None`.
    #[inline]
    pub const fn gamepad_stick(gamepad: Option<Gamepad>, stick: GamepadStick) -> Self {
        Self::new(TapInputKind::GamepadStick { gamepad, stick })
    }

    /// Reads from the arrow keys.
    #[inline]
    pub const fn arrow_keys() -> Self {
        Self::new(TapInputKind::VirtualDPad(VirtualDPad::arrow_keys()))
    }

    /// Reads from the WASD keys.
    #[inline]
    pub const fn wasd() -> Self {
        Self::new(TapInputKind::VirtualDPad(VirtualDPad::wasd()))
    }

    /// Returns a copy that treats per-axis magnitudes up to `dead_zone` as neutral.
    ///
    /// # Errors
    ///
    /// Returns [`DoubleTapSettingsError::InvalidDeadZone`] unless `0.0 <= dead_zone < 1.0`.
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Result<Self, DoubleTapSettingsError> {
        if !(0.0..1.0).contains(&dead_zone) {
            return Err(DoubleTapSettingsError::InvalidDeadZone { dead_zone });
        }

        self.dead_zone = dead_zone;
        Ok(self)
    }

    /// The device this source reads from.
    #[inline]
    pub fn kind(&self) -> &TapInputKind {
        &self.kind
    }

    /// The per-axis dead zone.
    #[must_use]
    #[inline]
    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    /// Retrieves the current dual-axis value, with the dead zone applied.
    ///
    /// A missing gamepad, or one that has not reported its axes yet, reads as neutral.
    #[must_use]
    pub fn read(
        &self,
        gamepads: &Gamepads,
        gamepad_axes: &Axis<GamepadAxis>,
        keys: &ButtonInput<KeyCode>,
    ) -> Vec2 {
        let value = match self.kind {
            TapInputKind::GamepadStick { gamepad, stick } => {
                let Some(gamepad) = gamepad.or_else(|| gamepads.iter().next()) else {
                    return Vec2::ZERO;
                };

                let (x, y) = stick.axis_types();
                let read = |axis_type| {
                    gamepad_axes
                        .get(GamepadAxis::new(gamepad, axis_type))
                        .unwrap_or_default()
                };
                Vec2::new(read(x), read(y))
            }
            TapInputKind::VirtualDPad(dpad) => dpad.axis_pair(keys),
        };

        self.process(value)
    }

    #[inline]
    fn process(&self, value: Vec2) -> Vec2 {
        let exclude = |value: f32| {
            if value.abs() <= self.dead_zone {
                0.0
            } else {
                value
            }
        };
        Vec2::new(exclude(value.x), exclude(value.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    struct Inputs {
        gamepads: Gamepads,
        gamepad_axes: Axis<GamepadAxis>,
        keys: ButtonInput<KeyCode>,
    }

    impl Inputs {
        fn new() -> Self {
            Self {
                gamepads: Gamepads::default(),
                gamepad_axes: Axis::default(),
                keys: ButtonInput::default(),
            }
        }

        fn read(&self, source: &TapInputSource) -> Vec2 {
            source.read(&self.gamepads, &self.gamepad_axes, &self.keys)
        }
    }

    #[test]
    fn arrow_keys() {
        let mut inputs = Inputs::new();
        let source = TapInputSource::arrow_keys();
        assert_eq!(inputs.read(&source), Vec2::ZERO);

        inputs.keys.press(KeyCode::ArrowRight);
        assert_eq!(inputs.read(&source), Vec2::new(1.0, 0.0));

        inputs.keys.press(KeyCode::ArrowDown);
        assert_eq!(inputs.read(&source), Vec2::new(1.0, -1.0));

        inputs.keys.press(KeyCode::ArrowLeft);
        assert_eq!(inputs.read(&source), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn wasd_ignores_arrow_keys() {
        let mut inputs = Inputs::new();
        inputs.keys.press(KeyCode::ArrowUp);
        assert_eq!(inputs.read(&TapInputSource::wasd()), Vec2::ZERO);

        inputs.keys.press(KeyCode::KeyW);
        assert_eq!(inputs.read(&TapInputSource::wasd()), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn specific_gamepad_stick() {
        let mut inputs = Inputs::new();
        let gamepad = Gamepad::new(3);
        let source = TapInputSource::gamepad_stick(Some(gamepad), GamepadStick::Right);

        assert_eq!(inputs.read(&source), Vec2::ZERO);

        inputs.gamepad_axes.set(
            GamepadAxis::new(gamepad, GamepadAxisType::RightStickX),
            -0.5,
        );
        inputs.gamepad_axes.set(
            GamepadAxis::new(gamepad, GamepadAxisType::LeftStickY),
            0.7,
        );
        assert_eq!(inputs.read(&source), Vec2::new(-0.5, 0.0));
    }

    #[test]
    fn missing_gamepad_reads_neutral() {
        let mut inputs = Inputs::new();
        inputs.gamepad_axes.set(
            GamepadAxis::new(Gamepad::new(0), GamepadAxisType::LeftStickX),
            1.0,
        );

        // No gamepad is connected, so there is nothing to pick as the first one.
        assert_eq!(inputs.read(&TapInputSource::left_stick()), Vec2::ZERO);
    }

    #[test]
    fn dead_zone_snaps_small_values_to_neutral() {
        let mut inputs = Inputs::new();
        let gamepad = Gamepad::new(0);
        let source = TapInputSource::gamepad_stick(Some(gamepad), GamepadStick::Left)
            .with_dead_zone(0.2)
            .unwrap();

        inputs.gamepad_axes.set(
            GamepadAxis::new(gamepad, GamepadAxisType::LeftStickX),
            0.15,
        );
        inputs.gamepad_axes.set(
            GamepadAxis::new(gamepad, GamepadAxisType::LeftStickY),
            -0.1,
        );
        assert_eq!(inputs.read(&source), Vec2::ZERO);

        inputs.gamepad_axes.set(
            GamepadAxis::new(gamepad, GamepadAxisType::LeftStickX),
            0.6,
        );
        assert_eq!(inputs.read(&source), Vec2::new(0.6, 0.0));
    }

    #[test]
    fn invalid_dead_zones_are_rejected() {
        for dead_zone in [-0.1, 1.0, 2.0, f32::NAN] {
            assert!(matches!(
                TapInputSource::left_stick().with_dead_zone(dead_zone),
                Err(DoubleTapSettingsError::InvalidDeadZone { .. })
            ));
        }
        assert!(TapInputSource::left_stick().with_dead_zone(0.0).is_ok());
    }

    fn left_stick_tokens(dead_zone: f32) -> Vec<Token> {
        vec![
            Token::Struct {
                name: "TapInputSource",
                len: 2,
            },
            Token::Str("kind"),
            Token::StructVariant {
                name: "TapInputKind",
                variant: "GamepadStick",
                len: 2,
            },
            Token::Str("gamepad"),
            Token::None,
            Token::Str("stick"),
            Token::UnitVariant {
                name: "GamepadStick",
                variant: "Left",
            },
            Token::StructVariantEnd,
            Token::Str("dead_zone"),
            Token::F32(dead_zone),
            Token::StructEnd,
        ]
    }

    #[test]
    fn serde_representation() {
        let source = TapInputSource::left_stick().with_dead_zone(0.25).unwrap();
        assert_tokens(&source, &left_stick_tokens(0.25));
    }

    #[test]
    fn deserializing_checks_the_dead_zone() {
        assert_de_tokens_error::<TapInputSource>(
            &left_stick_tokens(1.5),
            "`dead_zone` must be within [0.0, 1.0), got 1.5",
        );
        assert_de_tokens_error::<TapInputSource>(
            &left_stick_tokens(-0.5),
            "`dead_zone` must be within [0.0, 1.0), got -0.5",
        );
    }
}
