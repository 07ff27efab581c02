use crate::engine::GuiKey;

use super::types::{GamepadAxis, GamepadButton};

/// Default analog dead zone, in raw axis units.
pub const STICK_DEAD_ZONE: i16 = 8192;

/// Magnitude of the most negative raw axis value.
const AXIS_RANGE: i32 = 32768;

/// Maps a gamepad button to its navigation key.
pub fn button_to_key(button: GamepadButton) -> Option<GuiKey> {
    let key = match button {
        GamepadButton::SOUTH => GuiKey::GamepadFaceDown,
        GamepadButton::EAST => GuiKey::GamepadFaceRight,
        GamepadButton::WEST => GuiKey::GamepadFaceLeft,
        GamepadButton::NORTH => GuiKey::GamepadFaceUp,
        GamepadButton::LEFT_SHOULDER => GuiKey::GamepadL1,
        GamepadButton::RIGHT_SHOULDER => GuiKey::GamepadR1,
        GamepadButton::LEFT_STICK => GuiKey::GamepadL3,
        GamepadButton::RIGHT_STICK => GuiKey::GamepadR3,
        GamepadButton::DPAD_UP => GuiKey::GamepadDpadUp,
        GamepadButton::DPAD_DOWN => GuiKey::GamepadDpadDown,
        GamepadButton::DPAD_LEFT => GuiKey::GamepadDpadLeft,
        GamepadButton::DPAD_RIGHT => GuiKey::GamepadDpadRight,
        GamepadButton::START => GuiKey::GamepadStart,
        GamepadButton::BACK => GuiKey::GamepadBack,
        _ => return None,
    };
    Some(key)
}

/// (negative-direction key, positive-direction key) for an axis.
///
/// Triggers only travel one way, so both halves name the same key.
pub fn axis_keys(axis: GamepadAxis) -> Option<(GuiKey, GuiKey)> {
    let keys = match axis {
        GamepadAxis::LEFT_X => (GuiKey::GamepadLStickLeft, GuiKey::GamepadLStickRight),
        GamepadAxis::LEFT_Y => (GuiKey::GamepadLStickUp, GuiKey::GamepadLStickDown),
        GamepadAxis::RIGHT_X => (GuiKey::GamepadRStickLeft, GuiKey::GamepadRStickRight),
        GamepadAxis::RIGHT_Y => (GuiKey::GamepadRStickUp, GuiKey::GamepadRStickDown),
        GamepadAxis::LEFT_TRIGGER => (GuiKey::GamepadL2, GuiKey::GamepadL2),
        GamepadAxis::RIGHT_TRIGGER => (GuiKey::GamepadR2, GuiKey::GamepadR2),
        _ => return None,
    };
    Some(keys)
}

/// Scales a raw axis value to `[-1, 1]` with a symmetric dead zone.
///
/// Values with `|raw| <= dead_zone` are exactly zero; the rest of the range is
/// rescaled linearly over `32768 - dead_zone`.
pub fn scale_axis_value(raw: i16, dead_zone: i16) -> f32 {
    let raw = raw as i32;
    let dz = (dead_zone as i32).max(0);
    let active = (AXIS_RANGE - dz) as f32;

    if raw.abs() <= dz {
        0.0
    } else if raw < 0 {
        (raw + dz) as f32 / active
    } else {
        (raw - dz) as f32 / active
    }
}

/// Analog key updates for one axis event.
///
/// The first entry is the key on the side of the motion with the magnitude,
/// the second is the opposite key reset to zero. When both sides share a key
/// only the first entry is present.
pub fn axis_key_values(
    raw: i16,
    dead_zone: i16,
    negative: GuiKey,
    positive: GuiKey,
) -> impl Iterator<Item = (GuiKey, f32)> {
    let scaled = scale_axis_value(raw, dead_zone);

    let (first, second) = if scaled < 0.0 {
        ((negative, -scaled), (positive, 0.0))
    } else if scaled > 0.0 {
        ((positive, scaled), (negative, 0.0))
    } else {
        ((positive, 0.0), (negative, 0.0))
    };

    let second = (second.0 != first.0).then_some(second);
    std::iter::once(first).chain(second)
}
