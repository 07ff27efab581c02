use crate::engine::{GuiKey, GuiMouseButton};

use super::types::{Keymod, MouseButton, Scancode};

/// Maps a physical scancode to an engine key.
///
/// Returns `None` for keys the engine has no identifier for.
pub fn scancode_to_key(code: Scancode) -> Option<GuiKey> {
    if code.0 < Scancode::A.0 || code.0 >= Scancode::COUNT {
        return None;
    }

    let key = match code {
        Scancode::A => GuiKey::A,
        Scancode::B => GuiKey::B,
        Scancode::C => GuiKey::C,
        Scancode::D => GuiKey::D,
        Scancode::E => GuiKey::E,
        Scancode::F => GuiKey::F,
        Scancode::G => GuiKey::G,
        Scancode::H => GuiKey::H,
        Scancode::I => GuiKey::I,
        Scancode::J => GuiKey::J,
        Scancode::K => GuiKey::K,
        Scancode::L => GuiKey::L,
        Scancode::M => GuiKey::M,
        Scancode::N => GuiKey::N,
        Scancode::O => GuiKey::O,
        Scancode::P => GuiKey::P,
        Scancode::Q => GuiKey::Q,
        Scancode::R => GuiKey::R,
        Scancode::S => GuiKey::S,
        Scancode::T => GuiKey::T,
        Scancode::U => GuiKey::U,
        Scancode::V => GuiKey::V,
        Scancode::W => GuiKey::W,
        Scancode::X => GuiKey::X,
        Scancode::Y => GuiKey::Y,
        Scancode::Z => GuiKey::Z,

        Scancode::NUM_1 => GuiKey::Key1,
        Scancode::NUM_2 => GuiKey::Key2,
        Scancode::NUM_3 => GuiKey::Key3,
        Scancode::NUM_4 => GuiKey::Key4,
        Scancode::NUM_5 => GuiKey::Key5,
        Scancode::NUM_6 => GuiKey::Key6,
        Scancode::NUM_7 => GuiKey::Key7,
        Scancode::NUM_8 => GuiKey::Key8,
        Scancode::NUM_9 => GuiKey::Key9,
        Scancode::NUM_0 => GuiKey::Key0,

        Scancode::RETURN => GuiKey::Enter,
        Scancode::ESCAPE => GuiKey::Escape,
        Scancode::BACKSPACE => GuiKey::Backspace,
        Scancode::TAB => GuiKey::Tab,
        Scancode::SPACE => GuiKey::Space,

        Scancode::MINUS => GuiKey::Minus,
        Scancode::EQUALS => GuiKey::Equal,
        Scancode::LEFT_BRACKET => GuiKey::LeftBracket,
        Scancode::RIGHT_BRACKET => GuiKey::RightBracket,
        Scancode::BACKSLASH | Scancode::NON_US_HASH => GuiKey::Backslash,
        Scancode::SEMICOLON => GuiKey::Semicolon,
        Scancode::APOSTROPHE => GuiKey::Apostrophe,
        Scancode::GRAVE | Scancode::NON_US_BACKSLASH => GuiKey::GraveAccent,
        Scancode::COMMA => GuiKey::Comma,
        Scancode::PERIOD => GuiKey::Period,
        Scancode::SLASH => GuiKey::Slash,
        Scancode::CAPS_LOCK => GuiKey::CapsLock,

        Scancode::F1 => GuiKey::F1,
        Scancode::F2 => GuiKey::F2,
        Scancode::F3 => GuiKey::F3,
        Scancode::F4 => GuiKey::F4,
        Scancode::F5 => GuiKey::F5,
        Scancode::F6 => GuiKey::F6,
        Scancode::F7 => GuiKey::F7,
        Scancode::F8 => GuiKey::F8,
        Scancode::F9 => GuiKey::F9,
        Scancode::F10 => GuiKey::F10,
        Scancode::F11 => GuiKey::F11,
        Scancode::F12 => GuiKey::F12,

        Scancode::PRINT_SCREEN => GuiKey::PrintScreen,
        Scancode::SCROLL_LOCK => GuiKey::ScrollLock,
        Scancode::PAUSE => GuiKey::Pause,
        Scancode::INSERT => GuiKey::Insert,
        Scancode::HOME => GuiKey::Home,
        Scancode::PAGE_UP => GuiKey::PageUp,
        Scancode::DELETE => GuiKey::Delete,
        Scancode::END => GuiKey::End,
        Scancode::PAGE_DOWN => GuiKey::PageDown,
        Scancode::RIGHT => GuiKey::RightArrow,
        Scancode::LEFT => GuiKey::LeftArrow,
        Scancode::DOWN => GuiKey::DownArrow,
        Scancode::UP => GuiKey::UpArrow,

        Scancode::NUM_LOCK_CLEAR => GuiKey::NumLock,
        Scancode::KP_DIVIDE => GuiKey::KeypadDivide,
        Scancode::KP_MULTIPLY => GuiKey::KeypadMultiply,
        Scancode::KP_MINUS => GuiKey::KeypadSubtract,
        Scancode::KP_PLUS => GuiKey::KeypadAdd,
        Scancode::KP_ENTER => GuiKey::KeypadEnter,
        Scancode::KP_1 => GuiKey::Keypad1,
        Scancode::KP_2 => GuiKey::Keypad2,
        Scancode::KP_3 => GuiKey::Keypad3,
        Scancode::KP_4 => GuiKey::Keypad4,
        Scancode::KP_5 => GuiKey::Keypad5,
        Scancode::KP_6 => GuiKey::Keypad6,
        Scancode::KP_7 => GuiKey::Keypad7,
        Scancode::KP_8 => GuiKey::Keypad8,
        Scancode::KP_9 => GuiKey::Keypad9,
        Scancode::KP_0 => GuiKey::Keypad0,
        Scancode::KP_PERIOD => GuiKey::KeypadDecimal,
        Scancode::KP_EQUALS => GuiKey::KeypadEqual,
        Scancode::APPLICATION => GuiKey::Menu,

        Scancode::LCTRL => GuiKey::LeftCtrl,
        Scancode::LSHIFT => GuiKey::LeftShift,
        Scancode::LALT => GuiKey::LeftAlt,
        Scancode::LGUI => GuiKey::LeftSuper,
        Scancode::RCTRL => GuiKey::RightCtrl,
        Scancode::RSHIFT => GuiKey::RightShift,
        Scancode::RALT => GuiKey::RightAlt,
        Scancode::RGUI => GuiKey::RightSuper,

        _ => return None,
    };

    Some(key)
}

/// Modifier pseudo-key states derived from a modifier bitmask, in the order
/// they are fed to the engine: ctrl, alt, shift, super.
pub fn modifier_keys(mods: Keymod) -> [(GuiKey, bool); 4] {
    [
        (GuiKey::ModCtrl, mods.intersects(Keymod::CTRL)),
        (GuiKey::ModAlt, mods.intersects(Keymod::ALT)),
        (GuiKey::ModShift, mods.intersects(Keymod::SHIFT)),
        (GuiKey::ModSuper, mods.intersects(Keymod::GUI)),
    ]
}

/// Maps a platform mouse button to an engine slot; extra buttons have none.
pub fn mouse_button_to_gui(button: MouseButton) -> Option<GuiMouseButton> {
    match button {
        MouseButton::LEFT => Some(GuiMouseButton::Left),
        MouseButton::MIDDLE => Some(GuiMouseButton::Middle),
        MouseButton::RIGHT => Some(GuiMouseButton::Right),
        _ => None,
    }
}
