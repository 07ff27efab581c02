/// Abstract key identifiers understood by the GUI engine.
///
/// Keyboard keys, gamepad navigation inputs and the four modifier pseudo-keys
/// share one namespace, like the engine's own key enum.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuiKey {
    // Navigation / editing
    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,

    // Modifier keys
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftSuper,
    RightCtrl,
    RightShift,
    RightAlt,
    RightSuper,
    Menu,

    // Digits
    Key0, Key1, Key2, Key3, Key4,
    Key5, Key6, Key7, Key8, Key9,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    // Punctuation
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,

    // Locks / system
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    // Keypad
    Keypad0, Keypad1, Keypad2, Keypad3, Keypad4,
    Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEnter,
    KeypadEqual,

    // Gamepad navigation
    GamepadStart,
    GamepadBack,
    GamepadFaceLeft,
    GamepadFaceRight,
    GamepadFaceUp,
    GamepadFaceDown,
    GamepadDpadLeft,
    GamepadDpadRight,
    GamepadDpadUp,
    GamepadDpadDown,
    GamepadL1,
    GamepadR1,
    GamepadL2,
    GamepadR2,
    GamepadL3,
    GamepadR3,
    GamepadLStickLeft,
    GamepadLStickRight,
    GamepadLStickUp,
    GamepadLStickDown,
    GamepadRStickLeft,
    GamepadRStickRight,
    GamepadRStickUp,
    GamepadRStickDown,

    // Modifier state pseudo-keys
    ModCtrl,
    ModShift,
    ModAlt,
    ModSuper,
}

/// Engine mouse button slots.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuiMouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl GuiMouseButton {
    /// Button slot index used by the engine's mouse state arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Device that produced pointer input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseSource {
    Mouse,
    TouchScreen,
    Pen,
}

/// Cursor shape requested by the engine for the current frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseCursor {
    /// No cursor should be displayed.
    None,
    Arrow,
    TextInput,
    ResizeAll,
    ResizeNS,
    ResizeEW,
    ResizeNESW,
    ResizeNWSE,
    Hand,
    Wait,
    Progress,
    NotAllowed,
}

impl MouseCursor {
    /// Every visible cursor kind, in cache-slot order.
    pub const VISIBLE: [MouseCursor; 11] = [
        MouseCursor::Arrow,
        MouseCursor::TextInput,
        MouseCursor::ResizeAll,
        MouseCursor::ResizeNS,
        MouseCursor::ResizeEW,
        MouseCursor::ResizeNESW,
        MouseCursor::ResizeNWSE,
        MouseCursor::Hand,
        MouseCursor::Wait,
        MouseCursor::Progress,
        MouseCursor::NotAllowed,
    ];

    /// Cache slot for a visible kind; `None` for [`MouseCursor::None`].
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            MouseCursor::None => None,
            MouseCursor::Arrow => Some(0),
            MouseCursor::TextInput => Some(1),
            MouseCursor::ResizeAll => Some(2),
            MouseCursor::ResizeNS => Some(3),
            MouseCursor::ResizeEW => Some(4),
            MouseCursor::ResizeNESW => Some(5),
            MouseCursor::ResizeNWSE => Some(6),
            MouseCursor::Hand => Some(7),
            MouseCursor::Wait => Some(8),
            MouseCursor::Progress => Some(9),
            MouseCursor::NotAllowed => Some(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_button_indices_follow_engine_slots() {
        assert_eq!(GuiMouseButton::Left.index(), 0);
        assert_eq!(GuiMouseButton::Right.index(), 1);
        assert_eq!(GuiMouseButton::Middle.index(), 2);
    }

    #[test]
    fn visible_cursor_slots_are_dense_and_ordered() {
        for (i, kind) in MouseCursor::VISIBLE.iter().enumerate() {
            assert_eq!(kind.slot(), Some(i));
        }
        assert_eq!(MouseCursor::None.slot(), None);
    }
}
