use std::fmt;

/// Physical key position, numbered like USB HID keyboard usages.
///
/// Values outside the named constants are legal; they simply have no mapping
/// and translate to nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Scancode(pub u16);

impl Scancode {
    pub const UNKNOWN: Scancode = Scancode(0);

    pub const A: Scancode = Scancode(4);
    pub const B: Scancode = Scancode(5);
    pub const C: Scancode = Scancode(6);
    pub const D: Scancode = Scancode(7);
    pub const E: Scancode = Scancode(8);
    pub const F: Scancode = Scancode(9);
    pub const G: Scancode = Scancode(10);
    pub const H: Scancode = Scancode(11);
    pub const I: Scancode = Scancode(12);
    pub const J: Scancode = Scancode(13);
    pub const K: Scancode = Scancode(14);
    pub const L: Scancode = Scancode(15);
    pub const M: Scancode = Scancode(16);
    pub const N: Scancode = Scancode(17);
    pub const O: Scancode = Scancode(18);
    pub const P: Scancode = Scancode(19);
    pub const Q: Scancode = Scancode(20);
    pub const R: Scancode = Scancode(21);
    pub const S: Scancode = Scancode(22);
    pub const T: Scancode = Scancode(23);
    pub const U: Scancode = Scancode(24);
    pub const V: Scancode = Scancode(25);
    pub const W: Scancode = Scancode(26);
    pub const X: Scancode = Scancode(27);
    pub const Y: Scancode = Scancode(28);
    pub const Z: Scancode = Scancode(29);

    pub const NUM_1: Scancode = Scancode(30);
    pub const NUM_2: Scancode = Scancode(31);
    pub const NUM_3: Scancode = Scancode(32);
    pub const NUM_4: Scancode = Scancode(33);
    pub const NUM_5: Scancode = Scancode(34);
    pub const NUM_6: Scancode = Scancode(35);
    pub const NUM_7: Scancode = Scancode(36);
    pub const NUM_8: Scancode = Scancode(37);
    pub const NUM_9: Scancode = Scancode(38);
    pub const NUM_0: Scancode = Scancode(39);

    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const BACKSPACE: Scancode = Scancode(42);
    pub const TAB: Scancode = Scancode(43);
    pub const SPACE: Scancode = Scancode(44);

    pub const MINUS: Scancode = Scancode(45);
    pub const EQUALS: Scancode = Scancode(46);
    pub const LEFT_BRACKET: Scancode = Scancode(47);
    pub const RIGHT_BRACKET: Scancode = Scancode(48);
    pub const BACKSLASH: Scancode = Scancode(49);
    pub const NON_US_HASH: Scancode = Scancode(50);
    pub const SEMICOLON: Scancode = Scancode(51);
    pub const APOSTROPHE: Scancode = Scancode(52);
    pub const GRAVE: Scancode = Scancode(53);
    pub const COMMA: Scancode = Scancode(54);
    pub const PERIOD: Scancode = Scancode(55);
    pub const SLASH: Scancode = Scancode(56);
    pub const CAPS_LOCK: Scancode = Scancode(57);

    pub const F1: Scancode = Scancode(58);
    pub const F2: Scancode = Scancode(59);
    pub const F3: Scancode = Scancode(60);
    pub const F4: Scancode = Scancode(61);
    pub const F5: Scancode = Scancode(62);
    pub const F6: Scancode = Scancode(63);
    pub const F7: Scancode = Scancode(64);
    pub const F8: Scancode = Scancode(65);
    pub const F9: Scancode = Scancode(66);
    pub const F10: Scancode = Scancode(67);
    pub const F11: Scancode = Scancode(68);
    pub const F12: Scancode = Scancode(69);

    pub const PRINT_SCREEN: Scancode = Scancode(70);
    pub const SCROLL_LOCK: Scancode = Scancode(71);
    pub const PAUSE: Scancode = Scancode(72);
    pub const INSERT: Scancode = Scancode(73);
    pub const HOME: Scancode = Scancode(74);
    pub const PAGE_UP: Scancode = Scancode(75);
    pub const DELETE: Scancode = Scancode(76);
    pub const END: Scancode = Scancode(77);
    pub const PAGE_DOWN: Scancode = Scancode(78);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);

    pub const NUM_LOCK_CLEAR: Scancode = Scancode(83);
    pub const KP_DIVIDE: Scancode = Scancode(84);
    pub const KP_MULTIPLY: Scancode = Scancode(85);
    pub const KP_MINUS: Scancode = Scancode(86);
    pub const KP_PLUS: Scancode = Scancode(87);
    pub const KP_ENTER: Scancode = Scancode(88);
    pub const KP_1: Scancode = Scancode(89);
    pub const KP_2: Scancode = Scancode(90);
    pub const KP_3: Scancode = Scancode(91);
    pub const KP_4: Scancode = Scancode(92);
    pub const KP_5: Scancode = Scancode(93);
    pub const KP_6: Scancode = Scancode(94);
    pub const KP_7: Scancode = Scancode(95);
    pub const KP_8: Scancode = Scancode(96);
    pub const KP_9: Scancode = Scancode(97);
    pub const KP_0: Scancode = Scancode(98);
    pub const KP_PERIOD: Scancode = Scancode(99);

    pub const NON_US_BACKSLASH: Scancode = Scancode(100);
    pub const APPLICATION: Scancode = Scancode(101);
    pub const KP_EQUALS: Scancode = Scancode(103);

    pub const LCTRL: Scancode = Scancode(224);
    pub const LSHIFT: Scancode = Scancode(225);
    pub const LALT: Scancode = Scancode(226);
    pub const LGUI: Scancode = Scancode(227);
    pub const RCTRL: Scancode = Scancode(228);
    pub const RSHIFT: Scancode = Scancode(229);
    pub const RALT: Scancode = Scancode(230);
    pub const RGUI: Scancode = Scancode(231);

    /// One past the largest scancode a platform may report.
    pub const COUNT: u16 = 512;
}

/// Keyboard modifier bitmask, left and right sides tracked separately.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Keymod(pub u16);

impl Keymod {
    pub const NONE: Keymod = Keymod(0x0000);
    pub const LSHIFT: Keymod = Keymod(0x0001);
    pub const RSHIFT: Keymod = Keymod(0x0002);
    pub const LCTRL: Keymod = Keymod(0x0040);
    pub const RCTRL: Keymod = Keymod(0x0080);
    pub const LALT: Keymod = Keymod(0x0100);
    pub const RALT: Keymod = Keymod(0x0200);
    pub const LGUI: Keymod = Keymod(0x0400);
    pub const RGUI: Keymod = Keymod(0x0800);
    pub const NUM: Keymod = Keymod(0x1000);
    pub const CAPS: Keymod = Keymod(0x2000);
    pub const MODE: Keymod = Keymod(0x4000);
    pub const SCROLL: Keymod = Keymod(0x8000);

    pub const SHIFT: Keymod = Keymod(Self::LSHIFT.0 | Self::RSHIFT.0);
    pub const CTRL: Keymod = Keymod(Self::LCTRL.0 | Self::RCTRL.0);
    pub const ALT: Keymod = Keymod(Self::LALT.0 | Self::RALT.0);
    pub const GUI: Keymod = Keymod(Self::LGUI.0 | Self::RGUI.0);

    /// True when any bit of `other` is set.
    #[inline]
    pub fn intersects(self, other: Keymod) -> bool {
        self.0 & other.0 != 0
    }
}

impl core::ops::BitOr for Keymod {
    type Output = Keymod;
    #[inline]
    fn bitor(self, rhs: Keymod) -> Keymod {
        Keymod(self.0 | rhs.0)
    }
}

/// Platform mouse button number (1-based).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MouseButton(pub u8);

impl MouseButton {
    pub const LEFT: MouseButton = MouseButton(1);
    pub const MIDDLE: MouseButton = MouseButton(2);
    pub const RIGHT: MouseButton = MouseButton(3);
    pub const X1: MouseButton = MouseButton(4);
    pub const X2: MouseButton = MouseButton(5);
}

/// Pointer device id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MouseId(pub u32);

impl MouseId {
    /// Synthetic id the platform uses for mouse events emulated from touch.
    pub const TOUCH: MouseId = MouseId(u32::MAX);
}

/// Gamepad button, numbered in the platform's standard layout order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GamepadButton(pub u8);

impl GamepadButton {
    pub const SOUTH: GamepadButton = GamepadButton(0);
    pub const EAST: GamepadButton = GamepadButton(1);
    pub const WEST: GamepadButton = GamepadButton(2);
    pub const NORTH: GamepadButton = GamepadButton(3);
    pub const BACK: GamepadButton = GamepadButton(4);
    pub const GUIDE: GamepadButton = GamepadButton(5);
    pub const START: GamepadButton = GamepadButton(6);
    pub const LEFT_STICK: GamepadButton = GamepadButton(7);
    pub const RIGHT_STICK: GamepadButton = GamepadButton(8);
    pub const LEFT_SHOULDER: GamepadButton = GamepadButton(9);
    pub const RIGHT_SHOULDER: GamepadButton = GamepadButton(10);
    pub const DPAD_UP: GamepadButton = GamepadButton(11);
    pub const DPAD_DOWN: GamepadButton = GamepadButton(12);
    pub const DPAD_LEFT: GamepadButton = GamepadButton(13);
    pub const DPAD_RIGHT: GamepadButton = GamepadButton(14);
    pub const MISC1: GamepadButton = GamepadButton(15);
}

/// Gamepad analog axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GamepadAxis(pub u8);

impl GamepadAxis {
    pub const LEFT_X: GamepadAxis = GamepadAxis(0);
    pub const LEFT_Y: GamepadAxis = GamepadAxis(1);
    pub const RIGHT_X: GamepadAxis = GamepadAxis(2);
    pub const RIGHT_Y: GamepadAxis = GamepadAxis(3);
    pub const LEFT_TRIGGER: GamepadAxis = GamepadAxis(4);
    pub const RIGHT_TRIGGER: GamepadAxis = GamepadAxis(5);
}

/// Platform input event as delivered by the event queue.
///
/// One value per platform event; the translator reads it and keeps nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        scancode: Scancode,
        modifiers: Keymod,
        down: bool,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    MouseButton {
        which: MouseId,
        button: MouseButton,
        down: bool,
        /// Window coordinates at the time of the press.
        x: f32,
        y: f32,
    },

    MouseMotion {
        which: MouseId,
        /// Window coordinates.
        x: f32,
        y: f32,
    },

    MouseWheel {
        which: MouseId,
        x: f32,
        y: f32,
    },

    GamepadButton {
        which: u32,
        button: GamepadButton,
        down: bool,
    },

    GamepadAxis {
        which: u32,
        axis: GamepadAxis,
        value: i16,
    },

    /// Committed text (not IME composition).
    TextInput { text: String },

    GamepadAdded { which: u32 },

    GamepadRemoved { which: u32 },

    /// A platform event type outside the range the bridge understands.
    Unknown { kind: u32 },
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scancode {}", self.0)
    }
}
