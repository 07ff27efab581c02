use winit::dpi::PhysicalPosition;
use winit::event::{
    ElementState, Ime, Modifiers, MouseButton as WinitMouseButton, MouseScrollDelta, Touch, TouchPhase,
    WindowEvent,
};
use winit::keyboard::{KeyCode, ModifiersKeyState, PhysicalKey};
use winit::window::Window;

use crate::input::{InputEvent, Keymod, MouseButton, MouseId, Scancode};

/// Mouse id reported for the system pointer.
const POINTER_ID: MouseId = MouseId(0);

/// Tuning for [`WinitTranslator`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WinitTranslatorConfig {
    /// Logical pixels per wheel "line" when the platform reports pixel deltas.
    pub pixels_per_line: f32,
}

impl Default for WinitTranslatorConfig {
    fn default() -> Self {
        Self { pixels_per_line: 20.0 }
    }
}

/// Translates winit `WindowEvent`s into [`InputEvent`]s.
///
/// winit reports modifiers and the pointer position as separate events, so
/// the translator tracks both and stamps them onto the events that need them.
/// The first active touch point is emulated as a touch-sourced mouse.
#[derive(Debug, Default)]
pub struct WinitTranslator {
    config: WinitTranslatorConfig,
    modifiers: Keymod,
    pointer: (f32, f32),
    touch: Option<u64>,
}

impl WinitTranslator {
    pub fn new(config: WinitTranslatorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Modifier state as of the last `ModifiersChanged`.
    pub fn modifiers(&self) -> Keymod {
        self.modifiers
    }

    /// Translates one event using the window's current scale factor.
    pub fn translate_window_event(&mut self, window: &Window, event: &WindowEvent) -> Vec<InputEvent> {
        self.translate(window.scale_factor(), event)
    }

    /// Translates one event. Positions are converted to logical window
    /// coordinates with `scale_factor`.
    ///
    /// Returns an empty vec for events not represented as input.
    pub fn translate(&mut self, scale_factor: f64, event: &WindowEvent) -> Vec<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = map_modifiers(m);
                Vec::new()
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let Some(scancode) = map_physical_key(event.physical_key) else {
                    return Vec::new();
                };

                vec![InputEvent::Key {
                    scancode,
                    modifiers: self.modifiers,
                    down: event.state == ElementState::Pressed,
                    repeat: event.repeat,
                }]
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = to_logical_f32(scale_factor, *position);
                self.pointer = (x, y);
                vec![InputEvent::MouseMotion { which: POINTER_ID, x, y }]
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = map_mouse_button(*button) else {
                    return Vec::new();
                };

                let (x, y) = self.pointer;
                vec![InputEvent::MouseButton {
                    which: POINTER_ID,
                    button,
                    down: *state == ElementState::Pressed,
                    x,
                    y,
                }]
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(p) => {
                        let (x, y) = to_logical_f32(scale_factor, *p);
                        let ppl = self.config.pixels_per_line.max(f32::EPSILON);
                        (x / ppl, y / ppl)
                    }
                };
                vec![InputEvent::MouseWheel { which: POINTER_ID, x, y }]
            }

            WindowEvent::Touch(touch) => self.translate_touch(scale_factor, touch),

            WindowEvent::Ime(Ime::Commit(text)) if !text.is_empty() => {
                vec![InputEvent::TextInput { text: text.clone() }]
            }

            _ => Vec::new(),
        }
    }

    fn translate_touch(&mut self, scale_factor: f64, touch: &Touch) -> Vec<InputEvent> {
        match self.touch {
            Some(id) if id != touch.id => return Vec::new(),
            None if touch.phase != TouchPhase::Started => return Vec::new(),
            _ => {}
        }

        let (x, y) = to_logical_f32(scale_factor, touch.location);
        let motion = InputEvent::MouseMotion { which: MouseId::TOUCH, x, y };
        let button = |down| InputEvent::MouseButton {
            which: MouseId::TOUCH,
            button: MouseButton::LEFT,
            down,
            x,
            y,
        };

        match touch.phase {
            TouchPhase::Started => {
                self.touch = Some(touch.id);
                vec![motion, button(true)]
            }
            TouchPhase::Moved => vec![motion],
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touch = None;
                vec![motion, button(false)]
            }
        }
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: &Modifiers) -> Keymod {
    let state = m.state();

    sided(state.shift_key(), m.lshift_state(), m.rshift_state(), Keymod::LSHIFT, Keymod::RSHIFT)
        | sided(state.control_key(), m.lcontrol_state(), m.rcontrol_state(), Keymod::LCTRL, Keymod::RCTRL)
        | sided(state.alt_key(), m.lalt_state(), m.ralt_state(), Keymod::LALT, Keymod::RALT)
        | sided(state.super_key(), m.lsuper_state(), m.rsuper_state(), Keymod::LGUI, Keymod::RGUI)
}

/// Side bits for one held modifier. Side information is only reported by
/// some backends; an unknown side reads as the left key.
fn sided(held: bool, left: ModifiersKeyState, right: ModifiersKeyState, l: Keymod, r: Keymod) -> Keymod {
    if !held {
        return Keymod::NONE;
    }

    let mut bits = Keymod::NONE;
    if left == ModifiersKeyState::Pressed {
        bits = bits | l;
    }
    if right == ModifiersKeyState::Pressed {
        bits = bits | r;
    }
    if bits == Keymod::NONE { l } else { bits }
}

fn map_mouse_button(b: WinitMouseButton) -> Option<MouseButton> {
    match b {
        WinitMouseButton::Left => Some(MouseButton::LEFT),
        WinitMouseButton::Middle => Some(MouseButton::MIDDLE),
        WinitMouseButton::Right => Some(MouseButton::RIGHT),
        WinitMouseButton::Back => Some(MouseButton::X1),
        WinitMouseButton::Forward => Some(MouseButton::X2),
        WinitMouseButton::Other(_) => None,
    }
}

fn map_physical_key(pk: PhysicalKey) -> Option<Scancode> {
    match pk {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

fn map_key_code(code: KeyCode) -> Option<Scancode> {
    let sc = match code {
        KeyCode::KeyA => Scancode::A,
        KeyCode::KeyB => Scancode::B,
        KeyCode::KeyC => Scancode::C,
        KeyCode::KeyD => Scancode::D,
        KeyCode::KeyE => Scancode::E,
        KeyCode::KeyF => Scancode::F,
        KeyCode::KeyG => Scancode::G,
        KeyCode::KeyH => Scancode::H,
        KeyCode::KeyI => Scancode::I,
        KeyCode::KeyJ => Scancode::J,
        KeyCode::KeyK => Scancode::K,
        KeyCode::KeyL => Scancode::L,
        KeyCode::KeyM => Scancode::M,
        KeyCode::KeyN => Scancode::N,
        KeyCode::KeyO => Scancode::O,
        KeyCode::KeyP => Scancode::P,
        KeyCode::KeyQ => Scancode::Q,
        KeyCode::KeyR => Scancode::R,
        KeyCode::KeyS => Scancode::S,
        KeyCode::KeyT => Scancode::T,
        KeyCode::KeyU => Scancode::U,
        KeyCode::KeyV => Scancode::V,
        KeyCode::KeyW => Scancode::W,
        KeyCode::KeyX => Scancode::X,
        KeyCode::KeyY => Scancode::Y,
        KeyCode::KeyZ => Scancode::Z,

        KeyCode::Digit1 => Scancode::NUM_1,
        KeyCode::Digit2 => Scancode::NUM_2,
        KeyCode::Digit3 => Scancode::NUM_3,
        KeyCode::Digit4 => Scancode::NUM_4,
        KeyCode::Digit5 => Scancode::NUM_5,
        KeyCode::Digit6 => Scancode::NUM_6,
        KeyCode::Digit7 => Scancode::NUM_7,
        KeyCode::Digit8 => Scancode::NUM_8,
        KeyCode::Digit9 => Scancode::NUM_9,
        KeyCode::Digit0 => Scancode::NUM_0,

        KeyCode::Enter => Scancode::RETURN,
        KeyCode::Escape => Scancode::ESCAPE,
        KeyCode::Backspace => Scancode::BACKSPACE,
        KeyCode::Tab => Scancode::TAB,
        KeyCode::Space => Scancode::SPACE,

        KeyCode::Minus => Scancode::MINUS,
        KeyCode::Equal => Scancode::EQUALS,
        KeyCode::BracketLeft => Scancode::LEFT_BRACKET,
        KeyCode::BracketRight => Scancode::RIGHT_BRACKET,
        KeyCode::Backslash => Scancode::BACKSLASH,
        KeyCode::Semicolon => Scancode::SEMICOLON,
        KeyCode::Quote => Scancode::APOSTROPHE,
        KeyCode::Backquote => Scancode::GRAVE,
        KeyCode::Comma => Scancode::COMMA,
        KeyCode::Period => Scancode::PERIOD,
        KeyCode::Slash => Scancode::SLASH,
        KeyCode::CapsLock => Scancode::CAPS_LOCK,
        KeyCode::IntlBackslash => Scancode::NON_US_BACKSLASH,

        KeyCode::F1 => Scancode::F1,
        KeyCode::F2 => Scancode::F2,
        KeyCode::F3 => Scancode::F3,
        KeyCode::F4 => Scancode::F4,
        KeyCode::F5 => Scancode::F5,
        KeyCode::F6 => Scancode::F6,
        KeyCode::F7 => Scancode::F7,
        KeyCode::F8 => Scancode::F8,
        KeyCode::F9 => Scancode::F9,
        KeyCode::F10 => Scancode::F10,
        KeyCode::F11 => Scancode::F11,
        KeyCode::F12 => Scancode::F12,

        KeyCode::PrintScreen => Scancode::PRINT_SCREEN,
        KeyCode::ScrollLock => Scancode::SCROLL_LOCK,
        KeyCode::Pause => Scancode::PAUSE,
        KeyCode::Insert => Scancode::INSERT,
        KeyCode::Home => Scancode::HOME,
        KeyCode::PageUp => Scancode::PAGE_UP,
        KeyCode::Delete => Scancode::DELETE,
        KeyCode::End => Scancode::END,
        KeyCode::PageDown => Scancode::PAGE_DOWN,
        KeyCode::ArrowRight => Scancode::RIGHT,
        KeyCode::ArrowLeft => Scancode::LEFT,
        KeyCode::ArrowDown => Scancode::DOWN,
        KeyCode::ArrowUp => Scancode::UP,

        KeyCode::NumLock => Scancode::NUM_LOCK_CLEAR,
        KeyCode::NumpadDivide => Scancode::KP_DIVIDE,
        KeyCode::NumpadMultiply => Scancode::KP_MULTIPLY,
        KeyCode::NumpadSubtract => Scancode::KP_MINUS,
        KeyCode::NumpadAdd => Scancode::KP_PLUS,
        KeyCode::NumpadEnter => Scancode::KP_ENTER,
        KeyCode::Numpad1 => Scancode::KP_1,
        KeyCode::Numpad2 => Scancode::KP_2,
        KeyCode::Numpad3 => Scancode::KP_3,
        KeyCode::Numpad4 => Scancode::KP_4,
        KeyCode::Numpad5 => Scancode::KP_5,
        KeyCode::Numpad6 => Scancode::KP_6,
        KeyCode::Numpad7 => Scancode::KP_7,
        KeyCode::Numpad8 => Scancode::KP_8,
        KeyCode::Numpad9 => Scancode::KP_9,
        KeyCode::Numpad0 => Scancode::KP_0,
        KeyCode::NumpadDecimal => Scancode::KP_PERIOD,
        KeyCode::NumpadEqual => Scancode::KP_EQUALS,
        KeyCode::ContextMenu => Scancode::APPLICATION,

        KeyCode::ControlLeft => Scancode::LCTRL,
        KeyCode::ShiftLeft => Scancode::LSHIFT,
        KeyCode::AltLeft => Scancode::LALT,
        KeyCode::SuperLeft => Scancode::LGUI,
        KeyCode::ControlRight => Scancode::RCTRL,
        KeyCode::ShiftRight => Scancode::RSHIFT,
        KeyCode::AltRight => Scancode::RALT,
        KeyCode::SuperRight => Scancode::RGUI,

        _ => return None,
    };
    Some(sc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;
    use winit::keyboard::ModifiersState;

    fn device() -> DeviceId {
        DeviceId::dummy()
    }

    fn touch(id: u64, phase: TouchPhase, x: f64, y: f64) -> WindowEvent {
        WindowEvent::Touch(Touch {
            device_id: device(),
            phase,
            location: PhysicalPosition::new(x, y),
            force: None,
            id,
        })
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn key_codes_map_to_scancodes() {
        assert_eq!(map_key_code(KeyCode::KeyA), Some(Scancode::A));
        assert_eq!(map_key_code(KeyCode::Digit0), Some(Scancode::NUM_0));
        assert_eq!(map_key_code(KeyCode::NumpadEnter), Some(Scancode::KP_ENTER));
        assert_eq!(map_key_code(KeyCode::ContextMenu), Some(Scancode::APPLICATION));
        assert_eq!(map_key_code(KeyCode::SuperRight), Some(Scancode::RGUI));
        assert_eq!(map_key_code(KeyCode::F24), None);
    }

    #[test]
    fn modifiers_without_side_info_default_to_left() {
        let mut t = WinitTranslator::default();
        let mods = Modifiers::from(ModifiersState::SHIFT | ModifiersState::CONTROL);
        assert!(t.translate(1.0, &WindowEvent::ModifiersChanged(mods)).is_empty());
        assert_eq!(t.modifiers(), Keymod::LSHIFT | Keymod::LCTRL);

        let cleared = Modifiers::from(ModifiersState::empty());
        t.translate(1.0, &WindowEvent::ModifiersChanged(cleared));
        assert_eq!(t.modifiers(), Keymod::NONE);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn cursor_moves_are_logical_and_stamp_buttons() {
        let mut t = WinitTranslator::default();
        let moved = WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(200.0, 100.0) };
        assert_eq!(t.translate(2.0, &moved), vec![InputEvent::MouseMotion { which: MouseId(0), x: 100.0, y: 50.0 }]);

        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Right,
        };
        assert_eq!(
            t.translate(2.0, &press),
            vec![InputEvent::MouseButton { which: MouseId(0), button: MouseButton::RIGHT, down: true, x: 100.0, y: 50.0 }]
        );
    }

    #[test]
    fn other_mouse_buttons_are_dropped() {
        let mut t = WinitTranslator::default();
        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Other(9),
        };
        assert!(t.translate(1.0, &press).is_empty());
    }

    #[test]
    fn pixel_wheel_deltas_are_scaled_to_lines() {
        let mut t = WinitTranslator::new(WinitTranslatorConfig { pixels_per_line: 10.0 });
        let wheel = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(t.translate(2.0, &wheel), vec![InputEvent::MouseWheel { which: MouseId(0), x: 0.0, y: 2.0 }]);

        let lines = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(t.translate(2.0, &lines), vec![InputEvent::MouseWheel { which: MouseId(0), x: 0.0, y: 1.0 }]);
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn first_touch_emulates_left_button() {
        let mut t = WinitTranslator::default();

        let down = t.translate(1.0, &touch(7, TouchPhase::Started, 10.0, 20.0));
        assert_eq!(down.len(), 2);
        assert_eq!(down[0], InputEvent::MouseMotion { which: MouseId::TOUCH, x: 10.0, y: 20.0 });
        assert!(matches!(down[1], InputEvent::MouseButton { down: true, button: MouseButton::LEFT, .. }));

        // a second finger is ignored while the first is down
        assert!(t.translate(1.0, &touch(8, TouchPhase::Started, 0.0, 0.0)).is_empty());

        assert_eq!(t.translate(1.0, &touch(7, TouchPhase::Moved, 11.0, 21.0)).len(), 1);

        let up = t.translate(1.0, &touch(7, TouchPhase::Ended, 12.0, 22.0));
        assert!(matches!(up[1], InputEvent::MouseButton { down: false, which: MouseId::TOUCH, .. }));

        assert!(t.translate(1.0, &touch(7, TouchPhase::Moved, 0.0, 0.0)).is_empty());
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn ime_commit_becomes_text_input() {
        let mut t = WinitTranslator::default();
        assert_eq!(
            t.translate(1.0, &WindowEvent::Ime(Ime::Commit("ä".into()))),
            vec![InputEvent::TextInput { text: "ä".into() }]
        );
        assert!(t.translate(1.0, &WindowEvent::Ime(Ime::Commit(String::new()))).is_empty());
        assert!(t.translate(1.0, &WindowEvent::Ime(Ime::Enabled)).is_empty());
    }
}
