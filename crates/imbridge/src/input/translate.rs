use crate::coords::Vec2;
use crate::engine::{GuiEngine, MouseSource};
use crate::platform::Platform;

use super::gamepad::{axis_key_values, axis_keys, button_to_key};
use super::keymap::{modifier_keys, mouse_button_to_gui, scancode_to_key};
use super::types::{InputEvent, MouseId};

/// Feeds one platform event into the engine's input model.
///
/// Events, keys, buttons and axes the tables do not know are dropped without
/// error; this layer translates, it does not validate.
pub(crate) fn translate_event<P, G>(platform: &P, engine: &mut G, dead_zone: i16, event: &InputEvent)
where
    P: Platform,
    G: GuiEngine + ?Sized,
{
    match event {
        InputEvent::Key { scancode, modifiers, down, .. } => {
            let Some(key) = scancode_to_key(*scancode) else {
                return;
            };

            for (mod_key, held) in modifier_keys(*modifiers) {
                engine.add_key_event(mod_key, held);
            }
            engine.add_key_event(key, *down);
        }

        InputEvent::MouseButton { button, down, .. } => {
            if let Some(button) = mouse_button_to_gui(*button) {
                engine.add_mouse_button_event(button, *down);
            }
        }

        InputEvent::MouseMotion { which, x, y } => {
            let pos = match platform.convert_to_render_coordinates(Vec2::new(*x, *y)) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("dropping mouse motion: render coordinate conversion failed: {e}");
                    return;
                }
            };

            engine.add_mouse_source_event(mouse_source(*which));
            engine.add_mouse_pos_event(pos.x, pos.y);
        }

        InputEvent::MouseWheel { which, x, y } => {
            engine.add_mouse_source_event(mouse_source(*which));
            engine.add_mouse_wheel_event(*x, *y);
        }

        InputEvent::GamepadButton { button, down, .. } => {
            if let Some(key) = button_to_key(*button) {
                engine.add_key_event(key, *down);
            }
        }

        InputEvent::GamepadAxis { axis, value, .. } => {
            let Some((negative, positive)) = axis_keys(*axis) else {
                return;
            };

            for (key, v) in axis_key_values(*value, dead_zone, negative, positive) {
                engine.add_key_analog_event(key, v != 0.0, v);
            }
        }

        InputEvent::TextInput { text } => {
            if !text.is_empty() {
                engine.add_input_characters_utf8(text);
            }
        }

        InputEvent::GamepadAdded { which } => log::debug!("gamepad {which} connected"),

        InputEvent::GamepadRemoved { which } => log::debug!("gamepad {which} disconnected"),

        InputEvent::Unknown { kind } => log::trace!("ignoring platform event type {kind:#x}"),
    }
}

fn mouse_source(which: MouseId) -> MouseSource {
    if which == MouseId::TOUCH {
        MouseSource::TouchScreen
    } else {
        MouseSource::Mouse
    }
}
