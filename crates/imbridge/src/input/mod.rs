//! Input subsystem.
//!
//! `InputEvent` and its identifiers mirror the platform event queue. The
//! translator feeds them into the GUI engine; `platform` holds adapters that
//! produce them from a windowing library.

mod gamepad;
mod keymap;
mod translate;
mod types;

pub mod platform;

pub use gamepad::{axis_key_values, axis_keys, button_to_key, scale_axis_value, STICK_DEAD_ZONE};
pub use keymap::{modifier_keys, mouse_button_to_gui, scancode_to_key};
pub use types::{GamepadAxis, GamepadButton, InputEvent, Keymod, MouseButton, MouseId, Scancode};

pub(crate) use translate::translate_event;
