//! GUI engine contract.
//!
//! The immediate-mode engine is consumed as an opaque collaborator: it accepts
//! input through the sinks on [`GuiEngine`], exposes its font atlas and
//! per-frame settings, and produces a [`DrawData`](crate::render::DrawData)
//! each frame. The bridge holds no engine reference between calls; every
//! bridge operation that talks to the engine borrows it explicitly.

mod io;
mod keys;

pub use io::{BackendFlags, ConfigFlags, FontAtlas, FrameMetrics, PlatformImeData};
pub use keys::{GuiKey, GuiMouseButton, MouseCursor, MouseSource};

use crate::error::BridgeResult;
use crate::platform::{TextureId, WindowId};

/// Callback the engine invokes when it wants to move or hide the text
/// composition caret.
///
/// Receives the platform window bound to the requesting viewport, if any.
pub type ImeCallback = Box<dyn FnMut(Option<WindowId>, &PlatformImeData) -> BridgeResult<()>>;

/// Input model and frame entry points of the immediate-mode GUI engine.
pub trait GuiEngine {
    // ── backend registration ──────────────────────────────────────────────

    /// Adds capability flags; flags already set stay set.
    fn add_backend_flags(&mut self, flags: BackendFlags);

    /// Binds (or unbinds) the platform window of the main viewport.
    fn set_main_viewport_window(&mut self, window: Option<WindowId>);

    /// Installs or clears the IME-position callback.
    fn set_platform_ime_callback(&mut self, callback: Option<ImeCallback>);

    /// Rasterizes (if needed) and returns the font atlas as RGBA32.
    fn font_atlas_rgba32(&mut self) -> FontAtlas<'_>;

    /// Registers the texture that glyph draw commands should reference.
    fn set_font_texture(&mut self, texture: Option<TextureId>);

    // ── frame ─────────────────────────────────────────────────────────────

    fn set_frame_metrics(&mut self, metrics: FrameMetrics);

    /// Opens the engine frame; widget code may run afterwards.
    fn new_frame(&mut self);

    fn config_flags(&self) -> ConfigFlags;

    /// Cursor shape requested by the last frame.
    fn mouse_cursor(&self) -> MouseCursor;

    // ── input sinks ───────────────────────────────────────────────────────

    fn add_key_event(&mut self, key: GuiKey, down: bool);

    fn add_key_analog_event(&mut self, key: GuiKey, down: bool, value: f32);

    fn add_mouse_button_event(&mut self, button: GuiMouseButton, down: bool);

    fn add_mouse_pos_event(&mut self, x: f32, y: f32);

    fn add_mouse_source_event(&mut self, source: MouseSource);

    fn add_mouse_wheel_event(&mut self, x: f32, y: f32);

    fn add_input_characters_utf8(&mut self, text: &str);
}
