use crate::coords::Vec2;

/// Capabilities the backend advertises to the engine.
///
/// Stored as booleans rather than bitflags to keep it explicit.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BackendFlags {
    /// Draw commands may use a non-zero vertex offset.
    pub renderer_has_vtx_offset: bool,
    /// Gamepad navigation inputs are fed.
    pub has_gamepad: bool,
    /// Requested cursor shapes are honored.
    pub has_mouse_cursors: bool,
}

impl BackendFlags {
    /// Flags advertised by this bridge.
    pub const BRIDGE: BackendFlags = BackendFlags {
        renderer_has_vtx_offset: true,
        has_gamepad: true,
        has_mouse_cursors: true,
    };
}

/// Engine-side configuration the bridge consults.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ConfigFlags {
    /// The application manages the cursor shape itself.
    pub no_mouse_cursor_change: bool,
}

/// Per-frame values fed to the engine before it opens a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameMetrics {
    /// Seconds since the previous frame. Always positive.
    pub delta_time: f32,
    /// Renderer output size in pixels.
    pub display_size: Vec2,
    /// Render scale.
    pub framebuffer_scale: Vec2,
}

/// Text-composition caret request emitted by the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlatformImeData {
    pub want_visible: bool,
    /// Caret position in window coordinates.
    pub input_pos: Vec2,
    pub input_line_height: f32,
}

/// Rasterized font atlas as RGBA32 pixels.
#[derive(Debug, Copy, Clone)]
pub struct FontAtlas<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}
