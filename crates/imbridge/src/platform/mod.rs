//! Platform / renderer service consumed by the bridge.
//!
//! The bridge never talks to a windowing or rendering API directly. Everything
//! it needs (queries, state mutators, textures, cursors, text input, geometry
//! submission) goes through [`Platform`]. Implementations are cheap handles to
//! one renderer + video subsystem; cloning one must yield a handle to the same
//! underlying objects, because the IME callback keeps its own copy.

use crate::coords::{ColorRgba, IRect, Rect, Vec2};
use crate::error::PlatformResult;
use crate::render::DrawVert;

/// Opaque window handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowId(pub u64);

/// Opaque renderer texture handle.
///
/// The same value is handed to the GUI engine as its texture identifier, so
/// draw commands refer to renderer textures directly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// Opaque platform cursor handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CursorId(pub u64);

/// Texture blend mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendMode {
    None,
    /// Standard alpha blending: `dst = src * a + dst * (1 - a)`.
    Blend,
    Add,
    Mod,
}

/// Texture sampling mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScaleMode {
    Nearest,
    Linear,
}

/// Built-in platform cursor shapes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SystemCursor {
    Default,
    Text,
    Wait,
    Crosshair,
    Progress,
    NwseResize,
    NeswResize,
    EwResize,
    NsResize,
    Move,
    NotAllowed,
    Pointer,
}

/// Pixel layout of a [`Surface`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    /// Four bytes per pixel in memory order R, G, B, A.
    Rgba32,
}

/// Borrowed pixel memory wrapped for texture upload; no copy is made.
#[derive(Debug, Copy, Clone)]
pub struct Surface<'a> {
    pub width: u32,
    pub height: u32,
    /// Bytes per row.
    pub pitch: usize,
    pub format: PixelFormat,
    pub pixels: &'a [u8],
}

/// One indexed triangle-list submission.
///
/// `colors` is parallel to `vertices` and overrides their packed colors;
/// `indices` refer into `vertices`.
#[derive(Debug, Copy, Clone)]
pub struct Geometry<'a> {
    pub texture: Option<TextureId>,
    pub vertices: &'a [DrawVert],
    pub colors: &'a [ColorRgba],
    pub indices: &'a [u16],
}

/// Renderer, window and input-method services required by the bridge.
pub trait Platform: Clone {
    // ── renderer queries ──────────────────────────────────────────────────

    /// Renderer output size in pixels.
    fn render_output_size(&self) -> PlatformResult<(i32, i32)>;

    /// Current render scale.
    fn render_scale(&self) -> PlatformResult<Vec2>;

    /// Output area expressed in the renderer's logical coordinate space.
    fn logical_presentation_rect(&self) -> PlatformResult<Rect>;

    /// Current viewport, or `None` when no explicit viewport is set.
    fn viewport(&self) -> PlatformResult<Option<IRect>>;

    /// Current clip rect, or `None` when clipping is disabled.
    fn clip_rect(&self) -> PlatformResult<Option<IRect>>;

    /// Converts window coordinates of a pointer event into render coordinates,
    /// applying render scale and logical presentation.
    fn convert_to_render_coordinates(&self, position: Vec2) -> PlatformResult<Vec2>;

    /// Monotonic tick counter in nanoseconds.
    fn ticks_ns(&self) -> u64;

    // ── renderer state ────────────────────────────────────────────────────

    /// Sets the viewport; `None` resets to the full output.
    fn set_viewport(&mut self, rect: Option<IRect>) -> PlatformResult<()>;

    /// Sets the clip rect; `None` disables clipping.
    fn set_clip_rect(&mut self, rect: Option<IRect>) -> PlatformResult<()>;

    /// Draws indexed triangles.
    fn render_geometry(&mut self, geometry: &Geometry<'_>) -> PlatformResult<()>;

    // ── textures ──────────────────────────────────────────────────────────

    fn create_texture_from_surface(&mut self, surface: &Surface<'_>) -> PlatformResult<TextureId>;

    fn set_texture_blend_mode(&mut self, texture: TextureId, mode: BlendMode) -> PlatformResult<()>;

    fn set_texture_scale_mode(&mut self, texture: TextureId, mode: ScaleMode) -> PlatformResult<()>;

    /// Releases a texture. Must not fail.
    fn destroy_texture(&mut self, texture: TextureId);

    // ── cursors ───────────────────────────────────────────────────────────

    fn create_system_cursor(&mut self, shape: SystemCursor) -> PlatformResult<CursorId>;

    /// Releases a cursor. Must not fail.
    fn destroy_cursor(&mut self, cursor: CursorId);

    fn show_cursor(&mut self) -> PlatformResult<()>;

    fn hide_cursor(&mut self) -> PlatformResult<()>;

    fn set_cursor(&mut self, cursor: CursorId) -> PlatformResult<()>;

    // ── text input ────────────────────────────────────────────────────────

    fn start_text_input(&mut self, window: WindowId) -> PlatformResult<()>;

    fn stop_text_input(&mut self, window: WindowId) -> PlatformResult<()>;

    /// Sets the composition area; `cursor` is the caret offset within it.
    fn set_text_input_area(&mut self, window: WindowId, area: IRect, cursor: i32) -> PlatformResult<()>;
}
