//! Recording doubles for the platform and engine seams.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};

use crate::coords::{ColorRgba, IRect, Rect, Vec2};
use crate::engine::{
    BackendFlags, ConfigFlags, FontAtlas, FrameMetrics, GuiEngine, GuiKey, GuiMouseButton, ImeCallback,
    MouseCursor, MouseSource, PlatformImeData,
};
use crate::error::{BridgeResult, PlatformError, PlatformResult};
use crate::platform::{
    BlendMode, CursorId, Geometry, Platform, ScaleMode, Surface, SystemCursor, TextureId, WindowId,
};

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that claim the process-wide bridge slot.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

// ── platform ──────────────────────────────────────────────────────────────

/// Mutating platform calls, in the order they were made. Queries are not
/// recorded; failed calls are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    SetViewport(Option<IRect>),
    SetClipRect(Option<IRect>),
    RenderGeometry {
        texture: Option<TextureId>,
        vertex_count: usize,
        indices: Vec<u16>,
        colors: Vec<ColorRgba>,
    },
    CreateTexture { width: u32, height: u32, pitch: usize },
    SetBlendMode(TextureId, BlendMode),
    SetScaleMode(TextureId, ScaleMode),
    DestroyTexture(TextureId),
    CreateSystemCursor(SystemCursor),
    DestroyCursor(CursorId),
    ShowCursor,
    HideCursor,
    SetCursor(CursorId),
    StartTextInput(WindowId),
    StopTextInput(WindowId),
    SetTextInputArea(WindowId, IRect, i32),
}

#[derive(Debug)]
pub struct MockState {
    pub calls: Vec<PlatformCall>,
    pub output_size: (i32, i32),
    pub render_scale: Vec2,
    pub logical_rect: Rect,
    pub viewport: Option<IRect>,
    pub clip: Option<IRect>,
    /// Window coordinates are divided by this to get render coordinates.
    pub coordinate_scale: f32,
    pub ticks_ns: u64,
    pub failing: HashSet<&'static str>,
    pub live_textures: HashSet<TextureId>,
    pub live_cursors: HashSet<CursorId>,
    next_handle: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            output_size: (640, 480),
            render_scale: Vec2::splat(1.0),
            logical_rect: Rect::from_xywh(0.0, 0.0, 640.0, 480.0),
            viewport: None,
            clip: None,
            coordinate_scale: 1.0,
            ticks_ns: 0,
            failing: HashSet::new(),
            live_textures: HashSet::new(),
            live_cursors: HashSet::new(),
            next_handle: 1,
        }
    }
}

/// Shared-state platform double; clones observe and record into the same
/// state, like real renderer handles.
#[derive(Debug, Clone, Default)]
pub struct MockPlatform(Rc<RefCell<MockState>>);

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, MockState> {
        self.0.borrow()
    }

    pub fn state_mut(&self) -> RefMut<'_, MockState> {
        self.0.borrow_mut()
    }

    /// Makes the named `Platform` method fail from now on.
    pub fn fail_on(&self, call: &'static str) {
        self.state_mut().failing.insert(call);
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state_mut().calls.clear();
    }

    fn check(&self, call: &'static str) -> PlatformResult<()> {
        if self.state().failing.contains(call) {
            Err(PlatformError::new(format!("{call} rejected by mock")))
        } else {
            Ok(())
        }
    }

    fn record(&self, call: PlatformCall) {
        self.state_mut().calls.push(call);
    }

    fn next_handle(&self) -> u64 {
        let mut s = self.state_mut();
        let h = s.next_handle;
        s.next_handle += 1;
        h
    }
}

impl Platform for MockPlatform {
    fn render_output_size(&self) -> PlatformResult<(i32, i32)> {
        self.check("render_output_size")?;
        Ok(self.state().output_size)
    }

    fn render_scale(&self) -> PlatformResult<Vec2> {
        self.check("render_scale")?;
        Ok(self.state().render_scale)
    }

    fn logical_presentation_rect(&self) -> PlatformResult<Rect> {
        self.check("logical_presentation_rect")?;
        Ok(self.state().logical_rect)
    }

    fn viewport(&self) -> PlatformResult<Option<IRect>> {
        self.check("viewport")?;
        Ok(self.state().viewport)
    }

    fn clip_rect(&self) -> PlatformResult<Option<IRect>> {
        self.check("clip_rect")?;
        Ok(self.state().clip)
    }

    fn convert_to_render_coordinates(&self, position: Vec2) -> PlatformResult<Vec2> {
        self.check("convert_to_render_coordinates")?;
        let scale = self.state().coordinate_scale;
        Ok(Vec2::new(position.x / scale, position.y / scale))
    }

    fn ticks_ns(&self) -> u64 {
        self.state().ticks_ns
    }

    fn set_viewport(&mut self, rect: Option<IRect>) -> PlatformResult<()> {
        self.check("set_viewport")?;
        self.state_mut().viewport = rect;
        self.record(PlatformCall::SetViewport(rect));
        Ok(())
    }

    fn set_clip_rect(&mut self, rect: Option<IRect>) -> PlatformResult<()> {
        self.check("set_clip_rect")?;
        self.state_mut().clip = rect;
        self.record(PlatformCall::SetClipRect(rect));
        Ok(())
    }

    fn render_geometry(&mut self, geometry: &Geometry<'_>) -> PlatformResult<()> {
        self.check("render_geometry")?;
        self.record(PlatformCall::RenderGeometry {
            texture: geometry.texture,
            vertex_count: geometry.vertices.len(),
            indices: geometry.indices.to_vec(),
            colors: geometry.colors.to_vec(),
        });
        Ok(())
    }

    fn create_texture_from_surface(&mut self, surface: &Surface<'_>) -> PlatformResult<TextureId> {
        self.check("create_texture_from_surface")?;
        let id = TextureId(self.next_handle());
        self.state_mut().live_textures.insert(id);
        self.record(PlatformCall::CreateTexture {
            width: surface.width,
            height: surface.height,
            pitch: surface.pitch,
        });
        Ok(id)
    }

    fn set_texture_blend_mode(&mut self, texture: TextureId, mode: BlendMode) -> PlatformResult<()> {
        self.check("set_texture_blend_mode")?;
        self.record(PlatformCall::SetBlendMode(texture, mode));
        Ok(())
    }

    fn set_texture_scale_mode(&mut self, texture: TextureId, mode: ScaleMode) -> PlatformResult<()> {
        self.check("set_texture_scale_mode")?;
        self.record(PlatformCall::SetScaleMode(texture, mode));
        Ok(())
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.state_mut().live_textures.remove(&texture);
        self.record(PlatformCall::DestroyTexture(texture));
    }

    fn create_system_cursor(&mut self, shape: SystemCursor) -> PlatformResult<CursorId> {
        self.check("create_system_cursor")?;
        let id = CursorId(self.next_handle());
        self.state_mut().live_cursors.insert(id);
        self.record(PlatformCall::CreateSystemCursor(shape));
        Ok(id)
    }

    fn destroy_cursor(&mut self, cursor: CursorId) {
        self.state_mut().live_cursors.remove(&cursor);
        self.record(PlatformCall::DestroyCursor(cursor));
    }

    fn show_cursor(&mut self) -> PlatformResult<()> {
        self.check("show_cursor")?;
        self.record(PlatformCall::ShowCursor);
        Ok(())
    }

    fn hide_cursor(&mut self) -> PlatformResult<()> {
        self.check("hide_cursor")?;
        self.record(PlatformCall::HideCursor);
        Ok(())
    }

    fn set_cursor(&mut self, cursor: CursorId) -> PlatformResult<()> {
        self.check("set_cursor")?;
        self.record(PlatformCall::SetCursor(cursor));
        Ok(())
    }

    fn start_text_input(&mut self, window: WindowId) -> PlatformResult<()> {
        self.check("start_text_input")?;
        self.record(PlatformCall::StartTextInput(window));
        Ok(())
    }

    fn stop_text_input(&mut self, window: WindowId) -> PlatformResult<()> {
        self.check("stop_text_input")?;
        self.record(PlatformCall::StopTextInput(window));
        Ok(())
    }

    fn set_text_input_area(&mut self, window: WindowId, area: IRect, cursor: i32) -> PlatformResult<()> {
        self.check("set_text_input_area")?;
        self.record(PlatformCall::SetTextInputArea(window, area, cursor));
        Ok(())
    }
}

// ── engine ────────────────────────────────────────────────────────────────

/// Engine calls that change engine state, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    BackendFlags(BackendFlags),
    MainViewport(Option<WindowId>),
    /// `true` when a callback was installed, `false` when cleared.
    ImeCallback(bool),
    FontTexture(Option<TextureId>),
    FrameMetrics(FrameMetrics),
    NewFrame,
    Key(GuiKey, bool),
    KeyAnalog(GuiKey, bool, f32),
    MouseButton(GuiMouseButton, bool),
    MousePos(f32, f32),
    MouseSource(MouseSource),
    MouseWheel(f32, f32),
    Text(String),
}

/// Engine double that records every sink call.
pub struct RecordingEngine {
    pub calls: Vec<EngineCall>,
    pub atlas_pixels: Vec<u8>,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub config: ConfigFlags,
    pub cursor: MouseCursor,
    pub main_viewport: Option<WindowId>,
    pub font_texture: Option<TextureId>,
    pub ime_callback: Option<ImeCallback>,
}

impl RecordingEngine {
    /// An engine with a 2x2 opaque white atlas.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            atlas_pixels: vec![0xFF; 2 * 2 * 4],
            atlas_width: 2,
            atlas_height: 2,
            config: ConfigFlags::default(),
            cursor: MouseCursor::Arrow,
            main_viewport: None,
            font_texture: None,
            ime_callback: None,
        }
    }

    pub fn take_calls(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }

    /// Invokes the installed IME callback the way the engine would for the
    /// main viewport. `None` when no callback is installed.
    pub fn fire_ime(&mut self, data: PlatformImeData) -> Option<BridgeResult<()>> {
        let window = self.main_viewport;
        self.ime_callback.as_mut().map(|cb| cb(window, &data))
    }
}

impl GuiEngine for RecordingEngine {
    fn add_backend_flags(&mut self, flags: BackendFlags) {
        self.calls.push(EngineCall::BackendFlags(flags));
    }

    fn set_main_viewport_window(&mut self, window: Option<WindowId>) {
        self.main_viewport = window;
        self.calls.push(EngineCall::MainViewport(window));
    }

    fn set_platform_ime_callback(&mut self, callback: Option<ImeCallback>) {
        self.calls.push(EngineCall::ImeCallback(callback.is_some()));
        self.ime_callback = callback;
    }

    fn font_atlas_rgba32(&mut self) -> FontAtlas<'_> {
        FontAtlas {
            pixels: &self.atlas_pixels,
            width: self.atlas_width,
            height: self.atlas_height,
        }
    }

    fn set_font_texture(&mut self, texture: Option<TextureId>) {
        self.font_texture = texture;
        self.calls.push(EngineCall::FontTexture(texture));
    }

    fn set_frame_metrics(&mut self, metrics: FrameMetrics) {
        self.calls.push(EngineCall::FrameMetrics(metrics));
    }

    fn new_frame(&mut self) {
        self.calls.push(EngineCall::NewFrame);
    }

    fn config_flags(&self) -> ConfigFlags {
        self.config
    }

    fn mouse_cursor(&self) -> MouseCursor {
        self.cursor
    }

    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.calls.push(EngineCall::Key(key, down));
    }

    fn add_key_analog_event(&mut self, key: GuiKey, down: bool, value: f32) {
        self.calls.push(EngineCall::KeyAnalog(key, down, value));
    }

    fn add_mouse_button_event(&mut self, button: GuiMouseButton, down: bool) {
        self.calls.push(EngineCall::MouseButton(button, down));
    }

    fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        self.calls.push(EngineCall::MousePos(x, y));
    }

    fn add_mouse_source_event(&mut self, source: MouseSource) {
        self.calls.push(EngineCall::MouseSource(source));
    }

    fn add_mouse_wheel_event(&mut self, x: f32, y: f32) {
        self.calls.push(EngineCall::MouseWheel(x, y));
    }

    fn add_input_characters_utf8(&mut self, text: &str) {
        self.calls.push(EngineCall::Text(text.to_string()));
    }
}
