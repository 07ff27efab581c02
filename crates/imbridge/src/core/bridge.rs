use std::rc::Rc;

use crate::coords::{ColorRgba, Rect, Vec2};
use crate::cursor::{ime_callback, CursorCache, ImeTarget, SharedImeTarget};
use crate::engine::{BackendFlags, FrameMetrics, GuiEngine, MouseCursor};
use crate::error::{BridgeError, BridgeResult, PlatformResultExt};
use crate::font::upload_font_atlas;
use crate::input::{translate_event, InputEvent};
use crate::platform::{Platform, TextureId, WindowId};
use crate::render::{submit_draw_data, DrawData};
use crate::time::FrameClock;

use super::slot::SlotGuard;
use super::BridgeConfig;

/// Everything that exists only between `init` and `shutdown`.
struct BridgeState {
    window: WindowId,
    /// True between `new_frame` and `render_draw_data`.
    begun: bool,
    clock: FrameClock,
    logical_rect: Rect,
    cursors: CursorCache,
    ime: SharedImeTarget,
    font_texture: Option<TextureId>,
    /// Per-vertex color scratch, reused across frames.
    colors: Vec<ColorRgba>,
    _slot: SlotGuard,
}

/// Connects one platform renderer and window to the GUI engine.
///
/// At most one bridge is live per process. The engine is never stored; each
/// operation that needs it borrows it from the caller.
///
/// Frame protocol:
/// - `process_event` for every platform event
/// - `new_frame`, then build the UI
/// - `render_draw_data` with the engine's output
pub struct Bridge<P: Platform> {
    platform: P,
    config: BridgeConfig,
    state: Option<BridgeState>,
}

impl<P: Platform + 'static> Bridge<P> {
    /// Binds `window` and `platform` to `engine`.
    ///
    /// Registers the backend capabilities, the main viewport window and the
    /// IME callback, then uploads the font atlas. On failure everything done
    /// so far is undone and the process slot is free again.
    pub fn init<G>(platform: P, window: WindowId, engine: &mut G, config: BridgeConfig) -> BridgeResult<Self>
    where
        G: GuiEngine + ?Sized,
    {
        let slot = SlotGuard::claim().ok_or(BridgeError::AlreadyInitialized)?;

        let ime = ImeTarget::shared();
        let mut bridge = Self {
            state: Some(BridgeState {
                window,
                begun: false,
                clock: config.frame_clock(),
                logical_rect: Rect::default(),
                cursors: CursorCache::new(),
                ime: Rc::clone(&ime),
                font_texture: None,
                colors: Vec::new(),
                _slot: slot,
            }),
            platform,
            config,
        };

        engine.add_backend_flags(BackendFlags::BRIDGE);
        engine.set_main_viewport_window(Some(window));
        engine.set_platform_ime_callback(Some(ime_callback(bridge.platform.clone(), ime)));

        match upload_font_atlas(&mut bridge.platform, engine) {
            Ok(texture) => {
                if let Some(state) = bridge.state.as_mut() {
                    state.font_texture = Some(texture);
                }
            }
            Err(e) => {
                log::warn!("bridge init failed: {e}");
                bridge.shutdown(engine);
                return Err(e);
            }
        }

        log::debug!("bridge initialized for window {}", window.0);
        Ok(bridge)
    }
}

impl<P: Platform> Bridge<P> {
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// True between `new_frame` and `render_draw_data`.
    pub fn frame_begun(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.begun)
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn window(&self) -> Option<WindowId> {
        self.state.as_ref().map(|s| s.window)
    }

    pub fn font_texture(&self) -> Option<TextureId> {
        self.state.as_ref().and_then(|s| s.font_texture)
    }

    /// Logical presentation rectangle read by the last `new_frame`.
    pub fn logical_presentation_rect(&self) -> Option<Rect> {
        self.state.as_ref().map(|s| s.logical_rect)
    }

    /// Window with an active text-input session, if any.
    pub fn ime_window(&self) -> Option<WindowId> {
        self.state.as_ref().and_then(|s| s.ime.borrow().active())
    }

    /// Opens an engine frame.
    ///
    /// Does nothing when the bridge is shut down or a frame is already open.
    /// Fails if a renderer query fails, in which case no frame is opened.
    pub fn new_frame<G>(&mut self, engine: &mut G) -> BridgeResult<()>
    where
        G: GuiEngine + ?Sized,
    {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        if state.begun {
            return Ok(());
        }

        let (width, height) = self.platform.render_output_size().during("render_output_size")?;
        let scale = self.platform.render_scale().during("render_scale")?;
        state.logical_rect = self
            .platform
            .logical_presentation_rect()
            .during("logical_presentation_rect")?;

        let time = state.clock.tick(self.platform.ticks_ns());
        log::trace!("frame {} at {} ns, dt {:.6}s", time.frame_index, time.now_ns, time.dt);

        engine.set_frame_metrics(FrameMetrics {
            delta_time: time.dt,
            display_size: Vec2::new(width as f32, height as f32),
            framebuffer_scale: scale,
        });

        state.begun = true;
        engine.new_frame();

        Ok(())
    }

    /// Feeds one platform event to the engine.
    pub fn process_event<G>(&mut self, engine: &mut G, event: &InputEvent)
    where
        G: GuiEngine + ?Sized,
    {
        if self.state.is_none() {
            return;
        }
        translate_event(&self.platform, engine, self.config.stick_dead_zone, event);
    }

    /// Draws the engine's output for the open frame and closes it.
    ///
    /// Does nothing when no frame is open. The renderer's viewport and clip
    /// are left as they were found. Afterwards the engine's requested cursor
    /// is applied unless the engine manages cursors itself.
    pub fn render_draw_data<G>(&mut self, engine: &mut G, draw_data: &DrawData) -> BridgeResult<()>
    where
        G: GuiEngine + ?Sized,
    {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        if !state.begun {
            return Ok(());
        }
        state.begun = false;

        submit_draw_data(&mut self.platform, draw_data, &mut state.colors)?;

        if !engine.config_flags().no_mouse_cursor_change {
            state.cursors.apply(&mut self.platform, engine.mouse_cursor())?;
        }
        Ok(())
    }

    /// Shows the platform cursor matching `kind`.
    pub fn set_mouse_cursor(&mut self, kind: MouseCursor) -> BridgeResult<()> {
        match self.state.as_mut() {
            Some(state) => state.cursors.apply(&mut self.platform, kind),
            None => Ok(()),
        }
    }

    /// Releases every platform resource and clears the engine registrations.
    ///
    /// Idempotent. Teardown failures are logged, not returned.
    pub fn shutdown<G>(&mut self, engine: &mut G)
    where
        G: GuiEngine + ?Sized,
    {
        let Some(mut state) = self.state.take() else {
            return;
        };

        release_platform_resources(&mut self.platform, &mut state);

        engine.set_platform_ime_callback(None);
        engine.set_font_texture(None);
        engine.set_main_viewport_window(None);

        log::debug!("bridge for window {} shut down", state.window.0);
    }
}

impl<P: Platform> Drop for Bridge<P> {
    fn drop(&mut self) {
        if let Some(mut state) = self.state.take() {
            release_platform_resources(&mut self.platform, &mut state);
            log::debug!(
                "bridge for window {} dropped without shutdown; engine registrations left stale",
                state.window.0
            );
        }
    }
}

fn release_platform_resources<P: Platform>(platform: &mut P, state: &mut BridgeState) {
    if let Some(texture) = state.font_texture.take() {
        platform.destroy_texture(texture);
    }

    let cursors = state.cursors.len();
    state.cursors.release_all(platform);
    log::debug!("released {cursors} system cursors");

    match state.ime.try_borrow_mut() {
        Ok(mut ime) => {
            if let Err(e) = ime.stop(platform) {
                log::error!("stopping text input during teardown: {e}");
            }
            ime.detach();
        }
        Err(_) => log::error!("ime target busy during teardown; text input left running"),
    }
}
