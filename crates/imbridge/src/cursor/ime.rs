use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::IRect;
use crate::engine::{ImeCallback, PlatformImeData};
use crate::error::{BridgeResult, PlatformResultExt};
use crate::platform::{Platform, WindowId};

/// Text-input session state shared between the bridge and the IME callback
/// it installs on the engine.
#[derive(Debug, Default)]
pub(crate) struct ImeTarget {
    active: Option<WindowId>,
    detached: bool,
}

pub(crate) type SharedImeTarget = Rc<RefCell<ImeTarget>>;

impl ImeTarget {
    pub fn shared() -> SharedImeTarget {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Window that currently has text input started, if any.
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Moves, starts or stops the text-input session to match `data`.
    pub fn set_ime_data<P: Platform>(
        &mut self,
        platform: &mut P,
        window: Option<WindowId>,
        data: &PlatformImeData,
    ) -> BridgeResult<()> {
        if !data.want_visible || self.active != window {
            self.stop(platform)?;
        }

        if !data.want_visible {
            return Ok(());
        }

        let Some(window) = window else {
            log::debug!("ime request for a viewport without a platform window");
            return Ok(());
        };

        let area = IRect::new(
            data.input_pos.x as i32,
            data.input_pos.y as i32,
            1,
            data.input_line_height as i32,
        );
        platform.set_text_input_area(window, area, 0).during("set_text_input_area")?;
        platform.start_text_input(window).during("start_text_input")?;

        self.active = Some(window);
        Ok(())
    }

    /// Stops text input on the active window, if any.
    pub fn stop<P: Platform>(&mut self, platform: &mut P) -> BridgeResult<()> {
        if let Some(window) = self.active {
            platform.stop_text_input(window).during("stop_text_input")?;
            self.active = None;
        }
        Ok(())
    }

    /// Makes every outstanding callback a no-op.
    pub fn detach(&mut self) {
        self.detached = true;
        self.active = None;
    }
}

/// Builds the callback the engine calls with caret requests.
///
/// The callback owns its own platform handle and shares `target` with the
/// bridge. Once the target is detached it does nothing.
pub(crate) fn ime_callback<P: Platform + 'static>(platform: P, target: SharedImeTarget) -> ImeCallback {
    let mut platform = platform;
    Box::new(move |window, data| {
        let mut target = target.borrow_mut();
        if target.is_detached() {
            return Ok(());
        }
        target.set_ime_data(&mut platform, window, data)
    })
}
