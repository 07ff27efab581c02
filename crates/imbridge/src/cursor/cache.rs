use crate::engine::MouseCursor;
use crate::error::{BridgeResult, PlatformResultExt};
use crate::platform::{CursorId, Platform, SystemCursor};

/// Platform shape used for an engine cursor kind, if the platform has one.
pub fn system_cursor(kind: MouseCursor) -> Option<SystemCursor> {
    let shape = match kind {
        MouseCursor::Arrow => SystemCursor::Default,
        MouseCursor::TextInput => SystemCursor::Text,
        MouseCursor::ResizeAll => SystemCursor::Move,
        MouseCursor::ResizeNS => SystemCursor::NsResize,
        MouseCursor::ResizeEW => SystemCursor::EwResize,
        MouseCursor::ResizeNESW => SystemCursor::NeswResize,
        MouseCursor::ResizeNWSE => SystemCursor::NwseResize,
        MouseCursor::Hand => SystemCursor::Pointer,
        MouseCursor::Wait => SystemCursor::Wait,
        MouseCursor::Progress => SystemCursor::Progress,
        MouseCursor::NotAllowed => SystemCursor::NotAllowed,
        MouseCursor::None => return None,
    };
    Some(shape)
}

/// Lazily created system cursors, one slot per visible [`MouseCursor`].
///
/// A slot is filled the first time its kind is requested and stays filled
/// until [`CursorCache::release_all`].
#[derive(Debug, Default)]
pub(crate) struct CursorCache {
    slots: [Option<CursorId>; MouseCursor::VISIBLE.len()],
}

impl CursorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cursors currently created.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Shows `kind` on the platform, creating its cursor on first use.
    ///
    /// `None`, and kinds without a platform shape, hide the cursor.
    pub fn apply<P: Platform>(&mut self, platform: &mut P, kind: MouseCursor) -> BridgeResult<()> {
        let Some(slot) = kind.slot() else {
            return platform.hide_cursor().during("hide_cursor");
        };

        if self.slots[slot].is_none() {
            if let Some(shape) = system_cursor(kind) {
                let id = platform.create_system_cursor(shape).during("create_system_cursor")?;
                log::debug!("created system cursor {shape:?} for {kind:?}");
                self.slots[slot] = Some(id);
            }
        }

        match self.slots[slot] {
            Some(id) => {
                platform.show_cursor().during("show_cursor")?;
                platform.set_cursor(id).during("set_cursor")
            }
            // system_cursor is total over visible kinds; only a future kind without a shape lands here.
            None => platform.hide_cursor().during("hide_cursor"),
        }
    }

    /// Destroys every created cursor and empties the cache.
    pub fn release_all<P: Platform>(&mut self, platform: &mut P) {
        for slot in &mut self.slots {
            if let Some(id) = slot.take() {
                platform.destroy_cursor(id);
            }
        }
    }
}
