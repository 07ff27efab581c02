use std::fmt;
use std::rc::Rc;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::platform::TextureId;

/// One GUI vertex, laid out as the engine emits it.
///
/// `col` is packed RGBA, one byte per channel in memory order.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub col: u32,
}

impl DrawVert {
    pub const fn new(pos: [f32; 2], uv: [f32; 2], col: u32) -> Self {
        Self { pos, uv, col }
    }
}

/// User callback embedded in a command list in place of geometry.
pub type DrawCallback = Rc<dyn Fn(&DrawList, &DrawCmd)>;

/// One entry of a command list.
#[derive(Clone)]
pub struct DrawCmd {
    /// Clip rectangle in unclipped screen space, before the display offset
    /// is subtracted.
    pub clip_rect: Rect,
    pub texture: Option<TextureId>,
    /// First vertex of this command within the list's vertex buffer.
    pub vtx_offset: usize,
    /// First index of this command within the list's index buffer.
    pub idx_offset: usize,
    /// Number of indices to draw.
    pub elem_count: usize,
    /// When set, the command is a callback and carries no geometry.
    pub callback: Option<DrawCallback>,
}

impl DrawCmd {
    /// An indexed-triangle command.
    pub fn elements(
        clip_rect: Rect,
        texture: Option<TextureId>,
        vtx_offset: usize,
        idx_offset: usize,
        elem_count: usize,
    ) -> Self {
        Self {
            clip_rect,
            texture,
            vtx_offset,
            idx_offset,
            elem_count,
            callback: None,
        }
    }

    /// A callback command.
    pub fn callback(callback: impl Fn(&DrawList, &DrawCmd) + 'static) -> Self {
        Self {
            clip_rect: Rect::default(),
            texture: None,
            vtx_offset: 0,
            idx_offset: 0,
            elem_count: 0,
            callback: Some(Rc::new(callback)),
        }
    }
}

impl fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCmd")
            .field("clip_rect", &self.clip_rect)
            .field("texture", &self.texture)
            .field("vtx_offset", &self.vtx_offset)
            .field("idx_offset", &self.idx_offset)
            .field("elem_count", &self.elem_count)
            .field("callback", &self.callback.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Vertex, index and command buffers for one layer of GUI output.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<u16>,
    pub cmd_buffer: Vec<DrawCmd>,
}

/// A frame's worth of GUI output, read-only to the bridge.
#[derive(Debug, Clone, Default)]
pub struct DrawData {
    /// Top-left of the displayed area. Clip rects are relative to it.
    pub display_pos: Vec2,
    pub display_size: Vec2,
    pub framebuffer_scale: Vec2,
    /// Lists in back-to-front order.
    pub draw_lists: Vec<DrawList>,
}

impl DrawData {
    /// Largest vertex buffer across all lists.
    pub fn max_vertex_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.vtx_buffer.len()).max().unwrap_or(0)
    }
}
