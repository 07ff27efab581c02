//! Draw-command model and its submission to the renderer.

mod bridge;
mod draw_data;

pub use draw_data::{DrawCallback, DrawCmd, DrawData, DrawList, DrawVert};

pub(crate) use bridge::submit_draw_data;
