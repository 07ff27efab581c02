//! Geometry and color types shared by the render and IME paths.
//!
//! Pixel space:
//! - renderer pixels, origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use rect::{IRect, Rect};
pub use vec2::Vec2;
