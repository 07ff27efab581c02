/// Normalized RGBA color, one `f32` per channel in `[0, 1]`.
///
/// Layout matches the renderer's per-vertex float color input.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[repr(C)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Decodes four straight 8-bit channels in memory order (R, G, B, A).
    #[inline]
    pub fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Decodes a packed 32-bit vertex color by reading its bytes as stored.
    #[inline]
    pub fn from_packed(col: u32) -> Self {
        let bytes: [u8; 4] = bytemuck::cast(col);
        Self::from_bytes(bytes)
    }
}
