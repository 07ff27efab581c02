use crate::engine::{FontAtlas, GuiEngine};
use crate::error::{BridgeError, BridgeResult, PlatformResultExt};
use crate::platform::{BlendMode, PixelFormat, Platform, ScaleMode, Surface, TextureId};

/// Bytes per RGBA32 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Wraps the atlas pixels as a surface without copying.
///
/// Fails when either dimension is zero or the pixel buffer does not hold
/// exactly `width * height` RGBA32 pixels.
pub fn atlas_surface<'a>(atlas: &FontAtlas<'a>) -> BridgeResult<Surface<'a>> {
    let invalid = || BridgeError::InvalidFontAtlas {
        width: atlas.width,
        height: atlas.height,
        len: atlas.pixels.len(),
    };

    if atlas.width == 0 || atlas.height == 0 {
        return Err(invalid());
    }

    let pitch = (atlas.width as usize).checked_mul(BYTES_PER_PIXEL).ok_or_else(invalid)?;
    let expected = pitch.checked_mul(atlas.height as usize).ok_or_else(invalid)?;
    if expected != atlas.pixels.len() {
        return Err(invalid());
    }

    Ok(Surface {
        width: atlas.width,
        height: atlas.height,
        pitch,
        format: PixelFormat::Rgba32,
        pixels: atlas.pixels,
    })
}

/// Uploads the engine's font atlas and registers the texture with it.
///
/// A texture created before a failing step is destroyed again, so an error
/// leaves no renderer resource behind.
pub(crate) fn upload_font_atlas<P, G>(platform: &mut P, engine: &mut G) -> BridgeResult<TextureId>
where
    P: Platform,
    G: GuiEngine + ?Sized,
{
    let (texture, width, height) = {
        let atlas = engine.font_atlas_rgba32();
        let surface = atlas_surface(&atlas)?;
        let texture = platform
            .create_texture_from_surface(&surface)
            .during("create_texture_from_surface")?;
        (texture, atlas.width, atlas.height)
    };

    if let Err(e) = configure_texture(platform, texture) {
        platform.destroy_texture(texture);
        return Err(e);
    }

    engine.set_font_texture(Some(texture));
    log::debug!("uploaded {width}x{height} font atlas as texture {}", texture.0);

    Ok(texture)
}

fn configure_texture<P: Platform>(platform: &mut P, texture: TextureId) -> BridgeResult<()> {
    platform
        .set_texture_blend_mode(texture, BlendMode::Blend)
        .during("set_texture_blend_mode")?;
    platform
        .set_texture_scale_mode(texture, ScaleMode::Linear)
        .during("set_texture_scale_mode")
}
