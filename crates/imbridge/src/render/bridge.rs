use crate::coords::ColorRgba;
use crate::error::{BridgeResult, PlatformResultExt};
use crate::platform::{Geometry, Platform};

use super::{DrawCmd, DrawData, DrawList};

/// Submits every command of `draw_data` to the renderer.
///
/// The renderer's viewport and clip state are saved first and restored
/// afterwards, even when a draw call fails. The first error wins.
/// `colors` is scratch storage reused across frames.
pub(crate) fn submit_draw_data<P: Platform>(
    platform: &mut P,
    draw_data: &DrawData,
    colors: &mut Vec<ColorRgba>,
) -> BridgeResult<()> {
    let saved_viewport = platform.viewport().during("viewport")?;
    let saved_clip = platform.clip_rect().during("clip_rect")?;

    colors.clear();
    colors.reserve(draw_data.max_vertex_count());

    let drawn = draw_lists(platform, draw_data, colors);

    let viewport = platform.set_viewport(saved_viewport).during("set_viewport");
    let clip = platform.set_clip_rect(saved_clip).during("set_clip_rect");

    drawn.and(viewport).and(clip)
}

fn draw_lists<P: Platform>(platform: &mut P, draw_data: &DrawData, colors: &mut Vec<ColorRgba>) -> BridgeResult<()> {
    for list in &draw_data.draw_lists {
        for cmd in &list.cmd_buffer {
            if let Some(callback) = &cmd.callback {
                callback(list, cmd);
                continue;
            }
            draw_cmd(platform, draw_data, list, cmd, colors)?;
        }
    }
    Ok(())
}

fn draw_cmd<P: Platform>(
    platform: &mut P,
    draw_data: &DrawData,
    list: &DrawList,
    cmd: &DrawCmd,
    colors: &mut Vec<ColorRgba>,
) -> BridgeResult<()> {
    let bounds = cmd.clip_rect.translated_back(draw_data.display_pos);
    if bounds.is_empty() {
        return Ok(());
    }

    let clip = bounds.to_irect();
    if clip.is_empty() {
        return Ok(());
    }

    let Some(vertices) = list.vtx_buffer.get(cmd.vtx_offset..) else {
        log::warn!(
            "skipping draw command: vertex offset {} past buffer of {}",
            cmd.vtx_offset,
            list.vtx_buffer.len()
        );
        return Ok(());
    };

    let indices = cmd
        .idx_offset
        .checked_add(cmd.elem_count)
        .and_then(|end| list.idx_buffer.get(cmd.idx_offset..end));
    let Some(indices) = indices else {
        log::warn!(
            "skipping draw command: indices {}+{} past buffer of {}",
            cmd.idx_offset,
            cmd.elem_count,
            list.idx_buffer.len()
        );
        return Ok(());
    };

    platform.set_clip_rect(Some(clip)).during("set_clip_rect")?;

    colors.clear();
    colors.extend(vertices.iter().map(|v| ColorRgba::from_packed(v.col)));

    platform
        .render_geometry(&Geometry {
            texture: cmd.texture,
            vertices,
            colors: colors.as_slice(),
            indices,
        })
        .during("render_geometry")
}
