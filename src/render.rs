use std::sync::Arc;

use egui::{Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Buffer;

/// Integer magnification of the editing matrix. Matches the cell size used
/// for pointer mapping, so one grid cell is one painted square.
pub const MATRIX_ZOOM: usize = 16;
/// Magnification of the whole-sprite preview.
pub const PREVIEW_ZOOM: usize = 3;
/// Magnification of a frame-strip thumbnail.
pub const THUMBNAIL_ZOOM: usize = 2;

/// Side of one checkerboard square, in buffer pixels.
pub const CHECKERBOARD_SIZE: usize = 8;

/// Decides whether a surface must be re-rendered. A buffer is a
/// copy-on-write value, so pointer identity is the change signal: the same
/// `Arc` at the same zoom means nothing to do, while an equal-by-content
/// buffer behind a fresh allocation still triggers a render.
#[derive(Default)]
pub struct RedrawGate {
    last: Option<(usize, usize)>,
}

impl RedrawGate {
    /// True when `buffer`/`zoom` differ from the previously rendered pair;
    /// records them as rendered.
    pub fn should_render(&mut self, buffer: &Arc<Buffer>, zoom: usize) -> bool {
        let key = (Arc::as_ptr(buffer) as *const u8 as usize, zoom);
        if self.last == Some(key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}

/// Texture cache for one display surface. The buffer is uploaded 1:1 and
/// blitted into a `zoom`-times-larger rectangle with nearest-neighbor
/// sampling, so every logical pixel shows as a solid block.
pub struct BufferView {
    name: &'static str,
    gate: RedrawGate,
    texture: Option<TextureHandle>,
}

impl BufferView {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            gate: RedrawGate::default(),
            texture: None,
        }
    }

    /// The texture for `buffer`, re-uploaded only when the buffer identity
    /// or zoom changed since the last call.
    pub fn texture_id(&mut self, ctx: &Context, buffer: &Arc<Buffer>, zoom: usize) -> TextureId {
        let stale = self.gate.should_render(buffer, zoom);
        match &mut self.texture {
            Some(texture) if !stale => texture.id(),
            slot => {
                let image = ColorImage::from_rgba_unmultiplied(
                    [buffer.width(), buffer.height()],
                    buffer.bytes(),
                );
                slot.insert(ctx.load_texture(self.name, image, TextureOptions::NEAREST))
                    .id()
            }
        }
    }
}

/// Expands a buffer by an integer factor with nearest-neighbor sampling:
/// source pixel `(x, y)` becomes a solid `zoom`-by-`zoom` block. Backs the
/// scaled image export.
pub fn scale_nearest(buffer: &Buffer, zoom: usize) -> Vec<u8> {
    let zoom = zoom.max(1);
    let (width, height) = (buffer.width(), buffer.height());
    let out_width = width * zoom;
    let mut out = vec![0; width * height * zoom * zoom * 4];
    let src = buffer.bytes();

    for y in 0..height {
        for x in 0..width {
            let pixel = &src[(y * width + x) * 4..(y * width + x) * 4 + 4];
            for by in 0..zoom {
                for bx in 0..zoom {
                    let idx = ((y * zoom + by) * out_width + x * zoom + bx) * 4;
                    out[idx..idx + 4].copy_from_slice(pixel);
                }
            }
        }
    }
    out
}

/// Draws the two-gray transparency checkerboard behind a sprite surface.
/// `cell` is the on-screen side of one checker square.
pub fn checkerboard(painter: &Painter, rect: Rect, cell: f32) {
    let light = Color32::from_gray(200);
    let dark = Color32::from_gray(160);

    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            let min = rect.min + egui::vec2(col as f32 * cell, row as f32 * cell);
            let square = Rect::from_min_size(min, egui::vec2(cell, cell))
                .intersect(rect);
            let color = if (col + row) % 2 == 0 { light } else { dark };
            painter.rect_filled(square, 0.0, color);
        }
    }
}
