//! Rasterization and JPEG encoding

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use tracing::debug;

use crate::RenderError;
use crate::glyphs::{GLYPH_SIZE, embolden, glyph};
use crate::params::PlaceholderParams;

pub const JPEG_QUALITY: u8 = 90;

const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Render a placeholder and encode it as JPEG
pub fn render_placeholder(params: &PlaceholderParams) -> Result<Vec<u8>, RenderError> {
    let canvas = rasterize(params);

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    encoder.encode_image(&canvas)?;

    debug!(
        width = params.width(),
        height = params.height(),
        bytes = bytes.len(),
        "Rendered placeholder"
    );

    Ok(bytes)
}

/// Fill the background and draw the caption, centred
#[must_use]
pub fn rasterize(params: &PlaceholderParams) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        params.width(),
        params.height(),
        Rgb(params.background().rgb()),
    );
    draw_caption(&mut canvas, params.text());
    canvas
}

/// Pixels per font pixel for a caption of `chars` glyphs
///
/// The caption is sized to `min(width, height) / 10` and shrunk if it
/// would overflow the width. Never below 1.
fn caption_scale(width: u32, height: u32, chars: u32) -> u32 {
    let font_px = width.min(height) / 10;
    let scale = ((font_px + GLYPH_SIZE / 2) / GLYPH_SIZE).max(1);
    let line_px = chars.saturating_mul(GLYPH_SIZE).max(1);
    if line_px.saturating_mul(scale) > width {
        (width / line_px).clamp(1, scale)
    } else {
        scale
    }
}

fn draw_caption(canvas: &mut RgbImage, text: &str) {
    let glyphs: Vec<_> = text.chars().map(|c| embolden(glyph(c))).collect();
    if glyphs.is_empty() {
        return;
    }

    let chars = u32::try_from(glyphs.len()).unwrap_or(u32::MAX);
    let scale = caption_scale(canvas.width(), canvas.height(), chars);
    let cell = i64::from(GLYPH_SIZE * scale);

    let text_width = cell * i64::from(chars);
    let origin_x = (i64::from(canvas.width()) - text_width) / 2;
    let origin_y = (i64::from(canvas.height()) - cell) / 2;

    for (i, rows) in (0_i64..).zip(glyphs.iter()) {
        let glyph_x = origin_x + i * cell;
        for (row, bits) in (0_i64..).zip(rows.iter()) {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) != 0 {
                    fill_block(
                        canvas,
                        glyph_x + i64::from(col * scale),
                        origin_y + row * i64::from(scale),
                        scale,
                    );
                }
            }
        }
    }
}

/// Paint a `size`x`size` square, clipped to the canvas
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fill_block(canvas: &mut RgbImage, x: i64, y: i64, size: u32) {
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let size = i64::from(size);

    for py in y.max(0)..(y + size).min(h) {
        for px in x.max(0)..(x + size).min(w) {
            canvas.put_pixel(px as u32, py as u32, TEXT_COLOR);
        }
    }
}
