// src/rasterizer/mod.rs

//! Glyph rasterizer.
//!
//! Draws one glyph onto a [`Canvas`] of any [`PixelFormat`]. The pen position
//! `(x, y)` is the top-left of the line box: each glyph row lands at
//! `y + (ascender - glyph.top) + row` and each column at
//! `x + glyph.left + col`.
//!
//! Clipping is per pixel. A glyph may hang off any edge of the canvas; pixels
//! outside it are decoded (so the run-length cursor stays in step) but never
//! written. Coordinates saturate at the `i32` range, so any pen position is
//! accepted.

use log::trace;

use crate::canvas::Canvas;
use crate::codec::Pixels;
use crate::error::DrawError;
use crate::font::{Font, Glyph, GlyphCode};
use crate::pixel::PixelFormat;

/// Composites `glyph` at pen position `(x, y)` and returns its advance.
///
/// Kerning is not applied here; see [`draw_char`].
pub fn draw_glyph<P: PixelFormat>(
    canvas: &mut Canvas<'_, P>,
    font: &Font<'_>,
    glyph: &Glyph<'_>,
    x: i32,
    y: i32,
    fg: P::Color,
) -> i32 {
    let cols = usize::from(glyph.cols);
    let top = y.saturating_add(i32::from(font.ascender) - i32::from(glyph.top));
    let left = x.saturating_add(i32::from(glyph.left));
    let mut pixels = Pixels::new(glyph.bitmap, font.compressed);

    for row in 0..i32::from(glyph.rows) {
        let y_offset = top.saturating_add(row);
        if y_offset < 0 {
            pixels.skip(cols);
            continue;
        }
        if y_offset as usize >= canvas.height() {
            // Remaining rows are all below the canvas.
            break;
        }
        for col in 0..i32::from(glyph.cols) {
            let value = pixels.next_value();
            if let Some(pixel) = canvas.pixel_mut(left.saturating_add(col), y_offset) {
                P::composite(pixel, fg, value);
            }
        }
    }

    i32::from(glyph.advance)
}

/// Draws the glyph for `code`, kerned against the preceding character `prev`.
///
/// Pass [`NO_PREVIOUS`](crate::kerning::NO_PREVIOUS) as `prev` at the start
/// of a line. On success returns the distance the pen should move: the
/// glyph's advance plus the kerning adjustment.
pub fn draw_char<P: PixelFormat>(
    canvas: &mut Canvas<'_, P>,
    font: Option<&Font<'_>>,
    x: i32,
    y: i32,
    code: GlyphCode,
    prev: GlyphCode,
    fg: P::Color,
) -> Result<i32, DrawError> {
    let font = font.ok_or(DrawError::NoFont)?;
    let Some(glyph) = font.get_glyph(code) else {
        trace!("No glyph for {:#06x} in {} {}", code, font.name, font.style);
        return Err(DrawError::GlyphNotFound(code));
    };

    let kerning = i32::from(font.get_kerning(prev, code));
    Ok(draw_glyph(canvas, font, glyph, x.saturating_add(kerning), y, fg) + kerning)
}
