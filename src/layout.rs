// src/layout.rs

//! Single-line text layout: measuring and drawing strings.
//!
//! Both walks treat characters the font cannot draw as zero-width and skip
//! them without resetting kerning context. Line breaking is left to the
//! caller: [`draw_string`] stops at the canvas edge and hands back whatever
//! did not fit.

use log::debug;

use crate::canvas::Canvas;
use crate::font::{code_of, Font, Glyph, GlyphCode};
use crate::kerning::NO_PREVIOUS;
use crate::pixel::PixelFormat;
use crate::rasterizer::draw_glyph;

/// Size of the box a string occupies on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    /// Sum of advances and kerning of every drawable character.
    pub width: i32,
    /// Always the font's line height.
    pub height: i32,
    /// Characters walked, including ones without a glyph.
    pub count: usize,
}

fn resolve<'a>(font: &Font<'a>, ch: char) -> Option<(GlyphCode, &'a Glyph<'a>)> {
    let code = code_of(ch)?;
    Some((code, font.get_glyph(code)?))
}

/// Measures `text` as it would be drawn from the start of a line.
///
/// The width saturates at `i32::MAX`.
pub fn calculate_box(font: &Font<'_>, text: &str) -> TextBox {
    let mut width: i32 = 0;
    let mut count = 0;
    let mut prev = NO_PREVIOUS;

    for ch in text.chars() {
        count += 1;
        let Some((code, glyph)) = resolve(font, ch) else {
            continue;
        };
        let step = i32::from(glyph.advance) + i32::from(font.get_kerning(prev, code));
        width = width.saturating_add(step);
        prev = code;
    }

    TextBox {
        width,
        height: i32::from(font.height),
        count,
    }
}

/// Result of drawing a string onto a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnText<'t> {
    /// Total pen movement, kerning included.
    pub advance: i32,
    /// Characters consumed, including skipped ones.
    pub drawn: usize,
    /// Code of the last glyph drawn, for kerning a continuation.
    pub last: GlyphCode,
    /// Text that did not fit. Empty when the whole string was drawn.
    pub remainder: &'t str,
}

/// Draws `text` left to right starting at pen position `(x, y)`.
///
/// `prev` is the character drawn just before `x`, or
/// [`NO_PREVIOUS`] at the start of a line. Drawing stops before the first
/// glyph whose advance would carry the pen past the right edge of the
/// canvas; that character and everything after it are returned in
/// [`DrawnText::remainder`].
///
/// The first drawable glyph is always placed, clipped if it does not fit, so
/// every call with a non-empty remainder has consumed at least one character.
/// Feeding the remainder back in on the next line always terminates.
pub fn draw_string<'t, P: PixelFormat>(
    canvas: &mut Canvas<'_, P>,
    font: &Font<'_>,
    x: i32,
    y: i32,
    text: &'t str,
    prev: GlyphCode,
    fg: P::Color,
) -> DrawnText<'t> {
    let limit = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let mut pen = x;
    let mut prev = prev;
    let mut drawn = 0;
    let mut placed = false;

    for (index, ch) in text.char_indices() {
        let Some((code, glyph)) = resolve(font, ch) else {
            drawn += 1;
            continue;
        };

        let kerning = i32::from(font.get_kerning(prev, code));
        let step = i32::from(glyph.advance) + kerning;
        if placed && pen.saturating_add(step) > limit {
            debug!(
                "Line full at x={} after {} chars; {} bytes left over",
                pen,
                drawn,
                text.len() - index
            );
            return DrawnText {
                advance: pen.saturating_sub(x),
                drawn,
                last: prev,
                remainder: &text[index..],
            };
        }

        let moved =
            draw_glyph(canvas, font, glyph, pen.saturating_add(kerning), y, fg) + kerning;
        pen = pen.saturating_add(moved);
        prev = code;
        drawn += 1;
        placed = true;
    }

    DrawnText {
        advance: pen.saturating_sub(x),
        drawn,
        last: prev,
        remainder: "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::IntensityCanvas;
    use crate::font::test_fonts::{font, glyph, glyph_table};
    use crate::kerning::Kerning;

    const A: GlyphCode = b'A' as GlyphCode;
    const B: GlyphCode = b'B' as GlyphCode;

    #[test]
    fn test_calculate_box_sums_advance_and_kerning() {
        let a = glyph(A, 3, 2, &[0xff; 6]);
        let pairs = [Kerning { left: A, offset: -1 }];
        let b = Glyph {
            kerning: Some(&pairs),
            ..glyph(B, 4, 2, &[0xff; 8])
        };
        let table = glyph_table(&[&a, &b]);
        let font = font(&table, 2, 5, false);

        let bx = calculate_box(&font, "AB");
        assert_eq!(
            bx,
            TextBox {
                width: 3 + 4 - 1,
                height: 5,
                count: 2
            }
        );

        // Kerning only applies when B directly follows A.
        assert_eq!(calculate_box(&font, "BA").width, 7);
    }

    #[test]
    fn test_calculate_box_counts_missing_glyphs() {
        // Contract: unresolvable characters add no width but are counted,
        // and do not break the kerning pair around them.
        let a = glyph(A, 3, 1, &[0xff; 3]);
        let pairs = [Kerning { left: A, offset: -2 }];
        let b = Glyph {
            kerning: Some(&pairs),
            ..glyph(B, 3, 1, &[0xff; 3])
        };
        let table = glyph_table(&[&a, &b]);
        let font = font(&table, 1, 4, false);

        let bx = calculate_box(&font, "A?\u{1F600}B");
        assert_eq!(bx.count, 4);
        assert_eq!(bx.width, 3 + 3 - 2);
    }

    #[test]
    fn test_calculate_box_empty() {
        let table = glyph_table(&[]);
        let font = font(&table, 3, 7, false);
        assert_eq!(
            calculate_box(&font, ""),
            TextBox {
                width: 0,
                height: 7,
                count: 0
            }
        );
    }

    #[test]
    fn test_calculate_box_saturates() {
        let a = Glyph {
            advance: i16::MAX,
            ..glyph(A, 1, 1, &[0xff])
        };
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        let bx = calculate_box(&font, &"A".repeat(70_000));
        assert_eq!(bx.width, i32::MAX);
        assert_eq!(bx.count, 70_000);
    }

    #[test]
    fn test_draw_string_fits() {
        let a = glyph(A, 2, 1, &[0xff; 2]);
        let b = glyph(B, 2, 1, &[0x80; 2]);
        let table = glyph_table(&[&a, &b]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 6];
        let mut canvas = IntensityCanvas::new(&mut buf, 6, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 1, 0, "AB", NO_PREVIOUS, ());

        assert_eq!(out.advance, 4);
        assert_eq!(out.drawn, 2);
        assert_eq!(out.last, B);
        assert_eq!(out.remainder, "");
        assert_eq!(buf, b" XX++ ");
    }

    #[test]
    fn test_draw_string_returns_remainder_on_overflow() {
        // Contract: no implicit wrapping; the undrawn suffix comes back.
        let a = glyph(A, 2, 1, &[0xff; 2]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 5];
        let mut canvas = IntensityCanvas::new(&mut buf, 5, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 0, 0, "AAAA", NO_PREVIOUS, ());

        assert_eq!(out.advance, 4);
        assert_eq!(out.drawn, 2);
        assert_eq!(out.remainder, "AA");
        assert_eq!(buf, b"XXXX ");
    }

    #[test]
    fn test_draw_string_skips_missing_glyphs() {
        let a = glyph(A, 1, 1, &[0xff]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 4];
        let mut canvas = IntensityCanvas::new(&mut buf, 4, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 0, 0, "A\u{e9}A", NO_PREVIOUS, ());

        assert_eq!(out.drawn, 3);
        assert_eq!(out.advance, 2);
        assert_eq!(out.remainder, "");
        assert_eq!(buf, b"XX  ");
    }

    #[test]
    fn test_draw_string_remainder_is_char_aligned() {
        let a = glyph(A, 2, 1, &[0xff; 2]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 3];
        let mut canvas = IntensityCanvas::new(&mut buf, 3, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 0, 0, "\u{e9}AA", NO_PREVIOUS, ());

        assert_eq!(out.drawn, 2);
        assert_eq!(out.remainder, "A");
    }

    #[test]
    fn test_draw_string_continues_kerning_from_prev() {
        let pairs = [Kerning { left: A, offset: -1 }];
        let b = Glyph {
            kerning: Some(&pairs),
            ..glyph(B, 2, 1, &[0xff; 2])
        };
        let table = glyph_table(&[&b]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 4];
        let mut canvas = IntensityCanvas::new(&mut buf, 4, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 2, 0, "B", A, ());

        assert_eq!(out.advance, 1);
        assert_eq!(buf, b" XX ");
    }

    #[test]
    fn test_draw_string_glyph_wider_than_canvas_still_progresses() {
        // Contract: a non-empty remainder always means something was consumed.
        let a = glyph(A, 5, 1, &[0xff; 5]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 3];
        let mut canvas = IntensityCanvas::new(&mut buf, 3, 1).unwrap();

        let out = draw_string(&mut canvas, &font, 0, 0, "AA", NO_PREVIOUS, ());
        assert_eq!(out.drawn, 1);
        assert_eq!(out.advance, 5);
        assert_eq!(out.remainder, "A");

        let mut rest = "AAAA";
        let mut lines = 0;
        while !rest.is_empty() {
            rest = draw_string(&mut canvas, &font, 0, 0, rest, NO_PREVIOUS, ()).remainder;
            lines += 1;
            assert!(lines <= 4);
        }
        assert_eq!(lines, 4);
        assert_eq!(buf, b"XXX");
    }

    #[test]
    fn test_draw_string_extreme_pen_positions() {
        let a = glyph(A, 2, 1, &[0xff; 2]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);
        let mut buf = vec![b' '; 4];
        let mut canvas = IntensityCanvas::new(&mut buf, 4, 1).unwrap();

        let out = draw_string(&mut canvas, &font, i32::MAX - 1, 0, "AAA", NO_PREVIOUS, ());
        assert_eq!(out.drawn, 1);
        assert_eq!(out.advance, 1);
        assert_eq!(out.remainder, "AA");

        let out = draw_string(&mut canvas, &font, i32::MIN, 0, "AAA", NO_PREVIOUS, ());
        assert_eq!(out.drawn, 3);
        assert_eq!(out.advance, 6);

        let out = draw_string(&mut canvas, &font, 0, i32::MAX, "AA", NO_PREVIOUS, ());
        assert_eq!(out.drawn, 2);

        assert_eq!(buf, b"    ");
    }
}
