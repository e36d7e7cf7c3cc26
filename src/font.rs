// src/font.rs

//! Defines the immutable font tables: `Font`, `Glyph` and the kerning entry
//! type they reference.
//!
//! Tables are produced ahead of time by the font compiler and linked into the
//! program as `static` data. Nothing here allocates; every bitmap and kerning
//! list is borrowed from the table for its whole lifetime.
//!
//! Glyphs are stored in a dense array indexed directly by character code, so
//! lookup is a bounds check and an index. Codes without a glyph hold `None`.

use crate::kerning::Kerning;

/// Character code as stored in the tables. Covers the Basic Multilingual Plane.
pub type GlyphCode = u16;

/// One pre-rasterized character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Character code this glyph renders. Unique within a font.
    pub code: GlyphCode,
    /// Horizontal offset from the pen position to the bitmap's left edge.
    pub left: i16,
    /// Distance from the baseline up to the bitmap's top row.
    pub top: i16,
    /// How far the pen moves after this glyph, before kerning.
    pub advance: i16,
    /// Bitmap width in pixels.
    pub cols: u16,
    /// Bitmap height in pixels.
    pub rows: u16,
    /// Row-major intensities, or a run-length stream when the font is compressed.
    pub bitmap: &'a [u8],
    /// Adjustments applied when this glyph follows specific characters.
    pub kerning: Option<&'a [Kerning]>,
}

impl<'a> Glyph<'a> {
    /// Number of pixels the bitmap decodes to.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// A compiled font at one size and style.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    pub name: &'a str,
    pub style: &'a str,
    /// Point size.
    pub size: u16,
    pub dpi: u16,
    /// Number of glyphs physically present.
    pub count: u16,
    /// Highest code with a slot in `glyphs`.
    pub max: GlyphCode,
    pub ascender: i16,
    pub descender: i16,
    /// Line height in pixels.
    pub height: i16,
    /// Dense glyph array indexed by code.
    pub glyphs: &'a [Option<&'a Glyph<'a>>],
    /// Every bitmap in this font is run-length encoded.
    pub compressed: bool,
}

impl<'a> Font<'a> {
    /// Looks up the glyph for `code`.
    ///
    /// Codes above `max`, past the end of the table, or with an empty slot all
    /// yield `None`. Callers treat a missing glyph as zero-width.
    pub fn get_glyph(&self, code: GlyphCode) -> Option<&'a Glyph<'a>> {
        if code > self.max {
            return None;
        }
        self.glyphs.get(usize::from(code)).copied().flatten()
    }

    /// Looks up the glyph for a Unicode scalar. Characters outside the
    /// 16-bit code domain never have a glyph.
    pub fn glyph_for_char(&self, ch: char) -> Option<&'a Glyph<'a>> {
        code_of(ch).and_then(|code| self.get_glyph(code))
    }
}

/// Converts a character to a table code, if it fits the code domain.
pub fn code_of(ch: char) -> Option<GlyphCode> {
    GlyphCode::try_from(u32::from(ch)).ok()
}


#[cfg(test)]
mod tests {
    use super::test_fonts::{font, glyph, glyph_table};
    use super::*;

    #[test]
    fn test_get_glyph_returns_populated_slot() {
        // Contract: a present glyph is found by its own code.
        let a = glyph(b'A' as u16, 2, 2, &[0xff; 4]);
        let b = glyph(b'B' as u16, 2, 2, &[0x00; 4]);
        let table = glyph_table(&[&a, &b]);
        let font = font(&table, 2, 3, false);

        assert_eq!(font.get_glyph(b'A' as u16), Some(&a));
        assert_eq!(font.get_glyph(b'B' as u16), Some(&b));
        assert_eq!(font.count, 2);
    }

    #[test]
    fn test_get_glyph_empty_slot_is_none() {
        let b = glyph(b'B' as u16, 1, 1, &[0xff]);
        let table = glyph_table(&[&b]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_glyph(b'A' as u16), None);
        assert_eq!(font.get_glyph(0), None);
    }

    #[test]
    fn test_get_glyph_beyond_max_is_none() {
        // Contract: codes above `max` never index the table.
        let a = glyph(b'A' as u16, 1, 1, &[0xff]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.max, b'A' as u16);
        assert_eq!(font.get_glyph(b'A' as u16 + 1), None);
        assert_eq!(font.get_glyph(GlyphCode::MAX), None);
    }

    #[test]
    fn test_get_glyph_max_larger_than_table_is_none() {
        // A table whose declared `max` overstates its length must not fault.
        let a = glyph(b'A' as u16, 1, 1, &[0xff]);
        let table = glyph_table(&[&a]);
        let mut font = font(&table, 1, 1, false);
        font.max = 0x1000;

        assert_eq!(font.get_glyph(0x0fff), None);
        assert_eq!(font.get_glyph(b'A' as u16), Some(&a));
    }

    #[test]
    fn test_glyph_for_char_outside_code_domain() {
        let a = glyph(b'A' as u16, 1, 1, &[0xff]);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.glyph_for_char('A'), Some(&a));
        assert_eq!(font.glyph_for_char('\u{1F600}'), None);
        assert_eq!(code_of('\u{1F600}'), None);
        assert_eq!(code_of('\u{FFFF}'), Some(0xffff));
    }

    #[test]
    fn test_pixel_count() {
        let g = glyph(1, 3, 4, &[]);
        assert_eq!(g.pixel_count(), 12);
    }
}
