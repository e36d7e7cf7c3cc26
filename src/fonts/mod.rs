// src/fonts/mod.rs

//! Fonts compiled into the library.
//!
//! One face, "Pixel" Regular at 8px, covering printable ASCII. It ships twice:
//! once with raw intensity bitmaps and once run-length encoded, so both
//! decode paths are always available without external font tables.

mod pixel8;
mod pixel8_rle;

pub use pixel8::PIXEL_8;
pub use pixel8_rle::PIXEL_8_RLE;

use crate::font::Font;
use crate::registry::FontRegistry;

/// Every built-in font, raw variants first.
pub static ALL: &[&Font<'static>] = &[&PIXEL_8, &PIXEL_8_RLE];

/// Registry over [`ALL`].
pub fn registry() -> FontRegistry<'static> {
    FontRegistry::new(ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::font::GlyphCode;

    #[test]
    fn test_builtin_fonts_cover_printable_ascii() {
        for font in ALL {
            assert_eq!(font.count, 95);
            assert_eq!(font.max, 0x7e);
            assert_eq!(font.glyphs.len(), usize::from(font.max) + 1);
            for code in 0x20..=0x7e {
                let glyph = font.get_glyph(code).unwrap();
                assert_eq!(glyph.code, code);
            }
            assert!(font.get_glyph(0x1f).is_none());
            assert!(font.get_glyph(0x7f).is_none());
        }
    }

    #[test]
    fn test_glyphs_fit_the_line_box() {
        for font in ALL {
            for glyph in font.glyphs.iter().flatten() {
                assert!(glyph.left >= 0 && glyph.left + (glyph.cols as i16) <= glyph.advance);
                assert!(glyph.top <= font.ascender);
                assert!(glyph.top - (glyph.rows as i16) >= font.descender);
            }
        }
    }

    #[test]
    fn test_raw_bitmaps_match_declared_size() {
        for glyph in PIXEL_8.glyphs.iter().flatten() {
            assert_eq!(glyph.bitmap.len(), glyph.pixel_count(), "glyph {:#x}", glyph.code);
        }
    }

    #[test]
    fn test_rle_variant_decodes_to_raw() {
        // Contract: both variants describe the same pixels.
        for code in 0x20..=0x7e as GlyphCode {
            let raw = PIXEL_8.get_glyph(code).unwrap();
            let rle = PIXEL_8_RLE.get_glyph(code).unwrap();
            assert_eq!((raw.left, raw.top, raw.cols, raw.rows), (rle.left, rle.top, rle.cols, rle.rows));
            assert_eq!(decode(rle.bitmap, rle.pixel_count()), raw.bitmap, "glyph {code:#x}");
        }
    }

    #[test]
    fn test_registry_lists_both_variants() {
        let reg = registry();
        assert_eq!(reg.len(), 2);
        let raw = reg.find_with_compression("pixel", None, 8, Some(false)).unwrap();
        let rle = reg.find_with_compression("PIXEL", Some("regular"), 8, Some(true)).unwrap();
        assert!(std::ptr::eq(raw, &PIXEL_8));
        assert!(std::ptr::eq(rle, &PIXEL_8_RLE));
    }

    #[test]
    fn test_builtin_kerning_pairs() {
        assert_eq!(PIXEL_8.get_kerning(b'A' as GlyphCode, b'V' as GlyphCode), -1);
        assert_eq!(PIXEL_8.get_kerning(b'V' as GlyphCode, b'A' as GlyphCode), -1);
        assert_eq!(PIXEL_8.get_kerning(b'T' as GlyphCode, b'o' as GlyphCode), -1);
        assert_eq!(PIXEL_8.get_kerning(b'o' as GlyphCode, b'T' as GlyphCode), 0);
    }
}
