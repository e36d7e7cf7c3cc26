// src/kerning.rs

//! Pairwise kerning.
//!
//! Each glyph may carry a list of `(left neighbour, offset)` entries. When the
//! glyph is drawn right after one of those neighbours, the pen is shifted by
//! the entry's offset before drawing.

use crate::font::{Font, GlyphCode};

/// Code meaning "no previous character". Never a valid left neighbour.
pub const NO_PREVIOUS: GlyphCode = 0;

/// One kerning adjustment for the glyph that owns the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kerning {
    /// Code of the character that precedes the owning glyph.
    pub left: GlyphCode,
    /// Horizontal adjustment in pixels.
    pub offset: i16,
}

impl Kerning {
    /// Terminator emitted by generators that write sentinel-ended lists.
    pub const END: Kerning = Kerning {
        left: NO_PREVIOUS,
        offset: 0,
    };
}

impl<'a> Font<'a> {
    /// Horizontal adjustment to apply before drawing `right` after `left`.
    ///
    /// Returns 0 when either code is [`NO_PREVIOUS`], when `right` has no glyph
    /// or no kerning list, or when no entry names `left`. The scan stops at the
    /// end of the list or at a terminator entry; the first match wins.
    pub fn get_kerning(&self, left: GlyphCode, right: GlyphCode) -> i16 {
        if left == NO_PREVIOUS || right == NO_PREVIOUS {
            return 0;
        }
        let Some(pairs) = self.get_glyph(right).and_then(|g| g.kerning) else {
            return 0;
        };
        pairs
            .iter()
            .take_while(|k| k.left != NO_PREVIOUS)
            .find(|k| k.left == left)
            .map_or(0, |k| k.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_fonts::{font, glyph, glyph_table};
    use crate::font::Glyph;

    const A: GlyphCode = b'A' as GlyphCode;
    const T: GlyphCode = b'T' as GlyphCode;
    const V: GlyphCode = b'V' as GlyphCode;
    const W: GlyphCode = b'W' as GlyphCode;

    fn kerned<'a>(code: GlyphCode, pairs: &'a [Kerning]) -> Glyph<'a> {
        Glyph {
            kerning: Some(pairs),
            ..glyph(code, 1, 1, &[0xff])
        }
    }

    #[test]
    fn test_matching_entry_returns_offset() {
        let pairs = [
            Kerning { left: T, offset: -1 },
            Kerning { left: V, offset: -2 },
        ];
        let a = kerned(A, &pairs);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(V, A), -2);
        assert_eq!(font.get_kerning(T, A), -1);
    }

    #[test]
    fn test_no_match_is_zero() {
        let pairs = [Kerning { left: V, offset: -2 }];
        let a = kerned(A, &pairs);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(W, A), 0);
    }

    #[test]
    fn test_zero_codes_are_never_kerned() {
        // Contract: the "no previous character" code short-circuits.
        let pairs = [Kerning { left: V, offset: -2 }];
        let a = kerned(A, &pairs);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(NO_PREVIOUS, A), 0);
        assert_eq!(font.get_kerning(V, NO_PREVIOUS), 0);
    }

    #[test]
    fn test_missing_right_glyph_or_list_is_zero() {
        let plain = glyph(A, 1, 1, &[0xff]);
        let table = glyph_table(&[&plain]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(V, A), 0);
        assert_eq!(font.get_kerning(V, W), 0);
    }

    #[test]
    fn test_scan_stops_at_terminator() {
        // Entries after a sentinel belong to nobody and must not be seen.
        let pairs = [
            Kerning { left: T, offset: -1 },
            Kerning::END,
            Kerning { left: V, offset: -3 },
        ];
        let a = kerned(A, &pairs);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(T, A), -1);
        assert_eq!(font.get_kerning(V, A), 0);
    }

    #[test]
    fn test_first_match_wins() {
        let pairs = [
            Kerning { left: V, offset: -2 },
            Kerning { left: V, offset: 5 },
        ];
        let a = kerned(A, &pairs);
        let table = glyph_table(&[&a]);
        let font = font(&table, 1, 1, false);

        assert_eq!(font.get_kerning(V, A), -2);
    }
}
