// src/registry.rs

//! Lookup over the fonts compiled into a program.
//!
//! A registry is just a slice of font references searched front to back.
//! Names and styles compare ASCII case-insensitively and the first match wins,
//! so table order decides between otherwise identical fonts.

use std::io::{self, Write};

use log::debug;

use crate::font::Font;

#[derive(Debug, Clone, Copy)]
pub struct FontRegistry<'a> {
    fonts: &'a [&'a Font<'a>],
}

impl<'a> FontRegistry<'a> {
    pub const fn new(fonts: &'a [&'a Font<'a>]) -> Self {
        Self { fonts }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Font<'a>> + '_ {
        self.fonts.iter().copied()
    }

    /// Finds a font by name and size. `style: None` accepts any style.
    pub fn find(&self, name: &str, style: Option<&str>, size: u16) -> Option<&'a Font<'a>> {
        self.find_with_compression(name, style, size, None)
    }

    /// Like [`find`](Self::find), additionally filtering on the compression
    /// flag when `compressed` is `Some`.
    pub fn find_with_compression(
        &self,
        name: &str,
        style: Option<&str>,
        size: u16,
        compressed: Option<bool>,
    ) -> Option<&'a Font<'a>> {
        let found = self.iter().find(|font| {
            font.size == size
                && font.name.eq_ignore_ascii_case(name)
                && style.map_or(true, |s| font.style.eq_ignore_ascii_case(s))
                && compressed.map_or(true, |c| font.compressed == c)
        });
        match found {
            Some(font) => debug!(
                "Font query {:?}/{:?}/{} matched {} {} (compressed: {})",
                name, style, size, font.name, font.style, font.compressed
            ),
            None => debug!(
                "Font query {:?}/{:?}/{} (compressed: {:?}) found nothing",
                name, style, size, compressed
            ),
        }
        found
    }

    /// Writes an aligned summary of every font.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{:<20} {:<8} {:<6} {:<6} {:<6} {:<6} {:<3}",
            "Font name", "Style", "Size", "Height", "Ascent", "Descent", "RLE"
        )?;
        for font in self.iter() {
            writeln!(
                out,
                "{:<20} {:<8} {:<6} {:<6} {:<6} {:<6} {:<3}",
                font.name,
                font.style,
                font.size,
                font.height,
                font.ascender,
                font.descender,
                if font.compressed { "Y" } else { "" }
            )?;
        }
        Ok(())
    }

    /// Writes one line of `fonttest` config fields per font, so a font can be
    /// picked by copy and paste.
    pub fn write_args<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for font in self.iter() {
            writeln!(
                out,
                "\"font\": {{ \"name\": {:?}, \"style\": {:?}, \"size\": {}, \"compressed\": {} }}",
                font.name, font.style, font.size, font.compressed
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const fn font(name: &'static str, style: &'static str, size: u16, compressed: bool) -> Font<'static> {
        Font {
            name,
            style,
            size,
            dpi: 72,
            count: 0,
            max: 0,
            ascender: 8,
            descender: -2,
            height: 10,
            glyphs: &[],
            compressed,
        }
    }

    static SANS_10: Font<'static> = font("Sans", "Regular", 10, false);
    static SANS_10_RLE: Font<'static> = font("Sans", "Regular", 10, true);
    static SANS_10_BOLD: Font<'static> = font("Sans", "Bold", 10, true);
    static SANS_12: Font<'static> = font("Sans", "Regular", 12, false);
    static FONTS: [&Font<'static>; 4] = [&SANS_10, &SANS_10_RLE, &SANS_10_BOLD, &SANS_12];

    fn registry() -> FontRegistry<'static> {
        FontRegistry::new(&FONTS)
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let found = registry().find("sANS", Some("bold"), 10).unwrap();
        assert!(std::ptr::eq(found, &SANS_10_BOLD));
    }

    #[test]
    fn test_find_first_match_wins() {
        let found = registry().find("Sans", None, 10).unwrap();
        assert!(std::ptr::eq(found, &SANS_10));
    }

    #[test]
    fn test_find_filters_size() {
        let found = registry().find("Sans", Some("Regular"), 12).unwrap();
        assert!(std::ptr::eq(found, &SANS_12));
        assert!(registry().find("Sans", None, 11).is_none());
    }

    #[test]
    fn test_find_with_compression() {
        let reg = registry();
        let rle = reg.find_with_compression("Sans", Some("Regular"), 10, Some(true));
        assert!(std::ptr::eq(rle.unwrap(), &SANS_10_RLE));

        let raw = reg.find_with_compression("Sans", Some("Bold"), 10, Some(false));
        assert!(raw.is_none());

        let any = reg.find_with_compression("Sans", Some("Bold"), 10, None);
        assert!(std::ptr::eq(any.unwrap(), &SANS_10_BOLD));
    }

    #[test]
    fn test_unknown_name() {
        assert!(registry().find("Serif", None, 10).is_none());
        let empty = FontRegistry::new(&[]);
        assert!(empty.is_empty());
        assert!(empty.find("Sans", None, 10).is_none());
        assert!(!registry().is_empty());
    }

    #[test]
    fn test_write_table() {
        let mut out = Vec::new();
        registry().write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Font name"));
        assert!(lines[2].starts_with("Sans"));
        assert!(lines[2].trim_end().ends_with('Y'));
        assert!(!lines[1].trim_end().ends_with('Y'));
    }

    #[test]
    fn test_write_args() {
        let mut out = Vec::new();
        registry().write_args(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text
            .lines()
            .next()
            .unwrap()
            .contains("\"name\": \"Sans\", \"style\": \"Regular\", \"size\": 10, \"compressed\": false"));
    }
}
