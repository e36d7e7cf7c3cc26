// src/fonts/pixel8_rle.rs

//! Built-in 8x8 "Pixel" font, run-length encoded.
//!
//! Machine generated from the 8x8 bitmap set. Do not edit by hand.

use crate::font::{Font, Glyph};
use crate::kerning::Kerning;

// ' '
static GLYPH_0020: Glyph<'static> = Glyph {
    code: 0x0020,
    left: 0,
    top: 0,
    advance: 8,
    cols: 0,
    rows: 0,
    bitmap: &[],
    kerning: None,
};

// '!'
static GLYPH_0021: Glyph<'static> = Glyph {
    code: 0x0021,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x40, 0x81, 0x40, 0x87, 0x40, 0x81, 0x41, 0x81, 0x45, 0x81, 0x40,
    ],
    kerning: None,
};

// '"'
static GLYPH_0022: Glyph<'static> = Glyph {
    code: 0x0022,
    left: 1,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 3,
    bitmap: &[
        0x81, 0x40, 0x83, 0x40, 0x81, 0x40, 0x80, 0x41, 0x80,
    ],
    kerning: None,
};

// '#'
static GLYPH_0023: Glyph<'static> = Glyph {
    code: 0x0023,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x40, 0x81, 0x40, 0x81, 0x41, 0x81, 0x40, 0x81, 0x40, 0x86, 0x40, 0x81,
        0x40, 0x81, 0x40, 0x86, 0x40, 0x81, 0x40, 0x81, 0x41, 0x81, 0x40, 0x81,
        0x40,
    ],
    kerning: None,
};

// '$'
static GLYPH_0024: Glyph<'static> = Glyph {
    code: 0x0024,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x41, 0x81, 0x42, 0x86, 0x44, 0x83, 0x44, 0x86, 0x42, 0x81, 0x41,
    ],
    kerning: None,
};

// '%'
static GLYPH_0025: Glyph<'static> = Glyph {
    code: 0x0025,
    left: 0,
    top: 6,
    advance: 8,
    cols: 7,
    rows: 6,
    bitmap: &[
        0x81, 0x42, 0x83, 0x41, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x41,
        0x83, 0x42, 0x81,
    ],
    kerning: None,
};

// '&'
static GLYPH_0026: Glyph<'static> = Glyph {
    code: 0x0026,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x41, 0x82, 0x42, 0x81, 0x40, 0x81, 0x42, 0x82, 0x42, 0x82, 0x40, 0x83,
        0x40, 0x82, 0x40, 0x81, 0x41, 0x81, 0x41, 0x82, 0x40, 0x81,
    ],
    kerning: None,
};

// "'"
static GLYPH_0027: Glyph<'static> = Glyph {
    code: 0x0027,
    left: 2,
    top: 7,
    advance: 8,
    cols: 3,
    rows: 3,
    bitmap: &[
        0x40, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '('
static GLYPH_0028: Glyph<'static> = Glyph {
    code: 0x0028,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x41, 0x81, 0x40, 0x81, 0x40, 0x81, 0x41, 0x81, 0x41, 0x81, 0x42, 0x81,
        0x42, 0x81,
    ],
    kerning: None,
};

// ')'
static GLYPH_0029: Glyph<'static> = Glyph {
    code: 0x0029,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x81, 0x42, 0x81, 0x42, 0x81, 0x41, 0x81, 0x41, 0x81, 0x40, 0x81, 0x40,
        0x81, 0x41,
    ],
    kerning: None,
};

// '*'
static GLYPH_002A: Glyph<'static> = Glyph {
    code: 0x002a,
    left: 0,
    top: 6,
    advance: 8,
    cols: 8,
    rows: 5,
    bitmap: &[
        0x40, 0x81, 0x41, 0x81, 0x42, 0x83, 0x41, 0x87, 0x41, 0x83, 0x42, 0x81,
        0x41, 0x81, 0x40,
    ],
    kerning: None,
};

// '+'
static GLYPH_002B: Glyph<'static> = Glyph {
    code: 0x002b,
    left: 1,
    top: 6,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x41, 0x81, 0x43, 0x81, 0x41, 0x85, 0x41, 0x81, 0x43, 0x81, 0x41,
    ],
    kerning: None,
};

// ','
static GLYPH_002C: Glyph<'static> = Glyph {
    code: 0x002c,
    left: 2,
    top: 2,
    advance: 8,
    cols: 3,
    rows: 3,
    bitmap: &[
        0x40, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '-'
static GLYPH_002D: Glyph<'static> = Glyph {
    code: 0x002d,
    left: 1,
    top: 4,
    advance: 8,
    cols: 6,
    rows: 1,
    bitmap: &[
        0x85,
    ],
    kerning: None,
};

// '.'
static GLYPH_002E: Glyph<'static> = Glyph {
    code: 0x002e,
    left: 3,
    top: 2,
    advance: 8,
    cols: 2,
    rows: 2,
    bitmap: &[
        0x83,
    ],
    kerning: Some(&[Kerning { left: 0x0054, offset: -1 }]),
};

// '/'
static GLYPH_002F: Glyph<'static> = Glyph {
    code: 0x002f,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x44, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81,
        0x44, 0x80, 0x45,
    ],
    kerning: None,
};

// '0'
static GLYPH_0030: Glyph<'static> = Glyph {
    code: 0x0030,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x40, 0x85, 0x40, 0x83, 0x41, 0x83,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '1'
static GLYPH_0031: Glyph<'static> = Glyph {
    code: 0x0031,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x41, 0x81, 0x42, 0x82, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81,
        0x41, 0x85,
    ],
    kerning: None,
};

// '2'
static GLYPH_0032: Glyph<'static> = Glyph {
    code: 0x0032,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x81, 0x43, 0x81, 0x42, 0x81, 0x42, 0x81,
        0x42, 0x81, 0x42, 0x85,
    ],
    kerning: None,
};

// '3'
static GLYPH_0033: Glyph<'static> = Glyph {
    code: 0x0033,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x81, 0x43, 0x81, 0x41, 0x82, 0x44, 0x83,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '4'
static GLYPH_0034: Glyph<'static> = Glyph {
    code: 0x0034,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x42, 0x81, 0x42, 0x82, 0x41, 0x83, 0x40, 0x81, 0x40, 0x81, 0x40, 0x85,
        0x42, 0x81, 0x43, 0x81, 0x40,
    ],
    kerning: None,
};

// '5'
static GLYPH_0035: Glyph<'static> = Glyph {
    code: 0x0035,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x87, 0x43, 0x84, 0x44, 0x81, 0x43, 0x83, 0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '6'
static GLYPH_0036: Glyph<'static> = Glyph {
    code: 0x0036,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x41, 0x82, 0x41, 0x81, 0x42, 0x81, 0x43, 0x84, 0x40, 0x81, 0x41, 0x83,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '7'
static GLYPH_0037: Glyph<'static> = Glyph {
    code: 0x0037,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x85, 0x43, 0x81, 0x42, 0x81, 0x42, 0x81, 0x42, 0x81, 0x43, 0x81, 0x43,
        0x81, 0x42,
    ],
    kerning: None,
};

// '8'
static GLYPH_0038: Glyph<'static> = Glyph {
    code: 0x0038,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x81, 0x40, 0x83, 0x40, 0x81,
        0x41, 0x83, 0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '9'
static GLYPH_0039: Glyph<'static> = Glyph {
    code: 0x0039,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x81, 0x40, 0x84, 0x43, 0x81,
        0x42, 0x81, 0x41, 0x82, 0x41,
    ],
    kerning: None,
};

// ':'
static GLYPH_003A: Glyph<'static> = Glyph {
    code: 0x003a,
    left: 3,
    top: 6,
    advance: 8,
    cols: 2,
    rows: 5,
    bitmap: &[
        0x83, 0x41, 0x83,
    ],
    kerning: None,
};

// ';'
static GLYPH_003B: Glyph<'static> = Glyph {
    code: 0x003b,
    left: 2,
    top: 6,
    advance: 8,
    cols: 3,
    rows: 6,
    bitmap: &[
        0x40, 0x81, 0x40, 0x81, 0x43, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// '<'
static GLYPH_003C: Glyph<'static> = Glyph {
    code: 0x003c,
    left: 1,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 7,
    bitmap: &[
        0x42, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x43, 0x81, 0x43, 0x81,
        0x43, 0x81,
    ],
    kerning: None,
};

// '='
static GLYPH_003D: Glyph<'static> = Glyph {
    code: 0x003d,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 3,
    bitmap: &[
        0x85, 0x45, 0x85,
    ],
    kerning: None,
};

// '>'
static GLYPH_003E: Glyph<'static> = Glyph {
    code: 0x003e,
    left: 2,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 7,
    bitmap: &[
        0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41,
        0x81, 0x42,
    ],
    kerning: None,
};

// '?'
static GLYPH_003F: Glyph<'static> = Glyph {
    code: 0x003f,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x81, 0x42, 0x81, 0x42, 0x81, 0x43, 0x81,
        0x49, 0x81, 0x41,
    ],
    kerning: None,
};

// '@'
static GLYPH_0040: Glyph<'static> = Glyph {
    code: 0x0040,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x40, 0x84, 0x40, 0x84, 0x43, 0x81,
        0x42, 0x80, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'A'
static GLYPH_0041: Glyph<'static> = Glyph {
    code: 0x0041,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x89, 0x41, 0x83, 0x41, 0x83,
        0x41, 0x81,
    ],
    kerning: Some(&[Kerning { left: 0x0056, offset: -1 }, Kerning { left: 0x0054, offset: -1 }]),
};

// 'B'
static GLYPH_0042: Glyph<'static> = Glyph {
    code: 0x0042,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x86, 0x40, 0x81, 0x41, 0x83, 0x41,
        0x86, 0x40,
    ],
    kerning: None,
};

// 'C'
static GLYPH_0043: Glyph<'static> = Glyph {
    code: 0x0043,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'D'
static GLYPH_0044: Glyph<'static> = Glyph {
    code: 0x0044,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x83, 0x41, 0x81, 0x40, 0x81, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41,
        0x83, 0x40, 0x81, 0x40, 0x83, 0x41,
    ],
    kerning: None,
};

// 'E'
static GLYPH_0045: Glyph<'static> = Glyph {
    code: 0x0045,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x87, 0x43, 0x81, 0x43, 0x84, 0x40, 0x81, 0x43, 0x81, 0x43, 0x85,
    ],
    kerning: None,
};

// 'F'
static GLYPH_0046: Glyph<'static> = Glyph {
    code: 0x0046,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x87, 0x43, 0x81, 0x43, 0x84, 0x40, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43,
    ],
    kerning: None,
};

// 'G'
static GLYPH_0047: Glyph<'static> = Glyph {
    code: 0x0047,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x43, 0x81, 0x40, 0x84, 0x41, 0x83,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'H'
static GLYPH_0048: Glyph<'static> = Glyph {
    code: 0x0048,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x89, 0x41, 0x83, 0x41, 0x83, 0x41,
        0x81,
    ],
    kerning: None,
};

// 'I'
static GLYPH_0049: Glyph<'static> = Glyph {
    code: 0x0049,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x85, 0x41, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x41,
        0x85,
    ],
    kerning: None,
};

// 'J'
static GLYPH_004A: Glyph<'static> = Glyph {
    code: 0x004a,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x41, 0x83, 0x42, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x40, 0x81,
        0x40, 0x81, 0x41, 0x82, 0x41,
    ],
    kerning: None,
};

// 'K'
static GLYPH_004B: Glyph<'static> = Glyph {
    code: 0x004b,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x40, 0x81, 0x40, 0x83, 0x41, 0x82, 0x42, 0x83, 0x41,
        0x81, 0x40, 0x81, 0x40, 0x81, 0x41, 0x81,
    ],
    kerning: None,
};

// 'L'
static GLYPH_004C: Glyph<'static> = Glyph {
    code: 0x004c,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43,
        0x85,
    ],
    kerning: None,
};

// 'M'
static GLYPH_004D: Glyph<'static> = Glyph {
    code: 0x004d,
    left: 1,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x81, 0x42, 0x84, 0x40, 0x8b, 0x40, 0x80, 0x40, 0x83, 0x42, 0x83, 0x42,
        0x83, 0x42, 0x81,
    ],
    kerning: None,
};

// 'N'
static GLYPH_004E: Glyph<'static> = Glyph {
    code: 0x004e,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x84, 0x40, 0x8f, 0x40, 0x84, 0x41, 0x83, 0x41, 0x81,
    ],
    kerning: None,
};

// 'O'
static GLYPH_004F: Glyph<'static> = Glyph {
    code: 0x004f,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83,
        0x41, 0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'P'
static GLYPH_0050: Glyph<'static> = Glyph {
    code: 0x0050,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x86, 0x40, 0x81, 0x43, 0x81, 0x43,
        0x81, 0x43,
    ],
    kerning: None,
};

// 'Q'
static GLYPH_0051: Glyph<'static> = Glyph {
    code: 0x0051,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x40, 0x80,
        0x40, 0x82, 0x40, 0x81, 0x41, 0x81, 0x40, 0x81,
    ],
    kerning: None,
};

// 'R'
static GLYPH_0052: Glyph<'static> = Glyph {
    code: 0x0052,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x86, 0x40, 0x81, 0x40, 0x81, 0x40,
        0x81, 0x41, 0x83, 0x41, 0x81,
    ],
    kerning: None,
};

// 'S'
static GLYPH_0053: Glyph<'static> = Glyph {
    code: 0x0053,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x44, 0x83, 0x44, 0x83, 0x41, 0x81,
        0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'T'
static GLYPH_0054: Glyph<'static> = Glyph {
    code: 0x0054,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x85, 0x41, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43,
        0x81, 0x41,
    ],
    kerning: None,
};

// 'U'
static GLYPH_0055: Glyph<'static> = Glyph {
    code: 0x0055,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41,
        0x81, 0x40, 0x83, 0x40,
    ],
    kerning: None,
};

// 'V'
static GLYPH_0056: Glyph<'static> = Glyph {
    code: 0x0056,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40,
        0x83, 0x42, 0x81, 0x41,
    ],
    kerning: Some(&[Kerning { left: 0x0041, offset: -1 }]),
};

// 'W'
static GLYPH_0057: Glyph<'static> = Glyph {
    code: 0x0057,
    left: 1,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x81, 0x42, 0x83, 0x42, 0x83, 0x42, 0x83, 0x40, 0x80, 0x40, 0x8b, 0x40,
        0x84, 0x42, 0x81,
    ],
    kerning: None,
};

// 'X'
static GLYPH_0058: Glyph<'static> = Glyph {
    code: 0x0058,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x81, 0x40, 0x83, 0x42, 0x81, 0x42, 0x83, 0x40,
        0x81, 0x41, 0x83, 0x41, 0x81,
    ],
    kerning: None,
};

// 'Y'
static GLYPH_0059: Glyph<'static> = Glyph {
    code: 0x0059,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40, 0x83, 0x42, 0x81, 0x43,
        0x81, 0x43, 0x81, 0x41,
    ],
    kerning: None,
};

// 'Z'
static GLYPH_005A: Glyph<'static> = Glyph {
    code: 0x005a,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x85, 0x43, 0x81, 0x42, 0x81, 0x42, 0x81, 0x42, 0x81, 0x42, 0x81, 0x43,
        0x85,
    ],
    kerning: None,
};

// '['
static GLYPH_005B: Glyph<'static> = Glyph {
    code: 0x005b,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x85, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x83,
    ],
    kerning: None,
};

// '\\'
static GLYPH_005C: Glyph<'static> = Glyph {
    code: 0x005c,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 7,
    bitmap: &[
        0x81, 0x45, 0x81, 0x45, 0x81, 0x45, 0x81, 0x45, 0x81, 0x45, 0x81, 0x45,
        0x80,
    ],
    kerning: None,
};

// ']'
static GLYPH_005D: Glyph<'static> = Glyph {
    code: 0x005d,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x83, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x85,
    ],
    kerning: None,
};

// '^'
static GLYPH_005E: Glyph<'static> = Glyph {
    code: 0x005e,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 4,
    bitmap: &[
        0x42, 0x80, 0x44, 0x82, 0x42, 0x81, 0x40, 0x81, 0x40, 0x81, 0x42, 0x81,
    ],
    kerning: None,
};

// '_'
static GLYPH_005F: Glyph<'static> = Glyph {
    code: 0x005f,
    left: 0,
    top: 0,
    advance: 8,
    cols: 8,
    rows: 1,
    bitmap: &[
        0x87,
    ],
    kerning: None,
};

// '`'
static GLYPH_0060: Glyph<'static> = Glyph {
    code: 0x0060,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 3,
    bitmap: &[
        0x81, 0x42, 0x81, 0x42, 0x81,
    ],
    kerning: None,
};

// 'a'
static GLYPH_0061: Glyph<'static> = Glyph {
    code: 0x0061,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x40, 0x83, 0x44, 0x81, 0x40, 0x86, 0x41, 0x81, 0x40, 0x84,
    ],
    kerning: None,
};

// 'b'
static GLYPH_0062: Glyph<'static> = Glyph {
    code: 0x0062,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x43, 0x81, 0x43, 0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41,
        0x86, 0x40,
    ],
    kerning: None,
};

// 'c'
static GLYPH_0063: Glyph<'static> = Glyph {
    code: 0x0063,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x43, 0x81, 0x41, 0x81, 0x40, 0x83,
        0x40,
    ],
    kerning: None,
};

// 'd'
static GLYPH_0064: Glyph<'static> = Glyph {
    code: 0x0064,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x43, 0x81, 0x43, 0x81, 0x40, 0x86, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81,
        0x40, 0x84,
    ],
    kerning: None,
};

// 'e'
static GLYPH_0065: Glyph<'static> = Glyph {
    code: 0x0065,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x89, 0x44, 0x83, 0x40,
    ],
    kerning: None,
};

// 'f'
static GLYPH_0066: Glyph<'static> = Glyph {
    code: 0x0066,
    left: 1,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 7,
    bitmap: &[
        0x41, 0x82, 0x40, 0x81, 0x42, 0x81, 0x41, 0x84, 0x40, 0x81, 0x42, 0x81,
        0x42, 0x81, 0x41,
    ],
    kerning: None,
};

// 'g'
static GLYPH_0067: Glyph<'static> = Glyph {
    code: 0x0067,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 6,
    bitmap: &[
        0x40, 0x86, 0x41, 0x83, 0x41, 0x81, 0x40, 0x84, 0x43, 0x81, 0x40, 0x83,
        0x40,
    ],
    kerning: None,
};

// 'h'
static GLYPH_0068: Glyph<'static> = Glyph {
    code: 0x0068,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x43, 0x81, 0x43, 0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41,
        0x83, 0x41, 0x81,
    ],
    kerning: None,
};

// 'i'
static GLYPH_0069: Glyph<'static> = Glyph {
    code: 0x0069,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x40, 0x81, 0x44, 0x82, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x40, 0x83,
    ],
    kerning: None,
};

// 'j'
static GLYPH_006A: Glyph<'static> = Glyph {
    code: 0x006a,
    left: 1,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 8,
    bitmap: &[
        0x42, 0x81, 0x46, 0x82, 0x42, 0x81, 0x42, 0x81, 0x42, 0x83, 0x40, 0x81,
        0x40, 0x82, 0x40,
    ],
    kerning: None,
};

// 'k'
static GLYPH_006B: Glyph<'static> = Glyph {
    code: 0x006b,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x81, 0x43, 0x81, 0x43, 0x81, 0x41, 0x83, 0x40, 0x81, 0x40, 0x83, 0x41,
        0x81, 0x40, 0x81, 0x40, 0x81, 0x41, 0x81,
    ],
    kerning: None,
};

// 'l'
static GLYPH_006C: Glyph<'static> = Glyph {
    code: 0x006c,
    left: 2,
    top: 7,
    advance: 8,
    cols: 4,
    rows: 7,
    bitmap: &[
        0x82, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x41, 0x81, 0x40,
        0x83,
    ],
    kerning: None,
};

// 'm'
static GLYPH_006D: Glyph<'static> = Glyph {
    code: 0x006d,
    left: 1,
    top: 5,
    advance: 8,
    cols: 7,
    rows: 5,
    bitmap: &[
        0x82, 0x40, 0x81, 0x40, 0x88, 0x40, 0x80, 0x40, 0x83, 0x40, 0x80, 0x40,
        0x83, 0x42, 0x81,
    ],
    kerning: None,
};

// 'n'
static GLYPH_006E: Glyph<'static> = Glyph {
    code: 0x006e,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81,
    ],
    kerning: None,
};

// 'o'
static GLYPH_006F: Glyph<'static> = Glyph {
    code: 0x006f,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x40, 0x83, 0x40, 0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40, 0x83,
        0x40,
    ],
    kerning: Some(&[Kerning { left: 0x0054, offset: -1 }]),
};

// 'p'
static GLYPH_0070: Glyph<'static> = Glyph {
    code: 0x0070,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 6,
    bitmap: &[
        0x84, 0x40, 0x81, 0x41, 0x83, 0x41, 0x86, 0x40, 0x81, 0x43, 0x81, 0x43,
    ],
    kerning: None,
};

// 'q'
static GLYPH_0071: Glyph<'static> = Glyph {
    code: 0x0071,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 6,
    bitmap: &[
        0x40, 0x86, 0x41, 0x83, 0x41, 0x81, 0x40, 0x84, 0x43, 0x81, 0x43, 0x81,
    ],
    kerning: None,
};

// 'r'
static GLYPH_0072: Glyph<'static> = Glyph {
    code: 0x0072,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x81, 0x40, 0x85, 0x42, 0x81, 0x43, 0x81, 0x43, 0x81, 0x43,
    ],
    kerning: None,
};

// 's'
static GLYPH_0073: Glyph<'static> = Glyph {
    code: 0x0073,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x40, 0x86, 0x44, 0x83, 0x44, 0x86, 0x40,
    ],
    kerning: None,
};

// 't'
static GLYPH_0074: Glyph<'static> = Glyph {
    code: 0x0074,
    left: 1,
    top: 7,
    advance: 8,
    cols: 5,
    rows: 7,
    bitmap: &[
        0x40, 0x81, 0x42, 0x81, 0x41, 0x84, 0x40, 0x81, 0x42, 0x81, 0x42, 0x81,
        0x43, 0x82,
    ],
    kerning: None,
};

// 'u'
static GLYPH_0075: Glyph<'static> = Glyph {
    code: 0x0075,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40, 0x84,
    ],
    kerning: None,
};

// 'v'
static GLYPH_0076: Glyph<'static> = Glyph {
    code: 0x0076,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40, 0x83, 0x42, 0x81, 0x41,
    ],
    kerning: None,
};

// 'w'
static GLYPH_0077: Glyph<'static> = Glyph {
    code: 0x0077,
    left: 1,
    top: 5,
    advance: 8,
    cols: 7,
    rows: 5,
    bitmap: &[
        0x81, 0x42, 0x83, 0x40, 0x80, 0x40, 0x83, 0x40, 0x80, 0x40, 0x88, 0x40,
        0x81, 0x40, 0x81, 0x40,
    ],
    kerning: None,
};

// 'x'
static GLYPH_0078: Glyph<'static> = Glyph {
    code: 0x0078,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x81, 0x41, 0x81, 0x40, 0x83, 0x42, 0x81, 0x42, 0x83, 0x40, 0x81, 0x41,
        0x81,
    ],
    kerning: None,
};

// 'y'
static GLYPH_0079: Glyph<'static> = Glyph {
    code: 0x0079,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 6,
    bitmap: &[
        0x81, 0x41, 0x83, 0x41, 0x83, 0x41, 0x81, 0x40, 0x84, 0x43, 0x81, 0x40,
        0x83, 0x40,
    ],
    kerning: None,
};

// 'z'
static GLYPH_007A: Glyph<'static> = Glyph {
    code: 0x007a,
    left: 1,
    top: 5,
    advance: 8,
    cols: 6,
    rows: 5,
    bitmap: &[
        0x85, 0x42, 0x81, 0x42, 0x81, 0x42, 0x81, 0x42, 0x85,
    ],
    kerning: None,
};

// '{'
static GLYPH_007B: Glyph<'static> = Glyph {
    code: 0x007b,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x42, 0x82, 0x41, 0x81, 0x43, 0x81, 0x41, 0x82, 0x44, 0x81, 0x43, 0x81,
        0x44, 0x82,
    ],
    kerning: None,
};

// '|'
static GLYPH_007C: Glyph<'static> = Glyph {
    code: 0x007c,
    left: 3,
    top: 7,
    advance: 8,
    cols: 2,
    rows: 7,
    bitmap: &[
        0x85, 0x41, 0x85,
    ],
    kerning: None,
};

// '}'
static GLYPH_007D: Glyph<'static> = Glyph {
    code: 0x007d,
    left: 1,
    top: 7,
    advance: 8,
    cols: 6,
    rows: 7,
    bitmap: &[
        0x82, 0x44, 0x81, 0x43, 0x81, 0x44, 0x82, 0x41, 0x81, 0x43, 0x81, 0x41,
        0x82, 0x42,
    ],
    kerning: None,
};

// '~'
static GLYPH_007E: Glyph<'static> = Glyph {
    code: 0x007e,
    left: 0,
    top: 7,
    advance: 8,
    cols: 7,
    rows: 2,
    bitmap: &[
        0x40, 0x82, 0x40, 0x83, 0x40, 0x82, 0x40,
    ],
    kerning: None,
};

static GLYPHS: [Option<&Glyph<'static>>; 0x7f] = [
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None, None, None, None, None, None, None, None, None,
    Some(&GLYPH_0020), Some(&GLYPH_0021), Some(&GLYPH_0022), Some(&GLYPH_0023),
    Some(&GLYPH_0024), Some(&GLYPH_0025), Some(&GLYPH_0026), Some(&GLYPH_0027),
    Some(&GLYPH_0028), Some(&GLYPH_0029), Some(&GLYPH_002A), Some(&GLYPH_002B),
    Some(&GLYPH_002C), Some(&GLYPH_002D), Some(&GLYPH_002E), Some(&GLYPH_002F),
    Some(&GLYPH_0030), Some(&GLYPH_0031), Some(&GLYPH_0032), Some(&GLYPH_0033),
    Some(&GLYPH_0034), Some(&GLYPH_0035), Some(&GLYPH_0036), Some(&GLYPH_0037),
    Some(&GLYPH_0038), Some(&GLYPH_0039), Some(&GLYPH_003A), Some(&GLYPH_003B),
    Some(&GLYPH_003C), Some(&GLYPH_003D), Some(&GLYPH_003E), Some(&GLYPH_003F),
    Some(&GLYPH_0040), Some(&GLYPH_0041), Some(&GLYPH_0042), Some(&GLYPH_0043),
    Some(&GLYPH_0044), Some(&GLYPH_0045), Some(&GLYPH_0046), Some(&GLYPH_0047),
    Some(&GLYPH_0048), Some(&GLYPH_0049), Some(&GLYPH_004A), Some(&GLYPH_004B),
    Some(&GLYPH_004C), Some(&GLYPH_004D), Some(&GLYPH_004E), Some(&GLYPH_004F),
    Some(&GLYPH_0050), Some(&GLYPH_0051), Some(&GLYPH_0052), Some(&GLYPH_0053),
    Some(&GLYPH_0054), Some(&GLYPH_0055), Some(&GLYPH_0056), Some(&GLYPH_0057),
    Some(&GLYPH_0058), Some(&GLYPH_0059), Some(&GLYPH_005A), Some(&GLYPH_005B),
    Some(&GLYPH_005C), Some(&GLYPH_005D), Some(&GLYPH_005E), Some(&GLYPH_005F),
    Some(&GLYPH_0060), Some(&GLYPH_0061), Some(&GLYPH_0062), Some(&GLYPH_0063),
    Some(&GLYPH_0064), Some(&GLYPH_0065), Some(&GLYPH_0066), Some(&GLYPH_0067),
    Some(&GLYPH_0068), Some(&GLYPH_0069), Some(&GLYPH_006A), Some(&GLYPH_006B),
    Some(&GLYPH_006C), Some(&GLYPH_006D), Some(&GLYPH_006E), Some(&GLYPH_006F),
    Some(&GLYPH_0070), Some(&GLYPH_0071), Some(&GLYPH_0072), Some(&GLYPH_0073),
    Some(&GLYPH_0074), Some(&GLYPH_0075), Some(&GLYPH_0076), Some(&GLYPH_0077),
    Some(&GLYPH_0078), Some(&GLYPH_0079), Some(&GLYPH_007A), Some(&GLYPH_007B),
    Some(&GLYPH_007C), Some(&GLYPH_007D), Some(&GLYPH_007E),
];

pub static PIXEL_8_RLE: Font<'static> = Font {
    name: "Pixel",
    style: "Regular",
    size: 8,
    dpi: 72,
    count: 95,
    max: 0x007e,
    ascender: 7,
    descender: -1,
    height: 8,
    glyphs: &GLYPHS,
    compressed: true,
};
