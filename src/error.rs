// src/error.rs

//! Error types for drawing and canvas construction.
//!
//! Only two things can go wrong when drawing a character: there is no font to
//! draw with, or the font has no glyph for the requested code. Everything else
//! (missing glyphs inside a string, geometry hanging off the canvas) is handled
//! silently by skipping or clipping.

use thiserror::Error;

use crate::font::GlyphCode;

/// Why a single character could not be drawn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// No font was supplied, typically because a registry lookup came up empty.
    #[error("no font to draw with")]
    NoFont,
    /// The font has no glyph for this code.
    #[error("font has no glyph for code {0:#06x}")]
    GlyphNotFound(GlyphCode),
}

/// Raised when a caller-owned buffer cannot back a canvas of the declared size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    #[error("canvas of {width}x{height} needs {required} bytes, buffer holds {actual}")]
    BufferTooSmall {
        width: usize,
        height: usize,
        required: usize,
        actual: usize,
    },
    #[error("canvas dimensions {width}x{height} overflow the address space")]
    DimensionsOverflow { width: usize, height: usize },
}
