// src/canvas.rs

//! Caller-owned pixel buffer that glyphs are drawn into.
//!
//! A `Canvas` borrows a byte slice and interprets it as `width * height`
//! pixels of format `P`, row-major with no padding. The buffer is validated
//! once at construction; after that every coordinate lookup is bounds-checked
//! against the declared dimensions, so drawing can never fault.

use std::marker::PhantomData;

use log::warn;

use crate::error::CanvasError;
use crate::pixel::{Intensity, PixelFormat, Rgb16, Rgb24, Rgba32};

pub struct Canvas<'buf, P: PixelFormat> {
    buf: &'buf mut [u8],
    width: usize,
    height: usize,
    _format: PhantomData<P>,
}

pub type IntensityCanvas<'buf> = Canvas<'buf, Intensity>;
pub type Rgb24Canvas<'buf> = Canvas<'buf, Rgb24>;
pub type Rgb16Canvas<'buf> = Canvas<'buf, Rgb16>;
pub type Rgba32Canvas<'buf> = Canvas<'buf, Rgba32>;

/// Bytes needed to back a `width` x `height` canvas of `bytes_per_pixel`.
pub fn required_len(width: usize, height: usize, bytes_per_pixel: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(bytes_per_pixel)
}

impl<'buf, P: PixelFormat> Canvas<'buf, P> {
    /// Wraps `buf` as a canvas. Extra trailing bytes are ignored.
    pub fn new(buf: &'buf mut [u8], width: usize, height: usize) -> Result<Self, CanvasError> {
        let required = required_len(width, height, P::BYTES_PER_PIXEL)
            .ok_or(CanvasError::DimensionsOverflow { width, height })?;
        if buf.len() < required {
            warn!(
                "Rejecting {}x{} canvas: buffer holds {} bytes, needs {}",
                width,
                height,
                buf.len(),
                required
            );
            return Err(CanvasError::BufferTooSmall {
                width,
                height,
                required,
                actual: buf.len(),
            });
        }
        Ok(Self {
            buf: &mut buf[..required],
            width,
            height,
            _format: PhantomData,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel bytes covered by this canvas.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y * self.width + x) * P::BYTES_PER_PIXEL)
    }

    /// Bytes of the pixel at `(x, y)`, or `None` if it lies off the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        let start = self.offset(x, y)?;
        Some(&self.buf[start..start + P::BYTES_PER_PIXEL])
    }

    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [u8]> {
        let start = self.offset(x, y)?;
        Some(&mut self.buf[start..start + P::BYTES_PER_PIXEL])
    }

    /// Decoded value at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Option<P::Value> {
        self.pixel(x, y).map(P::read)
    }

    /// Overwrites every pixel with `value`.
    pub fn fill(&mut self, value: P::Value) {
        for pixel in self.buf.chunks_exact_mut(P::BYTES_PER_PIXEL) {
            P::write(pixel, value);
        }
    }

    /// Iterates over pixel rows as raw bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0; an empty canvas has no rows either way.
        let row_len = (self.width * P::BYTES_PER_PIXEL).max(1);
        self.buf.chunks_exact(row_len).take(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Rgb, Rgba};

    #[test]
    fn test_new_rejects_short_buffer() {
        let mut buf = vec![0u8; 10 * 10 * 3 - 1];
        let err = Rgb24Canvas::new(&mut buf, 10, 10).err();
        assert_eq!(
            err,
            Some(CanvasError::BufferTooSmall {
                width: 10,
                height: 10,
                required: 300,
                actual: 299
            })
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let mut buf = [0u8; 4];
        assert!(matches!(
            Rgba32Canvas::new(&mut buf, usize::MAX, 2),
            Err(CanvasError::DimensionsOverflow { .. })
        ));
    }

    #[test]
    fn test_new_ignores_trailing_bytes() {
        let mut buf = [0u8; 7];
        let canvas = IntensityCanvas::new(&mut buf, 3, 2).unwrap();
        assert_eq!(canvas.as_bytes().len(), 6);
    }

    #[test]
    fn test_pixel_bounds() {
        let mut buf = [0u8; 4 * 3 * 2];
        let mut canvas = Rgba32Canvas::new(&mut buf, 3, 2).unwrap();

        assert!(canvas.pixel(-1, 0).is_none());
        assert!(canvas.pixel(0, -1).is_none());
        assert!(canvas.pixel(3, 0).is_none());
        assert!(canvas.pixel(0, 2).is_none());
        assert!(canvas.pixel(2, 1).is_some());

        canvas.pixel_mut(2, 1).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(canvas.get(2, 1), Some(Rgba::new(1, 2, 3, 4)));
        assert_eq!(&buf[20..24], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_and_rows() {
        let mut buf = [0u8; 3 * 2 * 2];
        let mut canvas = Rgb24Canvas::new(&mut buf, 2, 2).unwrap();
        canvas.fill(Rgb::new(9, 8, 7));

        let rows: Vec<&[u8]> = canvas.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[9, 8, 7, 9, 8, 7]);
    }

    #[test]
    fn test_empty_canvas() {
        let mut buf: [u8; 0] = [];
        let canvas = IntensityCanvas::new(&mut buf, 0, 0).unwrap();
        assert_eq!(canvas.rows().count(), 0);
        assert!(canvas.pixel(0, 0).is_none());
    }
}
