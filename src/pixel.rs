// src/pixel.rs

//! Pixel formats a canvas can hold.
//!
//! Each format is a zero-sized marker implementing [`PixelFormat`]: how many
//! bytes a pixel takes, how to read and write one, and how to blend a glyph
//! intensity into it. The rasterizer is generic over this trait, so the draw
//! loop is written once and monomorphised per format.
//!
//! | Format      | Bytes | Layout                        | Foreground   |
//! |-------------|-------|-------------------------------|--------------|
//! | [`Intensity`] | 1   | display byte (`' '.+X`)       | none         |
//! | [`Rgb24`]   | 3     | `[r, g, b]`                   | [`Rgb`]      |
//! | [`Rgb16`]   | 2     | native-endian 5-6-5 `u16`     | [`Rgb565`]   |
//! | [`Rgba32`]  | 4     | `[r, g, b, a]`, `a` untouched | [`Rgb`]      |

use serde::{Deserialize, Serialize};

/// Capabilities the rasterizer needs from a destination pixel format.
pub trait PixelFormat {
    /// Bytes one pixel occupies in the canvas buffer.
    const BYTES_PER_PIXEL: usize;

    /// Foreground supplied by the caller when drawing.
    type Color: Copy;

    /// Decoded value of one stored pixel.
    type Value: Copy;

    fn read(pixel: &[u8]) -> Self::Value;

    fn write(pixel: &mut [u8], value: Self::Value);

    /// Combines a glyph intensity with what is already on the canvas.
    fn blend(existing: Self::Value, fg: Self::Color, intensity: u8) -> Self::Value;

    /// Read-modify-write of one pixel.
    #[inline]
    fn composite(pixel: &mut [u8], fg: Self::Color, intensity: u8) {
        let blended = Self::blend(Self::read(pixel), fg, intensity);
        Self::write(pixel, blended);
    }
}

/// Straight alpha blend of one channel: `fg * a + bg * (1 - a)`, `a = alpha / 255`.
///
/// Rounded to nearest, so alpha 0 yields `bg` and alpha 255 yields `fg` exactly.
#[inline]
pub const fn blend_channel(bg: u8, fg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Character-cell shade used by the intensity canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Blank,
    Light,
    Medium,
    Full,
}

impl Shade {
    /// Buckets an intensity at 64 / 128 / 192.
    pub const fn from_intensity(value: u8) -> Self {
        match value {
            0..=63 => Shade::Blank,
            64..=127 => Shade::Light,
            128..=191 => Shade::Medium,
            _ => Shade::Full,
        }
    }

    pub const fn as_byte(self) -> u8 {
        match self {
            Shade::Blank => b' ',
            Shade::Light => b'.',
            Shade::Medium => b'+',
            Shade::Full => b'X',
        }
    }
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn blend(self, fg: Rgb, alpha: u8) -> Rgb {
        Rgb::new(
            blend_channel(self.r, fg.r, alpha),
            blend_channel(self.g, fg.g, alpha),
            blend_channel(self.b, fg.b, alpha),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Packed 16-bit colour: red in bits 11-15, green 5-10, blue 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0x1f) as u16) << 11) | (((g & 0x3f) as u16) << 5) | (b & 0x1f) as u16)
    }

    /// Red channel, 0..=31.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1f
    }

    /// Green channel, 0..=63.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3f
    }

    /// Blue channel, 0..=31.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8 & 0x1f
    }
}

impl From<Rgb> for Rgb565 {
    fn from(c: Rgb) -> Self {
        Rgb565::from_channels(c.r >> 3, c.g >> 2, c.b >> 3)
    }
}

impl From<Rgb565> for Rgb {
    /// Expands to 8 bits per channel by replicating the high bits.
    fn from(c: Rgb565) -> Self {
        let (r, g, b) = (c.r(), c.g(), c.b());
        Rgb::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

/// Truecolour pixel with an alpha byte that rendering leaves alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for Rgb {
    fn from(c: Rgba) -> Self {
        Rgb::new(c.r, c.g, c.b)
    }
}

/// One display byte per pixel; intensities are bucketed into [`Shade`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intensity;

/// Three bytes per pixel, `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb24;

/// Two bytes per pixel, a native-endian [`Rgb565`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb16;

/// Four bytes per pixel, `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba32;

impl PixelFormat for Intensity {
    const BYTES_PER_PIXEL: usize = 1;
    type Color = ();
    type Value = u8;

    #[inline]
    fn read(pixel: &[u8]) -> u8 {
        pixel[0]
    }

    #[inline]
    fn write(pixel: &mut [u8], value: u8) {
        pixel[0] = value;
    }

    #[inline]
    fn blend(_existing: u8, _fg: (), intensity: u8) -> u8 {
        Shade::from_intensity(intensity).as_byte()
    }
}

impl PixelFormat for Rgb24 {
    const BYTES_PER_PIXEL: usize = 3;
    type Color = Rgb;
    type Value = Rgb;

    #[inline]
    fn read(pixel: &[u8]) -> Rgb {
        Rgb::new(pixel[0], pixel[1], pixel[2])
    }

    #[inline]
    fn write(pixel: &mut [u8], value: Rgb) {
        pixel[..3].copy_from_slice(&[value.r, value.g, value.b]);
    }

    #[inline]
    fn blend(existing: Rgb, fg: Rgb, intensity: u8) -> Rgb {
        existing.blend(fg, intensity)
    }
}

impl PixelFormat for Rgb16 {
    const BYTES_PER_PIXEL: usize = 2;
    type Color = Rgb565;
    type Value = Rgb565;

    #[inline]
    fn read(pixel: &[u8]) -> Rgb565 {
        Rgb565(u16::from_ne_bytes([pixel[0], pixel[1]]))
    }

    #[inline]
    fn write(pixel: &mut [u8], value: Rgb565) {
        pixel[..2].copy_from_slice(&value.0.to_ne_bytes());
    }

    /// Blends each channel at its native width.
    #[inline]
    fn blend(existing: Rgb565, fg: Rgb565, intensity: u8) -> Rgb565 {
        Rgb565::from_channels(
            blend_channel(existing.r(), fg.r(), intensity),
            blend_channel(existing.g(), fg.g(), intensity),
            blend_channel(existing.b(), fg.b(), intensity),
        )
    }
}

impl PixelFormat for Rgba32 {
    const BYTES_PER_PIXEL: usize = 4;
    type Color = Rgb;
    type Value = Rgba;

    #[inline]
    fn read(pixel: &[u8]) -> Rgba {
        Rgba::new(pixel[0], pixel[1], pixel[2], pixel[3])
    }

    #[inline]
    fn write(pixel: &mut [u8], value: Rgba) {
        pixel[..4].copy_from_slice(&value.to_bytes());
    }

    #[inline]
    fn blend(existing: Rgba, fg: Rgb, intensity: u8) -> Rgba {
        let rgb = Rgb::from(existing).blend(fg, intensity);
        Rgba::new(rgb.r, rgb.g, rgb.b, existing.a)
    }
}

/// Pixel format chosen at run time, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Intensity,
    Rgb24,
    Rgb16,
    Rgba32,
}

impl Format {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Format::Intensity => Intensity::BYTES_PER_PIXEL,
            Format::Rgb24 => Rgb24::BYTES_PER_PIXEL,
            Format::Rgb16 => Rgb16::BYTES_PER_PIXEL,
            Format::Rgba32 => Rgba32::BYTES_PER_PIXEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_thresholds() {
        // Contract: buckets break at 64, 128 and 192.
        let cases = [
            (0, b' '),
            (63, b' '),
            (64, b'.'),
            (127, b'.'),
            (128, b'+'),
            (191, b'+'),
            (192, b'X'),
            (255, b'X'),
        ];
        for (value, expected) in cases {
            assert_eq!(
                Shade::from_intensity(value).as_byte(),
                expected,
                "intensity {value}"
            );
        }
    }

    #[test]
    fn test_intensity_composite_ignores_existing() {
        let mut px = [b'X'];
        Intensity::composite(&mut px, (), 10);
        assert_eq!(px, [b' ']);
    }

    #[test]
    fn test_blend_channel_endpoints_exact() {
        for bg in [0u8, 1, 77, 200, 255] {
            for fg in [0u8, 3, 128, 254, 255] {
                assert_eq!(blend_channel(bg, fg, 0), bg);
                assert_eq!(blend_channel(bg, fg, 255), fg);
            }
        }
    }

    #[test]
    fn test_blend_channel_midpoint_rounds() {
        // 255 * 128 / 255 = 128 exactly.
        assert_eq!(blend_channel(0, 255, 128), 128);
        // (0*64 + 255*191 + 127) / 255 = 191
        assert_eq!(blend_channel(255, 0, 64), 191);
        // (100*51 + 200*204 + 127) / 255 = 180
        assert_eq!(blend_channel(200, 100, 51), 180);
    }

    #[test]
    fn test_rgb24_composite() {
        let mut px = [10, 20, 30];
        Rgb24::composite(&mut px, Rgb::new(255, 255, 255), 255);
        assert_eq!(px, [255, 255, 255]);

        let mut px = [10, 20, 30];
        Rgb24::composite(&mut px, Rgb::new(255, 255, 255), 0);
        assert_eq!(px, [10, 20, 30]);

        let mut px = [0, 0, 0];
        Rgb24::composite(&mut px, Rgb::new(200, 100, 50), 128);
        assert_eq!(px, [100, 50, 25]);
    }

    #[test]
    fn test_rgb565_channels() {
        let c = Rgb565::from_channels(31, 0, 0);
        assert_eq!(c.0, 0xf800);
        let c = Rgb565::from_channels(0, 63, 0);
        assert_eq!(c.0, 0x07e0);
        let c = Rgb565::from_channels(0, 0, 31);
        assert_eq!(c.0, 0x001f);
        assert_eq!(Rgb565(0x1234).r(), 0x02);
        assert_eq!(Rgb565(0x1234).g(), 0x11);
        assert_eq!(Rgb565(0x1234).b(), 0x14);
    }

    #[test]
    fn test_rgb565_from_rgb_and_back() {
        assert_eq!(Rgb565::from(Rgb::WHITE).0, 0xffff);
        assert_eq!(Rgb::from(Rgb565(0xffff)), Rgb::WHITE);
        assert_eq!(Rgb::from(Rgb565(0)), Rgb::BLACK);
    }

    #[test]
    fn test_rgb16_composite_per_channel() {
        let mut px = Rgb565(0).0.to_ne_bytes();
        Rgb16::composite(&mut px, Rgb565::from_channels(31, 63, 31), 255);
        assert_eq!(Rgb16::read(&px), Rgb565(0xffff));

        let mut px = Rgb565::from_channels(10, 20, 30).0.to_ne_bytes();
        Rgb16::composite(&mut px, Rgb565(0xffff), 0);
        assert_eq!(Rgb16::read(&px), Rgb565::from_channels(10, 20, 30));
    }

    #[test]
    fn test_rgba32_preserves_alpha() {
        let mut px = [0, 0, 0, 0x7f];
        Rgba32::composite(&mut px, Rgb::new(255, 128, 0), 255);
        assert_eq!(px, [255, 128, 0, 0x7f]);
    }

    #[test]
    fn test_format_bytes_per_pixel() {
        assert_eq!(Format::Intensity.bytes_per_pixel(), 1);
        assert_eq!(Format::Rgb16.bytes_per_pixel(), 2);
        assert_eq!(Format::Rgb24.bytes_per_pixel(), 3);
        assert_eq!(Format::Rgba32.bytes_per_pixel(), 4);
    }

    #[test]
    fn test_format_and_rgb_deserialize() {
        let format: Format = serde_json::from_str("\"rgb16\"").unwrap();
        assert_eq!(format, Format::Rgb16);
        let color: Rgb = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(color, Rgb::new(1, 2, 3));
    }
}
