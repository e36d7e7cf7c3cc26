//! fontem: bitmap font rendering from tables compiled into the program.
//!
//! Fonts are static tables of pre-rasterized glyphs, optionally run-length
//! encoded. Text is drawn into a caller-owned [`Canvas`] in one of four pixel
//! formats, with pairwise kerning and per-pixel clipping.
//!
//! ```ignore
//! use fontem::{fonts, layout, IntensityCanvas, NO_PREVIOUS};
//!
//! let font = fonts::registry().find("Pixel", None, 8).unwrap();
//! let size = layout::calculate_box(font, "Hello");
//! let mut buf = vec![b' '; (size.width * size.height) as usize];
//! let mut canvas = IntensityCanvas::new(&mut buf, size.width as usize, size.height as usize)?;
//! layout::draw_string(&mut canvas, font, 0, 0, "Hello", NO_PREVIOUS, ());
//! ```

pub mod canvas;
pub mod codec;
pub mod error;
pub mod font;
pub mod fonts;
pub mod kerning;
pub mod layout;
pub mod pixel;
pub mod rasterizer;
pub mod registry;

pub use canvas::{Canvas, IntensityCanvas, Rgb16Canvas, Rgb24Canvas, Rgba32Canvas};
pub use error::{CanvasError, DrawError};
pub use font::{Font, Glyph, GlyphCode};
pub use kerning::{Kerning, NO_PREVIOUS};
pub use layout::{calculate_box, draw_string, DrawnText, TextBox};
pub use pixel::{Format, Intensity, PixelFormat, Rgb, Rgb16, Rgb24, Rgb565, Rgba, Rgba32, Shade};
pub use rasterizer::{draw_char, draw_glyph};
pub use registry::FontRegistry;
