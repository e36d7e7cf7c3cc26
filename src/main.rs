// src/main.rs

//! `fonttest`: renders a line of text with a compiled-in font.
//!
//! ```text
//! fonttest --list           table of available fonts
//! fonttest --list-args      config snippets selecting each font
//! fonttest [config.json]    render the configured text
//! ```

mod config;

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{info, warn};

use fontem::canvas::required_len;
use fontem::{
    calculate_box, draw_string, fonts, Canvas, Font, Format, Intensity, IntensityCanvas,
    PixelFormat, Rgb, Rgb16, Rgb24, Rgb565, Rgba, Rgba32, NO_PREVIOUS,
};

use crate::config::Config;

const USAGE: &str = "usage: fonttest [--list | --list-args | CONFIG.json]";

/// Draws `text` onto a freshly allocated canvas filled with `background`.
fn render<P: PixelFormat>(
    font: &Font<'_>,
    text: &str,
    width: usize,
    height: usize,
    foreground: P::Color,
    background: P::Value,
) -> anyhow::Result<Vec<u8>> {
    let len = required_len(width, height, P::BYTES_PER_PIXEL)
        .with_context(|| format!("Canvas {}x{} is too large", width, height))?;
    let mut buf = vec![0u8; len];
    let mut canvas =
        Canvas::<P>::new(&mut buf, width, height).context("Failed to create canvas")?;
    canvas.fill(background);

    let drawn = draw_string(&mut canvas, font, 0, 0, text, NO_PREVIOUS, foreground);
    info!(
        "Drew {} characters, pen advanced {}px",
        drawn.drawn, drawn.advance
    );
    if !drawn.remainder.is_empty() {
        warn!("Text did not fit; dropped {:?}", drawn.remainder);
    }
    Ok(buf)
}

/// Converts a canvas buffer to packed `[r, g, b]` triples.
fn to_rgb<P: PixelFormat>(buf: &[u8]) -> Vec<u8>
where
    P::Value: Into<Rgb>,
{
    buf.chunks_exact(P::BYTES_PER_PIXEL)
        .flat_map(|pixel| {
            let rgb: Rgb = P::read(pixel).into();
            <[u8; 3]>::from(rgb)
        })
        .collect()
}

fn write_ppm(path: &Path, width: usize, height: usize, rgb: &[u8]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    out.write_all(rgb)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn print_intensity(mut buf: Vec<u8>, width: usize, height: usize) -> anyhow::Result<()> {
    let canvas =
        IntensityCanvas::new(&mut buf, width, height).context("Failed to reopen canvas")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in canvas.rows() {
        out.write_all(row)?;
        out.write_all(b"\n")?;
    }
    out.flush().context("Failed to write to stdout")
}

fn run(config: &Config) -> anyhow::Result<()> {
    let registry = fonts::registry();
    if registry.is_empty() {
        bail!("No fonts are compiled in");
    }
    info!("{} fonts available", registry.len());
    let font = registry
        .find_with_compression(
            &config.font.name,
            config.font.style.as_deref(),
            config.font.size,
            config.font.compressed,
        )
        .with_context(|| {
            format!(
                "Unable to find a font matching {:?} size {}",
                config.font.name, config.font.size
            )
        })?;
    info!(
        "Using font {} {} {}px (compressed: {})",
        font.name, font.style, font.size, font.compressed
    );

    let text_box = calculate_box(font, &config.text);
    let canvas = &config.canvas;
    let width = canvas
        .width
        .unwrap_or_else(|| usize::try_from(text_box.width).unwrap_or(0));
    let height = canvas
        .height
        .unwrap_or_else(|| usize::try_from(text_box.height).unwrap_or(0));
    info!(
        "Text box {}x{} for {} characters; canvas {}x{} {:?}",
        text_box.width, text_box.height, text_box.count, width, height, canvas.format
    );

    let (fg, bg) = (canvas.foreground, canvas.background);
    let text = config.text.as_str();
    let rgb = match canvas.format {
        Format::Intensity => {
            let buf = render::<Intensity>(font, text, width, height, (), b' ')?;
            return print_intensity(buf, width, height);
        }
        Format::Rgb24 => to_rgb::<Rgb24>(&render::<Rgb24>(font, text, width, height, fg, bg)?),
        Format::Rgb16 => to_rgb::<Rgb16>(&render::<Rgb16>(
            font,
            text,
            width,
            height,
            Rgb565::from(fg),
            Rgb565::from(bg),
        )?),
        Format::Rgba32 => to_rgb::<Rgba32>(&render::<Rgba32>(
            font,
            text,
            width,
            height,
            fg,
            Rgba::new(bg.r, bg.g, bg.b, 0xff),
        )?),
    };
    write_ppm(&canvas.output, width, height, &rgb)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut config_path: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--list" | "-l" => {
                fonts::registry()
                    .write_table(&mut io::stdout().lock())
                    .context("Failed to write font table")?;
                return Ok(());
            }
            "--list-args" | "-a" => {
                fonts::registry()
                    .write_args(&mut io::stdout().lock())
                    .context("Failed to write font arguments")?;
                return Ok(());
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other if other.starts_with('-') => bail!("Unknown option {}\n{}", other, USAGE),
            path => {
                if config_path.is_some() {
                    bail!("Only one config file may be given\n{}", USAGE);
                }
                config_path = Some(PathBuf::from(path));
            }
        }
    }

    let config = match &config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::load(path)?
        }
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    run(&config)
}
