use fontem::{
    calculate_box, draw_char, draw_string, fonts, DrawError, Font, Glyph, GlyphCode,
    IntensityCanvas, Kerning, Rgb, Rgb24Canvas, NO_PREVIOUS,
};

const A: GlyphCode = b'A' as GlyphCode;
const B: GlyphCode = b'B' as GlyphCode;
const SOLID: [u8; 9] = [0xff; 9];
const B_KERNING: [Kerning; 2] = [Kerning { left: A, offset: -2 }, Kerning::END];

fn pair_glyphs() -> (Glyph<'static>, Glyph<'static>) {
    let a = Glyph {
        code: A,
        left: 1,
        top: 3,
        advance: 10,
        cols: 3,
        rows: 3,
        bitmap: &SOLID,
        kerning: None,
    };
    let b = Glyph {
        code: B,
        left: 0,
        kerning: Some(&B_KERNING),
        ..a
    };
    (a, b)
}

fn pair_font<'a>(table: &'a [Option<&'a Glyph<'a>>]) -> Font<'a> {
    Font {
        name: "Pair",
        style: "Regular",
        size: 10,
        dpi: 72,
        count: 2,
        max: B,
        ascender: 3,
        descender: -2,
        height: 5,
        glyphs: table,
        compressed: false,
    }
}

fn rows(buf: &[u8], width: usize) -> Vec<String> {
    buf.chunks(width)
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect()
}

#[test]
fn test_kerned_pair_lands_at_adjusted_offset() {
    let (a, b) = pair_glyphs();
    let mut table = vec![None; usize::from(B) + 1];
    table[usize::from(A)] = Some(&a);
    table[usize::from(B)] = Some(&b);
    let font = pair_font(&table);

    let mut buf = vec![b' '; 30 * 10];
    let mut canvas = IntensityCanvas::new(&mut buf, 30, 10).unwrap();
    let drawn = draw_string(&mut canvas, &font, 0, 0, "AB", NO_PREVIOUS, ());

    assert_eq!(drawn.advance, 18);
    assert_eq!(drawn.remainder, "");

    let expected = format!(" XXX    XXX{}", " ".repeat(19));
    let lines = rows(&buf, 30);
    for line in &lines[..3] {
        assert_eq!(line, &expected);
    }
    for line in &lines[3..] {
        assert!(line.bytes().all(|b| b == b' '));
    }

    let text_box = calculate_box(&font, "AB");
    assert_eq!((text_box.width, text_box.height, text_box.count), (18, 5, 2));
}

#[test]
fn test_draw_char_sequence_matches_draw_string() {
    let (a, b) = pair_glyphs();
    let mut table = vec![None; usize::from(B) + 1];
    table[usize::from(A)] = Some(&a);
    table[usize::from(B)] = Some(&b);
    let font = pair_font(&table);

    let mut by_char = vec![b' '; 30 * 10];
    {
        let mut canvas = IntensityCanvas::new(&mut by_char, 30, 10).unwrap();
        let first = draw_char(&mut canvas, Some(&font), 0, 0, A, NO_PREVIOUS, ()).unwrap();
        let second = draw_char(&mut canvas, Some(&font), first, 0, B, A, ()).unwrap();
        assert_eq!((first, second), (10, 8));
        assert_eq!(
            draw_char(&mut canvas, None, 0, 0, A, NO_PREVIOUS, ()),
            Err(DrawError::NoFont)
        );
    }

    let mut by_string = vec![b' '; 30 * 10];
    let mut canvas = IntensityCanvas::new(&mut by_string, 30, 10).unwrap();
    draw_string(&mut canvas, &font, 0, 0, "AB", NO_PREVIOUS, ());

    assert_eq!(by_char, by_string);
}

#[test]
fn test_builtin_raw_and_rle_render_identically() {
    let text = "Hello, World! {fontem} 0123456789";
    let raw = fonts::registry()
        .find_with_compression("Pixel", None, 8, Some(false))
        .unwrap();
    let rle = fonts::registry()
        .find_with_compression("Pixel", None, 8, Some(true))
        .unwrap();

    let size = calculate_box(raw, text);
    assert_eq!(size, calculate_box(rle, text));
    let (width, height) = (size.width as usize, size.height as usize);

    let render = |font| {
        let mut buf = vec![0u8; width * height * 3];
        let mut canvas = Rgb24Canvas::new(&mut buf, width, height).unwrap();
        canvas.fill(Rgb::new(10, 20, 30));
        let drawn = draw_string(&mut canvas, font, 0, 0, text, NO_PREVIOUS, Rgb::new(250, 200, 0));
        assert_eq!(drawn.remainder, "");
        assert_eq!(drawn.advance, size.width);
        buf
    };

    let raw_pixels = render(raw);
    assert_eq!(raw_pixels, render(rle));
    assert!(raw_pixels.chunks(3).any(|px| px == [250, 200, 0]));
}

#[test]
fn test_builtin_font_kerns_av() {
    let font = &fonts::PIXEL_8;
    assert_eq!(calculate_box(font, "AV").width, 15);
    assert_eq!(calculate_box(font, "A V").width, 24);
}

#[test]
fn test_caller_wraps_with_remainder() {
    let font = &fonts::PIXEL_8;
    let (width, line) = (24, 8);
    let mut buf = vec![b' '; width * line * 2];
    let mut canvas = IntensityCanvas::new(&mut buf, width, line * 2).unwrap();

    let first = draw_string(&mut canvas, font, 0, 0, "HIJKL", NO_PREVIOUS, ());
    assert_eq!(first.drawn, 3);
    assert_eq!(first.remainder, "KL");

    let second = draw_string(&mut canvas, font, 0, line as i32, first.remainder, NO_PREVIOUS, ());
    assert_eq!(second.drawn, 2);
    assert_eq!(second.remainder, "");
    assert_eq!(second.advance, 16);

    // Second line has ink only in the first two cells.
    let lines = rows(&buf, width);
    assert!(lines[line..].iter().any(|l| l[..16].contains('X')));
    assert!(lines[line..].iter().all(|l| l[16..].trim().is_empty()));
}
