// src/codec.rs

//! Glyph bitmap codec.
//!
//! A bitmap is either raw row-major intensities or, when the font's
//! `compressed` flag is set, a stream of runs. Each run starts with a header
//! byte:
//!
//! ```text
//!   7 6 5 4 3 2 1 0
//!  +---+-----------+
//!  |cls| length-1  |     cls 0: literal, `length` raw bytes follow
//!  +---+-----------+     cls 1: `length` pixels of 0x00, no payload
//!                        cls 2: `length` pixels of 0xFF, no payload
//!                        cls 3: reserved
//! ```
//!
//! Runs therefore span 1 to 64 pixels. Decoding is lazy: [`Pixels`] yields
//! one intensity per call and never materialises the bitmap.
//!
//! Malformed input is not an error. Bytes missing from a truncated stream, or
//! from a raw bitmap shorter than `cols * rows`, decode as 0. The reserved
//! class decodes as 0 and consumes no payload. A bitmap decoded with the wrong
//! compression flag therefore produces meaningless but well-defined pixels.

/// Longest run a single header can describe.
pub const MAX_RUN: usize = 64;

const LENGTH_MASK: u8 = 0x3f;
const CLASS_SHIFT: u32 = 6;

/// Pixel class of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunClass {
    Literal = 0,
    Zero = 1,
    Max = 2,
    Reserved = 3,
}

impl RunClass {
    /// Extracts the class from a run header byte.
    pub const fn from_header(header: u8) -> Self {
        match header >> CLASS_SHIFT {
            0 => RunClass::Literal,
            1 => RunClass::Zero,
            2 => RunClass::Max,
            _ => RunClass::Reserved,
        }
    }

    /// Class the encoder assigns to a raw intensity.
    pub const fn classify(value: u8) -> Self {
        match value {
            0x00 => RunClass::Zero,
            0xff => RunClass::Max,
            _ => RunClass::Literal,
        }
    }

    /// Builds a header byte for a run of `len` pixels (1..=64).
    pub const fn header(self, len: usize) -> u8 {
        debug_assert!(len >= 1 && len <= MAX_RUN);
        ((self as u8) << CLASS_SHIFT) | ((len - 1) as u8 & LENGTH_MASK)
    }

    /// Intensity emitted by runs without payload.
    const fn fill(self) -> u8 {
        match self {
            RunClass::Max => 0xff,
            _ => 0x00,
        }
    }
}

/// Decode cursor over a run-length stream.
#[derive(Debug, Clone)]
pub struct RleDecoder<'a> {
    data: &'a [u8],
    cursor: usize,
    remaining: usize,
    class: RunClass,
}

impl<'a> RleDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: 0,
            remaining: 0,
            class: RunClass::Zero,
        }
    }

    /// Loads the next run header. Returns false once the stream is exhausted.
    fn load_run(&mut self) -> bool {
        let Some(&header) = self.data.get(self.cursor) else {
            return false;
        };
        self.cursor += 1;
        self.class = RunClass::from_header(header);
        self.remaining = usize::from(header & LENGTH_MASK) + 1;
        true
    }

    /// Advances past `n` pixels without producing them.
    pub fn skip(&mut self, mut n: usize) {
        while n > 0 {
            if self.remaining == 0 && !self.load_run() {
                return;
            }
            let take = n.min(self.remaining);
            if self.class == RunClass::Literal {
                self.cursor += take;
            }
            self.remaining -= take;
            n -= take;
        }
    }
}

impl Iterator for RleDecoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 && !self.load_run() {
            return None;
        }
        self.remaining -= 1;
        if self.class == RunClass::Literal {
            let value = self.data.get(self.cursor).copied().unwrap_or(0);
            self.cursor += 1;
            Some(value)
        } else {
            Some(self.class.fill())
        }
    }
}

/// Intensity source for one glyph draw.
#[derive(Debug, Clone)]
pub enum Pixels<'a> {
    Raw { data: &'a [u8], cursor: usize },
    Rle(RleDecoder<'a>),
}

impl<'a> Pixels<'a> {
    /// Opens a bitmap in the encoding selected by the font's flag.
    pub fn new(bitmap: &'a [u8], compressed: bool) -> Self {
        if compressed {
            Pixels::Rle(RleDecoder::new(bitmap))
        } else {
            Pixels::Raw {
                data: bitmap,
                cursor: 0,
            }
        }
    }

    /// Next intensity in row-major order. Past the end of the data this
    /// keeps returning 0.
    pub fn next_value(&mut self) -> u8 {
        match self {
            Pixels::Raw { data, cursor } => {
                let value = data.get(*cursor).copied().unwrap_or(0);
                *cursor += 1;
                value
            }
            Pixels::Rle(decoder) => decoder.next().unwrap_or(0),
        }
    }

    /// Advances past `n` pixels, e.g. a row clipped off the canvas.
    pub fn skip(&mut self, n: usize) {
        match self {
            Pixels::Raw { cursor, .. } => *cursor += n,
            Pixels::Rle(decoder) => decoder.skip(n),
        }
    }
}

/// Run-length encodes row-major intensities.
///
/// This is the generator side of the format and is not used while rendering.
pub fn encode(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    encode_into(raw, &mut out);
    out
}

/// Appends the encoding of `raw` to `out`.
pub fn encode_into(raw: &[u8], out: &mut Vec<u8>) {
    let mut start = 0;
    while start < raw.len() {
        let class = RunClass::classify(raw[start]);
        let len = raw[start..]
            .iter()
            .take(MAX_RUN)
            .take_while(|&&v| RunClass::classify(v) == class)
            .count();

        out.push(class.header(len));
        if class == RunClass::Literal {
            out.extend_from_slice(&raw[start..start + len]);
        }
        start += len;
    }
}

/// Decodes exactly `count` pixels into a new vector.
pub fn decode(encoded: &[u8], count: usize) -> Vec<u8> {
    let mut pixels = Pixels::new(encoded, true);
    (0..count).map(|_| pixels.next_value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        // Contract: class in the top two bits, length-1 in the bottom six.
        assert_eq!(RunClass::Literal.header(1), 0x00);
        assert_eq!(RunClass::Zero.header(1), 0x40);
        assert_eq!(RunClass::Max.header(64), 0xbf);
        assert_eq!(RunClass::Zero.header(10), 0x49);
        assert_eq!(RunClass::from_header(0xc5), RunClass::Reserved);
    }

    #[test]
    fn test_classify() {
        assert_eq!(RunClass::classify(0x00), RunClass::Zero);
        assert_eq!(RunClass::classify(0xff), RunClass::Max);
        assert_eq!(RunClass::classify(0x01), RunClass::Literal);
        assert_eq!(RunClass::classify(0xfe), RunClass::Literal);
    }

    #[test]
    fn test_encode_all_zero_row() {
        let raw = [0u8; 12];
        let encoded = encode(&raw);
        assert_eq!(encoded, vec![RunClass::Zero.header(12)]);
        assert_eq!(decode(&encoded, raw.len()), raw);
    }

    #[test]
    fn test_encode_all_max_row() {
        let raw = [0xffu8; 7];
        let encoded = encode(&raw);
        assert_eq!(encoded, vec![RunClass::Max.header(7)]);
        assert_eq!(decode(&encoded, raw.len()), raw);
    }

    #[test]
    fn test_encode_splits_long_runs() {
        // 100 zeros, 70 distinct literals, 65 maxes: every class overflows 64.
        let mut raw = vec![0u8; 100];
        raw.extend((0..70).map(|i| 1 + (i % 200) as u8));
        raw.extend(std::iter::repeat(0xff).take(65));

        let encoded = encode(&raw);

        assert_eq!(encoded[0], RunClass::Zero.header(64));
        assert_eq!(encoded[1], RunClass::Zero.header(36));
        assert_eq!(encoded[2], RunClass::Literal.header(64));
        assert_eq!(&encoded[3..67], &raw[100..164]);
        assert_eq!(encoded[67], RunClass::Literal.header(6));
        assert_eq!(&encoded[68..74], &raw[164..170]);
        assert_eq!(encoded[74], RunClass::Max.header(64));
        assert_eq!(encoded[75], RunClass::Max.header(1));
        assert_eq!(encoded.len(), 76);

        assert_eq!(decode(&encoded, raw.len()), raw);
    }

    #[test]
    fn test_round_trip_mixed_glyph() {
        // A small anti-aliased "o".
        let raw: [u8; 20] = [
            0x00, 0x40, 0xff, 0x40, 0x00, //
            0x40, 0xff, 0x00, 0xff, 0x40, //
            0x40, 0xff, 0x00, 0xff, 0x40, //
            0x00, 0x40, 0xff, 0x40, 0x00, //
        ];
        assert_eq!(decode(&encode(&raw), raw.len()), raw);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode(&[]).is_empty());
        assert!(decode(&[], 0).is_empty());
    }

    #[test]
    fn test_reserved_class_decodes_as_background_without_payload() {
        // Reserved run of 3, then a literal run of 1.
        let stream = [0xc2, RunClass::Literal.header(1), 0x80];
        assert_eq!(decode(&stream, 4), vec![0, 0, 0, 0x80]);
    }

    #[test]
    fn test_truncated_stream_pads_with_zero() {
        // Literal run promises 4 bytes but only 2 are present.
        let stream = [RunClass::Literal.header(4), 0x11, 0x22];
        assert_eq!(decode(&stream, 6), vec![0x11, 0x22, 0, 0, 0, 0]);
    }

    #[test]
    fn test_raw_bitmap_short_data_pads_with_zero() {
        let mut pixels = Pixels::new(&[7, 8], false);
        assert_eq!(pixels.next_value(), 7);
        assert_eq!(pixels.next_value(), 8);
        assert_eq!(pixels.next_value(), 0);
    }

    #[test]
    fn test_compressed_data_through_raw_path_is_defined() {
        // Flag mismatch: the header bytes come back verbatim as intensities.
        let raw = [0x00, 0x00, 0xff, 0x30];
        let encoded = encode(&raw);
        let mut pixels = Pixels::new(&encoded, false);
        let seen: Vec<u8> = (0..raw.len()).map(|_| pixels.next_value()).collect();
        assert_eq!(seen, vec![0x41, 0x80, 0x00, 0x30]);
    }

    #[test]
    fn test_raw_data_through_rle_path_is_defined() {
        // Flag mismatch the other way: arbitrary bytes parsed as headers.
        let raw = [0xff, 0x12, 0xc0, 0x00, 0x7f];
        let out = decode(&raw, 200);
        assert_eq!(out.len(), 200);
    }

    #[test]
    fn test_skip_matches_sequential_decode() {
        let mut raw = vec![0u8; 30];
        raw.extend((1..=40).map(|v| v as u8));
        raw.extend([0xff; 20]);
        let encoded = encode(&raw);

        for n in [0, 1, 29, 30, 31, 69, 70, 75, 90] {
            let mut skipped = Pixels::new(&encoded, true);
            skipped.skip(n);
            let rest: Vec<u8> = (n..raw.len()).map(|_| skipped.next_value()).collect();
            assert_eq!(rest, raw[n..], "after skipping {n}");
        }
    }

    #[test]
    fn test_raw_skip() {
        let mut pixels = Pixels::new(&[1, 2, 3, 4], false);
        pixels.skip(2);
        assert_eq!(pixels.next_value(), 3);
    }
}
