use core::{fmt, str::FromStr};

use crate::{
    char_code::CharCode,
    error::{FontError, Result},
    packer::{self, PackedBitmap},
    parser::RawRecord,
};

/// Header number kept exactly as written in the font source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metric(String);

impl Metric {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the text as a number. Empty text reads as zero.
    pub fn parse<T: FromStr + Default>(&self, field: &'static str, code: &CharCode) -> Result<T> {
        if self.0.is_empty() {
            return Ok(T::default());
        }

        self.0.trim().parse().map_err(|_| FontError::InvalidMetric {
            field,
            text: self.0.clone(),
            code: code.to_string(),
        })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub char_code: CharCode,
    pub x_advance: Metric,
    pub x_offset: Metric,
    pub y_offset: Metric,
    /// Normalized pixel rows, all `width` characters long.
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
    /// Byte offset into the font bitmap, set by [`crate::Font::assemble`].
    pub bitmap_offset: usize,
}

impl Glyph {
    /// Finalizes a raw record: resolves the header and packs the grid.
    pub fn from_record(record: RawRecord) -> Self {
        let header = record.header();
        let char_code = CharCode::resolve(header.token);
        let x_advance = Metric::new(header.x_advance);
        let x_offset = Metric::new(header.x_offset);
        let y_offset = Metric::new(header.y_offset);

        let PackedBitmap {
            rows,
            width,
            height,
            bytes,
        } = packer::pack(record.rows);

        Glyph {
            char_code,
            x_advance,
            x_offset,
            y_offset,
            rows,
            width,
            height,
            bytes,
            bitmap_offset: 0,
        }
    }

    pub fn bits(&self) -> String {
        packer::bit_string(&packer::grid_bits(&self.rows))
    }

    pub fn bit_count(&self) -> usize {
        self.width * self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.chars().nth(x))
            .map_or(false, |c| c != packer::OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_metrics_lazily() {
        let code = CharCode::Code(65);

        assert_eq!(Metric::new("6").parse::<i8>("xAdvance", &code).unwrap(), 6);
        assert_eq!(Metric::new("-3").parse::<i8>("yOffset", &code).unwrap(), -3);
        assert_eq!(Metric::new("").parse::<i8>("xOffset", &code).unwrap(), 0);

        let err = Metric::new("wide").parse::<i8>("xAdvance", &code).unwrap_err();
        assert_eq!(err.to_string(), "Invalid xAdvance 'wide' for glyph 0x41");
    }

    #[test]
    fn it_builds_glyphs_from_records() {
        let record = RawRecord {
            header: ":A,6,0,-7".to_string(),
            rows: vec![" XX".into(), "X  X".into(), " XX".into()],
        };
        let glyph = Glyph::from_record(record);

        assert_eq!(glyph.char_code, CharCode::Code(65));
        assert_eq!(glyph.x_advance.as_str(), "6");
        assert_eq!(glyph.y_offset.as_str(), "-7");
        assert_eq!((glyph.width, glyph.height), (4, 3));
        assert_eq!(glyph.bits(), "011010010110");
        assert_eq!(glyph.bytes, vec![0x69, 0x60]);
        assert!(glyph.pixel(0, 1));
        assert!(!glyph.pixel(3, 2));
        assert!(!glyph.pixel(9, 9));
    }
}
