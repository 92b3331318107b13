use byteorder::{ByteOrder, LittleEndian};
use core::fmt;

use crate::GfxGlyph;

const MAGIC: &[u8; 4] = b"MUFT";
const HEADER_SIZE: usize = 16;
const GLYPH_SIZE: usize = 16;

/// Code stored for glyphs without a resolved character.
pub const NO_CODE: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobError {
    BadMagic,
    Truncated { needed: usize, len: usize },
    GlyphOutOfBounds { index: usize },
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobError::BadMagic => write!(f, "Not a mufont blob"),
            BlobError::Truncated { needed, len } => {
                write!(f, "Blob truncated: need {needed} bytes, got {len}")
            }
            BlobError::GlyphOutOfBounds { index } => {
                write!(f, "Glyph {index} points outside the bitmap")
            }
        }
    }
}

/// Font read in place from a `mufont --format blob` container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobFont<'a> {
    bytes: &'a [u8],
    glyph_count: usize,
    bitmap_start: usize,
    bitmap_len: usize,
}

impl<'a> BlobFont<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, BlobError> {
        let check = |needed: usize| {
            if bytes.len() < needed {
                Err(BlobError::Truncated {
                    needed,
                    len: bytes.len(),
                })
            } else {
                Ok(())
            }
        };

        check(HEADER_SIZE)?;
        if &bytes[0..4] != MAGIC {
            return Err(BlobError::BadMagic);
        }

        let glyph_count = LittleEndian::read_u16(&bytes[4..6]) as usize;
        let mut cursor = HEADER_SIZE + glyph_count * GLYPH_SIZE;
        check(cursor + 4)?;
        let bitmap_len = LittleEndian::read_u32(&bytes[cursor..cursor + 4]) as usize;
        cursor += 4;
        check(cursor.checked_add(bitmap_len).unwrap_or(usize::MAX))?;

        let font = BlobFont {
            bytes,
            glyph_count,
            bitmap_start: cursor,
            bitmap_len,
        };

        for index in 0..glyph_count {
            let glyph = font.read_glyph(index);
            let end = usize::try_from(glyph.bitmap_offset)
                .ok()
                .and_then(|offset| offset.checked_add(glyph.byte_len()));
            if end.map_or(true, |end| end > bitmap_len) {
                return Err(BlobError::GlyphOutOfBounds { index });
            }
        }

        Ok(font)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    pub fn first(&self) -> u32 {
        LittleEndian::read_u32(&self.bytes[6..10])
    }

    pub fn last(&self) -> u32 {
        LittleEndian::read_u32(&self.bytes[10..14])
    }

    pub fn y_advance(&self) -> u8 {
        self.bytes[14]
    }

    pub fn bitmap(&self) -> &'a [u8] {
        &self.bytes[self.bitmap_start..self.bitmap_start + self.bitmap_len]
    }

    pub fn glyph(&self, index: usize) -> Option<GfxGlyph> {
        (index < self.glyph_count).then(|| self.read_glyph(index))
    }

    pub fn glyphs(&self) -> impl Iterator<Item = GfxGlyph> + '_ {
        (0..self.glyph_count).map(|index| self.read_glyph(index))
    }

    pub fn find(&self, c: char) -> Option<GfxGlyph> {
        self.glyphs().find(|g| g.code == c as u32)
    }

    fn read_glyph(&self, index: usize) -> GfxGlyph {
        let cursor = HEADER_SIZE + index * GLYPH_SIZE;
        let entry = &self.bytes[cursor..cursor + GLYPH_SIZE];

        GfxGlyph {
            code: LittleEndian::read_u32(&entry[0..4]),
            bitmap_offset: LittleEndian::read_u32(&entry[4..8]),
            width: LittleEndian::read_u16(&entry[8..10]),
            height: LittleEndian::read_u16(&entry[10..12]),
            x_advance: entry[12] as i8,
            x_offset: entry[13] as i8,
            y_offset: entry[14] as i8,
        }
    }
}
