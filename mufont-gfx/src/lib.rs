#![no_std]

//! Runtime side of mufont: the font layout embedded into firmware.
//!
//! [`GfxFont`] mirrors the Adafruit GFX `GFXfont` descriptor and is usually
//! produced at compile time with [`include_font!`]. [`BlobFont`] reads the
//! binary container written by `mufont --format blob`.

extern crate self as mufont_gfx;

pub use mufont_macros::include_font;

mod blob;

pub use blob::{BlobError, BlobFont, NO_CODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GfxFont<'a> {
    pub bitmap: &'a [u8],
    pub glyphs: &'a [GfxGlyph],
    /// Code of the first glyph in source order.
    pub first: u32,
    /// Code of the last glyph in source order.
    pub last: u32,
    pub y_advance: u8,
}

impl<'a> GfxFont<'a> {
    pub fn glyph(&self, c: char) -> Option<&'a GfxGlyph> {
        self.glyphs.iter().find(|g| g.code == c as u32)
    }

    pub fn pixel(&self, glyph: &GfxGlyph, x: u16, y: u16) -> bool {
        glyph.pixel(self.bitmap, x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GfxGlyph {
    pub code: u32,
    pub bitmap_offset: u32,
    pub width: u16,
    pub height: u16,
    pub x_advance: i8,
    pub x_offset: i8,
    pub y_offset: i8,
}

impl GfxGlyph {
    /// Number of bitmap bytes used by this glyph.
    pub fn byte_len(&self) -> usize {
        (usize::from(self.width) * usize::from(self.height) + 7) / 8
    }

    /// Reads one pixel from `bitmap`, rows packed back to back, MSB first.
    /// Coordinates outside the glyph read as unset.
    pub fn pixel(&self, bitmap: &[u8], x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        let bit = usize::from(y) * usize::from(self.width) + usize::from(x);
        usize::try_from(self.bitmap_offset)
            .ok()
            .and_then(|offset| offset.checked_add(bit / 8))
            .and_then(|index| bitmap.get(index))
            .map_or(false, |byte| byte & (0x80 >> (bit % 8)) != 0)
    }
}
