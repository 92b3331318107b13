use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::LINE_HEIGHT;
use crate::{
    char_code::CharCode,
    error::{FontError, Result},
    font::Font,
};

pub const MAGIC: &[u8; 4] = b"MUFT";
/// Stored in place of a code that did not resolve.
pub const NO_CODE: u32 = u32::MAX;

fn code_or_none(code: &CharCode) -> u32 {
    code.code().unwrap_or(NO_CODE)
}

fn fit<T: TryFrom<usize>>(what: &'static str, value: usize) -> Result<T> {
    T::try_from(value).map_err(|_| FontError::OutOfRange { what, value })
}

/// Writes the little-endian font container: header, glyph table, bitmap.
pub fn write<W: Write>(font: &Font, out: &mut W) -> Result<()> {
    let (first, last) = font
        .range()
        .map_or((NO_CODE, NO_CODE), |(f, l)| (code_or_none(f), code_or_none(l)));

    out.write_all(MAGIC)?;
    out.write_u16::<LittleEndian>(fit("glyph count", font.glyphs.len())?)?;
    out.write_u32::<LittleEndian>(first)?;
    out.write_u32::<LittleEndian>(last)?;
    out.write_u8(LINE_HEIGHT)?;
    out.write_u8(0)?;

    for glyph in &font.glyphs {
        let code = &glyph.char_code;
        out.write_u32::<LittleEndian>(code_or_none(code))?;
        out.write_u32::<LittleEndian>(fit("bitmap offset", glyph.bitmap_offset)?)?;
        out.write_u16::<LittleEndian>(fit("glyph width", glyph.width)?)?;
        out.write_u16::<LittleEndian>(fit("glyph height", glyph.height)?)?;
        out.write_i8(glyph.x_advance.parse("xAdvance", code)?)?;
        out.write_i8(glyph.x_offset.parse("xOffset", code)?)?;
        out.write_i8(glyph.y_offset.parse("yOffset", code)?)?;
        out.write_u8(0)?;
    }

    out.write_u32::<LittleEndian>(fit("bitmap length", font.bitmap.len())?)?;
    out.write_all(&font.bitmap)?;

    Ok(())
}
