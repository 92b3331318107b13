use std::io::Write;

use log::warn;

use super::LINE_HEIGHT;
use crate::{char_code::CharCode, error::Result, font::Font, glyph::Metric};

const BYTES_PER_LINE: usize = 16;

/// C literal for a code in the font descriptor.
fn code_literal(code: &CharCode) -> String {
    match code {
        CharCode::Code(code) => format!("0x{code:x}"),
        CharCode::Unresolved => CharCode::SENTINEL.to_string(),
        CharCode::Invalid(token) => {
            warn!("Writing invalid character code {token:?} as {}", CharCode::SENTINEL);
            CharCode::SENTINEL.to_string()
        }
    }
}

fn metric_literal(metric: &Metric) -> &str {
    if metric.is_empty() {
        "0"
    } else {
        metric.as_str()
    }
}

/// Character shown in the comment after a glyph entry.
fn comment_char(code: &CharCode) -> String {
    match code.as_char() {
        Some(c) if c.is_control() => c.escape_default().to_string(),
        Some(c) => c.to_string(),
        None => "?".to_string(),
    }
}

/// Writes the bitmap array, the glyph table and the `GFXfont` descriptor.
pub fn write<W: Write>(font: &Font, name: &str, out: &mut W) -> Result<()> {
    write!(
        out,
        "// {name}.h - created with mufont, the muwerk font compiler\n\n\
         const uint8_t {name}_bitmaps[] PROGMEM = {{"
    )?;

    let size = font.bitmap.len();
    for (i, byte) in font.bitmap.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            write!(out, "\n\t0x{byte:02x}")?;
        } else {
            write!(out, " 0x{byte:02x}")?;
        }
        if i + 1 < size {
            write!(out, ",")?;
        }
    }
    write!(out, "}};\n\n")?;

    writeln!(out, "const GFXglyph {name}_glyphs[] PROGMEM = {{")?;
    for glyph in &font.glyphs {
        writeln!(
            out,
            "\t{{0x{:04x}, {}, {}, {}, {}, {}}},\t // {} '{}'",
            glyph.bitmap_offset,
            glyph.width,
            glyph.height,
            metric_literal(&glyph.x_advance),
            metric_literal(&glyph.x_offset),
            metric_literal(&glyph.y_offset),
            glyph.char_code,
            comment_char(&glyph.char_code),
        )?;
    }
    write!(out, "}};\n\n")?;

    let (first, last) = match font.range() {
        Some((first, last)) => (code_literal(first), code_literal(last)),
        None => ("0x0".to_string(), "0x0".to_string()),
    };

    write!(
        out,
        "const GFXfont {name} PROGMEM = {{\n\
         \t(uint8_t *) {name}_bitmaps,\n\
         \t(GFXglyph *) {name}_glyphs,\n\
         \t{first},\n\
         \t{last},\n\
         \t{LINE_HEIGHT}\n\
         }};\n\
         \n\
         // Approx. {} bytes\n",
        size + 8 * font.glyphs.len() + 8
    )?;

    Ok(())
}
