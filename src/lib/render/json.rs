use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{error::Result, font::Font, glyph::Glyph, packer::OFF};

/// Replacement for set pixels in the `graph` rows.
pub const SET_PIXEL: char = '⬤';

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonGlyph<'a> {
    char_code: Option<i64>,
    x_advance: &'a str,
    x_offset: &'a str,
    y_offset: &'a str,
    graph: Vec<String>,
    bytes: &'a [u8],
    width: usize,
    height: usize,
    bits: String,
}

impl<'a> From<&'a Glyph> for JsonGlyph<'a> {
    fn from(glyph: &'a Glyph) -> Self {
        let graph = glyph
            .rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if c == OFF { OFF } else { SET_PIXEL })
                    .collect::<String>()
            })
            .collect();

        JsonGlyph {
            char_code: glyph.char_code.value(),
            x_advance: glyph.x_advance.as_str(),
            x_offset: glyph.x_offset.as_str(),
            y_offset: glyph.y_offset.as_str(),
            graph,
            bytes: &glyph.bytes,
            width: glyph.width,
            height: glyph.height,
            bits: glyph.bits(),
        }
    }
}

pub fn write<W: Write>(font: &Font, out: &mut W) -> Result<()> {
    let glyphs: Vec<JsonGlyph> = font.glyphs.iter().map(JsonGlyph::from).collect();

    let mut serializer = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"    "));
    glyphs.serialize(&mut serializer)?;
    writeln!(out)?;

    Ok(())
}
