use std::io::Write;

use crate::{error::Result, font::Font};

pub mod blob;
pub mod header;
pub mod json;

/// Height of a text line in pixels, written into every generated font.
pub const LINE_HEIGHT: u8 = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// C declarations for an Adafruit GFX font.
    #[default]
    Header,
    /// Per-glyph diagnostic dump.
    Json,
    /// Binary container readable by `mufont_gfx::BlobFont`.
    Blob,
}

/// Writes `font` as `format`. `name` prefixes the generated C symbols.
pub fn render<W: Write>(font: &Font, format: Format, name: &str, out: &mut W) -> Result<()> {
    match format {
        Format::Header => header::write(font, name, out),
        Format::Json => json::write(font, out),
        Format::Blob => blob::write(font, out),
    }
}
