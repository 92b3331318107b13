//! Compiler for ASCII-art bitmap fonts.
//!
//! A font source is a list of glyph records. Each starts with a header line
//! `:<char>,<xAdvance>,<xOffset>,<yOffset>` followed by pixel rows where a
//! space is an unset pixel and any other character a set one:
//!
//! ```text
//! :A,6,0,-3
//!  XX
//! X  X
//!  XX
//! ```
//!
//! [`compile`] turns such a source into a [`Font`]: every glyph packed MSB
//! first into bytes and the bytes of all glyphs concatenated into one bitmap.

use std::{fs, path::Path};

use log::{debug, info};

mod char_code;
mod error;
mod font;
mod glyph;
pub mod packer;
pub mod parser;
pub mod render;

pub use char_code::CharCode;
pub use error::{FontError, Result};
pub use font::Font;
pub use glyph::{Glyph, Metric};
pub use render::{render, Format, LINE_HEIGHT};

/// Parses and packs every glyph of `source` in order.
pub fn glyphs(source: &str) -> impl Iterator<Item = Glyph> + '_ {
    parser::records(source).map(Glyph::from_record)
}

/// Compiles a font source held in memory.
pub fn compile(source: &str) -> Font {
    Font::assemble(glyphs(source))
}

/// Reads a font source, failing on unreadable or empty files.
pub fn read_source(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if source.is_empty() {
        return Err(FontError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!("Read {} bytes from {}", source.len(), path.display());
    Ok(source)
}

/// Reads and compiles the font source at `path`.
pub fn load(path: &Path) -> Result<Font> {
    let font = compile(&read_source(path)?);

    info!(
        "Compiled {} glyphs into {} bitmap bytes",
        font.glyphs.len(),
        font.bitmap.len()
    );
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_compiles_the_sample_glyph() {
        let font = compile(":A,6,0,0\n XX \nX  X\n XX \n");

        assert_eq!(font.glyphs.len(), 1);
        let glyph = &font.glyphs[0];
        assert_eq!((glyph.width, glyph.height), (4, 3));
        assert_eq!(glyph.bits(), "011010010110");
        assert_eq!(glyph.bytes, vec![0x69, 0x60]);
        assert_eq!(glyph.bitmap_offset, 0);
        assert_eq!(
            font.range(),
            Some((&CharCode::Code(65), &CharCode::Code(65)))
        );
    }

    #[test]
    fn it_compiles_sources_without_headers_to_nothing() {
        assert!(compile("").is_empty());
        assert!(compile("\n\n  #\n").is_empty());
    }

    #[test]
    fn it_reports_missing_files() {
        let err = load(Path::new("does/not/exist.font")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }
}
