use hashbrown::HashSet;
use log::warn;

use crate::{char_code::CharCode, glyph::Glyph};

/// Glyphs in source order plus the bitmap blob they point into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    pub glyphs: Vec<Glyph>,
    pub bitmap: Vec<u8>,
}

impl Font {
    /// Concatenates the packed glyphs and assigns each its bitmap offset.
    pub fn assemble(glyphs: impl IntoIterator<Item = Glyph>) -> Self {
        let mut font = Font::default();
        let mut seen = HashSet::new();

        for mut glyph in glyphs {
            match &glyph.char_code {
                CharCode::Code(code) => {
                    if !seen.insert(*code) {
                        warn!("Glyph 0x{code:x} is defined more than once");
                    }
                }
                CharCode::Unresolved => {
                    warn!("Glyph #{} has an unresolved character", font.glyphs.len())
                }
                CharCode::Invalid(token) => {
                    warn!("Glyph #{} has an invalid code {token:?}", font.glyphs.len())
                }
            }

            glyph.bitmap_offset = font.bitmap.len();
            font.bitmap.extend_from_slice(&glyph.bytes);
            font.glyphs.push(glyph);
        }

        font
    }

    /// Codes of the first and last glyph in source order.
    pub fn range(&self) -> Option<(&CharCode, &CharCode)> {
        let first = self.glyphs.first()?;
        let last = self.glyphs.last()?;
        Some((&first.char_code, &last.char_code))
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Looks a glyph up by code point, first definition wins.
    pub fn glyph(&self, code: u32) -> Option<&Glyph> {
        self.glyphs
            .iter()
            .find(|g| g.char_code == CharCode::Code(code))
    }
}
