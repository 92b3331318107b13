use mufont::{Font, Glyph};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use std::{ops::RangeInclusive, path::PathBuf};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Error, LitChar, LitStr, Result, Token,
};

/// Macro input: `"path" [, 'a'..='z' | 'x' ...]`.
struct IncludeFont {
    filename: LitStr,
    /// `None` selects every glyph.
    selection: Option<Vec<RangeInclusive<char>>>,
}

impl IncludeFont {
    fn contains(&self, c: char) -> bool {
        self.selection
            .as_ref()
            .map_or(true, |ranges| ranges.iter().any(|range| range.contains(&c)))
    }
}

impl Parse for IncludeFont {
    fn parse(input: ParseStream) -> Result<Self> {
        let filename = input.parse()?;

        let selection = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let ranges = Punctuated::<CharacterRange, Token![|]>::parse_separated_nonempty(input)?;
            Some(ranges.into_iter().map(|range| range.0).collect())
        } else {
            None
        };

        Ok(Self {
            filename,
            selection,
        })
    }
}

/// `'a'` or `'a'..='z'`. An inverted range is rejected at its end character.
struct CharacterRange(RangeInclusive<char>);

impl Parse for CharacterRange {
    fn parse(input: ParseStream) -> Result<Self> {
        let from = input.parse::<LitChar>()?.value();
        if !input.peek(Token![..=]) {
            return Ok(Self(from..=from));
        }

        input.parse::<Token![..=]>()?;
        let to_literal = input.parse::<LitChar>()?;
        let to = to_literal.value();
        if to < from {
            return Err(Error::new(
                to_literal.span(),
                format!("character range {from:?}..={to:?} is empty"),
            ));
        }

        Ok(Self(from..=to))
    }
}

/// Path of the runtime crate as seen from the calling crate.
fn runtime_crate() -> TokenStream2 {
    match crate_name("mufont-gfx") {
        Ok(FoundCrate::Name(name)) => {
            let name = format_ident!("{}", name);
            quote!(::#name)
        }
        // `mufont-gfx` itself, reachable through `extern crate self`
        _ => quote!(::mufont_gfx),
    }
}

fn number<T: TryFrom<usize>>(value: usize, what: &str, span: Span) -> Result<T> {
    T::try_from(value).map_err(|_| Error::new(span, format!("{what} {value} is too large")))
}

/// Keeps the glyphs selected by the macro input and packs them into a new
/// font so that offsets stay contiguous.
fn select_glyphs(input: &IncludeFont, font: Font) -> Result<Font> {
    let span = input.filename.span();
    let mut selected = Vec::new();

    for glyph in font.glyphs {
        match glyph.char_code.as_char() {
            Some(c) if input.contains(c) => selected.push(glyph),
            Some(_) => {}
            None if input.selection.is_some() => {}
            None => {
                return Err(Error::new(
                    span,
                    format!("glyph {} has no usable character code", glyph.char_code),
                ))
            }
        }
    }

    Ok(Font::assemble(selected))
}

fn glyph_literal(glyph: &Glyph, krate: &TokenStream2, span: Span) -> Result<TokenStream2> {
    let to_error = |err: mufont::FontError| Error::new(span, err.to_string());
    let code = &glyph.char_code;

    let character = code.code().unwrap_or_default();
    let bitmap_offset: u32 = number(glyph.bitmap_offset, "bitmap offset", span)?;
    let width: u16 = number(glyph.width, "glyph width", span)?;
    let height: u16 = number(glyph.height, "glyph height", span)?;
    let x_advance: i8 = glyph.x_advance.parse("xAdvance", code).map_err(to_error)?;
    let x_offset: i8 = glyph.x_offset.parse("xOffset", code).map_err(to_error)?;
    let y_offset: i8 = glyph.y_offset.parse("yOffset", code).map_err(to_error)?;

    Ok(quote! {
        #krate::GfxGlyph {
            code: #character,
            bitmap_offset: #bitmap_offset,
            width: #width,
            height: #height,
            x_advance: #x_advance,
            x_offset: #x_offset,
            y_offset: #y_offset,
        }
    })
}

fn expand(input: &IncludeFont) -> Result<TokenStream2> {
    let span = input.filename.span();

    let mut path = PathBuf::from(
        std::env::var_os("CARGO_MANIFEST_DIR")
            .ok_or_else(|| Error::new(span, "CARGO_MANIFEST_DIR is not set"))?,
    );
    path.push(input.filename.value());

    let source = mufont::read_source(&path).map_err(|err| Error::new(span, err.to_string()))?;
    let font = select_glyphs(input, mufont::compile(&source))?;

    let krate = runtime_crate();
    let glyphs = font
        .glyphs
        .iter()
        .map(|glyph| glyph_literal(glyph, &krate, span))
        .collect::<Result<Vec<_>>>()?;

    let (first, last) = font
        .range()
        .map(|(first, last)| (first.code(), last.code()))
        .map_or((0, 0), |(first, last)| {
            (first.unwrap_or_default(), last.unwrap_or_default())
        });
    let data = &font.bitmap;
    let y_advance = mufont::LINE_HEIGHT;
    let tracked = path.to_string_lossy().into_owned();

    Ok(quote! {
        {
            const _: &str = include_str!(#tracked);

            #krate::GfxFont {
                bitmap: &[ #( #data ),* ],
                glyphs: &[ #( #glyphs ),* ],
                first: #first,
                last: #last,
                y_advance: #y_advance,
            }
        }
    })
}

/// Compiles a font source at build time into a `mufont_gfx::GfxFont`.
///
/// ```ignore
/// const FONT: GfxFont = include_font!("fonts/small.font", 'A'..='Z' | ' ');
/// ```
///
/// The path is relative to the crate manifest. Without character ranges every
/// glyph is embedded and all of them need a valid character code.
#[proc_macro]
pub fn include_font(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as IncludeFont);

    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
