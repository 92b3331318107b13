use std::path::Path;

use mufont::{compile, load, render, CharCode, FontError, Format};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

#[test]
fn it_loads_the_sample_font() {
    let font = load(&fixture("fonts/sample.font")).unwrap();

    let codes: Vec<_> = font.glyphs.iter().map(|g| g.char_code.clone()).collect();
    assert_eq!(
        codes,
        vec![
            CharCode::Code('A' as u32),
            CharCode::Code(' ' as u32),
            CharCode::Code('0' as u32),
            CharCode::Code('1' as u32),
        ]
    );

    let space = &font.glyphs[1];
    assert_eq!((space.width, space.height), (0, 0));
    assert!(space.bytes.is_empty());

    for glyph in &font.glyphs {
        assert_eq!(glyph.bytes.len(), (glyph.bit_count() + 7) / 8);
        assert!(glyph.rows.iter().all(|r| r.chars().count() == glyph.width));
    }

    let offsets: Vec<_> = font.glyphs.iter().map(|g| g.bitmap_offset).collect();
    assert_eq!(offsets, vec![0, 2, 2, 4]);
    assert_eq!(font.bitmap.len(), 5);
}

#[test]
fn it_rejects_empty_sources() {
    let err = load(&fixture("tests/fonts/empty.font")).unwrap_err();

    assert!(matches!(err, FontError::Empty { .. }));
    assert!(err.to_string().ends_with("has no content"));
}

#[test]
fn it_distinguishes_unreadable_sources() {
    let err = load(&fixture("tests/fonts/missing.font")).unwrap_err();

    assert!(matches!(err, FontError::Read { .. }));
}

#[test]
fn it_writes_a_header_for_the_tiny_font() {
    let font = load(&fixture("tests/fonts/tiny.font")).unwrap();
    let mut out = Vec::new();
    render(&font, Format::Header, "tiny", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("// tiny.h - created with mufont, the muwerk font compiler\n"));
    assert!(text.contains("\t0x69, 0x60};\n"));
    assert!(text.contains("\t{0x0000, 4, 3, 6, 0, 0},\t // 0x41 'A'\n"));
    assert!(text.ends_with("// Approx. 18 bytes\n"));
}

#[test]
fn it_keeps_going_after_bad_codes() {
    let font = compile(":0xZZ,1,0,0\n#\n:ab,1,0,0\n##\n:B,1,0,0\n#\n");

    assert_eq!(font.glyphs.len(), 3);
    assert_eq!(font.glyphs[0].char_code.value(), None);
    assert_eq!(font.glyphs[1].char_code.value(), Some(-1));
    assert_eq!(font.glyphs[2].bitmap_offset, 2);
    assert_eq!(font.range().map(|(_, last)| last.clone()), Some(CharCode::Code(66)));
}

#[test]
fn it_tolerates_trailing_text_after_hex_codes() {
    let font = compile(":0x20 ,4,0,0\n:0x41g,6,0,0\n#\n");

    assert_eq!(font.glyphs[0].char_code, CharCode::Code(0x20));
    assert_eq!(font.glyphs[1].char_code, CharCode::Code(0x41));
}
