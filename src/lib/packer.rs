/// Pixel marker for an unset ("off") cell. Any other character is set.
pub const OFF: char = ' ';

/// A glyph grid after normalization and packing.
#[derive(Debug, Default, PartialEq)]
pub struct PackedBitmap {
    pub rows: Vec<String>,
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

/// Pads `rows` to a common width and packs them MSB first, row-major.
pub fn pack(mut rows: Vec<String>) -> PackedBitmap {
    let height = rows.len();
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    for row in rows.iter_mut() {
        let missing = width - row.chars().count();
        row.extend(std::iter::repeat(OFF).take(missing));
    }

    let bytes = bits_to_bytes(&grid_bits(&rows));

    PackedBitmap {
        rows,
        width,
        height,
        bytes,
    }
}

/// Flattens rows into one bit per character.
pub fn grid_bits<S: AsRef<str>>(rows: &[S]) -> Vec<bool> {
    rows.iter()
        .flat_map(|row| row.as_ref().chars())
        .map(|c| c != OFF)
        .collect()
}

/// Renders a bit sequence as a string of `0` and `1`.
pub fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

/// Packs bits into bytes, first bit in the most significant position.
/// A trailing partial byte is filled with zero bits.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .zip((0..8).rev())
                .fold(0u8, |byte, (bit, shift)| byte | (u8::from(*bit) << shift))
        })
        .collect()
}
