use core::fmt;

/// Code point named by a glyph header.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharCode {
    Code(u32),
    /// Token was neither a single character nor a `0x` literal.
    Unresolved,
    /// Token had the `0x` prefix but no valid hexadecimal remainder.
    Invalid(String),
}

impl CharCode {
    pub const SENTINEL: i64 = -1;

    /// Resolves the character token of a header line.
    ///
    /// A single character maps to its scalar value, `0x41` style tokens are
    /// read as hexadecimal and anything else is [`CharCode::Unresolved`].
    pub fn resolve(token: &str) -> Self {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return CharCode::Code(c as u32);
        }

        match token.strip_prefix("0x") {
            Some(hex) => match leading_hex(hex) {
                Some(code) => CharCode::Code(code),
                None => CharCode::Invalid(token.to_string()),
            },
            None => CharCode::Unresolved,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            CharCode::Code(code) => Some(*code),
            _ => None,
        }
    }

    /// Numeric value with the `-1` sentinel, `None` for an invalid literal.
    pub fn value(&self) -> Option<i64> {
        match self {
            CharCode::Code(code) => Some(i64::from(*code)),
            CharCode::Unresolved => Some(Self::SENTINEL),
            CharCode::Invalid(_) => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        self.code().and_then(char::from_u32)
    }
}

/// Reads the hex digits leading `text`, ignoring anything after them.
///
/// Leading whitespace, a sign and a second `0x` are skipped first. Returns
/// `None` without any digit, for negative values and for values past `u32`.
fn leading_hex(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let end = text
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(text.len());
    let value = u32::from_str_radix(&text[..end], 16).ok()?;

    match (negative, value) {
        (true, 0) | (false, _) => Some(value),
        (true, _) => None,
    }
}

impl fmt::Display for CharCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharCode::Code(code) => write!(f, "0x{code:x}"),
            CharCode::Unresolved => write!(f, "{}", Self::SENTINEL),
            CharCode::Invalid(token) => write!(f, "<invalid '{token}'>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_resolves_single_characters() {
        assert_eq!(CharCode::resolve("A"), CharCode::Code(65));
        assert_eq!(CharCode::resolve(" "), CharCode::Code(32));
        assert_eq!(CharCode::resolve("ä"), CharCode::Code(0xE4));
    }

    #[test]
    fn it_resolves_hex_literals() {
        assert_eq!(CharCode::resolve("0x41"), CharCode::Code(65));
        assert_eq!(CharCode::resolve("0x2B24"), CharCode::Code(0x2B24));
        assert_eq!(CharCode::resolve("0xff"), CharCode::Code(255));
    }

    #[test]
    fn it_reads_the_leading_hex_digits() {
        assert_eq!(CharCode::resolve("0x20 "), CharCode::Code(0x20));
        assert_eq!(CharCode::resolve("0x41g"), CharCode::Code(0x41));
        assert_eq!(CharCode::resolve("0x 7e"), CharCode::Code(0x7E));
        assert_eq!(CharCode::resolve("0x+7e"), CharCode::Code(0x7E));
        assert_eq!(CharCode::resolve("0x0x41"), CharCode::Code(0x41));
        assert_eq!(CharCode::resolve("0x-0"), CharCode::Code(0));
    }

    #[test]
    fn it_rejects_negative_and_oversized_hex() {
        assert_eq!(CharCode::resolve("0x-41"), CharCode::Invalid("0x-41".into()));
        assert_eq!(
            CharCode::resolve("0x100000000"),
            CharCode::Invalid("0x100000000".into())
        );
    }

    #[test]
    fn it_resolves_astral_characters_to_their_scalar_value() {
        assert_eq!(CharCode::resolve("😀"), CharCode::Code(0x1F600));
        assert_eq!(CharCode::resolve("😀").as_char(), Some('😀'));
    }

    #[test]
    fn it_flags_bad_hex_literals() {
        let code = CharCode::resolve("0xZZ");
        assert_eq!(code, CharCode::Invalid("0xZZ".into()));
        assert_eq!(code.value(), None);
        assert_eq!(CharCode::resolve("0x").value(), None);
        assert_eq!(CharCode::resolve("0x g1").value(), None);
        assert_eq!(CharCode::resolve("0x-").value(), None);
    }

    #[test]
    fn it_falls_back_to_sentinel() {
        assert_eq!(CharCode::resolve("ab"), CharCode::Unresolved);
        assert_eq!(CharCode::resolve(""), CharCode::Unresolved);
        assert_eq!(CharCode::resolve("ab").value(), Some(-1));
    }

    #[test]
    fn it_formats_codes() {
        assert_eq!(CharCode::Code(65).to_string(), "0x41");
        assert_eq!(CharCode::Unresolved.to_string(), "-1");
    }
}
