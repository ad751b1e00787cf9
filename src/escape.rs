//! Escaping of text for placement inside a double-quoted Java string literal.
//!
//! Java strings are sequences of UTF-16 code units, so escaping works per
//! code unit: a character outside the basic plane becomes two `\uXXXX`
//! escapes, one for each surrogate half.

use crate::error::EscapeError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escape a string so that it can sit between double quotes in Java source.
pub fn escape_java_literal(input: &str) -> String {
    escape_units(input.encode_utf16())
}

/// Escape a slice of UTF-16 code units.
///
/// Chunk boundaries are measured in code units and may fall between the two
/// halves of a surrogate pair, which is why this works on `u16` rather than
/// `&str`.
pub fn escape_utf16(units: &[u16]) -> String {
    escape_units(units.iter().copied())
}

/// Escape an optional input; `None` stays `None`.
pub fn escape_optional(input: Option<&str>) -> Option<String> {
    input.map(escape_java_literal)
}

fn escape_units(units: impl IntoIterator<Item = u16>) -> String {
    let units = units.into_iter();
    let mut out = String::with_capacity(units.size_hint().0);

    for unit in units {
        match unit {
            0x5C => out.push_str("\\\\"),
            0x22 => out.push_str("\\\""),
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x09 => out.push_str("\\t"),
            0x20..=0x7E => out.push(char::from(unit as u8)),
            _ => push_unicode_escape(&mut out, unit),
        }
    }

    out
}

fn push_unicode_escape(out: &mut String, unit: u16) {
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        let nibble = usize::from((unit >> shift) & 0xF);
        out.push(char::from(HEX_DIGITS[nibble]));
    }
}

/// Decode the body of a Java string literal (the text between the quotes)
/// back into UTF-16 code units.
///
/// Accepts everything [`escape_java_literal`] produces plus the remaining
/// Java escapes (`\b`, `\f`, `\'`, `\s`, octal and `\uuuuXXXX`). Code units
/// are returned rather than a `String` because a single chunk may end in half
/// of a surrogate pair.
pub fn unescape_java_literal(body: &str) -> Result<Vec<u16>, EscapeError> {
    let mut units = Vec::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' => {}
            '"' | '\n' | '\r' => return Err(EscapeError::UnescapedCharacter(ch, offset)),
            _ => {
                let mut buf = [0u16; 2];
                units.extend_from_slice(ch.encode_utf16(&mut buf));
                continue;
            }
        }

        let Some((_, marker)) = chars.next() else {
            return Err(EscapeError::DanglingBackslash);
        };

        let unit = match marker {
            '\\' => 0x5C,
            '"' => 0x22,
            '\'' => 0x27,
            'n' => 0x0A,
            'r' => 0x0D,
            't' => 0x09,
            'b' => 0x08,
            'f' => 0x0C,
            's' => 0x20,
            'u' => {
                while chars.next_if(|&(_, c)| c == 'u').is_some() {}
                let mut value: u16 = 0;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|(_, c)| c.to_digit(16))
                        .ok_or(EscapeError::MalformedUnicode(offset))?;
                    value = (value << 4) | digit as u16;
                }
                value
            }
            '0'..='7' => {
                // \0 through \377
                let max_digits = if marker <= '3' { 3 } else { 2 };
                let mut value = marker.to_digit(8).unwrap_or(0) as u16;
                for _ in 1..max_digits {
                    match chars.next_if(|&(_, c)| c.is_digit(8)) {
                        Some((_, c)) => value = value * 8 + c.to_digit(8).unwrap_or(0) as u16,
                        None => break,
                    }
                }
                value
            }
            other => return Err(EscapeError::UnknownEscape(other, offset)),
        };
        units.push(unit);
    }

    Ok(units)
}
