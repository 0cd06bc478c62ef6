//! Python string literal decoding.
//!
//! tree-sitter hands us the literal exactly as written (prefix, quotes,
//! escapes). The catalog keys must be the runtime value the program sees, so
//! the literal is decoded here with Python's rules.

use std::iter::Peekable;
use std::str::Chars;

/// What kind of object a string literal evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `"..."`, `r"..."`, `u"..."`
    Str,
    /// `b"..."`, `rb"..."`
    Bytes,
    /// `f"..."`, `t"..."` - not a constant.
    Formatted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub kind: LiteralKind,
    /// Decoded value. Only meaningful for [`LiteralKind::Str`].
    pub value: String,
}

/// Decode a single string literal token such as `r'\d+'` or `"""doc"""`.
///
/// Returns `None` when the token is not a well-formed literal.
pub fn decode_string_literal(raw: &str) -> Option<StringLiteral> {
    let quote_start = raw.find(['"', '\''])?;
    let prefix = raw[..quote_start].to_ascii_lowercase();
    if !prefix.chars().all(|c| matches!(c, 'r' | 'u' | 'b' | 'f' | 't')) {
        return None;
    }

    let rest = &raw[quote_start..];
    let quote = if rest.starts_with("\"\"\"") || rest.starts_with("'''") {
        &rest[..3]
    } else {
        &rest[..1]
    };
    if rest.len() < quote.len() * 2 || !rest.ends_with(quote) {
        return None;
    }
    let body = &rest[quote.len()..rest.len() - quote.len()];

    let kind = if prefix.contains('f') || prefix.contains('t') {
        LiteralKind::Formatted
    } else if prefix.contains('b') {
        LiteralKind::Bytes
    } else {
        LiteralKind::Str
    };

    // The interpreter reads sources with universal newlines.
    let body = body.replace("\r\n", "\n");
    let value = if prefix.contains('r') {
        body
    } else {
        unescape(&body, kind == LiteralKind::Bytes)
    };

    Some(StringLiteral { kind, value })
}

/// Apply Python escape sequences. Unknown escapes are kept verbatim, like the
/// interpreter does (with a warning we don't reproduce).
fn unescape(body: &str, bytes: bool) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' => push_hex_escape(&mut out, &mut chars, 'x', 2),
            'u' if !bytes => push_hex_escape(&mut out, &mut chars, 'u', 4),
            'U' if !bytes => push_hex_escape(&mut out, &mut chars, 'U', 8),
            'N' if !bytes => push_named_escape(&mut out, &mut chars),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_hex_escape(out: &mut String, chars: &mut Peekable<Chars<'_>>, tag: char, width: usize) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }

    let decoded = (digits.len() == width)
        .then(|| u32::from_str_radix(&digits, 16).ok())
        .flatten()
        .and_then(char::from_u32);

    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            out.push(tag);
            out.push_str(&digits);
        }
    }
}

/// `\N{NAME}`: the name is matched case-insensitively. An unknown or
/// unterminated name is kept as written.
fn push_named_escape(out: &mut String, chars: &mut Peekable<Chars<'_>>) {
    if chars.peek() != Some(&'{') {
        out.push_str("\\N");
        return;
    }
    chars.next();

    let mut name = String::new();
    let mut closed = false;
    while let Some(&c) = chars.peek() {
        if c == '}' {
            chars.next();
            closed = true;
            break;
        }
        if c == '\\' || c == '\n' {
            break;
        }
        name.push(c);
        chars.next();
    }

    let decoded = closed
        .then(|| unicode_names2::character(&name.to_ascii_uppercase()))
        .flatten();

    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push_str("\\N{");
            out.push_str(&name);
            if closed {
                out.push('}');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn value(raw: &str) -> String {
        decode_string_literal(raw).unwrap().value
    }

    #[test]
    fn test_plain_quotes() {
        assert_eq!(value(r#""Hello""#), "Hello");
        assert_eq!(value("'Hello'"), "Hello");
        assert_eq!(value(r#""""multi""""#), "multi");
        assert_eq!(value("''''''"), "");
        assert_eq!(value(r#""""#), "");
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(value(r#""a\nb""#), "a\nb");
        assert_eq!(value(r#""tab\there""#), "tab\there");
        assert_eq!(value(r#""it\'s""#), "it's");
        assert_eq!(value(r#""back\\slash""#), "back\\slash");
        assert_eq!(value(r#""\x41\101é\U0001F600""#), "AAé😀");
    }

    #[test]
    fn test_unknown_and_truncated_escapes_are_verbatim() {
        assert_eq!(value(r#""\d+""#), "\\d+");
        assert_eq!(value(r#""\xZZ""#), "\\xZZ");
        assert_eq!(value(r#""\N{NO SUCH CHARACTER}""#), "\\N{NO SUCH CHARACTER}");
        assert_eq!(value(r#""\N{EM DASH""#), "\\N{EM DASH");
        assert_eq!(value(r#""\Nope""#), "\\Nope");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(value(r#""Wait\N{HORIZONTAL ELLIPSIS}""#), "Wait\u{2026}");
        assert_eq!(value(r#""\N{em dash}""#), "\u{2014}");
        assert_eq!(value(r#""a\N{LATIN SMALL LETTER E WITH ACUTE}b""#), "aéb");
        // Bytes literals have no named escapes.
        assert_eq!(value(r#"b"\N{EM DASH}""#), "\\N{EM DASH}");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(value("\"one \\\ntwo\""), "one two");
        assert_eq!(value("\"\"\"a\r\nb\"\"\""), "a\nb");
    }

    #[test]
    fn test_prefixes() {
        let raw = decode_string_literal(r#"r"\d\n""#).unwrap();
        assert_eq!(raw.kind, LiteralKind::Str);
        assert_eq!(raw.value, "\\d\\n");

        assert_eq!(decode_string_literal("u'x'").unwrap().kind, LiteralKind::Str);
        assert_eq!(decode_string_literal("b'x'").unwrap().kind, LiteralKind::Bytes);
        assert_eq!(decode_string_literal("Rb'x'").unwrap().kind, LiteralKind::Bytes);
        assert_eq!(
            decode_string_literal("f'{x}'").unwrap().kind,
            LiteralKind::Formatted
        );
    }

    #[test]
    fn test_malformed_literals() {
        assert!(decode_string_literal("x'abc'").is_none());
        assert!(decode_string_literal("'unterminated").is_none());
        assert!(decode_string_literal("no quotes").is_none());
    }
}
