use crate::error::CodecError;

pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b'(' | b')' | b',') || b.is_ascii_whitespace()
}

pub fn syntax_error(expected: String, found: String) -> anyhow::Error {
    log::debug!("Text syntax error. Expected {expected}, found {found:?}.");
    CodecError::Syntax { expected, found }.into()
}

/* Quoted literals. */

/// Appends `c` to `out`, escaped for a literal enclosed in `quote`s.
pub fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
        c => out.push(c),
    }
}

pub fn quote(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        escape_into(&mut out, c, quote);
    }
    out.push(quote);
    out
}

/// Inverse of the single-character escapes. `\u{..}` is handled by the reader.
pub fn unescape_simple(escaped: u8) -> Option<u8> {
    match escaped {
        b'\\' => Some(b'\\'),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'0' => Some(b'\0'),
        b'"' => Some(b'"'),
        b'\'' => Some(b'\''),
        _ => None,
    }
}

/* Floats. */

/// Rust prints `1.25e0`; the wire form is `1.25e+00`.
pub fn normalize_exponent(sci: String) -> String {
    match sci.split_once('e') {
        None => sci,
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
    }
}
