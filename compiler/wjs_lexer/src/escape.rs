//! Escape cooking for string and template text.
//!
//! The lexer keeps escapes raw; the parser cooks them when it builds
//! literals. A backslash escapes the next character: `\n`, `\t`, `\r` and
//! `\0` become control characters, anything else stands for itself.

use std::borrow::Cow;

#[inline]
fn resolve(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

/// Replace escape sequences in `raw` with the characters they denote.
///
/// Borrows when `raw` has no backslash. A trailing lone backslash is kept.
pub fn cook_escapes(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(esc) => out.push(resolve(esc)),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
