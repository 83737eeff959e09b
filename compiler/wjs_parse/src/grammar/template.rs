//! Template literal lowering.
//!
//! The lexer hands over the raw text between the backticks. Here it is split
//! into literal text and `${ ... }` spans; every span is lexed and parsed as a
//! standalone expression now, so a malformed interpolation is a parse error
//! rather than a runtime one.

use crate::{parse_expression, ParseError, ParseErrorKind, Parser};
use wjs_ir::{Position, TemplatePart};
use wjs_lexer::{cook_escapes, Lexer};

impl Parser<'_> {
    /// Split `raw` (the template body, first character at `start`) into parts.
    pub(crate) fn lower_template(
        raw: &str,
        start: &Position,
    ) -> Result<Vec<TemplatePart>, ParseError> {
        let bytes = raw.as_bytes();
        let mut parts = Vec::new();
        let mut text_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                // An escaped character never opens an interpolation.
                b'\\' => i += 2,
                b'$' if bytes.get(i + 1) == Some(&b'{') => {
                    push_text(&mut parts, raw, text_start, i, start);

                    let dollar = start.advanced(&raw[..i]);
                    let body_start = i + 2;
                    let Some(body_end) = find_closing_brace(bytes, body_start) else {
                        return Err(ParseError::new(
                            ParseErrorKind::UnterminatedInterpolation,
                            dollar,
                        ));
                    };
                    let body = &raw[body_start..body_end];
                    if body.trim().is_empty() {
                        return Err(ParseError::new(ParseErrorKind::EmptyInterpolation, dollar));
                    }

                    let body_pos = start.advanced(&raw[..body_start]);
                    let tokens = Lexer::starting_at(body, body_pos).all_tokens();
                    let expr = parse_expression(&tokens)?;
                    parts.push(TemplatePart::Interpolation {
                        expr: Box::new(expr),
                        pos: dollar,
                    });

                    i = body_end + 1;
                    text_start = i;
                }
                _ => i += 1,
            }
        }

        push_text(&mut parts, raw, text_start, bytes.len(), start);
        Ok(parts)
    }
}

fn push_text(parts: &mut Vec<TemplatePart>, raw: &str, from: usize, to: usize, start: &Position) {
    let Some(text) = raw.get(from..to) else {
        return;
    };
    if text.is_empty() {
        return;
    }
    parts.push(TemplatePart::Text {
        value: cook_escapes(text).into_owned(),
        pos: start.advanced(&raw[..from]),
    });
}

/// Index of the `}` closing an interpolation body that starts at `from`.
/// Nested braces are counted and quoted strings skipped, so `${"}"}` works.
fn find_closing_brace(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'"' | b'\'') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
