//! Literal parsers for smallml

use crate::ast::expression::{Boolean, Ident, Integer, StringLiteral, Unit};
use crate::lexer::Token;

use crate::parser::state::{ParseError, ParseResult, ParseState};
use crate::parser::combinators::BoxedParser;

/// Error for a token that does not start the expected literal.
fn mismatch<T>(state: &mut ParseState, expected: &'static str) -> ParseResult<T> {
    let err = match state.peek() {
        Some(tok) => ParseError::new("unexpected token")
            .expected(expected)
            .found(tok.describe())
            .at(tok.pos()),
        None => ParseError::new("unexpected end of input").expected(expected),
    };
    state.record_error(err.clone());
    Err(err)
}

/// Parse the `unit` literal
pub fn unit() -> BoxedParser<Unit> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::UnitKeyword(_)) => match state.advance() {
            Some(Token::UnitKeyword(u)) => Ok(Unit {
                position: u.position,
            }),
            _ => mismatch(state, "'unit'"),
        },
        _ => mismatch(state, "'unit'"),
    })
}

/// Parse an identifier
pub fn ident() -> BoxedParser<Ident> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(_)) => match state.advance() {
            Some(Token::Ident(id)) => Ok(Ident {
                value: id.value,
                position: id.position,
            }),
            _ => mismatch(state, "identifier"),
        },
        _ => mismatch(state, "identifier"),
    })
}

/// Parse an integer literal; values outside of `i128` are rejected
pub fn integer() -> BoxedParser<Integer> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Integer(_)) => match state.advance() {
            Some(Token::Integer(int)) => match int.value.parse() {
                Ok(value) => Ok(Integer {
                    value,
                    position: int.position,
                }),
                Err(_) => {
                    let err = ParseError::new("integer literal out of range")
                        .found(int.value)
                        .at(int.position);
                    state.record_error(err.clone());
                    Err(err)
                }
            },
            _ => mismatch(state, "integer"),
        },
        _ => mismatch(state, "integer"),
    })
}

/// Parse a string literal, dropping the quotes and resolving escapes
pub fn string_literal() -> BoxedParser<StringLiteral> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::StringLiteral(_)) => match state.advance() {
            Some(Token::StringLiteral(s)) => {
                let raw = s
                    .value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(&s.value);
                Ok(StringLiteral {
                    value: unescape(raw),
                    position: s.position,
                })
            }
            _ => mismatch(state, "string"),
        },
        _ => mismatch(state, "string"),
    })
}

/// Parse `true` or `false`
pub fn boolean() -> BoxedParser<Boolean> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::True(_) | Token::False(_)) => match state.advance() {
            Some(Token::True(t)) => Ok(Boolean {
                value: true,
                position: t.position,
            }),
            Some(Token::False(f)) => Ok(Boolean {
                value: false,
                position: f.position,
            }),
            _ => mismatch(state, "boolean"),
        },
        _ => mismatch(state, "boolean"),
    })
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
