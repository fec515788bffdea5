use super::token::*;
use crate::Cell;

pub fn lex(s: &str) -> Vec<Token> {
    s.split(is_whitespace)
        .filter(|word| !word.is_empty())
        .map(classify)
        .collect()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn classify(s: &str) -> Token {
    if let Some(token) = Token::from_string(s) {
        return token;
    }
    match parse_cell(s) {
        Some(n) => Token::Literal(n),
        None => Token::Ident(s.into()),
    }
}

/// Parses an integer the way C's `strtol` does with base 0.
///
/// An optional sign, then `0x`/`0X` hexadecimal, a leading `0` for octal,
/// or plain decimal. The whole string must be consumed. Values past the
/// cell range saturate.
pub fn parse_cell(s: &str) -> Option<Cell> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };
    if digits.is_empty() {
        return None;
    }
    let mut magnitude: u128 = 0;
    for ch in digits.chars() {
        let digit = ch.to_digit(radix)? as u128;
        magnitude = magnitude
            .saturating_mul(radix as u128)
            .saturating_add(digit);
    }
    let value = if negative {
        -(magnitude.min(Cell::MAX as u128 + 1) as i128)
    } else {
        magnitude.min(Cell::MAX as u128) as i128
    };
    Some(value as Cell)
}
