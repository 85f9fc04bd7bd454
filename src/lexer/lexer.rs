use crate::ast::ast::Operator;

use super::{
    outcome::ParseOutcome,
    tokens::{is_operator_byte, Token, TokenKind, OPERATOR_LOOKAHEAD, OPERATOR_LOOKUP},
};

/// Parses an unsigned decimal literal at `offset`.
///
/// The maximal run of ASCII digits is consumed. Values past `i64::MAX` saturate to `i64::MAX`,
/// the digits are still consumed.
pub fn parse_integer(buffer: &[u8], offset: usize) -> ParseOutcome<i64> {
    let Some(remainder) = buffer.get(offset..).filter(|rest| !rest.is_empty()) else {
        return ParseOutcome::EndOfInput;
    };

    let digits = remainder.iter().take_while(|byte| byte.is_ascii_digit()).count();

    if digits == 0 {
        return ParseOutcome::Rejected;
    }

    let value = remainder[..digits].iter().fold(0i64, |acc, byte| {
        acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
    });

    ParseOutcome::Matched(value, digits)
}

/// Matches the single byte that spells a punctuation `kind`.
pub fn parse_punct(buffer: &[u8], offset: usize, kind: TokenKind) -> ParseOutcome<()> {
    let Some(byte) = buffer.get(offset) else {
        return ParseOutcome::EndOfInput;
    };

    match kind.symbol() {
        Some(symbol) if symbol == *byte => ParseOutcome::Matched((), 1),
        _ => ParseOutcome::Rejected,
    }
}

/// The bytes at `offset` that decide whether an operator name starts there.
///
/// Never longer than [`OPERATOR_LOOKAHEAD`], so each attempt costs a bounded amount of work no
/// matter how long the surrounding run of letters is.
pub fn operator_window(buffer: &[u8], offset: usize) -> &[u8] {
    let remainder = buffer.get(offset..).unwrap_or_default();
    &remainder[..remainder.len().min(*OPERATOR_LOOKAHEAD)]
}

/// Matches a registered operator name at `offset`.
///
/// The whole run of name bytes has to be a registered name, so `xmul` is rejected here and only
/// matches one byte later. A run filling the whole window is longer than every name and is
/// never found.
pub fn parse_operator_name(buffer: &[u8], offset: usize) -> ParseOutcome<Operator> {
    let window = operator_window(buffer, offset);

    if window.is_empty() {
        return ParseOutcome::EndOfInput;
    }

    let length = window.iter().take_while(|byte| is_operator_byte(**byte)).count();

    let Ok(name) = std::str::from_utf8(&window[..length]) else {
        return ParseOutcome::Rejected;
    };

    match OPERATOR_LOOKUP.get(name) {
        Some(operator) => ParseOutcome::Matched(*operator, length),
        None => ParseOutcome::Rejected,
    }
}

/// Lexes a token of the given kind at `offset`.
pub fn lex_token(buffer: &[u8], offset: usize, kind: TokenKind) -> ParseOutcome<Token> {
    match kind {
        TokenKind::Operator => parse_operator_name(buffer, offset).map(Token::Operator),
        TokenKind::IntegerLiteral => parse_integer(buffer, offset).map(Token::Integer),
        TokenKind::LeftParen => parse_punct(buffer, offset, kind).map(|_| Token::LeftParen),
        TokenKind::RightParen => parse_punct(buffer, offset, kind).map(|_| Token::RightParen),
        TokenKind::Comma => parse_punct(buffer, offset, kind).map(|_| Token::Comma),
        TokenKind::File | TokenKind::None => ParseOutcome::Rejected,
    }
}
