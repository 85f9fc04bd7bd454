use crate::lexer::tokens::{TokenKind, TokenKinds};

/// Kinds that may follow `last` inside a call.
///
/// # Arguments
///
/// * `last` - Kind of the token just matched, `TokenKind::File` before the first one
/// * `arity` - Operand count of the operator being parsed, ignored before it is known
/// * `operands` - Operands matched so far
///
/// # Returns
///
/// An empty set once the call is complete.
pub fn next_legal(last: TokenKind, arity: usize, operands: usize) -> TokenKinds {
    match last {
        TokenKind::File => TokenKind::Operator.into(),
        TokenKind::Operator => TokenKind::LeftParen.into(),
        TokenKind::LeftParen if arity == 0 => TokenKind::RightParen.into(),
        TokenKind::LeftParen | TokenKind::Comma => TokenKind::IntegerLiteral.into(),
        TokenKind::IntegerLiteral if operands < arity => TokenKind::Comma.into(),
        TokenKind::IntegerLiteral => TokenKind::RightParen.into(),
        TokenKind::RightParen | TokenKind::None => TokenKinds::empty(),
    }
}
