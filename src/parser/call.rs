use crate::{
    ast::ast::{Instruction, Operator, OperatorCall},
    lexer::{
        lexer::lex_token,
        outcome::ParseOutcome,
        tokens::{Token, TokenKind, TokenKinds},
    },
    Span, TRY_MATCH,
};

use super::lookups::next_legal;

/// Every operator the scanner recognises.
pub const ALL_OPERATORS: &[Operator] = &[Operator::Mul, Operator::Do, Operator::Dont];

const MAX_OPERANDS: usize = 2;

/// Progress through a single call. Lives on the stack for one attempt only.
#[derive(Debug, Clone, Copy)]
struct CallState {
    operator: Option<Operator>,
    operands: [i64; MAX_OPERANDS],
    count: usize,
    last: TokenKind,
}

impl CallState {
    fn new() -> Self {
        CallState {
            operator: None,
            operands: [0; MAX_OPERANDS],
            count: 0,
            last: TokenKind::File,
        }
    }

    fn legal(&self) -> TokenKinds {
        let arity = self.operator.map_or(0, |operator| operator.arity());
        next_legal(self.last, arity, self.count)
    }

    /// Records `token`, returning false if the call cannot continue with it.
    fn push(&mut self, token: Token, accept: &[Operator]) -> bool {
        match token {
            Token::Operator(operator) if accept.contains(&operator) => {
                self.operator = Some(operator)
            }
            Token::Operator(_) => return false,
            Token::Integer(value) if self.count < MAX_OPERANDS => {
                self.operands[self.count] = value;
                self.count += 1;
            }
            Token::Integer(_) => return false,
            Token::LeftParen | Token::RightParen | Token::Comma => {}
        }

        self.last = token.kind();
        true
    }

    fn finish(&self, span: Span) -> Option<Instruction> {
        let operator = self.operator?;

        if self.last != TokenKind::RightParen || self.count != operator.arity() {
            return None;
        }

        Some(match operator {
            Operator::Mul => Instruction::Mul(OperatorCall {
                left: self.operands[0],
                right: self.operands[1],
                span,
            }),
            Operator::Do => Instruction::Do(span),
            Operator::Dont => Instruction::Dont(span),
        })
    }
}

/// Lexes the first of the `legal` kinds that matches at `offset`.
///
/// Each kind is cleared from the set once it fails, so every alternative is tried at most once.
/// Reports `EndOfInput` only if nothing matched and at least one alternative ran out of bytes.
pub fn lex_legal(buffer: &[u8], offset: usize, mut legal: TokenKinds) -> ParseOutcome<Token> {
    let mut exhausted = false;

    while let Some(kind) = legal.next() {
        match lex_token(buffer, offset, kind) {
            ParseOutcome::Matched(token, consumed) => return ParseOutcome::Matched(token, consumed),
            ParseOutcome::EndOfInput => exhausted = true,
            ParseOutcome::Rejected | ParseOutcome::MalformedInput => {}
        }

        legal = legal.without(kind);
    }

    if exhausted {
        ParseOutcome::EndOfInput
    } else {
        ParseOutcome::Rejected
    }
}

/// Parses one call to any operator in `accept` starting exactly at `offset`.
///
/// A miss on the operator name is `Rejected`. Once a name has matched, a wrong byte is
/// `MalformedInput` and running out of buffer is `EndOfInput`. Nothing is consumed unless the
/// whole call matches.
pub fn parse_call(buffer: &[u8], offset: usize, accept: &[Operator]) -> ParseOutcome<Instruction> {
    let mut state = CallState::new();
    let mut consumed = 0;

    loop {
        let legal = state.legal();
        if legal.is_empty() {
            break;
        }

        let rejected = match state.operator {
            Some(_) => ParseOutcome::MalformedInput,
            None => ParseOutcome::Rejected,
        };

        let (token, length) = TRY_MATCH!(lex_legal(buffer, offset + consumed, legal), rejected);

        if !state.push(token, accept) {
            return rejected;
        }

        consumed += length;
    }

    match state.finish(Span::new(offset, offset + consumed)) {
        Some(instruction) => ParseOutcome::Matched(instruction, consumed),
        None => ParseOutcome::MalformedInput,
    }
}

/// Parses `mul(<int>,<int>)` starting exactly at `offset`.
pub fn parse_operator_call(buffer: &[u8], offset: usize) -> ParseOutcome<OperatorCall> {
    parse_call(buffer, offset, &[Operator::Mul])
        .filter_map(|instruction| instruction.as_call().copied())
}

/// Parses any recognised instruction starting exactly at `offset`.
pub fn parse_instruction(buffer: &[u8], offset: usize) -> ParseOutcome<Instruction> {
    parse_call(buffer, offset, ALL_OPERATORS)
}
