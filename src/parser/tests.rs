//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The legal-next transitions
//! - Parsing a single call at an offset
//! - The scan driver and its recovery

use std::time::{Duration, Instant};

use rstest::rstest;

use super::{
    call::{lex_legal, parse_instruction, parse_operator_call},
    lookups::next_legal,
    parser::{scan, scan_instructions, try_scan, ScanState, Scanner},
};
use crate::{
    ast::ast::Instruction,
    lexer::{
        outcome::ParseOutcome,
        tokens::{Token, TokenKind, TokenKinds},
    },
    Span,
};

fn pairs(source: &str) -> Vec<(i64, i64)> {
    scan(source).iter().map(|call| call.pair()).collect()
}

#[test]
fn test_next_legal_for_mul() {
    assert_eq!(next_legal(TokenKind::File, 0, 0), TokenKind::Operator.into());
    assert_eq!(next_legal(TokenKind::Operator, 2, 0), TokenKind::LeftParen.into());
    assert_eq!(
        next_legal(TokenKind::LeftParen, 2, 0),
        TokenKind::IntegerLiteral.into()
    );
    assert_eq!(next_legal(TokenKind::IntegerLiteral, 2, 1), TokenKind::Comma.into());
    assert_eq!(
        next_legal(TokenKind::Comma, 2, 1),
        TokenKind::IntegerLiteral.into()
    );
    assert_eq!(
        next_legal(TokenKind::IntegerLiteral, 2, 2),
        TokenKind::RightParen.into()
    );
    assert!(next_legal(TokenKind::RightParen, 2, 2).is_empty());
}

#[test]
fn test_next_legal_for_toggle() {
    assert_eq!(
        next_legal(TokenKind::LeftParen, 0, 0),
        TokenKind::RightParen.into()
    );
}

#[test]
fn test_lex_legal_tries_each_alternative() {
    let legal = TokenKind::Comma | TokenKind::IntegerLiteral | TokenKind::RightParen;

    assert_eq!(lex_legal(b")", 0, legal), ParseOutcome::Matched(Token::RightParen, 1));
    assert_eq!(lex_legal(b",", 0, legal), ParseOutcome::Matched(Token::Comma, 1));
    assert_eq!(lex_legal(b"]", 0, legal), ParseOutcome::Rejected);
    assert_eq!(lex_legal(b"", 0, legal), ParseOutcome::EndOfInput);
    assert_eq!(lex_legal(b")", 0, TokenKinds::empty()), ParseOutcome::Rejected);
}

#[test]
fn test_parse_operator_call() {
    let outcome = parse_operator_call(b"mul(44,46)", 0);
    assert_eq!(outcome.consumed(), 10);

    let call = outcome.value().unwrap();
    assert_eq!(call.pair(), (44, 46));
    assert_eq!(call.span, Span::new(0, 10));
}

#[test]
fn test_parse_operator_call_at_offset() {
    let outcome = parse_operator_call(b"?mul(8,11)", 1);
    assert_eq!(outcome.consumed(), 9);
    assert_eq!(outcome.value().unwrap().pair(), (8, 11));
    assert_eq!(parse_operator_call(b"?mul(8,11)", 0), ParseOutcome::Rejected);
}

#[rstest]
#[case("mul(4*, 6)")]
#[case("mul(6,9!")]
#[case("mul ( 2 , 4 )")]
#[case("mul[3,7]")]
#[case("mul(32,64]")]
#[case("mul(,4)")]
#[case("mul(2,)")]
#[case("mul(2)")]
#[case("mul(2,3,4)")]
#[case("mul()")]
fn test_parse_operator_call_malformed(#[case] source: &str) {
    assert_eq!(
        parse_operator_call(source.as_bytes(), 0),
        ParseOutcome::MalformedInput
    );
}

#[rstest]
#[case("mul(")]
#[case("mul(2")]
#[case("mul(2,")]
#[case("mul(2,4")]
fn test_parse_operator_call_truncated(#[case] source: &str) {
    assert_eq!(
        parse_operator_call(source.as_bytes(), 0),
        ParseOutcome::EndOfInput
    );
}

#[test]
fn test_parse_instruction_truncated() {
    assert_eq!(parse_instruction(b"don't(", 0), ParseOutcome::EndOfInput);
}

#[rstest]
#[case("do()")]
#[case("don't()")]
#[case("xmul(2,4)")]
#[case("")]
fn test_parse_operator_call_rejected(#[case] source: &str) {
    let outcome = parse_operator_call(source.as_bytes(), 0);
    assert!(matches!(
        outcome,
        ParseOutcome::Rejected | ParseOutcome::EndOfInput
    ));
    assert_eq!(outcome.consumed(), 0);
}

#[test]
fn test_parse_instruction_toggles() {
    assert_eq!(
        parse_instruction(b"do()", 0),
        ParseOutcome::Matched(Instruction::Do(Span::new(0, 4)), 4)
    );
    assert_eq!(
        parse_instruction(b"don't()", 0),
        ParseOutcome::Matched(Instruction::Dont(Span::new(0, 7)), 7)
    );
    assert_eq!(parse_instruction(b"do(1)", 0), ParseOutcome::MalformedInput);
}

#[test]
fn test_scan_canonical() {
    let source = "mul(2,4) mul[3,7] mul(5,5) mul(32,64]mul(11,8)un mul(8,5))";
    assert_eq!(pairs(source), vec![(2, 4), (5, 5), (11, 8), (8, 5)]);
}

#[rstest]
#[case("")]
#[case("mul(")]
#[case("mul(4*, 6)")]
#[case("mul(6,9!")]
#[case("mul ( 2 , 4 )")]
#[case("no calls here at all")]
#[case("do() don't()")]
fn test_scan_finds_nothing(#[case] source: &str) {
    assert!(scan(source).is_empty());
}

#[test]
fn test_scan_skips_leading_noise() {
    assert_eq!(pairs("?mul(8,11)"), vec![(8, 11)]);
}

#[test]
fn test_scan_digit_run_is_maximal() {
    assert_eq!(pairs("mul(123456,7)"), vec![(123456, 7)]);
}

#[test]
fn test_scan_nested_prefix() {
    assert_eq!(pairs("mul(mul(2,3)"), vec![(2, 3)]);
    assert_eq!(pairs("mulmul(2,3)"), vec![(2, 3)]);
}

#[test]
fn test_scan_adjacent_calls() {
    assert_eq!(pairs("mul(1,2)mul(3,4)"), vec![(1, 2), (3, 4)]);
}

#[test]
fn test_scan_is_idempotent() {
    let source = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    let first = scan(source);
    let second = scan(source);

    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|call| call.pair()).collect::<Vec<_>>(),
        vec![(2, 4), (5, 5), (11, 8), (8, 5)]
    );
}

#[test]
fn test_scan_records_spans() {
    let calls = scan("ab mul(1,2)");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].span, Span::new(3, 11));
}

#[test]
fn test_scan_non_ascii_is_noise() {
    assert_eq!(pairs("é mul(3,3) ü"), vec![(3, 3)]);
    assert!(scan([0xffu8, 0xfe, b'm']).is_empty());
}

#[test]
fn test_scan_instructions_in_order() {
    let source = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
    let instructions = scan_instructions(source);

    let rendered = instructions
        .iter()
        .map(|instruction| instruction.to_string())
        .collect::<Vec<String>>();

    assert_eq!(
        rendered,
        vec![
            "mul(2,4)",
            "don't()",
            "mul(5,5)",
            "mul(11,8)",
            "do()",
            "mul(8,5)"
        ]
    );
}

#[test]
fn test_scan_agrees_with_scan_instructions() {
    let source = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
    let from_instructions = scan_instructions(source)
        .iter()
        .filter_map(|instruction| instruction.as_call().copied())
        .collect::<Vec<_>>();

    assert_eq!(scan(source), from_instructions);
}

#[test]
fn test_scan_long_name_runs_stay_linear() {
    let filler = 256 * 1024;

    let letters = format!("{}mul(2,3)", "x".repeat(filler));
    let letters_start = Instant::now();
    assert_eq!(pairs(&letters), vec![(2, 3)]);
    let letters_elapsed = letters_start.elapsed();

    let punctuation = format!("{}mul(2,3)", "#".repeat(filler));
    let punctuation_start = Instant::now();
    assert_eq!(pairs(&punctuation), vec![(2, 3)]);
    let punctuation_elapsed = punctuation_start.elapsed();

    assert!(
        letters_elapsed < punctuation_elapsed * 20 + Duration::from_millis(200),
        "letters took {:?}, punctuation took {:?}",
        letters_elapsed,
        punctuation_elapsed
    );
}

#[test]
fn test_scan_name_run_ending_in_call() {
    assert_eq!(pairs("don'tdon'tmul(4,4)"), vec![(4, 4)]);
    assert_eq!(
        scan_instructions("xyzdon't()abcdo()")
            .iter()
            .map(|instruction| instruction.to_string())
            .collect::<Vec<String>>(),
        vec!["don't()", "do()"]
    );
}

#[test]
fn test_scanner_state() {
    let mut scanner = Scanner::calls(b"mul(1,1) tail");
    assert_eq!(scanner.state(), ScanState::Scanning);

    assert!(scanner.next().is_some());
    assert_eq!(scanner.cursor(), 8);

    assert!(scanner.next().is_none());
    assert_eq!(scanner.state(), ScanState::Done);
    assert_eq!(scanner.cursor(), 13);
    assert!(scanner.next().is_none());
}

#[test]
fn test_scanner_stops_on_truncated_call() {
    let mut scanner = Scanner::calls(b"mul(1,1)mul(2,");
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert_eq!(scanner.cursor(), 14);
}

#[test]
fn test_try_scan() {
    let calls = try_scan(Some(b"mul(6,7)".as_slice())).unwrap();
    assert_eq!(calls[0].product(), 42);

    let error = try_scan(None).unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidPrecondition");
}
