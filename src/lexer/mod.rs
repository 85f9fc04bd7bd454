//! Lexical recognisers for the scanner.
//!
//! Every recogniser is a pure function from `(buffer, offset)` to a
//! [`outcome::ParseOutcome`]. A rejection never consumes input, so callers can
//! retry another alternative or another offset. It covers:
//!
//! - The token kinds and the legal-next bitset
//! - Integer literals
//! - Punctuation: `(`, `)` and `,`
//! - Operator names: `mul`, `do` and `don't`

pub mod lexer;
pub mod outcome;
pub mod tokens;
