//! Scan driver.
//!
//! The [`Scanner`] walks a buffer left to right, attempting a call at every
//! offset. A match is recorded and skipped over; anything else moves the
//! cursor by a single byte.

use std::iter::FusedIterator;

use crate::{
    ast::ast::{Instruction, Operator, OperatorCall},
    errors::errors::{Error, ErrorImpl},
    lexer::outcome::ParseOutcome,
    Position,
};

use super::call::{parse_call, ALL_OPERATORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    Done,
}

/// Cursor over a buffer, yielding each matched instruction in order.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The buffer being scanned
    buffer: &'a [u8],
    /// Offset of the next attempt, never decreases
    cursor: usize,
    state: ScanState,
    /// Operators a call may name
    accept: &'static [Operator],
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that only matches `mul` calls.
    pub fn calls(buffer: &'a [u8]) -> Self {
        Scanner::with_operators(buffer, &[Operator::Mul])
    }

    /// Creates a scanner that matches every recognised instruction.
    pub fn instructions(buffer: &'a [u8]) -> Self {
        Scanner::with_operators(buffer, ALL_OPERATORS)
    }

    fn with_operators(buffer: &'a [u8], accept: &'static [Operator]) -> Self {
        Scanner {
            buffer,
            cursor: 0,
            state: ScanState::Scanning,
            accept,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    fn finish(&mut self) {
        self.cursor = self.buffer.len();
        self.state = ScanState::Done;
    }
}

impl Iterator for Scanner<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        while self.state == ScanState::Scanning {
            if self.cursor >= self.buffer.len() {
                self.finish();
                break;
            }

            match parse_call(self.buffer, self.cursor, self.accept) {
                ParseOutcome::Matched(instruction, consumed) => {
                    self.cursor += consumed;
                    return Some(instruction);
                }
                ParseOutcome::Rejected | ParseOutcome::MalformedInput => self.cursor += 1,
                ParseOutcome::EndOfInput => self.finish(),
            }
        }

        None
    }
}

impl FusedIterator for Scanner<'_> {}

/// Extracts every well-formed `mul(<int>,<int>)` in `buffer`, in order.
pub fn scan(buffer: impl AsRef<[u8]>) -> Vec<OperatorCall> {
    Scanner::calls(buffer.as_ref())
        .filter_map(|instruction| instruction.as_call().copied())
        .collect()
}

/// Extracts every well-formed `mul`, `do()` and `don't()` in `buffer`, in order.
pub fn scan_instructions(buffer: impl AsRef<[u8]>) -> Vec<Instruction> {
    Scanner::instructions(buffer.as_ref()).collect()
}

/// Like [`scan`], but reports an absent buffer instead of requiring one.
pub fn try_scan(buffer: Option<&[u8]>) -> Result<Vec<OperatorCall>, Error> {
    match buffer {
        Some(buffer) => Ok(scan(buffer)),
        None => Err(Error::new(
            ErrorImpl::InvalidPrecondition {
                reason: String::from("no buffer was supplied to scan"),
            },
            Position::null(),
        )),
    }
}
