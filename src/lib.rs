#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod eval;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use parser::parser::{scan, scan_instructions, try_scan};

/// Byte offset into a scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line containing `position`, returning its 1-based number, its text and the
/// byte column of `position` within it. Invalid UTF-8 in the line is replaced for display.
pub fn line_at_position(source: &[u8], position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive(|byte| *byte == b'\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let text = String::from_utf8_lossy(line).into_owned();
            return Some((index + 1, text, position - start));
        }

        start = end;
    }

    None
}
