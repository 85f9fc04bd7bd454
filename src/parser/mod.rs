//! Parser module for extracting operator calls from unstructured text.
//!
//! This module contains the call parser and the scan driver that walks a
//! buffer with it. It handles:
//!
//! - The legal-next token transitions of a call
//! - Recognising `mul(<int>,<int>)`, `do()` and `don't()` at an offset
//! - Skipping one byte past anything that does not match
//!
//! Parse attempts are pure functions of `(buffer, offset)`; the only mutable
//! state is the scan cursor, which never moves backwards.

pub mod call;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
