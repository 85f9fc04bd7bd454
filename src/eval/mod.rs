//! Evaluation of scanned instructions.
//!
//! Sums the products of `mul` calls, optionally honouring the `do()` and
//! `don't()` toggles that precede them.

pub mod eval;
