//! Values produced by a scan.
//!
//! A scan yields a flat, ordered sequence rather than a tree: every matched
//! call is converted straight into an [`ast::Instruction`] or
//! [`ast::OperatorCall`] value owned by the result vector.

pub mod ast;
