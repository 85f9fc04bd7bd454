//! Error types and error handling for the scanner.
//!
//! Scanning itself never fails on malformed input: rejected matches are
//! recovered from internally. The errors here cover the conditions that are
//! reported to a caller:
//!
//! - An absent input buffer
//! - An input file that could not be read

pub mod errors;
