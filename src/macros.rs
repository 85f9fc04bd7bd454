//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the parsers:
//!
//! - `TRY_MATCH!` - Unwraps a matched `ParseOutcome`, returning any other outcome

/// Unwraps `ParseOutcome::Matched(value, consumed)` into `(value, consumed)`, returning from the
/// enclosing function with any other outcome.
///
/// # Arguments
///
/// * `$outcome` - The outcome to unwrap
/// * `$rejected` - Optional outcome to return instead of `ParseOutcome::Rejected`
///
/// # Example
///
/// ```ignore
/// let (value, consumed) = TRY_MATCH!(parse_integer(buffer, offset), ParseOutcome::MalformedInput);
/// ```
#[macro_export]
macro_rules! TRY_MATCH {
    ($outcome:expr) => {
        $crate::TRY_MATCH!($outcome, $crate::lexer::outcome::ParseOutcome::Rejected)
    };
    ($outcome:expr, $rejected:expr) => {
        match $outcome {
            $crate::lexer::outcome::ParseOutcome::Matched(value, consumed) => (value, consumed),
            $crate::lexer::outcome::ParseOutcome::Rejected => return $rejected,
            $crate::lexer::outcome::ParseOutcome::EndOfInput => {
                return $crate::lexer::outcome::ParseOutcome::EndOfInput
            }
            $crate::lexer::outcome::ParseOutcome::MalformedInput => {
                return $crate::lexer::outcome::ParseOutcome::MalformedInput
            }
        }
    };
}
