/// Result of a single parse attempt at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// The value, and how many bytes it consumed.
    Matched(T, usize),
    /// Nothing matched here; try another alternative or skip ahead.
    Rejected,
    /// The buffer ended before the attempt could finish.
    EndOfInput,
    /// The attempt started well but hit a byte that cannot continue it.
    MalformedInput,
}

impl<T> ParseOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Matched(value, consumed) => ParseOutcome::Matched(f(value), consumed),
            ParseOutcome::Rejected => ParseOutcome::Rejected,
            ParseOutcome::EndOfInput => ParseOutcome::EndOfInput,
            ParseOutcome::MalformedInput => ParseOutcome::MalformedInput,
        }
    }

    /// Like [`ParseOutcome::map`], but a `None` turns the match into a rejection.
    pub fn filter_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Matched(value, consumed) => match f(value) {
                Some(value) => ParseOutcome::Matched(value, consumed),
                None => ParseOutcome::Rejected,
            },
            ParseOutcome::Rejected => ParseOutcome::Rejected,
            ParseOutcome::EndOfInput => ParseOutcome::EndOfInput,
            ParseOutcome::MalformedInput => ParseOutcome::MalformedInput,
        }
    }

    /// Bytes consumed, zero for anything but a match.
    pub fn consumed(&self) -> usize {
        match self {
            ParseOutcome::Matched(_, consumed) => *consumed,
            _ => 0,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            ParseOutcome::Matched(value, _) => Some(value),
            _ => None,
        }
    }
}
