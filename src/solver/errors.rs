// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the solver's domain validation.

use std::error::Error;
use std::fmt;

/// Errors rejecting a disk count before the recursion starts.
///
/// The recursion itself is total for every accepted count, so these are the
/// only failure modes the solver has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// n = 0: the puzzle is undefined with no disks.
    NoDisks,

    /// n exceeds [`MAX_DISKS`](crate::solver::MAX_DISKS): the step total
    /// 3*2^n - 4 (and the move count 2^n - 1) would overflow `u64`.
    TooManyDisks { requested: u32, max: u32 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoDisks => {
                write!(f, "n must be a positive integer (got 0)")
            }
            SolveError::TooManyDisks { requested, max } => {
                write!(
                    f,
                    "{} disks exceed the supported maximum of {} (counts no longer fit in u64)",
                    requested, max
                )
            }
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_disks_message_names_the_domain() {
        let message = SolveError::NoDisks.to_string();
        assert!(message.contains("positive integer"), "got: {}", message);
    }

    #[test]
    fn test_too_many_disks_message_carries_both_values() {
        let message = SolveError::TooManyDisks { requested: 63, max: 62 }.to_string();
        assert!(message.contains("63"), "got: {}", message);
        assert!(message.contains("62"), "got: {}", message);
    }
}
