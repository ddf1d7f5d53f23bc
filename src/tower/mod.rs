// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Domain vocabulary for the Towers of Hanoi puzzle.
//!
//! This module contains the types the solver speaks in:
//! - [`Peg`]: one of the three labeled positions holding a stack of disks
//! - [`Move`]: relocation of the topmost disk from one peg to another
//! - [`MoveSink`]: capability for receiving moves as they are produced
//! - [`MoveLog`]: append-only collector implementing [`MoveSink`]
//!
//! Rendered moves use the Portuguese wording of the recurrence-analysis
//! exercise this demo accompanies ("Mover disco 1 de A para C"), since the
//! console report is compared against that layout verbatim.

use std::fmt;
use std::slice;

/// Number of pegs in the puzzle.
pub const NPEGS: usize = 3;

/// One of the three labeled peg positions.
///
/// The solver accepts any assignment of the source/destination/auxiliary
/// roles to these labels; the demonstration and the measurement harness
/// always move the tower from `A` to `C` via `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs, in label order.
    pub const ALL: [Peg; NPEGS] = [Peg::A, Peg::B, Peg::C];

    /// The single-letter label used in rendered moves.
    pub fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }

    /// Index in `0..NPEGS`, for array-backed peg state (used by move replays).
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relocation of disk `disk` from the top of `from` to the top of `to`.
///
/// Disks are numbered from 1 (smallest) up to the tower height n (largest).
/// Moves are immutable once created; the solver produces them in strict
/// chronological order.
///
/// # Example
///
/// ```
/// use hanoi_recurrence::tower::{Move, Peg};
///
/// let mv = Move::new(1, Peg::A, Peg::C);
/// assert_eq!(mv.to_string(), "Mover disco 1 de A para C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Disk number, 1-based from the smallest disk.
    pub disk: u32,
    /// Peg the disk leaves.
    pub from: Peg,
    /// Peg the disk arrives on.
    pub to: Peg,
}

impl Move {
    /// Create a move of `disk` from `from` to `to`.
    pub fn new(disk: u32, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mover disco {} de {} para {}", self.disk, self.from, self.to)
    }
}

/// Capability for receiving moves as the solver produces them.
///
/// The solver emits each move exactly once, in chronological order, to
/// whichever sink it was given. [`MoveLog`] is the append-only collector
/// used by the recorded entry point; the counted-only entry point supplies
/// a sink that discards everything, so the instrumentation charges the
/// same steps whether or not moves are kept.
pub trait MoveSink {
    /// Receive the next move of the solution.
    fn record(&mut self, mv: Move);
}

/// Append-only, ordered collection of recorded moves.
///
/// The log only grows; recorded moves are never reordered or dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over the recorded moves in order.
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The recorded moves as a slice, in order.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Consume the log, yielding the recorded moves.
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl MoveSink for MoveLog {
    fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peg_labels() {
        assert_eq!(Peg::A.label(), 'A');
        assert_eq!(Peg::B.label(), 'B');
        assert_eq!(Peg::C.label(), 'C');
    }

    #[test]
    fn test_peg_indices_cover_all_pegs() {
        for (expected, peg) in Peg::ALL.iter().enumerate() {
            assert_eq!(peg.index(), expected);
        }
    }

    #[test]
    fn test_peg_display_matches_label() {
        for peg in Peg::ALL {
            assert_eq!(peg.to_string(), peg.label().to_string());
        }
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(3, Peg::A, Peg::C);
        assert_eq!(mv.to_string(), "Mover disco 3 de A para C");
    }

    #[test]
    fn test_move_log_records_in_order() {
        let mut log = MoveLog::new();
        assert!(log.is_empty());

        log.record(Move::new(1, Peg::A, Peg::C));
        log.record(Move::new(2, Peg::A, Peg::B));

        assert_eq!(log.len(), 2);
        assert_eq!(log.as_slice()[0], Move::new(1, Peg::A, Peg::C));
        assert_eq!(log.as_slice()[1], Move::new(2, Peg::A, Peg::B));
    }

    #[test]
    fn test_move_log_iteration() {
        let mut log = MoveLog::new();
        log.record(Move::new(1, Peg::A, Peg::B));
        log.record(Move::new(1, Peg::B, Peg::C));

        let disks: Vec<u32> = log.iter().map(|mv| mv.disk).collect();
        assert_eq!(disks, vec![1, 1]);

        let froms: Vec<Peg> = (&log).into_iter().map(|mv| mv.from).collect();
        assert_eq!(froms, vec![Peg::A, Peg::B]);
    }
}
