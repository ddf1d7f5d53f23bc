// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive Towers of Hanoi solver with step instrumentation.
//!
//! The classic recursion moves n disks from a source peg to a destination
//! peg: move the n-1 smaller disks onto the auxiliary peg, move disk n
//! across, then move the n-1 smaller disks onto the destination. The solver
//! here adds instrumentation: a [`StepCounter`] charged at five fixed sites
//! ([`StepKind`]), which the harness reads as the "measured steps" for a run.
//!
//! # Counting model
//!
//! - every invocation charges `BaseCheck` on entry;
//! - a base-case invocation (n = 1) additionally charges `BaseMove`;
//! - an internal invocation (n > 1) additionally charges `UpperRecursion`,
//!   `DiskMove` and `LowerRecursion`, one before each of its three actions.
//!
//! Writing T(n) for the total charged on n disks:
//!
//! - T(1) = 2 (check + move)
//! - T(n) = 2*T(n-1) + 4 for n > 1 (four local charges plus both descents)
//!
//! which resolves to **T(n) = 3*2^n - 4**: the homogeneous part doubles per
//! level while the +4 per internal invocation sums to 4*(2^(n-1) - 1) over
//! the 2^(n-1) - 1 internal invocations. Equivalently, with M(n) = 2^n - 1
//! the minimum move count, T(n) = 3*M(n) - 1.
//!
//! The granularity of this scheme (which operations get charged) is a fixed
//! design choice of the instrumentation, not a cost model to refine; the
//! harness and its tests depend on the recurrence above holding exactly.
//!
//! # Entry points
//!
//! Two thin entry points share one recursive core: [`solve`] counts steps
//! and discards moves, [`solve_recorded`] counts steps and collects every
//! move in a [`MoveLog`]. Both validate the disk count first; the recursion
//! itself is total and cannot fail.
//!
//! # Recursion depth
//!
//! The recursion descends one level per disk, so the call-stack depth equals
//! n. Disk counts are capped at [`MAX_DISKS`] = 62, the largest n for which
//! the step total and move count fit in `u64`, which also keeps the stack
//! shallow.

pub mod errors;
pub mod steps;

pub use errors::SolveError;
pub use steps::{StepCounter, StepKind};

use crate::tower::{Move, MoveLog, MoveSink, Peg};

/// Largest accepted disk count.
///
/// 62 is the largest n for which both the step total 3*2^n - 4 and the move
/// count 2^n - 1 fit in a `u64`. Larger towers are rejected with
/// [`SolveError::TooManyDisks`] rather than silently overflowing. At 62
/// disks the solve would also take geological time; the bound is an overflow
/// guard, not a performance promise.
pub const MAX_DISKS: u32 = 62;

/// Sink that discards moves, backing the counted-only entry point.
#[derive(Debug)]
struct NullSink;

impl MoveSink for NullSink {
    fn record(&mut self, _mv: Move) {}
}

/// Validate a disk count against the solver's domain (1..=MAX_DISKS).
fn check_disks(n: u32) -> Result<(), SolveError> {
    if n == 0 {
        return Err(SolveError::NoDisks);
    }
    if n > MAX_DISKS {
        return Err(SolveError::TooManyDisks { requested: n, max: MAX_DISKS });
    }
    Ok(())
}

/// Solve the n-disk puzzle from `source` to `destination` via `auxiliary`,
/// charging `counter` and discarding the moves.
///
/// The three pegs must be distinct.
///
/// # Example
///
/// ```
/// use hanoi_recurrence::solver::{solve, StepCounter};
/// use hanoi_recurrence::tower::Peg;
///
/// let mut counter = StepCounter::new();
/// solve(3, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
/// assert_eq!(counter.total(), 20); // 3*2^3 - 4
/// ```
pub fn solve(
    n: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    counter: &mut StepCounter,
) -> Result<(), SolveError> {
    check_disks(n)?;
    debug_assert!(distinct(source, destination, auxiliary), "pegs must be distinct");
    solve_into(n, source, destination, auxiliary, &mut NullSink, counter);
    Ok(())
}

/// Solve the n-disk puzzle, charging `counter` and recording every move in
/// chronological order.
///
/// The three pegs must be distinct. The returned log always holds exactly
/// 2^n - 1 moves, and the counter charges are identical to an unrecorded
/// [`solve`] of the same n.
///
/// # Example
///
/// ```
/// use hanoi_recurrence::solver::{solve_recorded, StepCounter};
/// use hanoi_recurrence::tower::Peg;
///
/// let mut counter = StepCounter::new();
/// let log = solve_recorded(2, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
/// assert_eq!(log.len(), 3);
/// assert_eq!(log.as_slice()[1].to_string(), "Mover disco 2 de A para C");
/// ```
pub fn solve_recorded(
    n: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    counter: &mut StepCounter,
) -> Result<MoveLog, SolveError> {
    check_disks(n)?;
    debug_assert!(distinct(source, destination, auxiliary), "pegs must be distinct");
    let mut log = MoveLog::new();
    solve_into(n, source, destination, auxiliary, &mut log, counter);
    Ok(log)
}

fn distinct(a: Peg, b: Peg, c: Peg) -> bool {
    a != b && b != c && a != c
}

/// The recursive core shared by both entry points.
///
/// Total for n >= 1. Charges `counter` per the counting model in the module
/// documentation and emits each move to `sink` immediately after charging
/// the corresponding site, so recorded order equals execution order.
fn solve_into(
    n: u32,
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
    sink: &mut dyn MoveSink,
    counter: &mut StepCounter,
) {
    counter.record(StepKind::BaseCheck);

    if n == 1 {
        counter.record(StepKind::BaseMove);
        sink.record(Move::new(1, source, destination));
        return;
    }

    counter.record(StepKind::UpperRecursion);
    solve_into(n - 1, source, auxiliary, destination, sink, counter);

    counter.record(StepKind::DiskMove);
    sink.record(Move::new(n, source, destination));

    counter.record(StepKind::LowerRecursion);
    solve_into(n - 1, auxiliary, destination, source, sink, counter);
}
