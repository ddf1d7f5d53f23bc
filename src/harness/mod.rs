// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Measurement harness: the demonstration run and the performance sweep.
//!
//! The harness is the only caller of the solver. Each operation creates a
//! fresh [`StepCounter`], runs the solver over the standard peg assignment
//! (A to C via B), and returns plain data:
//!
//! - [`measure`]: one counted run, returning the step total
//! - [`run_sweep`]: one [`PerformanceSample`] per requested disk count,
//!   in the requested order
//! - [`demonstrate`]: one recorded run, returning moves plus the step total
//!
//! Presentation lives elsewhere ([`crate::report`]); nothing here prints.
//!
//! # Closed forms
//!
//! For a tower of n disks the solver performs exactly M(n) = 2^n - 1 moves
//! (the classic minimum: M(1) = 1, M(n) = 2*M(n-1) + 1) and charges
//! T(n) = 3*2^n - 4 steps (see [`crate::solver`] for the derivation).
//! Every sample therefore satisfies T(n) = 3*M(n) - 1, and any deviation
//! from [`predicted_steps`] signals an instrumentation bug.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::solver::{self, SolveError, StepCounter, MAX_DISKS};
use crate::tower::{MoveLog, Peg};

/// Disk count used by the printed walkthrough: small enough to read the
/// whole solution (7 moves).
pub const DEMO_DISKS: u32 = 3;

/// Designed sweep range for the growth comparison.
///
/// Twenty disks keeps the largest run around 3 million charged steps, which
/// measures instantly while spanning six orders of magnitude on the charts.
pub const SWEEP_RANGE: RangeInclusive<u32> = 1..=20;

/// One measured point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceSample {
    /// Disk count n.
    pub disks: u32,
    /// Steps charged by the instrumented solver for this n.
    pub measured_steps: u64,
    /// Minimum move count 2^n - 1.
    pub theoretical_moves: u64,
}

/// A recorded walkthrough: the ordered moves plus the steps the run charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demonstration {
    /// Disk count the walkthrough solved.
    pub disks: u32,
    /// Every move of the solution, in execution order.
    pub moves: MoveLog,
    /// Total steps charged while producing those moves.
    pub total_steps: u64,
}

/// Minimum move count for n disks: 2^n - 1.
///
/// # Panics
///
/// Panics if n is outside `1..=MAX_DISKS`.
pub fn theoretical_moves(n: u32) -> u64 {
    assert!(n >= 1 && n <= MAX_DISKS, "disk count out of range: {}", n);
    (1u64 << n) - 1
}

/// Step total the instrumented solver charges for n disks: 3*2^n - 4.
///
/// # Panics
///
/// Panics if n is outside `1..=MAX_DISKS`.
pub fn predicted_steps(n: u32) -> u64 {
    assert!(n >= 1 && n <= MAX_DISKS, "disk count out of range: {}", n);
    3 * (1u64 << n) - 4
}

/// Run the solver once for n disks and return the charged step total.
///
/// Each call uses a fresh counter, so repeated calls for the same n return
/// the same value.
pub fn measure(n: u32) -> Result<u64, SolveError> {
    let mut counter = StepCounter::new();
    solver::solve(n, Peg::A, Peg::C, Peg::B, &mut counter)?;
    let total = counter.total();
    debug!(n, steps = total, "measured instrumented run");
    Ok(total)
}

/// Measure every requested disk count, preserving the input order.
///
/// # Example
///
/// ```
/// use hanoi_recurrence::harness::run_sweep;
///
/// let samples = run_sweep(&[1, 2, 3]).unwrap();
/// let triples: Vec<(u32, u64, u64)> = samples
///     .iter()
///     .map(|s| (s.disks, s.measured_steps, s.theoretical_moves))
///     .collect();
/// assert_eq!(triples, vec![(1, 2, 1), (2, 8, 3), (3, 20, 7)]);
/// ```
pub fn run_sweep(disk_counts: &[u32]) -> Result<Vec<PerformanceSample>, SolveError> {
    let mut samples = Vec::with_capacity(disk_counts.len());
    for &n in disk_counts {
        let measured_steps = measure(n)?;
        samples.push(PerformanceSample {
            disks: n,
            measured_steps,
            theoretical_moves: theoretical_moves(n),
        });
    }
    Ok(samples)
}

/// Run the designed sweep over [`SWEEP_RANGE`].
pub fn default_sweep() -> Result<Vec<PerformanceSample>, SolveError> {
    let disk_counts: Vec<u32> = SWEEP_RANGE.collect();
    run_sweep(&disk_counts)
}

/// Run the solver once for n disks with move recording.
///
/// # Example
///
/// ```
/// use hanoi_recurrence::harness::demonstrate;
///
/// let demo = demonstrate(3).unwrap();
/// assert_eq!(demo.moves.len(), 7);
/// assert_eq!(demo.total_steps, 20);
/// ```
pub fn demonstrate(n: u32) -> Result<Demonstration, SolveError> {
    let mut counter = StepCounter::new();
    let moves = solver::solve_recorded(n, Peg::A, Peg::C, Peg::B, &mut counter)?;
    let total_steps = counter.total();
    debug!(n, moves = moves.len(), steps = total_steps, "recorded demonstration run");
    Ok(Demonstration { disks: n, moves, total_steps })
}
