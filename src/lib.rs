// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Instrumented Towers of Hanoi solver with step counting and growth charts.
//!
//! The crate solves the classic puzzle with the textbook recursive algorithm
//! while charging every executed line of that algorithm to a [`StepCounter`].
//! Running the sweep over increasing disk counts turns the familiar claim
//! "the recursion is exponential" into measured numbers and pictures.
//!
//! # Architecture
//!
//! Four modules build on each other, data flowing strictly upward:
//!
//! 1. [`tower`]: the vocabulary. Pegs, moves, and move recording.
//! 2. [`solver`]: the instrumented recursion and its counting model.
//! 3. [`harness`]: measurement entry points. Runs the solver with fresh
//!    counters and returns plain data ([`PerformanceSample`],
//!    [`Demonstration`]); never prints.
//! 4. [`report`]: presentation. Text rendering of demonstrations and sweep
//!    tables, plus PNG charts of the collected samples.
//!
//! # Counting Model
//!
//! Every solver call charges one step for its base-case check. A base call
//! (one disk) adds one step for its move. An internal call adds three more,
//! one per body line: upper recursion, disk move, lower recursion. The
//! totals obey T(1) = 2 and T(n) = 2*T(n-1) + 4, which closes to
//! T(n) = 3*2^n - 4, exactly 3*M(n) - 1 for the minimum move count
//! M(n) = 2^n - 1.
//!
//! ```
//! use hanoi_recurrence::harness::demonstrate;
//!
//! let demo = demonstrate(3).unwrap();
//! assert_eq!(demo.moves.len(), 7);
//! assert_eq!(demo.total_steps, 20);
//! ```

pub mod harness;
pub mod report;
pub mod solver;
pub mod tower;

// Re-export commonly used types
pub use harness::{Demonstration, PerformanceSample};
pub use solver::{SolveError, StepCounter, StepKind, MAX_DISKS};
pub use tower::{Move, MoveLog, MoveSink, Peg};
