// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use hanoi_recurrence::{Move, MoveLog, Peg};

/// Closed form for the instrumented step total: T(n) = 3*2^n - 4.
pub fn closed_form_steps(n: u32) -> u64 {
    3 * (1u64 << n) - 4
}

/// Closed form for the minimum move count: M(n) = 2^n - 1.
pub fn closed_form_moves(n: u32) -> u64 {
    (1u64 << n) - 1
}

/// Replay a move log against the puzzle rules.
///
/// Starts with disks n..1 stacked on `source`, applies every move, and
/// panics if a move lifts a disk that is not on top of its peg or lands
/// it on a smaller disk. Returns the three peg stacks afterwards,
/// bottom (largest) first, indexed by [`Peg::index`].
pub fn replay(n: u32, source: Peg, moves: &MoveLog) -> [Vec<u32>; 3] {
    let mut pegs: [Vec<u32>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    pegs[source.index()] = (1..=n).rev().collect();
    for (i, mv) in moves.iter().enumerate() {
        let Move { disk, from, to } = *mv;
        let lifted = pegs[from.index()].pop();
        assert_eq!(
            lifted,
            Some(disk),
            "move {}: disk {} is not on top of peg {}",
            i + 1,
            disk,
            from
        );
        if let Some(&resting) = pegs[to.index()].last() {
            assert!(
                disk < resting,
                "move {}: disk {} placed on smaller disk {}",
                i + 1,
                disk,
                resting
            );
        }
        pegs[to.index()].push(disk);
    }
    pegs
}
