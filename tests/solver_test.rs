// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the instrumented solver.

mod common;

use common::{closed_form_moves, closed_form_steps, replay};
use hanoi_recurrence::solver::{self, SolveError, StepCounter, StepKind, MAX_DISKS};
use hanoi_recurrence::tower::Peg;

#[test]
fn test_three_disk_move_sequence() {
    let mut counter = StepCounter::new();
    let log = solver::solve_recorded(3, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
    let rendered: Vec<String> = log.iter().map(|mv| mv.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "Mover disco 1 de A para C",
            "Mover disco 2 de A para B",
            "Mover disco 1 de C para B",
            "Mover disco 3 de A para C",
            "Mover disco 1 de B para A",
            "Mover disco 2 de B para C",
            "Mover disco 1 de A para C",
        ]
    );
    assert_eq!(counter.total(), 20);
}

#[test]
fn test_three_disk_step_breakdown() {
    let mut counter = StepCounter::new();
    solver::solve(3, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
    assert_eq!(counter.get(StepKind::BaseCheck), 7);
    assert_eq!(counter.get(StepKind::BaseMove), 4);
    assert_eq!(counter.get(StepKind::UpperRecursion), 3);
    assert_eq!(counter.get(StepKind::DiskMove), 3);
    assert_eq!(counter.get(StepKind::LowerRecursion), 3);
    assert_eq!(counter.total(), 20);
}

#[test]
fn test_totals_match_closed_form() {
    for n in 1..=10 {
        let mut counter = StepCounter::new();
        solver::solve(n, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
        assert_eq!(counter.total(), closed_form_steps(n), "n = {}", n);
    }
}

#[test]
fn test_every_solution_is_legal() {
    for n in 1..=8 {
        let mut counter = StepCounter::new();
        let log = solver::solve_recorded(n, Peg::A, Peg::C, Peg::B, &mut counter).unwrap();
        assert_eq!(log.len() as u64, closed_form_moves(n), "n = {}", n);

        let pegs = replay(n, Peg::A, &log);
        assert!(pegs[Peg::A.index()].is_empty(), "n = {}", n);
        assert!(pegs[Peg::B.index()].is_empty(), "n = {}", n);
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(pegs[Peg::C.index()], expected, "n = {}", n);
    }
}

#[test]
fn test_counting_is_independent_of_recording() {
    for n in 1..=8 {
        let mut counted = StepCounter::new();
        solver::solve(n, Peg::A, Peg::C, Peg::B, &mut counted).unwrap();
        let mut recorded = StepCounter::new();
        solver::solve_recorded(n, Peg::A, Peg::C, Peg::B, &mut recorded).unwrap();
        assert_eq!(counted, recorded, "n = {}", n);
    }
}

#[test]
fn test_zero_disks_is_rejected() {
    let mut counter = StepCounter::new();
    let err = solver::solve(0, Peg::A, Peg::C, Peg::B, &mut counter).unwrap_err();
    assert_eq!(err, SolveError::NoDisks);
    assert_eq!(err.to_string(), "n must be a positive integer (got 0)");
    assert_eq!(counter.total(), 0);
}

#[test]
fn test_oversized_tower_is_rejected() {
    let mut counter = StepCounter::new();
    let err = solver::solve(MAX_DISKS + 1, Peg::A, Peg::C, Peg::B, &mut counter).unwrap_err();
    assert_eq!(
        err,
        SolveError::TooManyDisks {
            requested: MAX_DISKS + 1,
            max: MAX_DISKS
        }
    );
    assert_eq!(counter.total(), 0);
}
