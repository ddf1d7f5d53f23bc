// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering for demonstration runs and sweep results.
//!
//! Both renderers return complete strings (trailing newline included) so
//! callers can write them with `print!` or compare them byte for byte in
//! tests. Chart output lives in the [`charts`] submodule.

pub mod charts;

use crate::harness::{Demonstration, PerformanceSample};

/// Rule width framing the demonstration block.
const DEMO_RULE_WIDTH: usize = 50;

/// Rule width framing the sweep table.
const TABLE_RULE_WIDTH: usize = 60;

/// Render the move-by-move walkthrough.
///
/// Layout: a framed title, one indented line per move, then the move and
/// step totals. Ends with a blank line so the next block stands apart.
pub fn render_demonstration(demo: &Demonstration) -> String {
    let rule = "=".repeat(DEMO_RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "DEMONSTRAÇÃO: Torres de Hanói com {} discos\n",
        demo.disks
    ));
    out.push_str(&rule);
    out.push('\n');
    for (i, mv) in demo.moves.iter().enumerate() {
        out.push_str(&format!("  Passo {}: {}\n", i + 1, mv));
    }
    out.push('\n');
    out.push_str(&format!("Total de movimentos: {}\n", demo.moves.len()));
    out.push_str(&format!("Total de linhas executadas: {}\n", demo.total_steps));
    out.push('\n');
    out
}

/// Render the sweep results as a fixed-width comparison table.
///
/// Counts are right-aligned in 20-column cells with thousands separators,
/// so the growth of both columns is visible at a glance.
pub fn render_sweep_table(samples: &[PerformanceSample]) -> String {
    let heavy_rule = "=".repeat(TABLE_RULE_WIDTH);
    let light_rule = "-".repeat(TABLE_RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&heavy_rule);
    out.push('\n');
    out.push_str(&format!(
        "{:>4} | {:>20} | {:>20}\n",
        "n", "Linhas Executadas", "Movimentos (2^n - 1)"
    ));
    out.push_str(&light_rule);
    out.push('\n');
    for sample in samples {
        out.push_str(&format!(
            "{:>4} | {:>20} | {:>20}\n",
            sample.disks,
            group_digits(sample.measured_steps),
            group_digits(sample.theoretical_moves)
        ));
    }
    out.push_str(&heavy_rule);
    out.push('\n');
    out
}

/// Format a count with commas between thousands groups, e.g. `1,048,575`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
