//! Advent of Code 2022, Day 1
//!
//! * url: https://adventofcode.com/2022/day/1
//! * puzzle: ./puzzles/2022_01/README.md
//! * data: ./puzzles/2022_01/input.txt

use std::path::Path;

use anyhow::{Context as _, Result};

use super::read_lines;

/// Sum each blank-line-separated group of numbers. A final group without a
/// trailing blank line still counts.
fn inventories(lines: &[String]) -> Result<Vec<i64>> {
    let mut totals = Vec::new();
    let mut current: Option<i64> = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            if let Some(total) = current.take() {
                totals.push(total);
            }
        } else {
            let calories: i64 = line
                .parse()
                .with_context(|| format!("bad calorie count {line:?}"))?;
            current = Some(current.unwrap_or(0) + calories);
        }
    }
    if let Some(total) = current {
        totals.push(total);
    }
    Ok(totals)
}

pub fn solve(lines: &[String]) -> Result<(i64, i64)> {
    let mut totals = inventories(lines)?;
    totals.sort_unstable_by(|a, b| b.cmp(a));
    let top_one = totals.first().copied().unwrap_or(0);
    let top_three = totals.iter().take(3).sum();
    Ok((top_one, top_three))
}

pub fn entrypoint(input: &Path) -> Result<(i64, i64)> {
    solve(&read_lines(input)?)
}
