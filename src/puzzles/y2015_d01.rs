//! Advent of Code 2015, Day 1
//!
//! * url: https://adventofcode.com/2015/day/1
//! * puzzle: ./puzzles/2015_01/README.md
//! * data: ./puzzles/2015_01/input.txt

use std::path::Path;

use anyhow::Result;

use super::read_lines;

fn end_floor(item: &str) -> i64 {
    item.chars().fold(0, |floor, c| match c {
        '(' => floor + 1,
        ')' => floor - 1,
        _ => floor,
    })
}

/// 1-based position of the first character that takes the floor below zero,
/// or 0 if the basement is never entered.
fn first_basement(item: &str) -> i64 {
    let mut floor = 0i64;
    for (index, c) in item.chars().enumerate() {
        match c {
            '(' => floor += 1,
            ')' => floor -= 1,
            _ => {}
        }
        if floor < 0 {
            return (index + 1) as i64;
        }
    }
    0
}

pub fn solve(items: &[String]) -> (i64, i64) {
    let mut end = 0;
    let mut basement = 0;
    for item in items {
        end = end_floor(item);
        basement = first_basement(item);
    }
    (end, basement)
}

pub fn entrypoint(input: &Path) -> Result<(i64, i64)> {
    Ok(solve(&read_lines(input)?))
}
