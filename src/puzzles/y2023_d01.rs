//! Advent of Code 2023, Day 1
//!
//! * url: https://adventofcode.com/2023/day/1
//! * puzzle: ./puzzles/2023_01/README.md
//! * data: ./puzzles/2023_01/input.txt

use std::path::Path;

use anyhow::Result;

use super::read_lines;

const DIGIT_WORDS: [(&str, i64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// First and last digit of the line, concatenated into a two-digit value.
/// With `include_words`, spelled-out digits count too; the scan moves one
/// character at a time so overlaps like `eightwo` yield both digits. A line
/// with no digit is worth 0.
fn calibration(line: &str, include_words: bool) -> i64 {
    let mut digits = Vec::new();
    for (index, c) in line.char_indices() {
        if let Some(d) = c.to_digit(10) {
            digits.push(d as i64);
        } else if include_words {
            let rest = &line[index..];
            for (word, value) in DIGIT_WORDS {
                if rest.starts_with(word) {
                    digits.push(value);
                    break;
                }
            }
        }
    }
    match (digits.first(), digits.last()) {
        (Some(first), Some(last)) => first * 10 + last,
        _ => 0,
    }
}

pub fn solve(lines: &[String]) -> (i64, i64) {
    let digits_only = lines.iter().map(|line| calibration(line, false)).sum();
    let with_words = lines.iter().map(|line| calibration(line, true)).sum();
    (digits_only, with_words)
}

pub fn entrypoint(input: &Path) -> Result<(i64, i64)> {
    Ok(solve(&read_lines(input)?))
}
