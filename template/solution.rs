//! Advent of Code {{year}}, Day {{day}}
//!
//! * url: {{url}}
//! * puzzle: ./puzzles/{{year}}_{{day_padded}}/README.md
//! * data: ./puzzles/{{year}}_{{day_padded}}/input.txt

use std::path::Path;

use anyhow::Result;

use super::read_lines;

pub fn solve(lines: &[String]) -> (i64, i64) {
    let _ = lines;
    (0, 0)
}

pub fn entrypoint(input: &Path) -> Result<(i64, i64)> {
    Ok(solve(&read_lines(input)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_example() {
        assert_eq!(solve(&[]), (0, 0));
    }
}
