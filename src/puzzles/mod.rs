use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

pub mod y2015_d01;
pub mod y2015_d02;
pub mod y2022_d01;
pub mod y2023_d01;

pub type Entrypoint = fn(&Path) -> Result<(i64, i64)>;

/// Dispatch table for solved puzzles. New modules get a line here.
pub fn find(year: i32, day: u32) -> Option<Entrypoint> {
    match (year, day) {
        (2015, 1) => Some(y2015_d01::entrypoint),
        (2015, 2) => Some(y2015_d02::entrypoint),
        (2022, 1) => Some(y2022_d01::entrypoint),
        (2023, 1) => Some(y2023_d01::entrypoint),
        _ => None,
    }
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("no input data file found at {}", path.display()))?;
    Ok(input.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_registered_puzzles() {
        assert!(find(2015, 1).is_some());
        assert!(find(2015, 2).is_some());
        assert!(find(2022, 1).is_some());
        assert!(find(2023, 1).is_some());
        assert!(find(2015, 3).is_none());
        assert!(find(2024, 1).is_none());
    }

    #[test]
    fn read_lines_reports_the_missing_path() {
        let err = read_lines(Path::new("puzzles/0000_00/input.txt")).unwrap_err();
        assert!(err.to_string().contains("puzzles/0000_00/input.txt"));
    }
}
