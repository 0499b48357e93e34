//! Advent of Code 2015, Day 2
//!
//! * url: https://adventofcode.com/2015/day/2
//! * puzzle: ./puzzles/2015_02/README.md
//! * data: ./puzzles/2015_02/input.txt

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use super::read_lines;

struct Present {
    length: i64,
    width: i64,
    height: i64,
}

impl Present {
    fn parse(line: &str) -> Result<Self> {
        let dimensions: Vec<i64> = line
            .trim()
            .split('x')
            .map(|d| {
                d.parse()
                    .with_context(|| format!("bad dimension {d:?} in {line:?}"))
            })
            .collect::<Result<_>>()?;
        let [length, width, height] = dimensions[..] else {
            bail!("expected LxWxH, got {line:?}");
        };
        Ok(Self {
            length,
            width,
            height,
        })
    }

    fn faces(&self) -> [i64; 3] {
        [
            self.length * self.width,
            self.width * self.height,
            self.height * self.length,
        ]
    }

    /// Surface area plus the area of the smallest face, for slack.
    fn paper(&self) -> i64 {
        let faces = self.faces();
        let smallest = faces.into_iter().min().unwrap_or(0);
        faces.iter().map(|face| 2 * face).sum::<i64>() + smallest
    }

    /// Smallest perimeter around the box plus its volume, for the bow.
    fn ribbon(&self) -> i64 {
        let mut sides = [self.length, self.width, self.height];
        sides.sort_unstable();
        2 * (sides[0] + sides[1]) + sides[0] * sides[1] * sides[2]
    }
}

pub fn solve(items: &[String]) -> Result<(i64, i64)> {
    let mut paper = 0;
    let mut ribbon = 0;
    for item in items.iter().filter(|line| !line.trim().is_empty()) {
        let present = Present::parse(item)?;
        paper += present.paper();
        ribbon += present.ribbon();
    }
    Ok((paper, ribbon))
}

pub fn entrypoint(input: &Path) -> Result<(i64, i64)> {
    solve(&read_lines(input)?)
}
