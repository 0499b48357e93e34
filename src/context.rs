use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context as _, Result};

use crate::dotenv::DotEnv;

pub const YEAR_VAR: &str = "AOC_CURRENT_YEAR";
pub const DAY_VAR: &str = "AOC_CURRENT_DAY";
pub const TOKEN_VAR: &str = "AOC_SESSION_TOKEN";

/// Everything one invocation needs, resolved once up front.
#[derive(Debug)]
pub struct Context {
    pub year: i32,
    pub day: u32,
    pub token: Option<String>,
    /// Data directory for this puzzle, `puzzles/{year}_{day:02}`.
    pub puzzle_path: PathBuf,
    /// Source module a `--setup` renders, `src/puzzles/y{year}_d{day:02}.rs`.
    pub solution_path: PathBuf,
    pub template_dir: PathBuf,
    pub url: String,
    pub data_url: String,
    pub force: bool,
}

/// Values taken from the command line, each overriding the environment.
pub struct Overrides {
    pub year: Option<i32>,
    pub day: Option<u32>,
    pub token: Option<String>,
    pub force: bool,
}

impl Context {
    /// Resolve year, day, and token against the `.env` file and the process
    /// environment, write the results back so the next invocation can omit
    /// the flags, and derive the paths and URLs. Creates the puzzle data
    /// directory.
    pub fn resolve(overrides: Overrides, env_file: &DotEnv) -> Result<Self> {
        env_file.load()?;
        let year: i32 = sync_value(env_file, overrides.year, YEAR_VAR)?
            .with_context(|| format!("year not set; pass --year or set {YEAR_VAR}"))?;
        let day: u32 = sync_value(env_file, overrides.day, DAY_VAR)?
            .with_context(|| format!("day not set; pass --day or set {DAY_VAR}"))?;
        validate(year, day)?;
        let token: Option<String> = sync_value(env_file, overrides.token, TOKEN_VAR)?;

        let puzzle_path = PathBuf::from("puzzles").join(format!("{year}_{day:02}"));
        fs::create_dir_all(&puzzle_path)
            .with_context(|| format!("creating {}", puzzle_path.display()))?;
        let solution_path =
            Path::new("src/puzzles").join(format!("{}.rs", module_name(year, day)));
        let url = format!("https://adventofcode.com/{year}/day/{day}");
        let data_url = format!("{url}/input");

        Ok(Self {
            year,
            day,
            token,
            puzzle_path,
            solution_path,
            template_dir: PathBuf::from("template"),
            url,
            data_url,
            force: overrides.force,
        })
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "context:")?;
        writeln!(f, "    year: {}", self.year)?;
        writeln!(f, "    day: {}", self.day)?;
        let token = if self.token.is_some() { "set" } else { "unset" };
        writeln!(f, "    token: {token}")?;
        writeln!(f, "    puzzle_path: {}", self.puzzle_path.display())?;
        writeln!(f, "    solution_path: {}", self.solution_path.display())?;
        writeln!(f, "    url: {}", self.url)?;
        writeln!(f, "    data_url: {}", self.data_url)?;
        write!(f, "    force: {}", self.force)
    }
}

/// Module name used for the solver registry, the rendered source file, and
/// the `cargo test` filter.
pub fn module_name(year: i32, day: u32) -> String {
    format!("y{year}_d{day:02}")
}

/// Prefer the CLI value, fall back to the environment variable, ignore
/// values that do not parse. Whatever wins is persisted to the `.env` file.
fn sync_value<T>(env_file: &DotEnv, cli: Option<T>, key: &str) -> Result<Option<T>>
where
    T: FromStr + ToString,
{
    let value = cli.or_else(|| env::var(key).ok().and_then(|raw| raw.trim().parse().ok()));
    if let Some(v) = &value {
        env_file.set_value(key, &v.to_string())?;
    }
    Ok(value)
}

fn validate(year: i32, day: u32) -> Result<()> {
    if year < 2015 || !(1..=25).contains(&day) {
        bail!("year/day out of range: year {year}, day {day}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_year_and_day_range() {
        assert!(validate(2015, 1).is_ok());
        assert!(validate(2023, 25).is_ok());
        assert!(validate(2014, 1).is_err());
        assert!(validate(2023, 0).is_err());
        assert!(validate(2023, 26).is_err());
    }

    #[test]
    fn module_names_are_zero_padded() {
        assert_eq!(module_name(2015, 1), "y2015_d01");
        assert_eq!(module_name(2023, 25), "y2023_d25");
    }

    #[test]
    fn sync_value_prefers_cli_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = DotEnv::new(dir.path().join(".env"));
        env::set_var("ADVENT_SYNC_TEST_YEAR", "2020");
        let value: Option<i32> =
            sync_value(&env_file, Some(2023), "ADVENT_SYNC_TEST_YEAR").unwrap();
        assert_eq!(value, Some(2023));
        assert_eq!(
            env_file.parse().unwrap(),
            vec![("ADVENT_SYNC_TEST_YEAR".to_string(), "2023".to_string())]
        );
    }

    #[test]
    fn sync_value_ignores_unparsable_environment() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = DotEnv::new(dir.path().join(".env"));
        env::set_var("ADVENT_SYNC_TEST_DAY", "not a number");
        let value: Option<u32> = sync_value(&env_file, None, "ADVENT_SYNC_TEST_DAY").unwrap();
        assert_eq!(value, None);
    }
}
