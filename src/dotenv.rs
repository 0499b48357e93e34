use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

/// A skinny stand-in for a full dotenv loader, bound to a single file.
pub struct DotEnv {
    path: PathBuf,
}

impl DotEnv {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file into key/value pairs in file order, creating it empty
    /// if it does not exist. Blank lines, `#` comments, and lines without an
    /// `=` are ignored. Keys are upper-cased, both sides trimmed, and the
    /// split happens on the first `=` so values may contain one.
    pub fn parse(&self) -> Result<Vec<(String, String)>> {
        if !self.path.exists() {
            fs::write(&self.path, "")
                .with_context(|| format!("creating {}", self.path.display()))?;
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let mut parsed = Vec::new();
        for line in contents.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            upsert(&mut parsed, key.trim().to_uppercase(), value.trim().to_string());
        }
        Ok(parsed)
    }

    /// Parse, then merge every pair into the process environment.
    pub fn load(&self) -> Result<()> {
        for (key, value) in self.parse()? {
            env::set_var(key, value);
        }
        Ok(())
    }

    /// Write a key/value pair to the file and the process environment.
    /// Rewrites the whole file; comments are not preserved.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let key = key.trim().to_uppercase();
        let value = value.trim().to_string();
        let mut parsed = self.parse()?;
        env::set_var(&key, &value);
        upsert(&mut parsed, key, value);
        let mut lines = String::new();
        for (k, v) in &parsed {
            lines.push_str(k);
            lines.push('=');
            lines.push_str(v);
            lines.push('\n');
        }
        fs::write(&self.path, lines)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some((_, v)) => *v = value,
        None => pairs.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_junk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "# a comment\nfoo = bar\nno equals here\n\nBAZ=qux\n").unwrap();
        let parsed = DotEnv::new(&path).parse().unwrap();
        assert_eq!(
            parsed,
            vec![
                ("FOO".to_string(), "bar".to_string()),
                ("BAZ".to_string(), "qux".to_string()),
            ]
        );
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "TOKEN=abc=def==\n").unwrap();
        let parsed = DotEnv::new(&path).parse().unwrap();
        assert_eq!(parsed, vec![("TOKEN".to_string(), "abc=def==".to_string())]);
    }

    #[test]
    fn parse_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let parsed = DotEnv::new(&path).parse().unwrap();
        assert!(parsed.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn set_value_updates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "# gone after rewrite\nFOO=old\n").unwrap();
        let env_file = DotEnv::new(&path);
        env_file.set_value("foo", "new").unwrap();
        env_file.set_value("extra", " padded ").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "FOO=new\nEXTRA=padded\n");
    }

    #[test]
    fn load_merges_into_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "advent_dotenv_test_load=hello\n").unwrap();
        DotEnv::new(&path).load().unwrap();
        assert_eq!(env::var("ADVENT_DOTENV_TEST_LOAD").unwrap(), "hello");
    }
}
