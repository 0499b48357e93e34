use std::collections::HashMap;
use std::fs;

use anyhow::{Context as _, Result};

use crate::context::{module_name, Context};
use crate::fetch;
use crate::markdown;
use crate::template;

fn base_values(ctx: &Context) -> HashMap<&'static str, String> {
    HashMap::from([
        ("year", ctx.year.to_string()),
        ("day", ctx.day.to_string()),
        ("day_padded", format!("{:02}", ctx.day)),
        ("url", ctx.url.clone()),
        ("data_url", ctx.data_url.clone()),
    ])
}

/// Render the solution-module skeleton into `src/puzzles/`. An existing
/// file is left untouched unless `--force`.
pub fn make_solution(ctx: &Context) -> Result<()> {
    let target = &ctx.solution_path;
    if ctx.force && target.exists() {
        fs::remove_file(target).with_context(|| format!("removing {}", target.display()))?;
    }
    if target.exists() {
        log::debug!("{} already exists, skipping", target.display());
        return Ok(());
    }
    let source = ctx.template_dir.join("solution.rs");
    let body = fs::read_to_string(&source)
        .with_context(|| format!("reading template {}", source.display()))?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(target, template::render(&body, &base_values(ctx)))
        .with_context(|| format!("writing {}", target.display()))?;
    log::info!(
        "wrote {}; register {} in src/puzzles/mod.rs to make it runnable",
        target.display(),
        module_name(ctx.year, ctx.day)
    );
    Ok(())
}

/// Download the puzzle input into the puzzle directory. An existing file is
/// kept unless `--force`.
pub fn fetch_input(ctx: &Context) -> Result<()> {
    let target = ctx.puzzle_path.join("input.txt");
    if target.exists() && !ctx.force {
        log::debug!("{} already exists, skipping", target.display());
        return Ok(());
    }
    let body = fetch::get(ctx, &ctx.data_url)?;
    fs::write(&target, body).with_context(|| format!("writing {}", target.display()))?;
    log::info!("wrote {}", target.display());
    Ok(())
}

/// Fetch the puzzle text, reduce it to Markdown, and render the README
/// template into the puzzle directory. An existing file is kept unless
/// `--force`.
pub fn make_readme(ctx: &Context) -> Result<()> {
    let target = ctx.puzzle_path.join("README.md");
    if target.exists() && !ctx.force {
        log::debug!("{} already exists, skipping", target.display());
        return Ok(());
    }
    let source = ctx.template_dir.join("README.md");
    let body = fs::read_to_string(&source)
        .with_context(|| format!("reading template {}", source.display()))?;
    let html = fetch::get(ctx, &ctx.url)?;
    let mut values = base_values(ctx);
    values.insert("readme_md", markdown::articles_to_markdown(&html));
    fs::write(&target, template::render(&body, &values))
        .with_context(|| format!("writing {}", target.display()))?;
    log::info!("wrote {}", target.display());
    Ok(())
}
