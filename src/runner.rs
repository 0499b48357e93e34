use std::process::Command;

use anyhow::{bail, Context as _, Result};

use crate::context::{module_name, Context};
use crate::puzzles;

/// Look up the solver for the context's puzzle and print both answers.
pub fn run(ctx: &Context) -> Result<()> {
    let entry = puzzles::find(ctx.year, ctx.day).with_context(|| {
        format!(
            "no solver registered for {} day {}; --setup renders src/puzzles/{}.rs",
            ctx.year,
            ctx.day,
            module_name(ctx.year, ctx.day)
        )
    })?;
    let input = ctx.puzzle_path.join("input.txt");
    let (part_one, part_two) = entry(&input)?;
    println!("solution: ({part_one}, {part_two})");
    Ok(())
}

/// Run only this puzzle's tests by spawning `cargo test` with the module
/// name as a filter.
pub fn run_tests(ctx: &Context) -> Result<()> {
    let filter = module_name(ctx.year, ctx.day);
    log::info!("cargo test {filter}");
    let status = Command::new("cargo")
        .args(["test", &filter])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        bail!("cargo test {filter} exited with {status}");
    }
    Ok(())
}
