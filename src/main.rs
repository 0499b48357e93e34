use clap::Parser;

mod context;
mod dotenv;
mod fetch;
mod logging;
mod markdown;
mod puzzles;
mod runner;
mod scaffold;
mod template;

use context::{Context, Overrides};
use dotenv::DotEnv;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle year, e.g. 2023
    #[arg(long)]
    year: Option<i32>,
    /// Puzzle day, 1 through 25
    #[arg(long)]
    day: Option<u32>,
    /// Session cookie value for the puzzle site
    #[arg(long)]
    token: Option<String>,
    /// Render a new solution module from the template
    #[arg(long)]
    setup: bool,
    /// Download the puzzle input into the puzzle directory
    #[arg(long)]
    data: bool,
    /// Fetch the puzzle text and render a README
    #[arg(long)]
    readme: bool,
    /// Solve the puzzle and print both answers
    #[arg(long)]
    run: bool,
    /// Run only this puzzle's tests
    #[arg(long)]
    test: bool,
    /// Overwrite files that already exist
    #[arg(long)]
    force: bool,
    /// Print the resolved context
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let env_file = DotEnv::new(".env");
    let ctx = Context::resolve(
        Overrides {
            year: cli.year,
            day: cli.day,
            token: cli.token.clone(),
            force: cli.force,
        },
        &env_file,
    )?;
    if cli.debug {
        println!("{ctx}");
    }
    if cli.setup {
        scaffold::make_solution(&ctx)?;
    }
    if cli.data {
        scaffold::fetch_input(&ctx)?;
    }
    if cli.readme {
        scaffold::make_readme(&ctx)?;
    }
    if cli.run {
        runner::run(&ctx)?;
    }
    if cli.test {
        runner::run_tests(&ctx)?;
    }
    Ok(())
}
