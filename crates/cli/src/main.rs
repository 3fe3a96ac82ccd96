//! Interactive polygon puzzle shell.
//!
//! Thin front-end over the `polyquiz` engine: parses terminal input into
//! coordinates, drives the construction and query loops, and renders the
//! engine's answers. All wording lives in `Prompts`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod prompts;
mod shell;

use prompts::Prompts;
use shell::Shell;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build a polygon and test points against it")]
struct Cmd {
    /// Seed for reproducible random shapes (mode 2). Entropy-seeded if unset.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    tracing::debug!(engine = polyquiz::VERSION, seed = ?cmd.seed, "starting shell");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), Prompts::default(), cmd.seed);
    shell.run()?;
    Ok(())
}
