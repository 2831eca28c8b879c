use anyhow::Context;
use clap::Parser;
use climatescope::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("climatescope failed")
}
