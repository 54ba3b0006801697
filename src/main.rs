use anyhow::Result;
use clap::Parser;
use zentry::cli::{Cli, init_logging, run};

fn main() -> Result<()> {
    init_logging();
    run(Cli::parse())
}
