//! CLI entry point for the Fourtile board search

use clap::Parser;
use fourtiles::io::cli::{Cli, Runner};

fn main() -> fourtiles::Result<()> {
    // stdout may carry the board stream, so logs stay on stderr and quiet by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runner = Runner::new(Cli::parse());
    runner.install_interrupt_handler()?;
    runner.run().map(|_| ())
}
