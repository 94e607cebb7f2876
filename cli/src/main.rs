mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::locate;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Locate(args) => locate::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
