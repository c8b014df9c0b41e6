use anyhow::Result;
use clap::Parser;

use mapsvg::cli::Cli;
use mapsvg::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::convert(&cli)
}
