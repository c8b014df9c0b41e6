use std::path::PathBuf;

/// Map converter CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "mapsvg", version, about)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input GeoJSON file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output SVG file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}
