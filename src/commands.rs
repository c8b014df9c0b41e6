use std::fs;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::MapStyle;
use crate::io::{read_features, render_document};

/// Convert one GeoJSON file to one SVG file.
///
/// The input is read and parsed in full before the output file is opened, so
/// a malformed input never leaves a truncated output behind.
pub fn convert(cli: &Cli) -> Result<()> {
    let style = MapStyle::default();

    if cli.verbose > 0 {
        eprintln!("[convert] reading {}", cli.input.display());
    }

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("[convert] Failed to read {}", cli.input.display()))?;
    let parsed = read_features(&text)?;

    let svg = render_document(&parsed.features, &style);
    fs::write(&cli.output, &svg)
        .with_context(|| format!("[convert] Failed to write {}", cli.output.display()))?;

    println!("[convert] wrote {}", cli.output.display());
    println!("[convert] dimensions: {}x{}", style.canvas.width, style.canvas.height);
    println!("[convert] countries: {}", parsed.input_count);
    println!(
        "[convert] bounds: ({}, {}, {}, {})",
        style.bounds.min_lon, style.bounds.min_lat, style.bounds.max_lon, style.bounds.max_lat,
    );

    Ok(())
}
