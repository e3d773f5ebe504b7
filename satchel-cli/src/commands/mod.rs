pub mod config;
pub mod invite;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Write generated ICS to a file, or print it when no path is given.
pub fn write_output(ics: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, ics)
                .with_context(|| format!("Could not write {}", path.display()))?;
            println!("{}", format!("Wrote {}", path.display()).green());
        }
        None => print!("{ics}"),
    }
    Ok(())
}
