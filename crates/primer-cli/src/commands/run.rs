//! Walkthrough commands - write sections to stdout.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use primer::Section;

/// Runs every section in order.
pub fn all() -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let report = primer::run(&mut out).context("Failed to write walkthrough output")?;
    tracing::debug!(lines = report.total_lines(), "wrote walkthrough");
    Ok(())
}

/// Runs one section.
pub fn section(section: Section) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    primer::run_section(&mut out, section)
        .with_context(|| format!("Failed to write section '{section}'"))?;
    Ok(())
}
