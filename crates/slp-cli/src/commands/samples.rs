//! Samples command - list the built-in programs

use anyhow::Result;
use slp_runtime::samples::SAMPLES;
use std::io::Write;

/// List sample names and their pseudo-source, marking the configured default
pub fn run(default_program: &str, out: &mut dyn Write) -> Result<()> {
    let width = SAMPLES.iter().map(|s| s.name.len()).max().unwrap_or(0);

    for sample in SAMPLES {
        let marker = if sample.name == default_program { '*' } else { ' ' };
        writeln!(
            out,
            "{} {:<width$}  {}",
            marker,
            sample.name,
            sample.description,
            width = width
        )?;
    }

    Ok(())
}
