//! AST dump command - output a program as JSON or pseudo-source

use anyhow::Result;
use slp_runtime::VersionedProgram;
use std::io::Write;

/// Dump a program's AST
///
/// JSON (the same format `slp run` accepts as a file) unless `source` is
/// set, in which case the program is printed as one line of pseudo-source.
pub fn run(program_name: &str, source: bool, out: &mut dyn Write) -> Result<()> {
    let program = super::resolve_program(program_name)?;

    if source {
        writeln!(out, "{}", program)?;
    } else {
        let versioned = VersionedProgram::new(program);
        writeln!(out, "{}", versioned.to_json()?)?;
    }

    Ok(())
}
