//! Maxargs command - static analysis only, nothing is executed

use anyhow::Result;
use std::io::Write;

pub fn run(program_name: &str, out: &mut dyn Write) -> Result<()> {
    let program = super::resolve_program(program_name)?;
    writeln!(out, "{}", slp_runtime::maxargs(&program))?;
    Ok(())
}
