//! Run command - execute a straight-line program

use anyhow::{anyhow, Result};
use slp_runtime::{OutputWriter, RunOptions, Slp};
use std::io::Write;

/// Run a sample or AST file
///
/// Writes the maxargs line (unless disabled) and the program's print lines
/// to `out`. Runtime errors are reported on stderr after any output the
/// program already produced.
pub fn run(program_name: &str, options: RunOptions, out: OutputWriter) -> Result<()> {
    let program = super::resolve_program(program_name)?;

    let mut runtime = Slp::with_options(options);
    runtime.set_output_writer(out.clone());
    let result = runtime.run(&program);

    // Partial output from a failed print must reach the terminal before the error
    out.borrow_mut().flush()?;

    match result {
        Ok(report) => {
            tracing::info!(
                program = program_name,
                maxargs = report.maxargs,
                bindings = report.table.len(),
                "run finished"
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err);
            Err(anyhow!("Failed to execute program '{}'", program_name))
        }
    }
}
