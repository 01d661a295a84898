//! SLP runtime API for embedding

use crate::ast::Stm;
use crate::interpreter::Interpreter;
use crate::maxargs::maxargs;
use crate::output::{capture_writer, captured_text, OutputWriter};
use crate::symbol::SymbolTable;
use crate::value::RuntimeError;
use std::io::Write;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Options controlling a program run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the `maxargs` result on its own line before interpreting
    pub report_maxargs: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            report_maxargs: true,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Widest `print` in the program
    pub maxargs: usize,
    /// Table after the last statement
    pub table: SymbolTable,
}

/// SLP runtime instance
///
/// Reports the static analysis result, then interprets the program.
///
/// # Examples
///
/// ```
/// use slp_runtime::{samples, Slp};
///
/// let (output, result) = Slp::run_captured(&samples::prog(), Default::default());
/// assert_eq!(output, "2\n8 7\n80\n");
/// assert_eq!(result.unwrap().table.lookup("b"), Ok(80));
/// ```
pub struct Slp {
    interpreter: Interpreter,
    options: RunOptions,
}

impl Slp {
    /// Create a runtime writing to standard output with default options
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
            options: RunOptions::default(),
        }
    }

    /// Create a runtime with the given options
    pub fn with_options(options: RunOptions) -> Self {
        Self {
            interpreter: Interpreter::new(),
            options,
        }
    }

    /// Redirect all output (the maxargs line and `print` lines)
    pub fn set_output_writer(&mut self, writer: OutputWriter) {
        self.interpreter.set_output_writer(writer);
    }

    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Run a program from the empty table
    pub fn run(&self, program: &Stm) -> RuntimeResult<RunReport> {
        let maxargs = maxargs(program);
        tracing::debug!(maxargs, "static analysis finished");

        if self.options.report_maxargs {
            let mut out = self.interpreter.output.borrow_mut();
            writeln!(out, "{}", maxargs)?;
            out.flush()?;
        }

        let table = self.interpreter.interpret(program)?;
        Ok(RunReport { maxargs, table })
    }

    /// Run a program into a fresh buffer
    ///
    /// Returns everything written, including output produced before a
    /// failure, together with the run result.
    pub fn run_captured(program: &Stm, options: RunOptions) -> (String, RuntimeResult<RunReport>) {
        let (writer, buffer) = capture_writer();
        let mut runtime = Slp::with_options(options);
        runtime.set_output_writer(writer);
        let result = runtime.run(program);
        (captured_text(&buffer), result)
    }
}

impl Default for Slp {
    fn default() -> Self {
        Self::new()
    }
}
