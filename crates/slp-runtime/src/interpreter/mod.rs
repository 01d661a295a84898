//! AST interpreter (tree-walking)
//!
//! Statements and expressions are evaluated by two mutually recursive
//! functions. Neither mutates a table: statements map a table to a new table,
//! expressions map a table to a value paired with the table holding the
//! effects of any statements nested inside them (see [`crate::ast::Exp::Eseq`]).
//!
//! - [`Interpreter::interpret_statement`]: `Stm × Table → Table`
//! - [`Interpreter::interpret_expression`]: `Exp × Table → (Value, Table)`

mod expr;
mod stmt;

use crate::ast::Stm;
use crate::output::{stdout_writer, OutputWriter};
use crate::symbol::SymbolTable;
use crate::value::EvalResult;

/// Interpreter state
///
/// Holds only the output writer; all variable state is carried in the
/// tables passed through evaluation.
pub struct Interpreter {
    /// Destination of `print` lines
    pub(super) output: OutputWriter,
}

impl Interpreter {
    /// Create an interpreter writing to standard output
    pub fn new() -> Self {
        Self {
            output: stdout_writer(),
        }
    }

    /// Create an interpreter writing to the given writer
    pub fn with_output(output: OutputWriter) -> Self {
        Self { output }
    }

    /// Redirect `print` output
    pub fn set_output_writer(&mut self, writer: OutputWriter) {
        self.output = writer;
    }

    /// Interpret a program starting from the empty table
    ///
    /// Returns the final table.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn interpret(&self, program: &Stm) -> EvalResult<SymbolTable> {
        let table = self.interpret_statement(program, &SymbolTable::new())?;
        tracing::debug!(bindings = table.len(), final_table = %table, "interpretation finished");
        Ok(table)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
