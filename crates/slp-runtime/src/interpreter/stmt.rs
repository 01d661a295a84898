//! Statement execution

use crate::ast::{Exp, Stm};
use crate::interpreter::Interpreter;
use crate::symbol::SymbolTable;
use crate::value::{EvalResult, Value};
use std::io::Write;

impl Interpreter {
    /// Execute a statement against `table`, returning the table after its effects
    pub fn interpret_statement(&self, stm: &Stm, table: &SymbolTable) -> EvalResult<SymbolTable> {
        match stm {
            Stm::Compound(first, second) => {
                let table = self.interpret_statement(first, table)?;
                self.interpret_statement(second, &table)
            }
            Stm::Assign(id, exp) => {
                let (value, table) = self.interpret_expression(exp, table)?;
                tracing::debug!(name = %id, value, "assign");
                Ok(table.update(id.as_str(), value))
            }
            Stm::Print(exps) => self.interpret_print(exps, table),
        }
    }

    /// Evaluate print arguments left to right, threading the table
    ///
    /// Each value is written as soon as it is evaluated, followed by a space,
    /// or by a newline for the last argument.
    fn interpret_print(&self, exps: &[Exp], table: &SymbolTable) -> EvalResult<SymbolTable> {
        let last = exps.len().saturating_sub(1);
        exps.iter()
            .enumerate()
            .try_fold(table.clone(), |table, (i, exp)| -> EvalResult<SymbolTable> {
                let (value, table) = self.interpret_expression(exp, &table)?;
                self.write_value(value, i == last)?;
                Ok(table)
            })
    }

    fn write_value(&self, value: Value, end_of_line: bool) -> EvalResult<()> {
        let mut out = self.output.borrow_mut();
        if end_of_line {
            writeln!(out, "{}", value)?;
            out.flush()?;
        } else {
            write!(out, "{} ", value)?;
        }
        Ok(())
    }
}
