//! Shared test utilities for SLP runtime tests

use slp_runtime::{RunOptions, RuntimeError, Slp, Stm, SymbolTable};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Options that skip the leading maxargs line
pub fn quiet() -> RunOptions {
    RunOptions {
        report_maxargs: false,
    }
}

/// Interpret a program, returning captured print output and the result
pub fn run_program(program: &Stm) -> (String, Result<SymbolTable, RuntimeError>) {
    let (output, result) = Slp::run_captured(program, quiet());
    (output, result.map(|report| report.table))
}

/// Assert that a program runs successfully and prints exactly `expected`
pub fn assert_output(program: &Stm, expected: &str) -> SymbolTable {
    let (output, result) = run_program(program);
    match result {
        Ok(table) => {
            assert_eq!(output, expected);
            table
        }
        Err(e) => panic!("Expected success, got {:?} after output {:?}", e, output),
    }
}

/// Assert that a program fails with `expected` after printing `partial`
pub fn assert_failure(program: &Stm, partial: &str, expected: RuntimeError) {
    let (output, result) = run_program(program);
    match result {
        Err(e) => {
            assert_eq!(e, expected);
            assert_eq!(output, partial);
        }
        Ok(table) => panic!("Expected {:?}, got success with table {}", expected, table),
    }
}
