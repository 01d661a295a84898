//! SLP Runtime - straight-line program interpreter
//!
//! This library provides:
//! - The statement/expression AST (programs are built directly, there is no parser)
//! - A persistent symbol table
//! - A tree-walking interpreter threading tables through evaluation
//! - Static `maxargs` analysis
//! - A persistent binary search tree of strings
//!
//! # Debugging
//!
//! The interpreter emits `tracing` events. Enable them from a host that
//! installs a subscriber, e.g. `RUST_LOG=slp_runtime=debug slp run`.

/// SLP runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod bst;
pub mod interpreter;
pub mod maxargs;
pub mod output;
pub mod runtime;
pub mod samples;
pub mod symbol;
pub mod value;

// Re-export commonly used types
pub use ast::{BinOp, Exp, Stm, VersionedProgram};
pub use bst::Tree;
pub use interpreter::Interpreter;
pub use maxargs::{maxargs, maxargs_exp};
pub use output::{capture_writer, stdout_writer, OutputWriter};
pub use runtime::{RunOptions, RunReport, RuntimeResult, Slp};
pub use symbol::SymbolTable;
pub use value::{RuntimeError, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
