pub mod ast;
pub mod bst;
pub mod maxargs;
pub mod run;
pub mod samples;

use anyhow::{bail, Context, Result};
use slp_runtime::ast::AST_VERSION;
use slp_runtime::{samples as builtin, Stm, VersionedProgram};
use std::fs;
use std::path::Path;

/// Resolve a program argument to an AST
///
/// Built-in sample names win; anything else is read as a JSON AST file
/// in the format `slp ast` emits.
pub fn resolve_program(name: &str) -> Result<Stm> {
    if let Some(sample) = builtin::find(name) {
        return Ok(sample.program());
    }

    let path = Path::new(name);
    if !path.is_file() {
        bail!(
            "unknown program '{}' (not a built-in sample or a file); run `slp samples` to list samples",
            name
        );
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read program file: {}", name))?;
    let versioned = VersionedProgram::from_json(&json)
        .with_context(|| format!("Failed to parse AST JSON: {}", name))?;

    if versioned.ast_version != AST_VERSION {
        bail!(
            "{}: unsupported ast_version {} (expected {})",
            name,
            versioned.ast_version,
            AST_VERSION
        );
    }

    Ok(versioned.program)
}
