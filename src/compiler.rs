use anyhow::{Context, Result};
use tracing::debug;

use crate::ast::Program;
use crate::emit::{Emission, flatten};
use crate::lower::{LowerResult, lower_program};

const ENTRY_OPEN: &str = "(async function main () {";
const ENTRY_CLOSE: &str = "}())";

/// Wraps the lowered program in an immediately invoked async `main`.
///
/// The returned sequence is the outermost group; it is flattened from zero
/// indentation.
pub fn entry_point(program: &Program) -> LowerResult<Vec<Emission>> {
    Ok(vec![
        Emission::line(ENTRY_OPEN),
        lower_program(program)?,
        Emission::line(ENTRY_CLOSE),
    ])
}

/// Compiles a program to JavaScript text, without a trailing newline.
pub fn compile(program: &Program) -> LowerResult<String> {
    let tree = entry_point(program)?;
    let output = flatten(&tree, "");
    debug!(lines = output.lines().count(), "compiled program");
    Ok(output)
}

/// Compiles the parser's JSON output.
pub fn compile_json(source: &str) -> Result<String> {
    let program = parse_program(source)?;
    let output = compile(&program)?;
    Ok(output)
}

pub fn parse_program(source: &str) -> Result<Program> {
    serde_json::from_str(source).context("Parsing syntax tree JSON")
}
