use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use practical::compile_json;
use test_support::{
    Case, CaseClass, check_node_syntax, load_cases, normalize_output, run_node_startup,
};

fn parity_required() -> bool {
    std::env::var("NODE_PARITY_REQUIRED")
        .map(|value| value == "1")
        .unwrap_or(false)
}

fn detect_node_runtime() -> Result<Option<String>> {
    if let Ok(node) = std::env::var("NODE")
        && run_node_startup(&node).is_ok()
    {
        return Ok(Some(node));
    }

    for candidate in ["node", "nodejs"] {
        if run_node_startup(candidate).is_ok() {
            return Ok(Some(candidate.to_string()));
        }
    }

    if parity_required() {
        anyhow::bail!("Node parity required but no runtime found. Set NODE or install node.");
    }

    eprintln!("Skipping JavaScript syntax parity: no NODE env or node runtime found.");
    Ok(None)
}

fn write_generated(case: &Case, output: &str) -> Result<PathBuf> {
    let mut dir = std::env::temp_dir();
    dir.push("practical-harness");
    fs::create_dir_all(&dir).with_context(|| format!("Creating {}", dir.display()))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("Reading clock")?
        .as_nanos();
    let path = dir.join(format!("{}_{nanos}.js", case.name));
    fs::write(&path, output).with_context(|| format!("Writing {}", path.display()))?;
    Ok(path)
}

fn run_case(case: &Case) -> Result<Option<String>> {
    let source = fs::read_to_string(&case.program_path)
        .with_context(|| format!("Reading {}", case.name))?;
    let result = compile_json(&source);

    match case.spec.class {
        CaseClass::CompileSuccess => {
            let output_file = case
                .spec
                .expected
                .output_file
                .as_deref()
                .with_context(|| format!("Missing output_file in {}", case.name))?;
            let expected = case.read_text(output_file)?;
            let output = result.with_context(|| format!("Compiling {}", case.name))?;
            assert_eq!(
                normalize_output(&output),
                normalize_output(&expected),
                "Output mismatch for {}",
                case.name
            );
            Ok(Some(output))
        }
        CaseClass::LoweringError => {
            let expected_file = case
                .spec
                .expected
                .error_contains_file
                .as_deref()
                .with_context(|| format!("Missing error_contains_file in {}", case.name))?;
            let expected_error = case.read_text(expected_file)?;
            let expected_error = expected_error.trim();
            ensure!(
                result.is_err(),
                "Expected lowering error in {}, but compilation succeeded",
                case.name
            );
            let actual = result.expect_err("result checked as err").to_string();
            ensure!(
                actual.contains(expected_error),
                "Expected lowering error containing '{expected_error}' in {}, got '{actual}'",
                case.name
            );
            Ok(None)
        }
    }
}

#[test]
fn compiles_programs() -> Result<()> {
    for case in load_cases(Path::new("tests/programs"))? {
        run_case(&case)?;
    }
    Ok(())
}

#[test]
fn generated_programs_pass_node_syntax_check() -> Result<()> {
    let Some(runtime) = detect_node_runtime()? else {
        return Ok(());
    };

    for case in load_cases(Path::new("tests/programs"))? {
        if !case.spec.parity {
            continue;
        }
        let Some(output) = run_case(&case)? else {
            continue;
        };
        let path = write_generated(&case, &output)?;
        let checked = check_node_syntax(&runtime, &path);
        let _ = fs::remove_file(&path);
        checked.with_context(|| format!("Syntax check for {}", case.name))?;
    }
    Ok(())
}
