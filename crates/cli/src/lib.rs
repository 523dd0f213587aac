pub mod commands;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Resolve the input text from `--text` or `--file` (`-` reads stdin).
///
/// `--text` takes precedence when both are given.
pub fn read_input(text: Option<&str>, file: Option<&str>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t.to_string());
    }
    match file {
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read input from stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read input file {}", path)),
        None => Err(anyhow!("Provide input with --text or --file")),
    }
}

/// Write `body` to `output` when given, otherwise print it to stdout.
pub fn emit_output(output: Option<&str>, body: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, body).with_context(|| format!("Failed to write output to {}", path))?;
            eprintln!("Wrote output to {}", path);
        }
        None => print!("{}", body),
    }
    Ok(())
}
