use anyhow::Result;
use hexcraft_core::model::BinaryMode;
use hexcraft_core::services::{ConversionBackend, PatternBackend};

use crate::commands::{parse_architecture, parse_encoding, parse_language, parse_mode};
use crate::read_input;

/// Standard backend, seeded when `seed` is given.
pub fn pattern_backend(seed: Option<u64>) -> Box<dyn ConversionBackend> {
    match seed {
        Some(seed) => Box::new(PatternBackend::seeded(seed)),
        None => Box::new(PatternBackend::new()),
    }
}

/// Print only the hex listing.
pub fn machine_code_command(
    text: Option<&str>,
    file: Option<&str>,
    arch: &str,
    lang: &str,
    seed: Option<u64>,
) -> Result<()> {
    let arch = parse_architecture(arch)?;
    let lang = parse_language(lang)?;
    let input = read_input(text, file)?;

    let listing = pattern_backend(seed).machine_code(&input, arch, lang)?;
    print!("{}", listing);
    Ok(())
}

/// Print only the pseudo-assembly listing.
pub fn assembly_command(text: Option<&str>, file: Option<&str>, arch: &str) -> Result<()> {
    let arch = parse_architecture(arch)?;
    let input = read_input(text, file)?;

    let assembly = pattern_backend(None).assembly(&input, arch)?;
    print!("{}", assembly);
    Ok(())
}

/// Print only the binary rendering. In machine mode the input is itself
/// the hex listing to re-render.
pub fn binary_command(
    text: Option<&str>,
    file: Option<&str>,
    mode: &str,
    encoding: &str,
) -> Result<()> {
    let mode = parse_mode(mode)?;
    let encoding = parse_encoding(encoding)?;
    let input = read_input(text, file)?;

    let listing = match mode {
        BinaryMode::Machine => Some(input.as_str()),
        BinaryMode::Text | BinaryMode::Numbers => None,
    };
    let binary = pattern_backend(None).binary(&input, mode, encoding, listing)?;
    if !binary.is_empty() {
        println!("{}", binary);
    }
    Ok(())
}
