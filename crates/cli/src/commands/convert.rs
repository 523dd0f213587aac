use anyhow::{anyhow, Result};
use hexcraft_core::catalog::{find_binary_example, find_code_example};
use hexcraft_core::model::{ConversionRequest, ConversionResult};
use hexcraft_core::services::{Converter, PatternBackend};
use serde::Serialize;

use crate::commands::{base_config, OptionFlags};
use crate::{emit_output, read_input};

/// Everything the `convert` command accepts.
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub text: Option<String>,
    pub file: Option<String>,
    /// Name of a bundled code or binary example used to prefill input.
    pub example: Option<String>,
    pub flags: OptionFlags,
    pub config: Option<String>,
    /// Seed for the random-byte fallback; omit for fresh randomness.
    pub seed: Option<u64>,
    pub json: bool,
    pub output: Option<String>,
}

/// Request and result of one convert run, as emitted with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub request: ConversionRequest,
    pub result: ConversionResult,
}

/// Run all three conversions and print (or write) the report.
///
/// Option precedence, lowest first: built-in defaults, `--config`,
/// `--example`, explicit flags.
pub fn convert_command(args: &ConvertArgs) -> Result<()> {
    let report = run_conversion(args)?;
    eprintln!("Code converted successfully!");

    let body = if args.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else {
        render_report(&report)
    };
    emit_output(args.output.as_deref(), &body)
}

/// Build the converter from `args` and run a single convert trigger.
pub fn run_conversion(args: &ConvertArgs) -> Result<ConversionReport> {
    let mut converter = match args.seed {
        Some(seed) => Converter::with_backend(PatternBackend::seeded(seed)),
        None => Converter::new(),
    };
    converter.apply_config(&base_config(args.config.as_deref())?);

    if let Some(name) = args.example.as_deref() {
        if let Some(example) = find_code_example(name) {
            converter.load_code_example(example);
        } else if let Some(example) = find_binary_example(name) {
            converter.load_binary_example(example);
        } else {
            return Err(anyhow!("Unknown example '{}' (see `hexcraft examples`)", name));
        }
    }

    if args.text.is_some() || args.file.is_some() {
        converter.set_input(read_input(args.text.as_deref(), args.file.as_deref())?);
    } else if args.example.is_none() {
        return Err(anyhow!("Provide input with --text, --file, or --example"));
    }

    let options = args.flags.overlay(converter.config())?;
    converter.apply_config(&options);

    let result = converter.convert()?.clone();
    Ok(ConversionReport { request: converter.request().clone(), result })
}

/// Human-readable rendering of the three output panes.
pub fn render_report(report: &ConversionReport) -> String {
    let req = &report.request;
    let mut out = String::new();

    out.push_str(&format!("Machine Code ({}, {}):\n", req.architecture, req.language));
    out.push_str(&report.result.machine_code);
    out.push('\n');

    out.push_str(&format!("Assembly ({}):\n", req.architecture));
    out.push_str(&report.result.assembly);
    out.push('\n');

    out.push_str(&format!("Binary ({}, {}):\n", req.mode, req.encoding));
    out.push_str(&report.result.binary);
    out.push('\n');

    out
}
