//! Template-based pseudo-assembly generator.
//!
//! Independent of the machine code pass: it ignores the source language and
//! only spots three keywords, checked in the fixed order `main`, `printf`,
//! `return`.

use crate::model::Architecture;
use crate::services::trim_source;
use crate::tables::{assembly_templates, AssemblyTemplates};

/// Emitted when the line loop produces nothing. Unreachable once the
/// input has passed the blank check.
pub const EMPTY_SENTINEL: &str = "; No assembly generated\n";

pub fn generate_assembly(text: &str, arch: Architecture) -> String {
    if trim_source(text).is_empty() {
        return String::new();
    }

    let templates = assembly_templates(arch);
    let lowered = text.to_lowercase();
    let mut assembly = String::new();

    for line in lowered.split('\n') {
        let line = trim_source(line);
        if line.is_empty() {
            continue;
        }
        match template_for(templates, line) {
            Some(block) => assembly.push_str(block),
            None => assembly.push_str(&format!("    ; {line}\n")),
        }
    }

    if assembly.is_empty() {
        return EMPTY_SENTINEL.to_string();
    }
    assembly
}

fn template_for(templates: &AssemblyTemplates, line: &str) -> Option<&'static str> {
    if line.contains("main") {
        Some(templates.prologue)
    } else if line.contains("printf") {
        Some(templates.call)
    } else if line.contains("return") {
        Some(templates.epilogue)
    } else {
        None
    }
}
