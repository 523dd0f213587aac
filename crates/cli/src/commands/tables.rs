use anyhow::Result;
use hexcraft_core::model::{Architecture, SourceLanguage};
use hexcraft_core::tables::{pattern_table, PatternTable};
use serde::Serialize;

use crate::commands::{parse_architecture, parse_language};

#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub architecture: Architecture,
    pub language: SourceLanguage,
    pub patterns: &'static PatternTable,
}

/// Collect the pattern tables matching the optional filters, in
/// architecture-then-language order.
pub fn collect_tables(arch: Option<&str>, lang: Option<&str>) -> Result<Vec<TableInfo>> {
    let arch_filter = arch.map(parse_architecture).transpose()?;
    let lang_filter = lang.map(parse_language).transpose()?;

    let mut tables = Vec::new();
    for architecture in Architecture::ALL {
        if arch_filter.is_some_and(|a| a != architecture) {
            continue;
        }
        for language in SourceLanguage::ALL {
            if lang_filter.is_some_and(|l| l != language) {
                continue;
            }
            tables.push(TableInfo {
                architecture,
                language,
                patterns: pattern_table(architecture, language),
            });
        }
    }
    Ok(tables)
}

/// Print pattern tables in match-priority order.
pub fn tables_command(arch: Option<&str>, lang: Option<&str>, json: bool) -> Result<()> {
    let tables = collect_tables(arch, lang)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    for table in tables {
        println!("{} / {}:", table.architecture, table.language);
        for entry in table.patterns.entries() {
            println!("  {:<12} {}", format!("{:?}", entry.pattern), entry.hex);
        }
    }
    Ok(())
}
