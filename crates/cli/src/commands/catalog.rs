use anyhow::Result;
use hexcraft_core::catalog::{BinaryExample, CodeExample, BINARY_EXAMPLES, CODE_EXAMPLES};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CatalogListing {
    code: &'static [CodeExample],
    binary: &'static [BinaryExample],
}

/// List the bundled examples usable with `convert --example`.
pub fn examples_command(json: bool) -> Result<()> {
    if json {
        let listing = CatalogListing { code: CODE_EXAMPLES, binary: BINARY_EXAMPLES };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Code examples:");
    for example in CODE_EXAMPLES {
        println!("- {} (language: {})", example.name, example.language);
    }
    println!("Binary examples:");
    for example in BINARY_EXAMPLES {
        println!("- {} (mode: {})", example.name, example.mode);
    }

    Ok(())
}
