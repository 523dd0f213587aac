//! Conversion services: the three generators and the orchestrator that
//! drives them.

pub mod assembly;
pub mod binary;
pub mod converter;
pub mod machine_code;

pub use assembly::generate_assembly;
pub use binary::convert_to_binary;
pub use converter::{ConversionBackend, ConvertError, Converter, PatternBackend};
pub use machine_code::{generate_machine_code, generate_machine_code_with};

/// Trim Unicode whitespace and the byte-order mark from both ends.
///
/// `str::trim` keeps U+FEFF, which leads files saved with a BOM.
pub fn trim_source(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
