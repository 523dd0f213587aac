//! Pattern-based machine code generator.
//!
//! Each non-blank input line is matched against the pattern table for the
//! selected architecture and language. Unmatched lines get four random
//! bytes drawn from the caller's RNG, so output is only reproducible when
//! the RNG is seeded.

use rand::Rng;

use crate::model::{Architecture, SourceLanguage};
use crate::services::trim_source;
use crate::tables::pattern_table;

/// Emitted when the line loop produces nothing. Input that passes the
/// blank check always yields at least one line, so this is a backstop.
pub const NOP_SENTINEL: &str = "00000000: 90 90 90 90\n";

/// Bytes fabricated for a line that matches no pattern.
const FALLBACK_BYTES: usize = 4;

/// Generate a hex listing using the thread-local RNG for unmatched lines.
pub fn generate_machine_code(text: &str, arch: Architecture, lang: SourceLanguage) -> String {
    generate_machine_code_with(text, arch, lang, &mut rand::thread_rng())
}

/// Generate a hex listing, drawing fallback bytes from `rng`.
///
/// The address of a line is its index in the raw split (blank lines
/// included) times four.
pub fn generate_machine_code_with<R: Rng>(
    text: &str,
    arch: Architecture,
    lang: SourceLanguage,
    rng: &mut R,
) -> String {
    if trim_source(text).is_empty() {
        return String::new();
    }

    let table = pattern_table(arch, lang);
    let lowered = text.to_lowercase();
    let mut listing = String::new();

    for (index, line) in lowered.split('\n').enumerate() {
        let line = trim_source(line);
        if line.is_empty() {
            continue;
        }

        let bytes = match table.lookup(line) {
            Some(entry) => entry.hex.to_string(),
            None => random_octets(rng),
        };
        listing.push_str(&format!("{:08x}: {}\n", index * 4, bytes));
    }

    if listing.is_empty() {
        return NOP_SENTINEL.to_string();
    }
    listing
}

fn random_octets<R: Rng>(rng: &mut R) -> String {
    (0..FALLBACK_BYTES).map(|_| format!("{:02x}", rng.gen::<u8>())).collect::<Vec<_>>().join(" ")
}
