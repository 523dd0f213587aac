//! Core data model: the enumerated conversion options plus the request and
//! result value types that flow between the frontend and the generators.
//!
//! Every option type has a canonical lowercase wire name (`x86-64`, `utf8`,
//! `machine`, ...) used by serde, `Display`, and `FromStr` alike, so config
//! files, CLI flags, and JSON output all agree on spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when an option string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} '{value}'. Allowed: {allowed}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub allowed: String,
}

impl ParseOptionError {
    fn new(kind: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self { kind, value: value.to_string(), allowed: allowed.join(", ") }
    }
}

/// Target instruction set. Selects the pattern table and assembly templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Architecture {
    #[default]
    #[serde(rename = "x86-64", alias = "x86_64")]
    X86_64,
    #[serde(rename = "arm64")]
    Arm64,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::X86_64, Architecture::Arm64];

    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86-64",
            Architecture::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86-64" | "x86_64" => Ok(Architecture::X86_64),
            "arm64" => Ok(Architecture::Arm64),
            _ => Err(ParseOptionError::new("architecture", s, &["x86-64", "arm64"])),
        }
    }
}

/// Toy input language. Only affects machine-code pattern selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    C,
    Assembly,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 2] = [SourceLanguage::C, SourceLanguage::Assembly];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceLanguage::C => "c",
            SourceLanguage::Assembly => "assembly",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceLanguage {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(SourceLanguage::C),
            "assembly" => Ok(SourceLanguage::Assembly),
            _ => Err(ParseOptionError::new("language", s, &["c", "assembly"])),
        }
    }
}

/// Character encoding used by the binary encoder in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Ascii,
    Utf8,
    Utf16,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 3] = [TextEncoding::Ascii, TextEncoding::Utf8, TextEncoding::Utf16];

    pub fn as_str(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Utf16 => "utf16",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(TextEncoding::Ascii),
            "utf8" => Ok(TextEncoding::Utf8),
            "utf16" => Ok(TextEncoding::Utf16),
            _ => Err(ParseOptionError::new("encoding", s, &["ascii", "utf8", "utf16"])),
        }
    }
}

/// Which binary-encoding algorithm runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryMode {
    #[default]
    Text,
    Machine,
    Numbers,
}

impl BinaryMode {
    pub const ALL: [BinaryMode; 3] = [BinaryMode::Text, BinaryMode::Machine, BinaryMode::Numbers];

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryMode::Text => "text",
            BinaryMode::Machine => "machine",
            BinaryMode::Numbers => "numbers",
        }
    }
}

impl fmt::Display for BinaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinaryMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(BinaryMode::Text),
            "machine" => Ok(BinaryMode::Machine),
            "numbers" => Ok(BinaryMode::Numbers),
            _ => Err(ParseOptionError::new("mode", s, &["text", "machine", "numbers"])),
        }
    }
}

/// Input text plus the selected options, as held by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: String,
    pub architecture: Architecture,
    pub language: SourceLanguage,
    pub encoding: TextEncoding,
    pub mode: BinaryMode,
}

/// The three output panes produced by a single convert trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub machine_code: String,
    pub assembly: String,
    pub binary: String,
}
