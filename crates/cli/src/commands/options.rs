use anyhow::Result;
use hexcraft_core::config::{load_config, ConverterConfig};
use hexcraft_core::model::{Architecture, BinaryMode, SourceLanguage, TextEncoding};

pub fn parse_architecture(value: &str) -> Result<Architecture> {
    Ok(value.parse::<Architecture>()?)
}

pub fn parse_language(value: &str) -> Result<SourceLanguage> {
    Ok(value.parse::<SourceLanguage>()?)
}

pub fn parse_encoding(value: &str) -> Result<TextEncoding> {
    Ok(value.parse::<TextEncoding>()?)
}

pub fn parse_mode(value: &str) -> Result<BinaryMode> {
    Ok(value.parse::<BinaryMode>()?)
}

/// Option flags as typed on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct OptionFlags {
    pub arch: Option<String>,
    pub lang: Option<String>,
    pub mode: Option<String>,
    pub encoding: Option<String>,
}

impl OptionFlags {
    /// Overlay the explicitly given flags on top of `base`.
    pub fn overlay(&self, base: ConverterConfig) -> Result<ConverterConfig> {
        let mut config = base;
        if let Some(a) = self.arch.as_deref() {
            config.architecture = parse_architecture(a)?;
        }
        if let Some(l) = self.lang.as_deref() {
            config.language = parse_language(l)?;
        }
        if let Some(m) = self.mode.as_deref() {
            config.mode = parse_mode(m)?;
        }
        if let Some(e) = self.encoding.as_deref() {
            config.encoding = parse_encoding(e)?;
        }
        Ok(config)
    }
}

/// Load `--config` when given, else start from the built-in defaults.
pub fn base_config(config_path: Option<&str>) -> Result<ConverterConfig> {
    match config_path {
        Some(path) => load_config(path),
        None => Ok(ConverterConfig::default()),
    }
}
