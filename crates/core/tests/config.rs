use hexcraft_core::config::{load_config, ConverterConfig};
use hexcraft_core::model::{Architecture, BinaryMode, SourceLanguage, TextEncoding};
use tempfile::tempdir;

#[test]
fn defaults_match_initial_options() {
    let config = ConverterConfig::default();
    assert_eq!(config.architecture, Architecture::X86_64);
    assert_eq!(config.language, SourceLanguage::C);
    assert_eq!(config.encoding, TextEncoding::Ascii);
    assert_eq!(config.mode, BinaryMode::Text);
}

#[test]
fn loads_partial_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hexcraft.json");
    std::fs::write(&path, r#"{ "architecture": "arm64", "mode": "numbers" }"#).unwrap();

    let config = load_config(&path).expect("load json");
    assert_eq!(config.architecture, Architecture::Arm64);
    assert_eq!(config.mode, BinaryMode::Numbers);
    assert_eq!(config.language, SourceLanguage::C);
}

#[test]
fn loads_yaml_for_other_extensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hexcraft.yaml");
    std::fs::write(&path, "language: assembly\nencoding: utf16\narchitecture: x86_64\n").unwrap();

    let config = load_config(&path).expect("load yaml");
    assert_eq!(config.language, SourceLanguage::Assembly);
    assert_eq!(config.encoding, TextEncoding::Utf16);
    assert_eq!(config.architecture, Architecture::X86_64);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let err = load_config(dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"), "unexpected error: {err}");
}

#[test]
fn bad_values_fail_to_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "architecture": "riscv" }"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"));
}
