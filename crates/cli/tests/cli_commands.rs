use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

/// Running the CLI with no arguments should default to listing examples.
#[test]
fn default_command_lists_examples() {
    cargo_bin_cmd!("hexcraft")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World (C)"))
        .stdout(predicate::str::contains("Numbers to Binary"));
}

#[test]
fn convert_prints_all_three_sections() {
    cargo_bin_cmd!("hexcraft")
        .args(["convert", "--text", "int main() {\nreturn 0;", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Machine Code (x86-64, c):"))
        .stdout(predicate::str::contains("00000000: 48 89 e5 48 83 ec 10"))
        .stdout(predicate::str::contains("Assembly (x86-64):"))
        .stdout(predicate::str::contains("Binary (text, ascii):"))
        .stderr(predicate::str::contains("Code converted successfully!"));
}

#[test]
fn convert_rejects_blank_input() {
    cargo_bin_cmd!("hexcraft")
        .args(["convert", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some code to convert"));
}

#[test]
fn convert_rejects_unknown_architecture() {
    cargo_bin_cmd!("hexcraft")
        .args(["convert", "--text", "ret", "--arch", "mips"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid architecture 'mips'"));
}

#[test]
fn convert_json_machine_mode() {
    let output = cargo_bin_cmd!("hexcraft")
        .args([
            "convert", "--text", "push rbp\nret", "--lang", "assembly", "--mode", "machine",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).expect("convert json");
    assert_eq!(body["request"]["mode"], "machine");
    assert_eq!(body["result"]["machine_code"], "00000000: 50\n00000004: c3\n");
    assert_eq!(body["result"]["binary"], "00000000: 01010000\n00000004: 11000011");
}

#[test]
fn convert_reads_file_and_writes_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.s");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "mov x0, #1\nret\n").unwrap();

    cargo_bin_cmd!("hexcraft")
        .arg("convert")
        .arg("--file")
        .arg(&input)
        .args(["--arch", "arm64", "--lang", "assembly"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let body = std::fs::read_to_string(&output).unwrap();
    assert!(body.contains("00000000: 00 00 80 d2\n00000004: c0 03 5f d6\n"), "body: {body}");
}

#[test]
fn convert_from_stdin() {
    cargo_bin_cmd!("hexcraft")
        .args(["convert", "--file", "-", "--mode", "numbers"])
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("42 (decimal) = 101010 (binary)"));
}

#[test]
fn machine_code_with_same_seed_is_stable() {
    let run = || {
        cargo_bin_cmd!("hexcraft")
            .args(["machine-code", "--text", "a = b;\nc = d;", "--seed", "99"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn assembly_command_prints_template() {
    cargo_bin_cmd!("hexcraft")
        .args(["assembly", "--text", "main printf return"])
        .assert()
        .success()
        .stdout("main:\n    push rbp\n    mov rbp, rsp\n");
}

#[test]
fn binary_command_modes() {
    cargo_bin_cmd!("hexcraft")
        .args(["binary", "--text", "A", "--encoding", "utf16"])
        .assert()
        .success()
        .stdout("0000000001000001\n");

    cargo_bin_cmd!("hexcraft")
        .args(["binary", "--mode", "machine", "--text", "00000000: 48 89 e5\n"])
        .assert()
        .success()
        .stdout("00000000: 01001000 10001001 11100101\n");
}

#[test]
fn binary_command_whitespace_input() {
    for mode in ["numbers", "machine"] {
        cargo_bin_cmd!("hexcraft")
            .args(["binary", "--mode", mode, "--text", "  "])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    // Text mode encodes every code unit, spaces included.
    cargo_bin_cmd!("hexcraft")
        .args(["binary", "--text", "  "])
        .assert()
        .success()
        .stdout("00100000 00100000\n");

    cargo_bin_cmd!("hexcraft")
        .args(["binary", "--text", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn text_and_file_conflict() {
    cargo_bin_cmd!("hexcraft")
        .args(["assembly", "--text", "x", "--file", "y"])
        .assert()
        .failure();
}

#[test]
fn tables_json_lists_requested_table() {
    let output = cargo_bin_cmd!("hexcraft")
        .args(["tables", "--arch", "arm64", "--lang", "c", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: serde_json::Value = serde_json::from_slice(&output).expect("tables json");
    let tables = body.as_array().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["architecture"], "arm64");
    assert_eq!(tables[0]["patterns"][0]["pattern"], "int main()");
    assert_eq!(tables[0]["patterns"][0]["hex"], "fd 7b bf a9 fd 03 00 91");
}
