//! CLI contract tests
//!
//! Runs the built binary against scratch directories and checks exit codes,
//! JSON output shape, config layering and file output.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn scalestat_bin() -> String {
    env!("CARGO_BIN_EXE_scalestat").to_string()
}

/// Command isolated from the real user config and working directory
fn scalestat(dir: &Path) -> Command {
    let mut cmd = Command::new(scalestat_bin());
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("SCALESTAT_FORMAT")
        .env_remove("NO_COLOR")
        .stdin(Stdio::null());
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    scalestat(dir)
        .args(args)
        .output()
        .expect("Failed to run scalestat")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}): {stdout}"))
}

#[test]
fn test_analyze_inline_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["analyze", "--data", "10, 20, 20, 30", "--population", "-f", "json"],
    );
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["classification"]["kind"], "quantitative_discrete");
    assert_eq!(json["variance_mode"], "population");
    assert_eq!(json["statistics"]["mean"], 20.0);
    assert_eq!(json["statistics"]["variance"], 50.0);
    assert_eq!(json["sample_size"], 4);
    assert_eq!(json["totals"]["absolute"], 4);
}

#[test]
fn test_analyze_ordinal_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("levels.txt"), "bajo\nalto\nmedio\nbajo\n").unwrap();

    let output = run(dir.path(), &["analyze", "levels.txt", "--format", "json"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["classification"]["kind"], "qualitative_ordinal");
    assert_eq!(json["classification"]["scale"]["name"], "level");
    assert_eq!(json["statistics"]["median"], "Medio");
    assert_eq!(json["statistics"]["mode"]["value"], "bajo");
    assert!(json["statistics"]["mean"].is_null());
}

#[test]
fn test_analyze_json_dataset_carries_method() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("data.json"),
        r#"{"datos": "2, 4, 4, 4, 5, 5, 7, 9", "config": "poblacional"}"#,
    )
    .unwrap();

    let output = run(dir.path(), &["analyze", "data.json", "-f", "json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["variance_mode"], "population");
    assert_eq!(json["statistics"]["std_dev"], 2.0);
}

#[test]
fn test_analyze_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = scalestat(dir.path())
        .args(["analyze", "-", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn scalestat");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"rojo; azul; rojo")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["classification"]["kind"], "qualitative_nominal");
    assert_eq!(json["frequency_table"][0]["value"], "rojo");
}

#[test]
fn test_empty_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["analyze", "--data", " ;, "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty"), "stderr: {}", stderr);
}

#[test]
fn test_output_file_and_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["analyze", "--data", "1.5, 2.5, 2.5", "-o", "report.txt"],
    );
    assert!(output.status.success());

    let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("Quantitative continuous"));
    assert!(report.contains("TOTAL"));
    assert!(!report.contains('\x1b'));
}

#[test]
fn test_output_directory_gets_html_report_with_charts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("out")).unwrap();
    let output = run(
        dir.path(),
        &["analyze", "--data", "a, b, a, c", "-f", "html", "-o", "out"],
    );
    assert!(output.status.success());

    let html = std::fs::read_to_string(dir.path().join("out").join("report.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<rect class=\"bar\"").count(), 3);
    assert_eq!(html.matches("<path class=\"slice\"").count(), 3);
}

#[test]
fn test_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["analyze", "--data", "10, 20, 20, 30", "--population", "-f", "csv"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Scale,Quantitative discrete\n"));
    assert!(stdout.contains("Variance,50.00\n"));
    assert!(stdout.contains("Value,fi,Fi,hi,Hi,pi\n"));
    assert!(stdout.contains("20,2,3,0.500,0.750,50.0\n"));
    assert!(stdout.trim_end().ends_with("TOTAL,4,,1.000,1.000,100.0"));
}

#[test]
fn test_analyze_xlsx_first_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.xlsx");
    let mut book = umya_spreadsheet::new_file();
    {
        let sheet = book.get_sheet_by_name_mut("Sheet1").expect("default sheet");
        sheet.get_cell_mut((1, 1)).set_value_number(10.0);
        sheet.get_cell_mut((2, 1)).set_value_number(20.0);
        sheet.get_cell_mut((1, 2)).set_value_number(20.0);
        sheet.get_cell_mut((1, 3)).set_value_number(30.0);
    }
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("write workbook");

    let output = run(dir.path(), &["analyze", "scores.xlsx", "-f", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json = stdout_json(&output);
    assert_eq!(json["classification"]["kind"], "quantitative_discrete");
    assert_eq!(json["sample_size"], 4);
    assert_eq!(json["statistics"]["mean"], 20.0);
}

#[test]
fn test_format_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output = scalestat(dir.path())
        .args(["analyze", "--data", "1, 2, 2"])
        .env("SCALESTAT_FORMAT", "json")
        .output()
        .expect("Failed to run scalestat");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["sample_size"], 3);
}

#[test]
fn test_demo_analyze_uses_configured_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("scalestat.toml"),
        "[defaults]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run(
        dir.path(),
        &["demo", "--kind", "nominal", "--seed", "1", "--analyze"],
    );
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["classification"]["kind"], "qualitative_nominal");

    let output = run(
        dir.path(),
        &["demo", "--kind", "nominal", "--seed", "1", "--analyze", "-f", "markdown"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("# Descriptive Statistics Report"));
}

#[test]
fn test_project_config_defaults_and_scales() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("scalestat.toml"),
        r#"
[defaults]
format = "json"

[[scales]]
name = "temperature"
labels = ["frio", "templado", "caliente"]
"#,
    )
    .unwrap();

    let output = run(dir.path(), &["analyze", "--data", "frio, caliente, templado, caliente"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["classification"]["scale"]["name"], "temperature");
    assert_eq!(json["statistics"]["median"], "Caliente");

    let output = run(dir.path(), &["scales", "--json"]);
    assert!(output.status.success());
    let scales = stdout_json(&output);
    let scales = scales.as_array().expect("scales array");
    assert_eq!(scales.len(), 9);
    assert_eq!(scales[0]["name"], "quality-3");
    assert_eq!(scales[8]["name"], "temperature");
}

#[test]
fn test_classify_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["classify", "--data", "xs, m, xl", "--json"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["tokens"], 3);
    assert_eq!(json["classification"]["scale"]["name"], "clothing-size");
}

#[test]
fn test_demo_is_reproducible_and_analyzable() {
    let dir = tempfile::tempdir().unwrap();
    let first = run(dir.path(), &["demo", "--kind", "discrete", "--seed", "42"]);
    let second = run(dir.path(), &["demo", "--kind", "discrete", "--seed", "42"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let values = String::from_utf8_lossy(&first.stdout).trim().to_string();
    let output = run(dir.path(), &["classify", "--data", &values]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Quantitative discrete"
    );
}

#[test]
#[cfg(target_os = "linux")]
fn test_config_init_writes_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["config", "init"]);
    assert!(output.status.success());
    assert!(dir
        .path()
        .join(".config")
        .join("scalestat")
        .join("config.toml")
        .exists());
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("scalestat "));
}
