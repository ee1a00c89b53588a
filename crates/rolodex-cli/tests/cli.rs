use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

const SAMPLE: &str = "\
Booker T., Washington, 87360, 373 781 7380, yellow
Chandler, Kerri, (623)-668-9293, pink, 123123121
James Murphy, yellow, 83880, 018 154 6474
asdfawefawea,we;fawefawef,awefawefawefawef,awefawefawefawef

Ted Lorts, Indigo, 48098, 248 505 1216
Lorts, Ted, (248)-505-1216, Indigo, 48098
";

fn output(home: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(home: &Path, args: &[&str]) -> String {
    let output = output(home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_cmd(home, &full);
    serde_json::from_str(&stdout).expect("parse json")
}

fn write_sample(temp: &TempDir) -> String {
    let path = temp.path().join("data.in");
    fs::write(&path, SAMPLE).expect("write sample");
    path.to_str().expect("utf8 path").to_string()
}

#[test]
fn cli_normalize_writes_sorted_document() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(&temp);
    let out = temp.path().join("nested").join("result.out");
    let out_str = out.to_str().expect("utf8 path");

    let stdout = run_cmd(temp.path(), &["normalize", &input, "--out", out_str]);
    assert!(stdout.contains("Normalized 4 entries (2 errors)"));

    let document: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read output")).expect("json");
    assert_eq!(document["errors"], serde_json::json!([1, 3]));
    let entries = document["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["lastname"], "Lorts");
    assert_eq!(entries[0]["phonenumber"], "248-505-1216");
    assert_eq!(entries[2]["lastname"], "Murphy");
    assert_eq!(entries[3]["firstname"], "Booker T.");
}

#[test]
fn cli_normalize_to_stdout() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(&temp);

    let stdout = run_cmd(temp.path(), &["normalize", &input, "--stdout"]);
    let document: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(document["entries"].as_array().expect("entries").len(), 4);
    assert!(!temp.path().join("result.out").exists());
}

#[test]
fn cli_normalize_json_summary() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(&temp);
    let out = temp.path().join("result.out");

    let summary = run_cmd_json(
        temp.path(),
        &["normalize", &input, "--out", out.to_str().expect("utf8 path")],
    );
    assert_eq!(summary["entries"], 4);
    assert_eq!(summary["errors"], serde_json::json!([1, 3]));
    assert!(out.exists());
}

#[test]
fn cli_normalize_missing_input_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.in");

    let output = output(
        temp.path(),
        &["normalize", missing.to_str().expect("utf8 path"), "--stdout"],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("missing.in"));
}

#[test]
fn cli_classify_reports_format_and_record() {
    let temp = TempDir::new().expect("temp dir");

    let value = run_cmd_json(
        temp.path(),
        &["classify", "J. R. R. Tolkien, Gold, 99999, 999 999 9999"],
    );
    assert_eq!(value["matched"], true);
    assert_eq!(value["format"], 1);
    assert_eq!(value["record"]["firstname"], "J. R. R.");
    assert_eq!(value["record"]["lastname"], "Tolkien");

    let text = run_cmd(
        temp.path(),
        &["classify", "Lorts, Ted, (248)-505-1216, Indigo, 48098"],
    );
    assert!(text.contains("format 0: last-name, first-name, phone-dash-style, color, zip-code"));
    assert!(text.contains("phonenumber: 248-505-1216"));
}

#[test]
fn cli_classify_unmatched_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");

    let output = output(
        temp.path(),
        &["classify", "TedLorts, Indigo, 48098, 248 505 1216"],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no matching format"));
}

#[test]
fn cli_custom_catalog_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("custom.toml");
    fs::write(
        &config,
        "[catalog]\nformats = [[\"last-name\", \"first-name\", \"zip-code\"]]\n",
    )
    .expect("write config");
    let config_str = config.to_str().expect("utf8 path");

    let formats = run_cmd_json(temp.path(), &["--config", config_str, "formats"]);
    let items = formats.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["fields"],
        serde_json::json!(["last-name", "first-name", "zip-code"])
    );
    assert_eq!(
        items[0]["pattern"],
        r"^\s*[\w\-]+\s*,\s*[\w \.\-]+\s*,\s*\d{5}\s*$"
    );

    let value = run_cmd_json(
        temp.path(),
        &["--config", config_str, "classify", "Lorts, Ted, 48098"],
    );
    assert_eq!(value["record"]["zipcode"], "48098");
}

#[test]
fn cli_invalid_catalog_config_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("bad.toml");
    fs::write(&config, "[catalog]\nformats = [[\"full-name\", \"shoe-size\"]]\n")
        .expect("write config");

    let output = output(
        temp.path(),
        &["--config", config.to_str().expect("utf8 path"), "formats"],
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("load config"));
}

#[test]
fn cli_normalize_uses_configured_paths() {
    let temp = TempDir::new().expect("temp dir");
    let input = write_sample(&temp);
    let out = temp.path().join("configured.out");
    let config = temp.path().join("paths.toml");
    fs::write(
        &config,
        format!(
            "input = \"{}\"\noutput = \"{}\"\n",
            input,
            out.to_str().expect("utf8 path")
        ),
    )
    .expect("write config");

    let stdout = run_cmd(
        temp.path(),
        &["--config", config.to_str().expect("utf8 path"), "normalize"],
    );
    assert!(stdout.contains("Normalized 4 entries (2 errors)"));
    assert!(stdout.contains("configured.out"));

    let document: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read output")).expect("json");
    assert_eq!(document["errors"], serde_json::json!([1, 3]));
    assert_eq!(document["entries"].as_array().expect("entries").len(), 4);
}

#[test]
fn cli_normalize_reads_stdin() {
    let temp = TempDir::new().expect("temp dir");

    let output = cargo_bin_cmd!("rolodex")
        .env("XDG_CONFIG_HOME", temp.path())
        .env_remove("RUST_LOG")
        .args(["normalize", "-", "--stdout"])
        .write_stdin(SAMPLE)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);

    let document: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(document["errors"], serde_json::json!([1, 3]));
    let entries = document["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["lastname"], "Lorts");
}
