use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AADHAAR_TEXT: &str = "\
GOVERNMENT OF INDIA
Rahul Kumar
DOB: 15/08/1990
1234 5678 9012
Address: House 12, MG Road
Bengaluru 560001
Mobile: 9876543210
";

const PAN_TEXT: &str = "\
INCOME TAX DEPARTMENT
ANITA SHARMA
04/11/1987
PAN: ABCDE1234F
";

fn idform() -> Command {
    let mut cmd = Command::cargo_bin("idform").unwrap();
    // Keep a user's own config file out of the picture.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/idform-test-config");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn process_text_file_to_json() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "card.txt", AADHAAR_TEXT);

    let output = idform()
        .args(["process", "--template", "aadhaar"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "success");
    assert_eq!(report["filename"], "card.txt");
    assert_eq!(report["template"], "aadhaar");
    assert_eq!(report["language"], "en");
    assert_eq!(report["page_count"], 1);
    assert_eq!(report["filled_form"]["full_name"], "Rahul Kumar");
    assert_eq!(report["filled_form"]["aadhaar"], "1234 5678 9012");
    assert_eq!(report["filled_form"]["confidence"]["aadhaar"], 1);
    assert!(report["filled_form"].get("phone").is_none());
    assert!(report.get("ocr_text").is_none());
}

#[test]
fn process_unknown_template_uses_standard() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "pan.txt", PAN_TEXT);

    idform()
        .args(["process", "--template", "xyz", "--show-text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"template\": \"standard\""))
        .stdout(predicate::str::contains("\"pan\": \"ABCDE1234F\""))
        .stdout(predicate::str::contains("\"ocr_text\""));
}

#[test]
fn process_csv_and_text_formats() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "pan.txt", PAN_TEXT);

    idform()
        .args(["process", "--template", "pan", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "filename,template,language,full_name,dob,address,pan,phone",
        ))
        .stdout(predicate::str::contains("ABCDE1234F"));

    idform()
        .args(["process", "--template", "pan", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("PAN Application (Form 49A)"))
        .stdout(predicate::str::contains("ANITA SHARMA"));
}

#[test]
fn process_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "card.txt", AADHAAR_TEXT);
    let out = dir.path().join("out.json");

    idform()
        .arg("process")
        .arg(&input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["template"], "standard");
    assert_eq!(report["filled_form"]["phone"], "9876543210");
}

#[test]
fn process_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "pan.txt", PAN_TEXT);
    let config = write(
        dir.path(),
        "config.json",
        r#"{"extraction": {"default_template": "income_tax"}}"#,
    );

    idform()
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"template\": \"income_tax\""))
        .stdout(predicate::str::contains("\"pincode\": \"\""));
}

#[test]
fn process_missing_and_unsupported_files() {
    let dir = TempDir::new().unwrap();

    idform()
        .arg("process")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));

    let docx = write(dir.path(), "card.docx", "x");
    idform()
        .arg("process")
        .arg(&docx)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn empty_text_file_gives_empty_form() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "blank.txt", "  \n\n");

    let output = idform().arg("process").arg(&input).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for key in ["full_name", "dob", "address", "aadhaar", "pan", "phone"] {
        assert_eq!(report["filled_form"][key], "", "{key}");
        assert_eq!(report["filled_form"]["confidence"][key], 0, "{key}");
    }
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", AADHAAR_TEXT);
    write(dir.path(), "b.txt", PAN_TEXT);
    write(dir.path(), "notes.md", "ignored");
    let out_dir = dir.path().join("out");
    let pattern = format!("{}/*", dir.path().display());

    idform()
        .args(["batch", &pattern, "--summary", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"))
        .stdout(predicate::str::contains("2 successful"));

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("filename,status,template,language,full_name"));
    assert!(lines[1].starts_with("a.txt,success,standard,en,Rahul Kumar"));
    assert!(lines[2].contains("ABCDE1234F"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.pdf", dir.path().display());

    idform()
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn templates_list_and_show() {
    idform()
        .args(["templates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("driving_licence"));

    idform()
        .args(["templates", "show", "passport", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pincode\""))
        .stdout(predicate::str::contains("passportindia.gov.in"));

    idform()
        .args(["templates", "show", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template"));
}

#[test]
fn config_init_and_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("idform.json");

    idform()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    idform()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.max_address_chars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200"));

    idform()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
