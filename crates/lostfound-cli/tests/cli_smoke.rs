use std::fs;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn lostfound(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lostfound"))
        .args(args)
        .env_remove("LOSTFOUND_TERYT_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run lostfound")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn standardize_writes_json_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("items.json");
    fs::write(
        &input,
        r#"[{"item_name": "telfon samsung", "date_found": "wczoraj", "custom_fields": {"brand": "vw"}}]"#,
    )
    .expect("write input");

    let output = lostfound(&[
        "standardize",
        input.to_str().expect("utf-8 path"),
        "--today",
        "2024-05-10",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let records: Value = serde_json::from_slice(&output.stdout).expect("json on stdout");
    assert_eq!(records[0]["item_name"], "Telefon Samsung");
    assert_eq!(records[0]["date_found"], "2024-05-09");
    assert_eq!(records[0]["custom_fields"]["brand"], "Volkswagen");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Rewrites"));
}

#[test]
fn bad_today_is_rejected() {
    let output = lostfound(&["standardize", "items.json", "--today", "10.05.2024"]);
    assert!(!output.status.success());
}

#[test]
fn teryt_find_resolves_with_parent() {
    let output = lostfound(&[
        "teryt",
        "find",
        "county",
        "grodziski",
        "--voivodeship",
        "wielkopolskie",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("3005"), "{text}");
    assert!(!text.contains("1405"), "{text}");
}

#[test]
fn teryt_find_miss_fails() {
    let output = lostfound(&["teryt", "find", "municipality", "Nieistniejąca Wieś"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no municipality matches"));
}

#[test]
fn teryt_listing_and_autocomplete() {
    let output = lostfound(&["teryt", "counties", "małopolskie"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("krakowski") && text.contains("nowotarski"), "{text}");

    let output = lostfound(&["teryt", "autocomplete", "kra", "--kind", "all"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("miasto na prawach powiatu"));

    let output = lostfound(&["teryt", "counties", "mazowsze"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn teryt_info_marks_invalid_levels() {
    let output = lostfound(&["teryt", "info", "Zielonki", "krakowski", "małopolskie"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("1206"), "{text}");
    assert!(!text.contains('✗'), "{text}");

    let output = lostfound(&["teryt", "info", "Atlantyda", "krakowski", "małopolskie"]);
    assert!(stdout(&output).contains('✗'));
}
