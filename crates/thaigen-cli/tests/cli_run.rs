use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("thaigen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_references(root: &Path, with_address: bool) -> PathBuf {
    let database = root.join("database");
    fs::create_dir_all(&database).expect("create database dir");
    fs::write(database.join("first.txt"), "สมชาย\tS1\nสมหญิง\tS1\nมานี\tM1\n").expect("first names");
    fs::write(database.join("last.txt"), "ใจดี\tJ1\nรักไทย\tR1\n").expect("last names");
    if with_address {
        fs::write(
            database.join("address.csv"),
            "district,amphoe,province,zipcode\nในเมือง,เมืองขอนแก่น,ขอนแก่น,40000\n",
        )
        .expect("address table");
    }

    let settings = root.join("thaigen.toml");
    fs::write(
        &settings,
        format!(
            "[references]\nfirstname_phoneme_path = {:?}\nlastname_phoneme_path = {:?}\naddress_database_path = {:?}\n",
            database.join("first.txt"),
            database.join("last.txt"),
            database.join("address.csv"),
        ),
    )
    .expect("settings");
    settings
}

fn thaigen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_thaigen"))
}

#[test]
fn writes_requested_sentences_and_report() {
    let dir = temp_dir("ok");
    let settings = write_references(&dir, true);
    let out = dir.join("sentences.txt");
    let report = dir.join("report.json");

    let status = thaigen()
        .arg("--config")
        .arg(&settings)
        .args(["--n-sentences", "3", "--seed", "9", "--offline", "--quiet"])
        .arg("--out-file")
        .arg(&out)
        .arg("--report")
        .arg(&report)
        .status()
        .expect("spawn thaigen");
    assert!(status.success());

    let contents = fs::read_to_string(&out).expect("read output");
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.lines().all(|line| line.contains("จังหวัดขอนแก่น 40000")));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report"))
            .expect("parse report");
    assert_eq!(report["sentences_written"], 3);
    assert_eq!(report["seed"], 9);
}

#[test]
fn settings_paths_resolve_next_to_the_settings_file() {
    let dir = temp_dir("relative");
    let project = dir.join("project");
    write_references(&project, true);
    fs::write(
        project.join("thaigen.toml"),
        "[references]\nfirstname_phoneme_path = \"database/first.txt\"\nlastname_phoneme_path = \"database/last.txt\"\naddress_database_path = \"database/address.csv\"\n",
    )
    .expect("relative settings");
    let elsewhere = dir.join("elsewhere");
    fs::create_dir_all(&elsewhere).expect("create working dir");

    let status = thaigen()
        .current_dir(&elsewhere)
        .args(["--config", "../project/thaigen.toml"])
        .args(["--n-sentences", "2", "--offline", "--quiet"])
        .args(["--out-file", "sentences.txt"])
        .status()
        .expect("spawn thaigen");
    assert!(status.success());

    let contents = fs::read_to_string(elsewhere.join("sentences.txt")).expect("read output");
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn missing_address_table_fails_offline() {
    let dir = temp_dir("offline");
    let settings = write_references(&dir, false);
    let out = dir.join("sentences.txt");

    let status = thaigen()
        .arg("--config")
        .arg(&settings)
        .args(["--offline", "--quiet"])
        .arg("--out-file")
        .arg(&out)
        .status()
        .expect("spawn thaigen");
    assert!(!status.success());
    assert!(!out.exists());
}
