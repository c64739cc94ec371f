// Integration tests for the echo-worth CLI.
//
// Each test writes its own preset table into a temp dir and runs the binary
// with `--presets` pointing at it.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PRESETS: &str = "\
Character,Teammates,Crit,CritDmg,ER,Attack,FlatATK,Normal,Heavy,Skill,Liberation,Health,FlatHP,Defense,FlatDef
Jinhsi,Changli+Verina,1.0,2.0,0,0,0,0,0,0,0,0,0,0,0
Jinhsi,Zhezhi+Verina,0.5,1.0,0,0,0,0,0,0,0,0,0,0,0
Camellya,Sanhua+Shorekeeper,1.0,1.0,0,0.5,0,0,0,0,0,0,0,0,0
Carlotta,Zhezhi+Verina,1.0,n/a,0,0,0,0,0,0,0,0,0,0,0
";

fn echo_worth() -> Command {
    Command::cargo_bin("echo-worth").expect("binary should exist")
}

fn write_presets(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("presets.csv");
    fs::write(&path, PRESETS).expect("presets should be written");
    path
}

#[test]
fn help_mentions_presets() {
    echo_worth()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn characters_are_listed_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .arg("characters")
        .assert()
        .success()
        .stdout("Jinhsi\nCamellya\nCarlotta\n");
}

#[test]
fn teammates_follow_the_character() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["teammates", "Jinhsi"])
        .assert()
        .success()
        .stdout("Changli+Verina\nZhezhi+Verina\n");
}

#[test]
fn score_prints_percentage() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "Jinhsi", "Changli+Verina"])
        .args(["--set", "Crit=8.1", "--set", "CritDmg=16.2"])
        .assert()
        .success()
        .stdout("300.00%\n");
}

#[test]
fn score_without_selections_is_zero() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "Jinhsi", "Changli+Verina"])
        .assert()
        .success()
        .stdout("0.00%\n");
}

#[test]
fn score_reports_missing_preset() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "Unknown", "Unknown", "--set", "Crit=8.1"])
        .assert()
        .success()
        .stdout("Preset not found.\n");
}

#[test]
fn score_reports_incomplete_selection() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "", "Changli+Verina"])
        .assert()
        .success()
        .stdout("Please select character and teammates.\n");
}

#[test]
fn malformed_cell_scores_as_nan() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "Carlotta", "Zhezhi+Verina", "--set", "CritDmg=16.2"])
        .assert()
        .success()
        .stdout("NaN%\n")
        .stderr(predicate::str::contains("malformed preset cell"));
}

#[test]
fn unknown_substat_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["score", "Jinhsi", "Changli+Verina", "--set", "Luck=1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown substat: Luck"));
}

#[test]
fn missing_preset_file_degrades_to_not_found() {
    let dir = TempDir::new().unwrap();
    echo_worth()
        .arg("--presets")
        .arg(dir.path().join("missing.csv"))
        .args(["score", "Jinhsi", "Changli+Verina", "--set", "Crit=8.1"])
        .assert()
        .success()
        .stdout("Preset not found.\n")
        .stderr(predicate::str::contains("preset data unavailable"));
}

#[test]
fn rank_orders_presets_by_worth() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    let output = echo_worth()
        .arg("--presets")
        .arg(&presets)
        .args(["rank", "--set", "Crit=8.1", "--set", "Attack=8.6", "--top", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Camellya / Sanhua+Shorekeeper"));
    assert!(lines[0].contains("150.00%"));
    assert!(lines[1].contains("100.00%"));
}

#[test]
fn json_output_carries_result_and_display() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    let output = echo_worth()
        .arg("--presets")
        .arg(&presets)
        .arg("--json")
        .args(["score", "Jinhsi", "Changli+Verina", "--set", "Crit=8.1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["display"], "100.00%");
    assert_eq!(json["result"]["kind"], "worth");
    assert_eq!(json["result"]["worth"], 100.0);
}

#[test]
fn config_file_supplies_presets_and_output() {
    let dir = TempDir::new().unwrap();
    write_presets(&dir);
    let config = dir.path().join("echo-worth.toml");
    fs::write(&config, "presets_path = \"presets.csv\"\noutput = \"json\"\n").unwrap();
    echo_worth()
        .arg("--config")
        .arg(&config)
        .arg("characters")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Jinhsi\""));
}

#[test]
fn missing_config_file_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    echo_worth()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("characters")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn bootstrap_lists_substat_metadata() {
    let dir = TempDir::new().unwrap();
    let presets = write_presets(&dir);
    let output = echo_worth()
        .arg("--presets")
        .arg(&presets)
        .arg("bootstrap")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["substatKinds"].as_array().unwrap().len(), 13);
    assert_eq!(json["medianValues"]["CritDmg"], 16.2);
    assert_eq!(json["characters"][0], "Jinhsi");
}
