use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tempchart"));
}

#[test]
fn render_demo_series_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.svg");
    let dump = dir.path().join("data.json");
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.args(["render", "--date", "02-14", "--out"])
        .arg(&out)
        .arg("--dump-data")
        .arg(&dump);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart to"));
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("02-14"));
    assert!(svg.contains("Amber"));
    assert!(fs::read_to_string(&dump).unwrap().contains("Amber"));
}

#[test]
fn render_from_csv_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("s.csv");
    fs::write(&input, "x,y,label,color\n6,99.1,Basil,#228B22\n").unwrap();
    let out = dir.path().join("chart.svg");
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.args(["render", "--input"]).arg(&input).arg("--out").arg(&out);
    cmd.assert().success();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Basil"));
    assert!(svg.contains("99.1"));
}

#[test]
fn ticks_lists_axis_labels() {
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.args(["ticks", "--date", "01-05"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"90°F\""))
        .stdout(predicate::str::contains("\"10ml\""))
        .stdout(predicate::str::contains("\"01-05\\n12:00\\n\""));
}

#[test]
fn config_prints_default_json() {
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Moderate Fever(102.2)"));
}

#[test]
fn bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("c.json");
    fs::write(&cfg, r#"{"left_axis": 5}"#).unwrap();
    let mut cmd = Command::cargo_bin("tempchart").unwrap();
    cmd.args(["ticks", "--config"]).arg(&cfg);
    cmd.assert().failure();
}
