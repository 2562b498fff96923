// tests/cli_dispatch_test.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use tempfile::{TempDir, tempdir};

// 每个测试使用独立的 HOME，避免读写真实的用户配置
fn main_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("HOME", home.path());
    cmd
}

// --- 测试基本 CLI 行为 ---

#[test]
fn test_help_flag() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("显示此帮助信息并退出"));
}

#[test]
fn test_missing_mode_shows_help() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_modes_conflict() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.args(["--catalog", "--name", "Calculus I"]);
    cmd.assert().failure().stderr(predicate::str::contains("cannot be used with"));
}

// --- 测试核心分发逻辑 ---

#[test]
fn test_catalog_mode() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.arg("--catalog");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mathematics"))
        .stdout(predicate::str::contains("Calculus I"));
}

#[test]
fn test_flag_mode_prints_json() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.args([
        "--name",
        "Calculus I",
        "--department",
        "Mathematics",
        "--start",
        "2025-01-13",
        "--end",
        "2025-05-02",
        "--json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Limits and Continuity"))
        .stdout(predicate::str::contains("\"code\": \"MATH101\""));

    // 首次运行会在 HOME 下创建默认配置文件
    assert!(home.path().join(".lms-course-gen").join("config.json").is_file());
}

#[test]
fn test_flag_mode_rejects_bad_date() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.args(["--name", "Calculus I", "--start", "someday"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("无法识别"));
}

#[test]
fn test_zero_modules_is_an_error() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.args(["--name", "Calculus I", "--modules", "0", "--json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("无效的模块数量"));
}

#[test]
fn test_config_file_mode_writes_output() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("courses.json");
    let output_path = dir.path().join("out").join("courses.json");
    let mut file = File::create(&config_path).unwrap();
    writeln!(
        file,
        r#"[
            {{"name": "Calculus I", "department": "Mathematics", "startDate": "2025-01-13", "endDate": "2025-05-02"}},
            {{"name": "World History", "department": "History", "startDate": "2025-08-25", "endDate": "2025-12-12", "instructor": "Dr. Rivera"}}
        ]"#
    )
    .unwrap();

    let mut cmd = main_command(&home);
    cmd.arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&output_path)
        .args(["--seed-history", "2", "--seed", "7"]);
    cmd.assert().success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let courses = written.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["id"], 1);
    assert_eq!(courses[1]["id"], 2);
    assert_eq!(courses[1]["instructor"]["email"], "rivera@university.edu");
    assert_eq!(courses[0]["modules"][0]["completed"], true);
    assert_eq!(courses[0]["modules"][2]["completed"], false);
}

#[test]
fn test_prompt_file_mode() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let prompt_path = dir.path().join("course.txt");
    fs::write(
        &prompt_path,
        "Name: Data Structures\nCode: CS201\nDates: 2025-08-25 - 2025-12-12\nUnits: 4",
    )
    .unwrap();

    let mut cmd = main_command(&home);
    cmd.arg("--prompt-file").arg(&prompt_path).arg("--json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Algorithm Analysis"))
        .stdout(predicate::str::contains("\"department\": \"Computer Science\""));
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempdir().unwrap();
    let mut cmd = main_command(&home);
    cmd.args(["--config", "does-not-exist.json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[X]"))
        .stderr(predicate::str::contains("程序执行出错"));
}
