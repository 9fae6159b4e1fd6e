use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn lgo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lgo").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn fill_form(home: &TempDir) {
    for (field, value) in [
        ("login-time", "09:00"),
        ("effective-hours", "05:00"),
        ("last-login-time", "14:00"),
    ] {
        lgo(home).args(["set", field, value]).assert().success();
    }
}

#[test]
fn test_calc_one_shot_text() {
    let home = TempDir::new().unwrap();

    lgo(&home)
        .args([
            "calc",
            "--login-time",
            "09:00",
            "--effective-hours",
            "05:00",
            "--last-login-time",
            "14:00",
            "--date",
            "2026-10-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Time: 2h 45m"))
        .stdout(predicate::str::contains("You can log out at: 04:45 PM"))
        .stdout(predicate::str::contains("Status: 2 (gif2.gif)"));

    assert!(!home.path().join(".logout-clock").join("form.json").exists());
}

#[test]
fn test_calc_one_shot_json() {
    let home = TempDir::new().unwrap();

    let assert = lgo(&home)
        .args([
            "calc",
            "--login-time",
            "08:00",
            "--required-hours",
            "08:00",
            "--effective-hours",
            "01:00",
            "--last-login-time",
            "13:00",
            "--date",
            "2026-10-16",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["remaining_minutes"], 420);
    assert_eq!(json["status_tier"], 1);
    assert_eq!(json["logout_label"], "08:00 PM");
    assert_eq!(json["illustration"], "gif1.gif");
}

#[test]
fn test_calc_missing_field_fails_with_notice() {
    let home = TempDir::new().unwrap();

    lgo(&home)
        .args(["calc", "--login-time", "09:00", "--last-login-time", "14:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill all the fields correctly."))
        .stderr(predicate::str::contains("effective hours"));
}

#[test]
fn test_form_calculate_then_show_resolved() {
    let home = TempDir::new().unwrap();
    fill_form(&home);

    lgo(&home)
        .args(["calculate", "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("04:45 PM"));

    let assert = lgo(&home)
        .args(["show", "--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json["phase"], "resolved");
    assert_eq!(json["required_hours"], "07:45");
    assert_eq!(json["result"]["remaining_label"], "2h 45m");
    assert_eq!(json["result"]["status_tier"], 2);
}

#[test]
fn test_form_failed_calculate_keeps_saved_form() {
    let home = TempDir::new().unwrap();
    fill_form(&home);
    lgo(&home)
        .args(["calculate", "--date", "2026-10-16"])
        .assert()
        .success();

    lgo(&home).args(["set", "login-time", ""]).assert().success();
    let form_path = home.path().join(".logout-clock").join("form.json");
    let before = fs::read_to_string(&form_path).unwrap();

    let assert = lgo(&home)
        .args(["calculate", "--date", "2026-10-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing: login time"))
        .stderr(predicate::str::contains("calculation rejected").not());

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("Please fill all the fields correctly.").count(), 1);
    assert_eq!(fs::read_to_string(&form_path).unwrap(), before);
}

#[test]
fn test_form_clear_returns_to_idle() {
    let home = TempDir::new().unwrap();
    fill_form(&home);
    lgo(&home)
        .args(["calculate", "--date", "2026-10-16"])
        .assert()
        .success();

    for _ in 0..2 {
        lgo(&home).arg("clear").assert().success();

        let assert = lgo(&home)
            .args(["show", "--format", "json"])
            .assert()
            .success();
        let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

        assert_eq!(json["phase"], "idle");
        assert_eq!(json["login_time"], "");
        assert_eq!(json["required_hours"], "07:45");
        assert_eq!(json["effective_hours"], "");
        assert_eq!(json["last_login_time"], "");
        assert!(json["result"].is_null());
    }
}

#[test]
fn test_config_default_required_hours_applies_to_clear() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".logout-clock");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[form]\ndefault_required_hours = \"08:30\"\n",
    )
    .unwrap();

    lgo(&home).arg("clear").assert().success();

    lgo(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("08:30"))
        .stdout(predicate::str::contains("No result yet"));

    lgo(&home)
        .args(["config", "get", "form.default_required_hours"])
        .assert()
        .success()
        .stdout("08:30\n");
}

#[test]
fn test_config_init_writes_defaults() {
    let home = TempDir::new().unwrap();

    lgo(&home).args(["config", "init"]).assert().success();

    let written =
        fs::read_to_string(home.path().join(".logout-clock").join("config.toml")).unwrap();
    assert!(written.contains("default_required_hours = \"07:45\""));

    lgo(&home).args(["config", "init"]).assert().failure();
}
