use assert_cmd::Command;
use predicates::prelude::*;

fn period_nav() -> Command {
    Command::cargo_bin("period-nav").unwrap()
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── step ────────────────────────────────────────────────────────────────────

#[test]
fn test_step_day_in_place() {
    let json = json_stdout(period_nav().args([
        "step",
        "--mode",
        "day",
        "--value",
        "2024-02-28",
        "--delta",
        "1",
        "--template",
        "/wtm/log/{compact}",
        "--hx-target",
        "#log-table",
        "--htmx",
    ]));
    assert_eq!(json["value"], "2024-02-29");
    assert_eq!(json["url"], "/wtm/log/20240229");
    assert_eq!(json["transport"], "partial_update");
}

#[test]
fn test_step_month_backward_full_page() {
    let json = json_stdout(period_nav().args([
        "step",
        "--mode",
        "month",
        "--value",
        "2024-03",
        "--delta",
        "-4",
        "--template",
        "/stat?ym={value}",
    ]));
    assert_eq!(json["value"], "2023-11");
    assert_eq!(json["url"], "/stat?ym=2023-11");
    assert_eq!(json["transport"], "full_page");
}

#[test]
fn test_step_target_without_htmx_falls_back() {
    let json = json_stdout(period_nav().args([
        "step",
        "--mode",
        "day",
        "--value",
        "2024-12-31",
        "--delta",
        "1",
        "--template",
        "/log/{value}",
        "--hx-target",
        "#log-table",
    ]));
    assert_eq!(json["value"], "2025-01-01");
    assert_eq!(json["transport"], "full_page");
}

#[test]
fn test_step_flags_default_to_month_like_json() {
    let json = json_stdout(period_nav().args([
        "step",
        "--value",
        "2024-12",
        "--delta",
        "1",
        "--template",
        "/stat/{compact}",
    ]));
    assert_eq!(json["value"], "2025-01");
    assert_eq!(json["url"], "/stat/202501");
}

#[test]
fn test_step_malformed_value_fails() {
    period_nav()
        .args([
            "step", "--mode", "day", "--value", "2024-05", "--delta", "1", "--template", "/x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot step"));
}

#[test]
fn test_step_requires_template() {
    period_nav()
        .args(["step", "--value", "2024-05-01"])
        .assert()
        .failure();
}

// ── resolve ─────────────────────────────────────────────────────────────────

#[test]
fn test_resolve_from_flags() {
    period_nav()
        .args([
            "resolve",
            "--value",
            "2024-05-01",
            "--template",
            "/day/{value}?c={compact}",
        ])
        .assert()
        .success()
        .stdout("/day/2024-05-01?c=20240501\n");
}

#[test]
fn test_resolve_from_config_file() {
    let path = std::env::temp_dir().join(format!("period-nav-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r##"{"mode": "month", "url_template": "/stat/{compact}", "partial": {"target": "#stat"}}"##,
    )
    .unwrap();

    period_nav()
        .args(["resolve", "--value", "2024-05", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("/stat/202405\n");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_resolve_missing_config_file() {
    period_nav()
        .args([
            "resolve",
            "--value",
            "2024-05",
            "--config",
            "/nonexistent/period-nav.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}

// ── time / check-time ───────────────────────────────────────────────────────

#[test]
fn test_time_formats_six_digits() {
    period_nav()
        .args(["time", "145601"])
        .assert()
        .success()
        .stdout("14:56:01\n");
}

#[test]
fn test_time_keeps_out_of_range_digits() {
    period_nav()
        .args(["time", "996001"])
        .assert()
        .success()
        .stdout("996001\n");
}

#[test]
fn test_check_time_converts() {
    period_nav()
        .args(["check-time", "145601"])
        .assert()
        .success()
        .stdout("14:56:01\n");
}

#[test]
fn test_check_time_rejects_colon_form_out_of_range() {
    period_nav()
        .args(["check-time", "99:99:99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HH:MM:SS"));
}

#[test]
fn test_check_time_rejects_padded_colon_form() {
    period_nav()
        .args(["check-time", " 14:56:01 "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HH:MM:SS"));
}

#[test]
fn test_check_time_rejects_partial() {
    period_nav()
        .args(["check-time", "1234"])
        .assert()
        .failure();
}

// ── range ───────────────────────────────────────────────────────────────────

#[test]
fn test_range_leap_february() {
    let json = json_stdout(period_nav().args(["range", "2024-02"]));
    assert_eq!(json["month"], "202402");
    assert_eq!(json["first"], "2024-02-01");
    assert_eq!(json["last"], "2024-02-29");
}

#[test]
fn test_range_rejects_bad_month() {
    period_nav().args(["range", "2024-5"]).assert().failure();
}

// ── timestamp ───────────────────────────────────────────────────────────────

#[test]
fn test_timestamp_combines_day_and_time() {
    period_nav()
        .args(["timestamp", "20240501", "14:56:01"])
        .assert()
        .success()
        .stdout("2024-05-01 14:56:01\n");
}

#[test]
fn test_timestamp_rejects_unconverted_digits() {
    period_nav()
        .args(["timestamp", "20240501", "145601"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot record"));
}
