//! E2E tests for rendering, saving and validating the holiday reminder

use std::process::{Command, Output};

const CONFIG: &str = "tests/data/config.toml";

fn run(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--", "--config", CONFIG])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Test that save writes the preview and the draft for the reference months
#[test]
fn save_writes_preview_and_draft() {
    let dir = tempfile::tempdir().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    let output = run(&["--date", "2025-05-24", "save", "--dir", dir_arg]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files saved:"));
    assert!(stdout.contains("Email Subject: Upcoming Holiday Reminder! - Acme Corp"));

    let html = std::fs::read_to_string(dir.path().join("holiday_email_preview.html")).unwrap();
    assert!(html.contains("May 2025 Holidays"));
    assert!(html.contains("June 2025 Holidays"));
    assert!(html.contains("<strong>May 26</strong>: Memorial Day"));
    assert!(html.contains("<strong>May 01</strong>: May Day"));
    // Listed under both the onshore and the offshore column
    assert_eq!(html.matches("<strong>Jun 28</strong>: Mid Year").count(), 2);
    // Unrecognized shore is listed under neither column
    assert!(!html.contains("Team Day"));
    // July is outside the two displayed months
    assert!(!html.contains("Independence Day"));
    assert!(html.contains("© 2025 Acme Corp"));

    let eml = std::fs::read_to_string(dir.path().join("holiday_reminder_draft.eml")).unwrap();
    assert!(eml.contains("Subject: Upcoming Holiday Reminder! - Acme Corp"));
    assert!(eml.contains("To: recipients@company.com"));
}

/// Test that validate reports every dropped or suspicious row as JSON
#[test]
fn validate_json_reports_issues() {
    let output = run(&["validate", "--json"]);

    // Issues present, so the command exits with code 1
    assert_eq!(output.status.code(), Some(1), "Unexpected status: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(json["holidays"], 6);
    assert_eq!(json["recipients"], 2);
    assert_eq!(json["issue_count"], 4);

    let kinds: Vec<&str> = json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["InvalidDate", "UnrecognizedShore", "InvalidEmail", "InvalidEmail"]
    );
    assert_eq!(json["issues"][0]["line"], 6);
}

/// Test holidays CSV output limited to the displayed months
#[test]
fn holidays_csv_upcoming() {
    let output = run(&["--date", "2025-06-02", "holidays", "--upcoming", "--csv"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,name,shore,locations");
    assert_eq!(lines[1], "2025-06-11,Team Day,?,Remote");
    assert_eq!(lines[2], "2025-06-19,Juneteenth,Onshore,USA");
    assert_eq!(lines[3], "2025-06-28,Mid Year,Both,All Offices");
    assert_eq!(lines[4], "2025-07-04,Independence Day,Onshore,USA");
    assert_eq!(lines.len(), 5);
}

/// Test that a dry run lists recipients and the plain text body without sending
#[test]
fn send_dry_run() {
    let output = run(&["--date", "2025-05-24", "send", "--dry-run"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Recipients (2):"));
    assert!(stdout.contains("jane@example.com"));
    assert!(stdout.contains("raj@example.in"));
    assert!(!stdout.contains("bob@example\n"));
    assert!(stdout.contains("Here are the upcoming holidays for May 2025 and June 2025:"));
    assert!(stdout.contains("Jun 28: Mid Year (All Offices)"));
}

/// Test that a missing holiday file fails with the path in the error
#[test]
fn missing_holiday_file() {
    let output = run(&["--holidays", "tests/data/missing.csv", "save"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tests/data/missing.csv"));
}

/// Test that a failed scheduled run is logged and the scheduler keeps going
#[test]
fn schedule_survives_failed_runs() {
    // No [email] section, so every run fails before connecting
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "--config",
            "tests/data/schedule.toml",
            "schedule",
            "--runs",
            "2",
            "--interval-secs",
            "1",
        ])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Holiday reminder run failed").count(), 2);
    assert!(stderr.contains("[email] section is required to send mail"));
    assert!(stderr.contains("Scheduler stopped after 2 run(s)"));
}

/// Test that a zero interval is rejected when the config loads
#[test]
fn schedule_rejects_zero_interval() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[files]\nholidays = \"h.csv\"\nemployees = \"e.csv\"\n\n[schedule]\ninterval_days = 0\n",
    )
    .unwrap();

    let output = Command::new("cargo")
        .args(["run", "--", "--config", config.to_str().unwrap(), "schedule", "--runs", "1"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interval_days must be at least 1"));
}

/// Test that log output goes to the requested file
#[test]
fn log_file_receives_log_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("holiday_tool.log");
    let output = run(&["--log-file", log.to_str().unwrap(), "holidays"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Loaded 6 holiday(s) from tests/data/holidays.csv"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Loaded 6 holiday(s)"));
}
