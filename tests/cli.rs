use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let log_path = std::env::temp_dir().join("grade_calculator_cli_test/cli.log");
    Command::new(env!("CARGO_BIN_EXE_grade_calculator"))
        .args(args)
        .env("LOG_FILE_PATH", &log_path)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run grade_calculator")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(output.status.success(), "exit status: {}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_report_skips_invalid_grades() {
    let out = stdout_of(&["report", "95", "-5", "abc", "100", "101"]);

    assert!(out.starts_with("Average: 97.5% (2 grades)\n\n"));
    assert!(out.contains("Grade 1: 95%\nGrade 2: 100%\n"));
    assert!(!out.contains("Grade 3"));
    assert!(out.ends_with("Letter Grade: A\n"));
}

#[test]
fn test_report_without_grades_prints_placeholder() {
    let out = stdout_of(&["report"]);

    assert!(out.starts_with("No grades entered yet\n\nNo grades to display."));
    assert!(out.ends_with("to get started!\n"));
}

#[test]
fn test_report_json() {
    let out = stdout_of(&["report", "--json", "90", "80"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["count"], 2);
    assert_eq!(json["average"], 85.0);
    assert_eq!(json["letter_grade"], "B");
}

#[test]
fn test_letter_boundaries() {
    assert_eq!(stdout_of(&["letter", "89.999"]), "B\n");
    assert_eq!(stdout_of(&["letter", "90"]), "A\n");
    assert_eq!(stdout_of(&["letter", "59.999"]), "F\n");
}
