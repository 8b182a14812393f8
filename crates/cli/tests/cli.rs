//! Integration tests for the huewheel binary.

use std::fs;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_huewheel"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch huewheel")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

const DEFAULT_ELEVEN: [&str; 11] = [
    "0.875, 0.125, 0.125",
    "0.875, 0.5341, 0.125",
    "0.8068, 0.875, 0.125",
    "0.3977, 0.875, 0.125",
    "0.125, 0.875, 0.2614",
    "0.125, 0.875, 0.6705",
    "0.125, 0.6705, 0.875",
    "0.125, 0.2614, 0.875",
    "0.3977, 0.125, 0.875",
    "0.8068, 0.125, 0.875",
    "0.875, 0.125, 0.5341",
];

#[test]
fn default_example_prints_eleven_rows() {
    let output = run_cli(&["11", "0.75", "0.5"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output), DEFAULT_ELEVEN);
}

#[test]
fn output_is_stable_across_runs() {
    let first = run_cli(&["11", "0.75", "0.5"]);
    let second = run_cli(&["11", "0.75", "0.5"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_lines(&first), DEFAULT_ELEVEN);
}

#[test]
fn sixteen_colors_match_reference_rows_at_decimal_ties() {
    let output = run_cli(&["16", "0.75", "0.5"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[3], "0.7813, 0.875, 0.125");
    assert_eq!(lines[5], "0.2188, 0.875, 0.125");
    assert_eq!(lines[9], "0.125, 0.5937, 0.875");
    assert_eq!(lines[11], "0.2187, 0.125, 0.875");
    assert_eq!(lines[13], "0.7812, 0.125, 0.875");
}

#[test]
fn eight_dark_colors_match_reference_rows() {
    let output = run_cli(&["8", "0.75", "0.25"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        [
            "0.4375, 0.0625, 0.0625",
            "0.4375, 0.3438, 0.0625",
            "0.25, 0.4375, 0.0625",
            "0.0625, 0.4375, 0.1563",
            "0.0625, 0.4375, 0.4375",
            "0.0625, 0.1562, 0.4375",
            "0.25, 0.0625, 0.4375",
            "0.4375, 0.0625, 0.3437",
        ]
    );
}

#[test]
fn single_color_is_red_at_full_saturation() {
    let output = run_cli(&["1", "1", "0.5"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["1.0, 0.0, 0.0"]);
}

#[test]
fn hex_output() {
    let output = run_cli(&["3", "0.75", "0.5", "--hex"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["#df2020", "#20df20", "#2020df"]);
}

#[test]
fn json_output() {
    let output = run_cli(&["--json", "2", "1", "0.5"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["count"], 2);
    assert_eq!(report["colors"][1]["hue"], 180.0);
    assert_eq!(report["colors"][1]["hex"], "#00ffff");
}

#[test]
fn zero_count_exits_with_invalid_argument() {
    let output = run_cli(&["0", "0.75", "0.5"]);
    assert_eq!(output.status.code(), Some(10));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("count"));
}

#[test]
fn out_of_range_saturation_exits_with_invalid_argument() {
    let output = run_cli(&["4", "1.5", "0.5"]);
    assert_eq!(output.status.code(), Some(10));
    assert!(String::from_utf8_lossy(&output.stderr).contains("saturation"));
}

#[test]
fn json_mode_reports_errors_as_json() {
    let output = run_cli(&["--json", "0", "0.75", "0.5"]);
    assert_eq!(output.status.code(), Some(10));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["exit_code"], 10);
}

#[test]
fn unparsable_arguments_exit_with_usage_error() {
    let output = run_cli(&["eleven", "0.75", "0.5"]);
    assert_eq!(output.status.code(), Some(2));
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_saturation_or_lightness_is_a_usage_error() {
    let output = run_cli(&["11"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let output = run_cli(&["11", "0.75"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn plot_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wheel.png");
    let output = run_cli(&[
        "5",
        "0.75",
        "0.5",
        "--plot",
        path.to_str().unwrap(),
        "--size",
        "64",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output).len(), 5);
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "not a PNG file");
}

#[test]
fn plot_into_missing_directory_exits_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("wheel.png");
    let output = run_cli(&["3", "0.75", "0.5", "--plot", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(11));
}

#[test]
fn huge_plot_size_exits_with_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.png");
    let output = run_cli(&[
        "3",
        "0.75",
        "0.5",
        "--plot",
        path.to_str().unwrap(),
        "--size",
        "100000000",
    ]);
    assert_eq!(output.status.code(), Some(10));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("maximum"));
    assert!(!path.exists());
}
