use std::process::{Command, Output};

fn run_bilidm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bilidm"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_missing_aid_prints_usage() {
    let output = run_bilidm(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_error_marker_and_exit_code() {
    // 视频号无效时不会发出任何网络请求
    let output = run_bilidm(&["-a", "BV1xx411c7mD"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("✗ 错误: 无效的视频号"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let output = run_bilidm(&["-a", "1", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_with_zero() {
    let output = run_bilidm(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}
