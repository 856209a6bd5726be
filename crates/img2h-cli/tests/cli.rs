//! End-to-end tests for the `img2h` binary.

use std::fs;
use std::process::Command;

use image::{RgbaImage, RgbImage};
use tempfile::tempdir;

fn img2h() -> Command {
    Command::new(env!("CARGO_BIN_EXE_img2h"))
}

#[test]
fn missing_arguments_print_usage_and_fail() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("only.png");
    RgbImage::new(1, 1).save(&input).unwrap();

    let output = img2h().arg(&input).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn no_arguments_fail() {
    let output = img2h().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn converts_and_reports_written_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("icon.png");
    let header = dir.path().join("icon.h");
    RgbaImage::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8])
        .unwrap()
        .save(&input)
        .unwrap();

    let output = img2h().arg(&input).arg(&header).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Wrote {}", header.display())));
    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "const unsigned char icon[] = {\n    5,   6,   7,   8,\n    1,   2,   3,   4\n};\n"
    );
}

#[test]
fn explicit_name_is_used() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("a.png");
    let header = dir.path().join("a.h");
    RgbImage::from_raw(1, 1, vec![10, 20, 30])
        .unwrap()
        .save(&input)
        .unwrap();

    let status = img2h()
        .arg(&input)
        .arg(&header)
        .arg("marker_image")
        .status()
        .unwrap();

    assert!(status.success());
    let text = fs::read_to_string(&header).unwrap();
    assert!(text.starts_with("const unsigned char marker_image[] = {\n"));
    assert!(text.contains("   10,  20,  30\n"));
}

#[test]
fn unreadable_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let header = dir.path().join("out.h");

    let output = img2h()
        .arg(dir.path().join("does-not-exist.png"))
        .arg(&header)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to decode"));
    assert!(!header.exists());
}
