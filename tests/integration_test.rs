use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `copy-icon-gen` in an empty directory and asserts that exactly the three
/// icons appear and the completion line is printed last.
#[test]
fn test_creates_three_icons_in_working_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_copy_icon_gen(temp_dir.path(), &[]);

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("copy-icon-gen command failed");
    }

    let mut files: Vec<String> = std::fs::read_dir(temp_dir.path())
        .expect("Failed to list output directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(files, vec!["icon128.png", "icon16.png", "icon48.png"]);

    for (name, size) in [("icon16.png", 16), ("icon48.png", 48), ("icon128.png", 128)] {
        let icon = image::open(temp_dir.path().join(name)).expect("Failed to load icon");
        assert_eq!(icon.width(), size, "{name} width");
        assert_eq!(icon.height(), size, "{name} height");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().last(), Some("Icons created!"));
}

/// A directory squatting on `icon48.png` makes the second write fail: the
/// first icon stays, the third is never attempted, no completion line.
#[test]
fn test_stops_at_first_failed_write() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir(temp_dir.path().join("icon48.png")).unwrap();

    let output = run_copy_icon_gen(temp_dir.path(), &[]);

    assert!(!output.status.success(), "copy-icon-gen should fail");
    assert!(temp_dir.path().join("icon16.png").is_file());
    assert!(!temp_dir.path().join("icon128.png").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Icons created!"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon48.png"), "stderr: {stderr}");
}

#[test]
fn test_rejects_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_copy_icon_gen(temp_dir.path(), &["--size", "64"]);

    assert!(!output.status.success());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

fn run_copy_icon_gen(working_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_copy-icon-gen"))
        .args(args)
        .current_dir(working_dir)
        .output()
        .expect("Failed to run copy-icon-gen command")
}
