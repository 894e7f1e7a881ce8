// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn namescrub_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("namescrub"))
}

/// Creates `relative_path` under `dir` (with parent directories) holding `content`.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &str) -> std::io::Result<()> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)
}

/// Sorted file names directly inside `dir`.
#[allow(dead_code)]
pub fn list_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>, _>>()?;
    names.sort();
    Ok(names)
}
