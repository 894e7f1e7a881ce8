// tests/library_api.rs

use namescrub::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::tempdir;

fn build(root: &Path, apply: bool) -> Config {
    ConfigBuilder::new()
        .root_path(root)
        .phrase("(Z-Library)")
        .case_insensitive(true)
        .loose(true)
        .apply(apply)
        .build()
        .unwrap()
}

#[test]
fn test_library_run_dry_then_apply() -> anyhow::Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("Book (Z\u{2011}Library).pdf"), "")?;
    fs::write(temp.path().join("Clean.pdf"), "")?;

    let token = CancellationToken::new();
    let dry = run(&build(temp.path(), false), &token, &mut io::sink())?;
    assert!(dry.dry_run);
    assert_eq!((dry.checked, dry.matched, dry.would_change, dry.changed), (2, 1, 1, 0));

    let applied = run(&build(temp.path(), true), &token, &mut io::sink())?;
    assert!(!applied.dry_run);
    assert_eq!((applied.checked, applied.matched, applied.changed), (2, 1, 1));
    assert!(temp.path().join("Book.pdf").exists());
    Ok(())
}

#[test]
fn test_planner_can_be_driven_manually() -> anyhow::Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("Another Book (Z-Library).epub"), "")?;
    let config = ConfigBuilder::new()
        .root_path(temp.path())
        .phrase("(Z-Library)")
        .replacement("[Clean]")
        .build()?;

    let mut planner = Planner::new(&config, &NoClobberRename);
    let results: Vec<MatchResult> = discover(&config).map(|c| planner.process(c)).collect();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, RenameStatus::WouldRename);
    assert_eq!(
        results[0].computed_name.as_deref(),
        Some("Another Book [Clean].epub")
    );
    Ok(())
}

/// A backend that refuses every rename, standing in for a read-only filesystem.
struct ReadOnly;

impl RenameBackend for ReadOnly {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
    fn is_case_variant(&self, _from: &Path, _to: &Path) -> bool {
        false
    }
    fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
    fn name(&self) -> &'static str {
        "ReadOnly"
    }
}

#[test]
fn test_filesystem_errors_do_not_stop_the_batch() -> anyhow::Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a (Z-Library).pdf"), "")?;
    fs::write(temp.path().join("b (Z-Library).pdf"), "")?;

    let mut out = Vec::new();
    let report = run_with_backend(
        &build(temp.path(), true),
        &CancellationToken::new(),
        &ReadOnly,
        &mut out,
    )?;

    assert_eq!(report.checked, 2);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.exit_code(), 1);
    let text = String::from_utf8(out)?;
    assert!(text.contains("[ERROR] a (Z-Library).pdf:"));
    assert!(text.contains("read-only"));
    Ok(())
}

#[test]
fn test_find_spans_and_compute_new_name() -> anyhow::Result<()> {
    let opts = MatchOptions {
        phrase: "(Z-Library)".to_string(),
        case_insensitive: false,
        loose: false,
    };
    let spans = find_spans("Book Title (Z-Library)", &opts);
    let name = compute_new_name("Book Title (Z-Library)", ".pdf", &spans, Mode::Delete, "")?;
    assert_eq!(name, "Book Title.pdf");
    Ok(())
}
