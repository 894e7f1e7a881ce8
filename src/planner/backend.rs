//! Provides a trait and the default implementation for performing renames.

use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A trait for the filesystem operations the planner needs.
///
/// Implementations must never overwrite an existing `to` path from `rename`.
pub trait RenameBackend {
    /// Returns `true` if anything (file, directory, symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Returns `true` if `to` is the directory entry of `from` spelled with
    /// different letter case, i.e. a case-only rename on a case-insensitive
    /// filesystem. Symlinks and other hard links at `to` never qualify.
    fn is_case_variant(&self, from: &Path, to: &Path) -> bool;
    /// Renames `from` to `to`, failing with `ErrorKind::AlreadyExists` if `to` is taken.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    /// Returns a descriptive name for the backend.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn RenameBackend + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RenameBackend").field(&self.name()).finish()
    }
}

/// The real filesystem, with a rename that refuses to clobber.
///
/// The new name is created as a hard link and the old one removed afterwards,
/// so a target that appears after the collision check makes the rename fail
/// instead of being overwritten. Filesystems without hard link support fall
/// back to check-then-rename.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClobberRename;

impl RenameBackend for NoClobberRename {
    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_case_variant(&self, from: &Path, to: &Path) -> bool {
        differs_only_in_case(from, to) && same_entry(from, to).unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.is_case_variant(from, to) {
            // Case-only rename on a case-insensitive filesystem: `to` already
            // resolves to `from`, so linking would always report AlreadyExists.
            return fs::rename(from, to);
        }
        match fs::hard_link(from, to) {
            Ok(()) => {
                if let Err(e) = fs::remove_file(from) {
                    // Leave the tree as it was.
                    let _ = fs::remove_file(to);
                    return Err(e);
                }
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(e),
            Err(e) => {
                debug!(
                    "Hard link from '{}' failed ({}), falling back to rename",
                    from.display(),
                    e
                );
                if self.exists(to) {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("target '{}' already exists", to.display()),
                    ));
                }
                fs::rename(from, to)
            }
        }
    }

    fn name(&self) -> &'static str {
        "NoClobberRename"
    }
}

/// Same parent, file names equal ignoring case but not byte-equal.
fn differs_only_in_case(a: &Path, b: &Path) -> bool {
    if a.parent() != b.parent() {
        return false;
    }
    match (
        a.file_name().and_then(|n| n.to_str()),
        b.file_name().and_then(|n| n.to_str()),
    ) {
        (Some(x), Some(y)) => x != y && x.to_lowercase() == y.to_lowercase(),
        _ => false,
    }
}

#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    let ma = fs::symlink_metadata(a)?;
    let mb = fs::symlink_metadata(b)?;
    // An inode with a second link has a second entry, which a rename would not replace.
    Ok(!mb.file_type().is_symlink()
        && ma.dev() == mb.dev()
        && ma.ino() == mb.ino()
        && ma.nlink() == 1)
}

#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> io::Result<bool> {
    if fs::symlink_metadata(b)?.file_type().is_symlink() {
        return Ok(false);
    }
    Ok(a.canonicalize()? == b.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rename_moves_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let from = temp.path().join("Book (Z-Library).pdf");
        let to = temp.path().join("Book.pdf");
        fs::write(&from, "content")?;

        NoClobberRename.rename(&from, &to)?;

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to)?, "content");
        Ok(())
    }

    #[test]
    fn test_rename_refuses_existing_target() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let from = temp.path().join("A.pdf");
        let to = temp.path().join("B.pdf");
        fs::write(&from, "A")?;
        fs::write(&to, "B")?;

        let err = NoClobberRename.rename(&from, &to).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&from)?, "A");
        assert_eq!(fs::read_to_string(&to)?, "B");
        Ok(())
    }

    #[test]
    fn test_exists_sees_directories() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let dir = temp.path().join("Book.pdf");
        fs::create_dir(&dir)?;
        assert!(NoClobberRename.exists(&dir));
        assert!(!NoClobberRename.exists(&temp.path().join("missing")));
        Ok(())
    }

    #[test]
    fn test_differs_only_in_case() {
        let dir = Path::new("/books");
        assert!(differs_only_in_case(&dir.join("book.pdf"), &dir.join("Book.pdf")));
        assert!(!differs_only_in_case(&dir.join("Book.pdf"), &dir.join("Book.pdf")));
        assert!(!differs_only_in_case(&dir.join("Book (Z-Library).pdf"), &dir.join("Book.pdf")));
        assert!(!differs_only_in_case(&dir.join("book.pdf"), Path::new("/other/Book.pdf")));
    }

    #[test]
    fn test_distinct_files_are_not_case_variants() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        fs::write(&a, "a")?;
        fs::write(&b, "b")?;
        assert!(!NoClobberRename.is_case_variant(&a, &a));
        assert!(!NoClobberRename.is_case_variant(&a, &b));
        assert!(!NoClobberRename.is_case_variant(&a, &temp.path().join("A.txt")));
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_rename_refuses_symlink_to_source() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let from = temp.path().join("Book (Z-Library).pdf");
        let to = temp.path().join("Book.pdf");
        fs::write(&from, "content")?;
        std::os::unix::fs::symlink(&from, &to)?;

        assert!(!NoClobberRename.is_case_variant(&from, &to));
        let err = NoClobberRename.rename(&from, &to).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(fs::symlink_metadata(&to)?.file_type().is_symlink());
        assert!(from.exists());
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_rename_refuses_hard_link_to_source() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let from = temp.path().join("Book (Z-Library).pdf");
        let to = temp.path().join("Book.pdf");
        fs::write(&from, "content")?;
        fs::hard_link(&from, &to)?;

        assert!(!NoClobberRename.is_case_variant(&from, &to));
        let err = NoClobberRename.rename(&from, &to).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(from.exists());
        assert!(to.exists());
        Ok(())
    }
}
