//! Secure erasure of files and directory trees.
//!
//! A file is destroyed by overwriting its entire current length with zero
//! bytes in one logical write, syncing, and then unlinking it. A directory
//! is destroyed by wiping every regular file underneath it before removing
//! the tree. The overwrite is single-pass: it does not defeat copy-on-write
//! filesystems, journaling, snapshots, or flash wear-leveling, and the
//! user-facing output says so.
//!
//! Every failure surfaces as [`Error::Wipe`] with the offending path, so the
//! caller can tell a broken destructive-cleanup guarantee apart from
//! ordinary I/O trouble.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

fn wipe_error(path: &Path, source: io::Error) -> Error {
    Error::Wipe { path: path.to_path_buf(), source }
}

/// Overwrites a regular file with zeros, then removes it.
///
/// The zero buffer covers the full original length and is written in one
/// call, so a failure leaves the file either fully intact or fully
/// overwritten, never truncated halfway. If the overwrite succeeds but the
/// removal fails, the reported error concerns the directory entry only; the
/// content is already gone.
pub fn wipe_file(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new().write(true).open(path).map_err(|e| wipe_error(path, e))?;

    let len = file.metadata().map_err(|e| wipe_error(path, e))?.len();
    let len = usize::try_from(len)
        .map_err(|_| wipe_error(path, io::Error::other("file too large to wipe in one pass")))?;

    let zeros = vec![0u8; len];
    file.write_all(&zeros).map_err(|e| wipe_error(path, e))?;
    file.sync_all().map_err(|e| wipe_error(path, e))?;
    drop(file);

    debug!(path = %path.display(), bytes = len, "overwrote file content");
    fs::remove_file(path).map_err(|e| wipe_error(path, e))
}

/// Recursively wipes every regular file under `path`, then removes the tree.
///
/// Sibling order does not matter; the first failure aborts the walk and the
/// tree is left partially wiped but never partially truncated per file.
pub fn wipe_dir(path: &Path) -> Result<()> {
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| {
            wipe_error(path, e.into_io_error().unwrap_or_else(|| io::Error::other("directory walk failed")))
        })?;

        if entry.file_type().is_file() {
            wipe_file(entry.path())?;
        }
    }

    debug!(path = %path.display(), "removing directory tree");
    fs::remove_dir_all(path).map_err(|e| wipe_error(path, e))
}

/// Dispatches to [`wipe_file`] or [`wipe_dir`] based on what `path` is.
pub fn wipe_path(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(|e| wipe_error(path, e))?;
    if meta.is_dir() { wipe_dir(path) } else { wipe_file(path) }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn wipe_file_removes_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("secret.txt");
        fs::write(&target, b"very secret content").unwrap();

        wipe_file(&target).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn wipe_file_zeroes_content_before_unlink() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("secret.txt");
        let content = b"very secret content";
        fs::write(&target, content).unwrap();

        // A hard link shares the inode, so it survives the unlink and
        // exposes whatever bytes the overwrite left behind.
        let witness = dir.path().join("witness");
        fs::hard_link(&target, &witness).unwrap();

        wipe_file(&target).unwrap();
        assert!(!target.exists());

        let remains = fs::read(&witness).unwrap();
        assert_eq!(remains.len(), content.len());
        assert!(remains.iter().all(|&b| b == 0), "original content survived the overwrite");
    }

    #[test]
    fn wipe_file_missing_target_is_wipe_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = wipe_file(&missing).unwrap_err();
        assert!(matches!(err, Error::Wipe { path, .. } if path == missing));
    }

    #[test]
    fn wipe_dir_removes_whole_tree() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("tree");
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("top.txt"), b"top").unwrap();
        fs::write(root.join("a/mid.txt"), b"mid").unwrap();
        fs::write(root.join("a/b/leaf.txt"), b"leaf").unwrap();

        wipe_dir(&root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn wipe_path_dispatches_on_target_type() {
        let dir = tempdir().unwrap();

        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();
        wipe_path(&file).unwrap();
        assert!(!file.exists());

        let tree = dir.path().join("d");
        fs::create_dir(&tree).unwrap();
        fs::write(tree.join("f"), b"x").unwrap();
        wipe_path(&tree).unwrap();
        assert!(!tree.exists());
    }

    #[test]
    fn wipe_empty_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("empty");
        fs::write(&target, b"").unwrap();

        wipe_file(&target).unwrap();
        assert!(!target.exists());
    }
}
