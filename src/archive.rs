//! The packer collaborator: directory to single blob and back.
//!
//! The pipeline treats the blob as an opaque byte sequence; the container
//! format (plain tar) is an implementation detail of this module. Entries
//! are rooted at the directory name so unpacking into the parent recreates
//! the original directory.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tar::{Archive, Builder};
use tracing::debug;

use crate::error::{Error, Result};

/// Packs `src_dir` into a tar blob at `blob_path`.
///
/// The blob is flushed and fsynced before returning so a later erase step
/// sees its final size.
pub fn pack(src_dir: &Path, blob_path: &Path) -> Result<()> {
    let root = src_dir
        .file_name()
        .ok_or_else(|| Error::Validation(format!("cannot derive an archive root from: {}", src_dir.display())))?;

    let file = File::create(blob_path)?;
    let mut builder = Builder::new(BufWriter::new(file));
    builder.append_dir_all(root, src_dir)?;

    let mut writer = builder.into_inner()?;
    writer.flush()?;
    writer.into_inner().map_err(std::io::IntoInnerError::into_error)?.sync_all()?;

    debug!(blob = %blob_path.display(), "packed directory");
    Ok(())
}

/// Unpacks the blob at `blob_path` into `dest_parent`.
///
/// Recreates the directory the blob was packed from as a child of
/// `dest_parent`.
pub fn unpack(blob_path: &Path, dest_parent: &Path) -> Result<()> {
    let file = File::open(blob_path)?;
    let mut archive = Archive::new(BufReader::new(file));
    archive.unpack(dest_parent)?;

    debug!(dest = %dest_parent.display(), "unpacked blob");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn pack_unpack_roundtrip() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("docs");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.txt"), b"hello").unwrap();
        fs::write(src.join("nested/b.bin"), [0u8, 1, 2, 3]).unwrap();

        let blob = dir.path().join("docs.tar");
        pack(&src, &blob).unwrap();
        assert!(blob.is_file());

        let restore = tempdir().unwrap();
        unpack(&blob, restore.path()).unwrap();

        let restored = restore.path().join("docs");
        assert_eq!(fs::read(restored.join("a.txt")).unwrap(), b"hello");
        assert_eq!(fs::read(restored.join("nested/b.bin")).unwrap(), [0u8, 1, 2, 3]);
    }

    #[test]
    fn pack_empty_directory() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty");
        fs::create_dir(&src).unwrap();

        let blob = dir.path().join("empty.tar");
        pack(&src, &blob).unwrap();

        let restore = tempdir().unwrap();
        unpack(&blob, restore.path()).unwrap();
        assert!(restore.path().join("empty").is_dir());
    }

    #[test]
    fn unpack_missing_blob_is_io_error() {
        let dir = tempdir().unwrap();
        let err = unpack(&dir.path().join("missing.tar"), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
