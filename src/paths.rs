//! On-disk naming convention for pipeline artifacts.
//!
//! For a directory `N` inside parent `P`, the intermediate blob lives at
//! `P/N.tar`, the ciphertext record at `P/N.ctar`, and decryption restores
//! the directory at `P/N`. Both pipeline entry points derive the same
//! [`Layout`] so the artifacts always line up.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::{ARCHIVE_EXTENSION, CIPHER_EXTENSION};
use crate::error::{Error, Result};

/// The three derived locations for one pipeline run.
pub struct Layout {
    /// Parent directory holding all artifacts.
    pub parent: PathBuf,

    /// Intermediate packed blob, `P/N.tar`.
    pub blob: PathBuf,

    /// Durable ciphertext record, `P/N.ctar`.
    pub record: PathBuf,

    /// The plaintext directory, `P/N`.
    pub dir: PathBuf,
}

impl Layout {
    /// Derives the layout from the directory to encrypt.
    pub fn for_directory(dir: &Path) -> Result<Self> {
        let name = dir
            .file_name()
            .ok_or_else(|| Error::Validation(format!("cannot derive an archive name from: {}", dir.display())))?
            .to_os_string();

        Ok(Self::build(parent_of(dir), name))
    }

    /// Derives the layout from the ciphertext record to decrypt.
    ///
    /// The directory name is recovered by stripping the cipher extension,
    /// which must be present.
    pub fn for_record(record: &Path) -> Result<Self> {
        if record.extension().and_then(|e| e.to_str()) != Some(CIPHER_EXTENSION) {
            return Err(Error::Validation(format!(
                "expected a .{CIPHER_EXTENSION} file: {}",
                record.display()
            )));
        }

        let name = record
            .file_stem()
            .ok_or_else(|| Error::Validation(format!("cannot derive a directory name from: {}", record.display())))?
            .to_os_string();

        Ok(Self::build(parent_of(record), name))
    }

    fn build(parent: PathBuf, name: OsString) -> Self {
        let with_extension = |ext: &str| {
            let mut file = name.clone();
            file.push(".");
            file.push(ext);
            parent.join(file)
        };

        Self {
            blob: with_extension(ARCHIVE_EXTENSION),
            record: with_extension(CIPHER_EXTENSION),
            dir: parent.join(&name),
            parent,
        }
    }
}

/// Parent of `path`, with the bare-filename case mapped to `.`.
fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_directory() {
        let layout = Layout::for_directory(Path::new("/data/photos")).unwrap();
        assert_eq!(layout.parent, Path::new("/data"));
        assert_eq!(layout.blob, Path::new("/data/photos.tar"));
        assert_eq!(layout.record, Path::new("/data/photos.ctar"));
        assert_eq!(layout.dir, Path::new("/data/photos"));
    }

    #[test]
    fn layout_for_directory_with_trailing_separator() {
        let layout = Layout::for_directory(Path::new("/data/photos/")).unwrap();
        assert_eq!(layout.record, Path::new("/data/photos.ctar"));
    }

    #[test]
    fn layout_for_bare_directory_name() {
        let layout = Layout::for_directory(Path::new("photos")).unwrap();
        assert_eq!(layout.parent, Path::new("."));
        assert_eq!(layout.blob, Path::new("./photos.tar"));
    }

    #[test]
    fn layout_for_record_strips_cipher_extension() {
        let layout = Layout::for_record(Path::new("/data/photos.ctar")).unwrap();
        assert_eq!(layout.blob, Path::new("/data/photos.tar"));
        assert_eq!(layout.dir, Path::new("/data/photos"));
    }

    #[test]
    fn layout_for_record_keeps_inner_dots() {
        let layout = Layout::for_record(Path::new("/data/my.photos.ctar")).unwrap();
        assert_eq!(layout.dir, Path::new("/data/my.photos"));
        assert_eq!(layout.blob, Path::new("/data/my.photos.tar"));
    }

    #[test]
    fn layout_for_record_rejects_other_extensions() {
        for path in ["/data/photos.tar", "/data/photos", "/data/photos.zip"] {
            let err = Layout::for_record(Path::new(path)).err().unwrap();
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[test]
    fn layout_rejects_rootless_paths() {
        assert!(matches!(Layout::for_directory(Path::new("/")), Err(Error::Validation(_))));
    }
}
