//! Pipeline orchestration for the three commands.
//!
//! Each entry point runs one state sequence to completion and propagates the
//! first failure to the caller; nothing here retries, and nothing rolls back
//! a destructive step that already succeeded. Validation always happens
//! before the first side effect.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::archive;
use crate::config::Options;
use crate::crypto::{Cipher, stretch_key};
use crate::eraser;
use crate::error::{Error, Result};
use crate::paths::Layout;
use crate::ui::{display, prompt};

/// Encrypts a directory into a ciphertext record.
///
/// `ValidateInput → Pack → DeriveKey → Encrypt → WriteOutput →
/// EraseIntermediate → [optional] EraseSource`.
pub fn encrypt(target: &Path, opts: &Options) -> Result<()> {
    if !target.is_dir() {
        return Err(Error::Validation(format!(
            "the provided path does not exist or is not a directory: {}",
            target.display()
        )));
    }
    if opts.passphrase.is_empty() {
        return Err(Error::Validation("passphrase cannot be empty".into()));
    }

    let layout = Layout::for_directory(target)?;
    ensure_absent(&layout.blob)?;
    ensure_absent(&layout.record)?;

    archive::pack(target, &layout.blob)?;

    // From here the packed plaintext exists on disk; a crypto failure must
    // not leave it behind.
    let record = match seal_blob(&layout.blob, opts) {
        Ok(record) => record,
        Err(err) => {
            best_effort_wipe(&layout.blob);
            return Err(err);
        }
    };

    fs::write(&layout.record, &record)?;
    debug!(record = %layout.record.display(), bytes = record.len(), "wrote ciphertext record");

    eraser::wipe_file(&layout.blob)?;

    if opts.erase_source
        && prompt::confirm(
            &format!("WARN: the directory {} will be SECURELY ERASED. Continue?", target.display()),
            opts.non_interactive,
        )?
    {
        display::show_wipe_limitation();
        eraser::wipe_dir(target)?;
        display::show_source_erased(target);
    }

    Ok(())
}

/// Decrypts a ciphertext record back into the original directory.
///
/// `ValidateInput → DeriveKey → ReadInput → Decrypt → WriteIntermediate →
/// Unpack → EraseIntermediate → [optional] EraseSource`.
pub fn decrypt(target: &Path, opts: &Options) -> Result<()> {
    if !target.is_file() {
        return Err(Error::Validation(format!(
            "the provided path does not exist or is not a file: {}",
            target.display()
        )));
    }
    if opts.passphrase.is_empty() {
        return Err(Error::Validation("passphrase cannot be empty".into()));
    }

    let layout = Layout::for_record(target)?;
    ensure_absent(&layout.blob)?;
    ensure_absent(&layout.dir)?;

    let key = stretch_key(&opts.passphrase)?;
    let cipher = Cipher::new(&key)?;

    let record = fs::read(target)?;
    let plaintext = cipher.open(&record)?;
    debug!(bytes = plaintext.len(), "record authenticated");

    fs::write(&layout.blob, &plaintext)?;

    if let Err(err) = archive::unpack(&layout.blob, &layout.parent) {
        best_effort_wipe(&layout.blob);
        return Err(err);
    }

    eraser::wipe_file(&layout.blob)?;

    if opts.erase_source
        && prompt::confirm(
            &format!("WARN: the file {} will be SECURELY ERASED. Continue?", target.display()),
            opts.non_interactive,
        )?
    {
        display::show_wipe_limitation();
        eraser::wipe_file(target)?;
        display::show_source_erased(target);
    }

    Ok(())
}

/// Securely erases a file or directory tree.
///
/// Returns `Ok(false)` when the user declines the confirmation; nothing is
/// touched in that case.
pub fn wipe(target: &Path, non_interactive: bool) -> Result<bool> {
    if fs::symlink_metadata(target).is_err() {
        return Err(Error::Validation(format!("the provided path does not exist: {}", target.display())));
    }

    if !prompt::confirm(
        &format!("WARN: {} will be SECURELY ERASED. Continue?", target.display()),
        non_interactive,
    )? {
        return Ok(false);
    }

    display::show_wipe_limitation();
    eraser::wipe_path(target)?;
    Ok(true)
}

/// Derives the key, builds the engine, and seals the packed blob.
fn seal_blob(blob: &Path, opts: &Options) -> Result<Vec<u8>> {
    let key = stretch_key(&opts.passphrase)?;
    let cipher = Cipher::new(&key)?;
    let plaintext = fs::read(blob)?;
    cipher.seal(&plaintext)
}

/// Fails validation if `path` already exists in any form.
fn ensure_absent(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(Error::Validation(format!("refusing to overwrite existing path: {}", path.display())));
    }
    Ok(())
}

/// Cleanup on an already-failing path; the original error wins.
fn best_effort_wipe(blob: &Path) {
    if let Err(err) = eraser::wipe_file(blob) {
        warn!(%err, "could not wipe intermediate blob after failure");
    }
}
