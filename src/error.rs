//! Error types for all cryptar operations.
//!
//! Every component signals failure to its caller; nothing in the library
//! terminates the process. The single place that maps an [`Error`] to a
//! process exit status is `main`.

use std::path::PathBuf;

use thiserror::Error;

/// The error type for all cryptar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing arguments, or conflicting pre-existing paths.
    ///
    /// Always raised before any side effect takes place.
    #[error("{0}")]
    Validation(String),

    /// Read/write/stat failure on the packer, record, or archive targets.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The AEAD engine was handed key material of the wrong length.
    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The authentication tag did not verify.
    ///
    /// Wrong password, corrupted ciphertext, and truncation are deliberately
    /// indistinguishable; AEAD provides no way to tell them apart.
    #[error("decryption failed: wrong password or corrupted data")]
    AuthenticationFailed,

    /// The ciphertext record is shorter than the nonce prefix.
    #[error("malformed record: {0} bytes is shorter than the nonce")]
    MalformedRecord(usize),

    /// The OS random source could not supply nonce bytes. Fatal.
    #[error("system random source exhausted: {0}")]
    RandomSourceExhausted(String),

    /// Argon2 rejected its parameters or failed to derive key material.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Cipher-level failure outside of authentication.
    #[error("cipher error: {0}")]
    Crypto(String),

    /// Secure erasure did not complete.
    ///
    /// Surfaced distinctly from [`Error::Io`] because it means the
    /// destructive-cleanup guarantee was not met for `path`.
    #[error("secure wipe failed for {path}: {source}")]
    Wipe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive confirmation could not be collected.
    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl Error {
    /// Process exit status for this error class.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Prompt(_) => 2,
            Self::Io(_) => 3,
            Self::InvalidKeyLength(_)
            | Self::AuthenticationFailed
            | Self::MalformedRecord(_)
            | Self::RandomSourceExhausted(_)
            | Self::KeyDerivation(_)
            | Self::Crypto(_) => 4,
            Self::Wipe { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
