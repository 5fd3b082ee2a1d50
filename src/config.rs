//! Global configuration constants and per-invocation options.
//!
//! All cryptographic parameters and file-naming conventions live here so the
//! rest of the crate never hard-codes a size or an extension.

use crate::secret::Passphrase;

/// Extension of the durable encrypted output file.
pub const CIPHER_EXTENSION: &str = "ctar";

/// Extension of the intermediate packed blob.
///
/// The blob is a plain tar archive; it only ever exists between the pack and
/// erase-intermediate steps of a pipeline run.
pub const ARCHIVE_EXTENSION: &str = "tar";

/// Size of the AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the AES-GCM nonce in bytes (the standard 96-bit GCM nonce).
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes.
///
/// GCM is not length-expanding beyond this tag, so a record is always
/// exactly `NONCE_SIZE + plaintext length + TAG_SIZE` bytes.
pub const TAG_SIZE: usize = 16;

// === Argon2id key stretching parameters ===
// The derived key must be deterministic for a given passphrase, so the salt
// is a fixed domain-separation constant rather than a random per-record
// value. The cost parameters follow current interactive-use recommendations.

/// Argon2 time cost (number of passes over memory).
pub const ARGON_TIME: u32 = 3;

/// Argon2 memory cost in KiB (64 MiB).
pub const ARGON_MEMORY: u32 = 64 * 1024;

/// Argon2 parallelism (number of lanes).
pub const ARGON_THREADS: u32 = 4;

/// Fixed domain-separation salt for key stretching.
///
/// Deliberately constant: the record format carries no salt field, and the
/// contract is "same passphrase, same key material, always".
pub const KDF_SALT: &[u8] = b"cryptar/v1/key-stretch";

/// Immutable options for one pipeline invocation.
///
/// Constructed once from the parsed command line and passed by reference;
/// never mutated afterwards.
pub struct Options {
    /// The user-supplied passphrase. Never persisted.
    pub passphrase: Passphrase,

    /// Auto-approve every confirmation prompt.
    pub non_interactive: bool,

    /// Securely erase the source (directory or `.ctar` file) on success.
    pub erase_source: bool,
}
