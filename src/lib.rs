//! Cryptar - turn a directory into a password-protected encrypted file,
//! turn it back, and securely erase what should not linger on disk.
//!
//! The pipeline is: pack (tar) -> encrypt (AES-256-GCM, Argon2id-stretched
//! key) -> erase the intermediate blob, and its mirror image for decryption.
//! The ciphertext record is `nonce ‖ ciphertext ‖ tag` with nothing else
//! around it.

pub mod app;
pub mod archive;
pub mod config;
pub mod crypto;
pub mod eraser;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod secret;
pub mod ui;
