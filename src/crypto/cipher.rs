//! AES-256-GCM authenticated encryption over whole ciphertext records.
//!
//! A record is `nonce ‖ ciphertext ‖ tag`: the 12-byte nonce is stored in
//! the clear as a prefix, the 16-byte tag is appended by GCM. No associated
//! data is used. The nonce is drawn fresh from the OS random source for
//! every seal; it is never reused under the same key.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::TryRng;
use rand::rngs::SysRng;

use crate::config::NONCE_SIZE;
use crate::error::{Error, Result};

/// Authenticated-encryption engine for one operation.
///
/// Owns the key material for its lifetime; the caller discards the engine
/// (and with it the key schedule) as soon as the operation completes.
pub struct Cipher {
    inner: Aes256Gcm,
}

impl Cipher {
    /// Builds an engine from exactly [`KEY_SIZE`](crate::config::KEY_SIZE)
    /// bytes of key material.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKeyLength`] for any other length.
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = Aes256Gcm::new_from_slice(key).map_err(|_| Error::InvalidKeyLength(key.len()))?;
        Ok(Self { inner })
    }

    /// Encrypts `plaintext` into a full record: `nonce ‖ ciphertext ‖ tag`.
    ///
    /// # Errors
    ///
    /// [`Error::RandomSourceExhausted`] if the OS random source cannot
    /// supply nonce bytes; [`Error::Crypto`] on cipher failure.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce = [0u8; NONCE_SIZE];
        SysRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| Error::RandomSourceExhausted(e.to_string()))?;

        let mut record = self
            .inner
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| Error::Crypto(format!("aes-gcm encryption failed: {e}")))?;

        record.splice(0..0, nonce.iter().copied());
        Ok(record)
    }

    /// Verifies and decrypts a full record produced by [`Cipher::seal`].
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRecord`] if the record is shorter than the nonce;
    /// [`Error::AuthenticationFailed`] if the tag does not verify. The
    /// latter covers wrong password, tampering, and truncation alike.
    pub fn open(&self, record: &[u8]) -> Result<Vec<u8>> {
        if record.len() < NONCE_SIZE {
            return Err(Error::MalformedRecord(record.len()));
        }

        let (nonce, data) = record.split_at(NONCE_SIZE);
        self.inner
            .decrypt(Nonce::from_slice(nonce), data)
            .map_err(|_| Error::AuthenticationFailed)
    }
}
