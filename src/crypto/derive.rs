//! Key stretching with Argon2id.
//!
//! Expands a passphrase into exactly [`KEY_SIZE`] bytes of key material.
//! The contract is strictly deterministic: same passphrase, same key,
//! always. The record format carries no salt field, so derivation uses the
//! fixed [`KDF_SALT`] domain-separation constant instead of a per-record
//! random salt. Memory-hardness is the whole point here; brute force against
//! a weak passphrase still wins, but each guess now costs 64 MiB and three
//! passes instead of a string copy.

use argon2::Algorithm::Argon2id;
use argon2::Version::V0x13;
use argon2::{Argon2, Params};

use crate::config::{ARGON_MEMORY, ARGON_THREADS, ARGON_TIME, KDF_SALT, KEY_SIZE};
use crate::error::{Error, Result};
use crate::secret::Passphrase;

/// Derives [`KEY_SIZE`] bytes of key material from a passphrase.
///
/// # Errors
///
/// Returns [`Error::Validation`] for an empty passphrase (callers are
/// expected to reject it earlier; this is the backstop) and
/// [`Error::KeyDerivation`] if Argon2 rejects its parameters or fails.
pub fn stretch_key(passphrase: &Passphrase) -> Result<[u8; KEY_SIZE]> {
    if passphrase.is_empty() {
        return Err(Error::Validation("passphrase cannot be empty".into()));
    }

    let params = Params::new(ARGON_MEMORY, ARGON_TIME, ARGON_THREADS, Some(KEY_SIZE))
        .map_err(|e| Error::KeyDerivation(format!("invalid argon2 parameters: {e}")))?;
    let argon2 = Argon2::new(Argon2id, V0x13, params);

    let mut key = [0u8; KEY_SIZE];
    argon2
        .hash_password_into(passphrase.expose_secret().as_bytes(), KDF_SALT, &mut key)
        .map_err(|e| Error::KeyDerivation(e.to_string()))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_is_deterministic() {
        let key1 = stretch_key(&Passphrase::new("pw")).unwrap();
        let key2 = stretch_key(&Passphrase::new("pw")).unwrap();
        assert_eq!(key1, key2);
    }

    #[test]
    fn stretch_always_yields_key_size_bytes() {
        for passphrase in ["x", "pw", "a much longer passphrase than thirty-two bytes"] {
            let key = stretch_key(&Passphrase::new(passphrase)).unwrap();
            assert_eq!(key.len(), KEY_SIZE);
        }
    }

    #[test]
    fn different_passphrases_yield_different_keys() {
        let key1 = stretch_key(&Passphrase::new("pw1")).unwrap();
        let key2 = stretch_key(&Passphrase::new("pw2")).unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn empty_passphrase_is_rejected() {
        let err = stretch_key(&Passphrase::new("")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
