use secrecy::{ExposeSecret, SecretString};

/// A user-supplied passphrase.
///
/// Backed by [`SecretString`] so the bytes are zeroized on drop and never
/// appear in debug output. The passphrase is only exposed at the key
/// stretching boundary.
pub struct Passphrase {
    inner: SecretString,
}

impl Passphrase {
    pub fn new(passphrase: &str) -> Self {
        Self { inner: SecretString::from(passphrase.to_owned()) }
    }

    pub fn from_string(passphrase: String) -> Self {
        Self { inner: SecretString::from(passphrase) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl From<SecretString> for Passphrase {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Passphrase([redacted])")
    }
}
