//! Cryptographic modules for cryptar.

pub mod cipher;
pub mod derive;

pub use cipher::Cipher;
pub use derive::stretch_key;
