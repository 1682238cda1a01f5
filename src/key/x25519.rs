use const_oid::db::rfc8410::ID_X_25519;
use x509_cert::spki::AlgorithmIdentifierOwned;

use super::{Capabilities, Capability, PublicKey, X509Encoder};
use crate::error::{KeyKitError, KeyRejected};

/// Registry name of the X25519 algorithm.
pub const ALGORITHM: &str = "X25519";

/// An X25519 key-agreement public key (RFC 8410): no parameters, 32 raw key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X25519Key(x25519_dalek::PublicKey);

impl X25519Key {
    pub fn new(public: x25519_dalek::PublicKey) -> Self {
        Self(public)
    }

    pub fn public_key(&self) -> &x25519_dalek::PublicKey {
        &self.0
    }
}

impl From<x25519_dalek::PublicKey> for X25519Key {
    fn from(public: x25519_dalek::PublicKey) -> Self {
        Self(public)
    }
}

impl PublicKey for X25519Key {
    fn algo_name(&self) -> &str {
        ALGORITHM
    }

    fn capabilities(&self) -> Capabilities {
        Capability::KeyAgreement.into()
    }

    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        Some(self)
    }
}

impl X509Encoder for X25519Key {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: ID_X_25519,
            parameters: None,
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        Ok(self.0.as_bytes().to_vec())
    }
}

/// Builds an [`X25519Key`] from SubjectPublicKeyInfo contents; parameters must be absent.
pub fn decode(
    algorithm: &AlgorithmIdentifierOwned,
    key_bits: &[u8],
) -> Result<Box<dyn PublicKey>, KeyRejected> {
    if algorithm.parameters.is_some() {
        return Err(KeyRejected::new("X25519 parameters must be absent"));
    }
    let bytes: [u8; 32] = key_bits
        .try_into()
        .map_err(|_| KeyRejected::new(format!("X25519 key is {} bytes", key_bits.len())))?;
    Ok(Box::new(X25519Key(x25519_dalek::PublicKey::from(bytes))))
}
