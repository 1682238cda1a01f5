use const_oid::db::rfc8410::ID_ED_25519;
use ed25519_dalek::{PUBLIC_KEY_LENGTH, VerifyingKey};
use x509_cert::spki::AlgorithmIdentifierOwned;

use super::{Capabilities, Capability, PublicKey, X509Encoder};
use crate::error::{KeyKitError, KeyRejected};

/// Registry name of the Ed25519 algorithm.
pub const ALGORITHM: &str = "Ed25519";

/// An Ed25519 verifying key (RFC 8410): no parameters, 32 raw key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Key(VerifyingKey);

impl Ed25519Key {
    pub fn new(verifying_key: VerifyingKey) -> Self {
        Self(verifying_key)
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for Ed25519Key {
    fn from(verifying_key: VerifyingKey) -> Self {
        Self(verifying_key)
    }
}

impl PublicKey for Ed25519Key {
    fn algo_name(&self) -> &str {
        ALGORITHM
    }

    fn capabilities(&self) -> Capabilities {
        Capability::VerifyingWithoutRecovery.into()
    }

    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        Some(self)
    }
}

impl X509Encoder for Ed25519Key {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: ID_ED_25519,
            parameters: None,
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        Ok(self.0.to_bytes().to_vec())
    }
}

/// Builds an [`Ed25519Key`] from SubjectPublicKeyInfo contents; parameters must be absent.
pub fn decode(
    algorithm: &AlgorithmIdentifierOwned,
    key_bits: &[u8],
) -> Result<Box<dyn PublicKey>, KeyRejected> {
    if algorithm.parameters.is_some() {
        return Err(KeyRejected::new("Ed25519 parameters must be absent"));
    }
    let bytes: [u8; PUBLIC_KEY_LENGTH] = key_bits
        .try_into()
        .map_err(|_| KeyRejected::new(format!("Ed25519 key is {} bytes", key_bits.len())))?;
    let verifying_key = VerifyingKey::from_bytes(&bytes)
        .map_err(|e| KeyRejected::new(format!("invalid Ed25519 key: {e}")))?;
    Ok(Box::new(Ed25519Key(verifying_key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::encode_any;

    // RFC 8410, section 10.1.
    const RFC8410_KEY: [u8; 32] = [
        0x19, 0xbf, 0x44, 0x09, 0x69, 0x84, 0xcd, 0xfe, 0x85, 0x41, 0xba, 0xc1, 0x67, 0xdc, 0x3b,
        0x96, 0xc8, 0x50, 0x86, 0xaa, 0x30, 0xb6, 0xb6, 0xcb, 0x0c, 0x5c, 0x38, 0xad, 0x70, 0x31,
        0x66, 0xe1,
    ];

    fn algorithm() -> AlgorithmIdentifierOwned {
        AlgorithmIdentifierOwned {
            oid: ID_ED_25519,
            parameters: None,
        }
    }

    #[test]
    fn test_ed25519_decode_rfc8410_key() {
        let key = decode(&algorithm(), &RFC8410_KEY).unwrap();
        assert_eq!(key.algo_name(), "Ed25519");
        assert_eq!(key.x509_encoder().unwrap().key_bits().unwrap(), RFC8410_KEY);
    }

    #[test]
    fn test_ed25519_rejects_wrong_length() {
        assert!(decode(&algorithm(), &RFC8410_KEY[..31]).is_err());
    }

    #[test]
    fn test_ed25519_rejects_parameters() {
        let with_params = AlgorithmIdentifierOwned {
            oid: ID_ED_25519,
            parameters: Some(encode_any(&der::asn1::Null).unwrap()),
        };
        assert!(decode(&with_params, &RFC8410_KEY).is_err());
    }
}
