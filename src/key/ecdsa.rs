use const_oid::ObjectIdentifier;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, SECP_256_R_1, SECP_384_R_1, SECP_521_R_1};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use x509_cert::spki::AlgorithmIdentifierOwned;

use super::{Capabilities, Capability, PublicKey, X509Encoder, encode_any, encoding_error};
use crate::error::{KeyKitError, KeyRejected};

/// Registry name of the ECDSA algorithm.
pub const ALGORITHM: &str = "ECDSA";

/// An ECDSA public key on one of the NIST prime curves.
///
/// The algorithm parameters carry the named-curve OID and the key bits carry
/// the SEC1 point, written uncompressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
}

impl EcdsaKey {
    /// Named-curve OID of this key.
    pub fn curve(&self) -> ObjectIdentifier {
        match self {
            EcdsaKey::P256(_) => SECP_256_R_1,
            EcdsaKey::P384(_) => SECP_384_R_1,
            EcdsaKey::P521(_) => SECP_521_R_1,
        }
    }

    fn sec1_point(&self) -> Vec<u8> {
        match self {
            EcdsaKey::P256(key) => key.to_encoded_point(false).as_bytes().to_vec(),
            EcdsaKey::P384(key) => key.to_encoded_point(false).as_bytes().to_vec(),
            EcdsaKey::P521(key) => key.to_encoded_point(false).as_bytes().to_vec(),
        }
    }
}

impl From<p256::PublicKey> for EcdsaKey {
    fn from(key: p256::PublicKey) -> Self {
        EcdsaKey::P256(key)
    }
}

impl From<p384::PublicKey> for EcdsaKey {
    fn from(key: p384::PublicKey) -> Self {
        EcdsaKey::P384(key)
    }
}

impl From<p521::PublicKey> for EcdsaKey {
    fn from(key: p521::PublicKey) -> Self {
        EcdsaKey::P521(key)
    }
}

impl PublicKey for EcdsaKey {
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

impl X509Encoder for EcdsaKey {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: ID_EC_PUBLIC_KEY,
            parameters: Some(encode_any(&self.curve()).map_err(encoding_error)?),
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        Ok(self.sec1_point())
    }
}

/// Builds an [`EcdsaKey`] from SubjectPublicKeyInfo contents.
///
/// Only named curves are accepted; compressed and uncompressed points both decode.
pub fn decode(
    algorithm: &AlgorithmIdentifierOwned,
    key_bits: &[u8],
) -> Result<Box<dyn PublicKey>, KeyRejected> {
    let curve = algorithm
        .parameters
        .as_ref()
        .ok_or_else(|| KeyRejected::new("missing named curve"))?
        .decode_as::<ObjectIdentifier>()?;

    let point_error = |e: p256::elliptic_curve::Error| {
        KeyRejected::new(format!("invalid point on {curve}: {e}"))
    };
    let key = if curve == SECP_256_R_1 {
        EcdsaKey::P256(p256::PublicKey::from_sec1_bytes(key_bits).map_err(point_error)?)
    } else if curve == SECP_384_R_1 {
        EcdsaKey::P384(p384::PublicKey::from_sec1_bytes(key_bits).map_err(point_error)?)
    } else if curve == SECP_521_R_1 {
        EcdsaKey::P521(p521::PublicKey::from_sec1_bytes(key_bits).map_err(point_error)?)
    } else {
        return Err(KeyRejected::new(format!("unsupported curve {curve}")));
    };
    Ok(Box::new(key))
}
