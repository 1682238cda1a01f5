use ::rsa::pkcs1::EncodeRsaPublicKey;
use ::rsa::pkcs1::RsaPublicKey as Pkcs1PublicKey;
use ::rsa::{BigUint, RsaPublicKey};
use const_oid::db::rfc5912::RSA_ENCRYPTION;
use der::Decode;
use der::asn1::Null;
use x509_cert::spki::AlgorithmIdentifierOwned;

use super::{Capabilities, Capability, PublicKey, X509Encoder, encode_any, encoding_error};
use crate::error::{KeyKitError, KeyRejected};

/// Registry name of the RSA algorithm.
pub const ALGORITHM: &str = "RSA";

/// Largest modulus, in bits, accepted on decode.
pub const MAX_MODULUS_BITS: usize = 16384;

/// An RSA public key. Key bits are a PKCS#1 `RSAPublicKey`; parameters are NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey(RsaPublicKey);

impl RsaKey {
    pub fn new(public: RsaPublicKey) -> Self {
        Self(public)
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl From<RsaPublicKey> for RsaKey {
    fn from(public: RsaPublicKey) -> Self {
        Self(public)
    }
}

impl PublicKey for RsaKey {
    fn algo_name(&self) -> &str {
        ALGORITHM
    }

    fn capabilities(&self) -> Capabilities {
        Capability::Encrypting | Capability::VerifyingWithoutRecovery
    }

    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        Some(self)
    }
}

impl X509Encoder for RsaKey {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION,
            parameters: Some(encode_any(&Null).map_err(encoding_error)?),
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        let doc = self.0.to_pkcs1_der().map_err(encoding_error)?;
        Ok(doc.as_bytes().to_vec())
    }
}

/// Builds an [`RsaKey`] from SubjectPublicKeyInfo contents.
///
/// Absent parameters are tolerated; present ones must be NULL. Moduli up to
/// [`MAX_MODULUS_BITS`] are accepted.
pub fn decode(
    algorithm: &AlgorithmIdentifierOwned,
    key_bits: &[u8],
) -> Result<Box<dyn PublicKey>, KeyRejected> {
    if let Some(params) = &algorithm.parameters {
        params.decode_as::<Null>()?;
    }
    let pkcs1 = Pkcs1PublicKey::from_der(key_bits)?;
    let public = RsaPublicKey::new_with_max_size(
        BigUint::from_bytes_be(pkcs1.modulus.as_bytes()),
        BigUint::from_bytes_be(pkcs1.public_exponent.as_bytes()),
        MAX_MODULUS_BITS,
    )
    .map_err(|e| KeyRejected::new(format!("invalid RSA public key: {e}")))?;
    Ok(Box::new(RsaKey(public)))
}
