//! Short, stable key identifiers.
//!
//! The identifier is the first eight bytes of a SHA-1 digest over the
//! algorithm name, the DER-encoded algorithm parameters and the raw key bits,
//! read as a big-endian integer. It is meant for de-duplication and lookup,
//! not for trust decisions.

use der::Encode;
use sha1::{Digest, Sha1};

use crate::error::KeyKitError;
use crate::key::PublicKey;

pub type KeyId = u64;

const KEY_ID_LEN: usize = 8;

/// Computes the identifier of `key`.
///
/// # Errors
/// [`KeyKitError::InternalError`] if the key cannot be X.509 encoded; asking
/// such a key for an identifier is a programming error.
/// [`KeyKitError::EncodingError`] if the key's encoder fails.
pub fn key_id(key: &dyn PublicKey) -> Result<KeyId, KeyKitError> {
    let Some(encoder) = key.x509_encoder() else {
        tracing::error!(
            algorithm = key.algo_name(),
            "key id requested for a key with no X.509 encoder"
        );
        return Err(KeyKitError::InternalError(format!(
            "key_id: no X.509 encoder for {} keys",
            key.algo_name()
        )));
    };

    let parameters = match encoder.algorithm_identifier()?.parameters {
        Some(params) => params
            .to_der()
            .map_err(|e| KeyKitError::EncodingError(e.to_string()))?,
        None => Vec::new(),
    };

    let mut hasher = Sha1::new();
    hasher.update(key.algo_name().as_bytes());
    hasher.update(&parameters);
    hasher.update(encoder.key_bits()?);
    let digest = hasher.finalize();

    let prefix: [u8; KEY_ID_LEN] = digest
        .get(..KEY_ID_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            tracing::error!(len = digest.len(), "digest shorter than a key id");
            KeyKitError::InternalError("key_id: incorrect digest output size".to_string())
        })?;
    Ok(KeyId::from_be_bytes(prefix))
}
