//! use spkikit::error::KeyKitError;

use const_oid::ObjectIdentifier;
use thiserror::Error;

/// Message carried by every public-key decoding failure.
pub const DECODING_FAILED: &str = "X.509 public key decoding failed";

/// Represents errors that can occur in the SpkiKit library.
///
/// Decoding failures deliberately carry no detail: a caller probing malformed
/// keys learns only that decoding failed, never which step rejected the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyKitError {
    /// The key cannot be expressed as a SubjectPublicKeyInfo.
    #[error("Failed to encode data: {0}")]
    EncodingError(String),

    /// The input is not a loadable X.509 public key.
    #[error("{}", DECODING_FAILED)]
    DecodingError,

    /// The key source could not be read.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A broken internal invariant. Not triggerable by input data.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for KeyKitError {
    fn from(err: std::io::Error) -> Self {
        KeyKitError::IoError(err.to_string())
    }
}

/// Reason an algorithm adapter refused the parameters or key bits it was given.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct KeyRejected(pub String);

impl KeyRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl From<der::Error> for KeyRejected {
    fn from(err: der::Error) -> Self {
        KeyRejected(err.to_string())
    }
}

/// Detailed cause of a decoding failure.
///
/// Only ever logged; the public API collapses it into
/// [`KeyKitError::DecodingError`].
#[derive(Debug, Error)]
pub(crate) enum DecodeFailure {
    #[error("malformed SubjectPublicKeyInfo: {0}")]
    Asn1(#[from] der::Error),

    #[error("malformed PEM: {0}")]
    Pem(#[from] pem::PemError),

    #[error("unexpected PEM label {0:?}")]
    UnexpectedLabel(String),

    #[error("subject public key has unused bits")]
    UnusedBits,

    #[error("subject public key is empty")]
    EmptyKeyBits,

    #[error("unknown algorithm OID {0}")]
    UnknownOid(ObjectIdentifier),

    #[error("no key constructor registered for {0}")]
    NoConstructor(String),

    #[error("{0} keys do not support X.509 decoding")]
    NoDecoder(String),

    #[error("key rejected: {0}")]
    Rejected(#[from] KeyRejected),
}

impl From<DecodeFailure> for KeyKitError {
    fn from(cause: DecodeFailure) -> Self {
        tracing::debug!(%cause, "X.509 public key rejected");
        KeyKitError::DecodingError
    }
}
