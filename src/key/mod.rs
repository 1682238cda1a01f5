pub mod ecdsa;
pub mod ed25519;
pub mod rsa;
pub mod x25519;

use std::fmt;

use der::flagset::{FlagSet, flags};
use der::{Any, Decode, Encode};
use x509_cert::spki::AlgorithmIdentifierOwned;

use crate::error::KeyKitError;

pub use self::ecdsa::EcdsaKey;
pub use self::ed25519::Ed25519Key;
pub use self::rsa::RsaKey;
pub use self::x25519::X25519Key;

flags! {
    /// Cryptographic operations a public key can take part in.
    pub enum Capability: u8 {
        /// Public-key encryption.
        Encrypting = 1 << 0,
        /// Key agreement (Diffie-Hellman style).
        KeyAgreement = 1 << 1,
        /// Signature verification where the message travels alongside the signature.
        VerifyingWithoutRecovery = 1 << 2,
        /// Signature verification that recovers the message from the signature.
        VerifyingWithRecovery = 1 << 3,
    }
}

/// The capability set a key variant declares.
pub type Capabilities = FlagSet<Capability>;

/// A public key of some algorithm.
///
/// Implementations declare their capabilities up front; nothing in this crate
/// inspects concrete key types at runtime.
pub trait PublicKey: fmt::Debug + Send + Sync {
    /// Algorithm name as known to the [`AlgorithmRegistry`](crate::registry::AlgorithmRegistry).
    fn algo_name(&self) -> &str;

    /// Operations this key supports.
    fn capabilities(&self) -> Capabilities;

    /// The key's SubjectPublicKeyInfo encoder, if it can be written as one.
    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        None
    }
}

/// Marshals a key into the two halves of a SubjectPublicKeyInfo.
pub trait X509Encoder {
    /// The `AlgorithmIdentifier`, including any algorithm parameters.
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError>;

    /// The raw contents of the `subjectPublicKey` BIT STRING.
    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError>;
}

/// Encodes a value as a standalone `ANY` suitable for algorithm parameters.
pub(crate) fn encode_any<T: Encode>(value: &T) -> der::Result<Any> {
    Any::from_der(&value.to_der()?)
}

pub(crate) fn encoding_error(err: impl fmt::Display) -> KeyKitError {
    KeyKitError::EncodingError(err.to_string())
}
