//! SubjectPublicKeyInfo encoding and decoding.
//!
//! Keys are written as DER or PEM (`PUBLIC KEY` label) and read back from either
//! form; the input format is detected from the bytes themselves.
//!
//! ```
//! use spkikit::key::PublicKey;
//! use spkikit::x509;
//!
//! # fn main() -> Result<(), spkikit::error::KeyKitError> {
//! let pem = "-----BEGIN PUBLIC KEY-----\n\
//!            MCowBQYDK2VwAyEAGb9ECWmEzf6FQbrBZ9w7lshQhqowtrbLDFw4rXAxZuE=\n\
//!            -----END PUBLIC KEY-----\n";
//! let key = x509::load_key(pem.as_bytes())?;
//! assert_eq!(key.algo_name(), "Ed25519");
//! assert_eq!(x509::to_pem(key.as_ref())?, pem);
//! # Ok(())
//! # }
//! ```

use std::io::Read;
use std::path::Path;

use der::asn1::BitString;
use der::{Decode, Encode, Tag};
use x509_cert::spki::SubjectPublicKeyInfoOwned;

use crate::error::{DecodeFailure, KeyKitError};
use crate::key::{PublicKey, encoding_error};
use crate::pem_utils::{der_to_pem, looks_like_pem, pem_to_der};
use crate::registry::AlgorithmRegistry;

pub type Result<T> = std::result::Result<T, KeyKitError>;

/// PEM label of a SubjectPublicKeyInfo.
pub const PEM_LABEL: &str = "PUBLIC KEY";

/// Output form of [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum X509Encoding {
    /// Raw DER bytes.
    #[default]
    Der,
    /// DER wrapped in `-----BEGIN PUBLIC KEY-----` framing.
    Pem,
}

/// Builds the SubjectPublicKeyInfo of `key`.
///
/// # Errors
/// [`KeyKitError::EncodingError`] if the key has no X.509 encoder or the encoder fails.
pub fn subject_public_key_info(key: &dyn PublicKey) -> Result<SubjectPublicKeyInfoOwned> {
    let encoder = key.x509_encoder().ok_or_else(|| {
        KeyKitError::EncodingError(format!(
            "{} keys do not support X.509 encoding",
            key.algo_name()
        ))
    })?;

    let algorithm = encoder.algorithm_identifier()?;
    let key_bits = encoder.key_bits()?;
    Ok(SubjectPublicKeyInfoOwned {
        algorithm,
        subject_public_key: BitString::from_bytes(&key_bits).map_err(encoding_error)?,
    })
}

/// Encodes `key` as a SubjectPublicKeyInfo in the requested form.
pub fn encode(key: &dyn PublicKey, encoding: X509Encoding) -> Result<Vec<u8>> {
    let der = subject_public_key_info(key)?
        .to_der()
        .map_err(encoding_error)?;
    tracing::trace!(algorithm = key.algo_name(), ?encoding, "encoded X.509 public key");

    Ok(match encoding {
        X509Encoding::Der => der,
        X509Encoding::Pem => der_to_pem(&der, PEM_LABEL).into_bytes(),
    })
}

/// Encodes `key` into DER format.
pub fn to_der(key: &dyn PublicKey) -> Result<Vec<u8>> {
    encode(key, X509Encoding::Der)
}

/// Encodes `key` into PEM format.
pub fn to_pem(key: &dyn PublicKey) -> Result<String> {
    Ok(der_to_pem(&to_der(key)?, PEM_LABEL))
}

/// Loads public keys against a particular [`AlgorithmRegistry`].
///
/// Every load failure is reported as [`KeyKitError::DecodingError`] with the
/// same message; the specific cause is only logged at `debug` level.
/// Key bit strings must be octet aligned: non-zero unused bits are rejected.
#[derive(Debug, Clone, Copy)]
pub struct X509Codec<'r> {
    registry: &'r AlgorithmRegistry,
}

impl Default for X509Codec<'static> {
    fn default() -> Self {
        Self::new(AlgorithmRegistry::standard())
    }
}

impl<'r> X509Codec<'r> {
    pub fn new(registry: &'r AlgorithmRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r AlgorithmRegistry {
        self.registry
    }

    /// Loads a key from DER or PEM bytes.
    pub fn load_key(&self, source: &[u8]) -> Result<Box<dyn PublicKey>> {
        let key = self.decode(source)?;
        tracing::trace!(algorithm = key.algo_name(), "loaded X.509 public key");
        Ok(key)
    }

    /// Reads `reader` to the end and loads the key it holds.
    ///
    /// # Errors
    /// [`KeyKitError::IoError`] if reading fails, otherwise as [`X509Codec::load_key`].
    pub fn load_key_from_reader(&self, mut reader: impl Read) -> Result<Box<dyn PublicKey>> {
        let mut source = Vec::new();
        reader.read_to_end(&mut source)?;
        self.load_key(&source)
    }

    /// Loads the key stored in the file at `path`.
    pub fn load_key_from_file(&self, path: impl AsRef<Path>) -> Result<Box<dyn PublicKey>> {
        let source = std::fs::read(path)?;
        self.load_key(&source)
    }

    /// Builds a key from an already parsed SubjectPublicKeyInfo.
    pub fn from_spki(&self, spki: &SubjectPublicKeyInfoOwned) -> Result<Box<dyn PublicKey>> {
        Ok(self.construct(spki)?)
    }

    /// Copies `key` by writing it out as DER and loading the result.
    ///
    /// The copy holds exactly what any reader of the serialized key would see.
    pub fn copy_key(&self, key: &dyn PublicKey) -> Result<Box<dyn PublicKey>> {
        let der = to_der(key)?;
        self.load_key(&der)
    }

    fn decode(&self, source: &[u8]) -> std::result::Result<Box<dyn PublicKey>, DecodeFailure> {
        let spki = if looks_like_der(source) {
            SubjectPublicKeyInfoOwned::from_der(source)?
        } else {
            let der = pem_to_der(source, PEM_LABEL)?;
            SubjectPublicKeyInfoOwned::from_der(&der)?
        };
        self.construct(&spki)
    }

    fn construct(
        &self,
        spki: &SubjectPublicKeyInfoOwned,
    ) -> std::result::Result<Box<dyn PublicKey>, DecodeFailure> {
        let key_bits = spki
            .subject_public_key
            .as_bytes()
            .ok_or(DecodeFailure::UnusedBits)?;
        if key_bits.is_empty() {
            return Err(DecodeFailure::EmptyKeyBits);
        }

        let oid = spki.algorithm.oid;
        let name = self
            .registry
            .oid_to_name(&oid)
            .ok_or(DecodeFailure::UnknownOid(oid))?;
        let constructor = self
            .registry
            .constructor(name)
            .ok_or_else(|| DecodeFailure::NoConstructor(name.to_string()))?;
        let decoder = constructor
            .decoder
            .ok_or_else(|| DecodeFailure::NoDecoder(name.to_string()))?;

        Ok(decoder(&spki.algorithm, key_bits)?)
    }
}

/// Binary input starts with a SEQUENCE and carries no PEM header.
fn looks_like_der(source: &[u8]) -> bool {
    source.first() == Some(&u8::from(Tag::Sequence)) && !looks_like_pem(source)
}

/// Loads a key from DER or PEM bytes using the standard registry.
pub fn load_key(source: &[u8]) -> Result<Box<dyn PublicKey>> {
    X509Codec::default().load_key(source)
}

/// Loads a key from a reader using the standard registry.
pub fn load_key_from_reader(reader: impl Read) -> Result<Box<dyn PublicKey>> {
    X509Codec::default().load_key_from_reader(reader)
}

/// Loads a key from a file using the standard registry.
pub fn load_key_from_file(path: impl AsRef<Path>) -> Result<Box<dyn PublicKey>> {
    X509Codec::default().load_key_from_file(path)
}

/// Builds a key from a parsed SubjectPublicKeyInfo using the standard registry.
pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Box<dyn PublicKey>> {
    X509Codec::default().from_spki(spki)
}

/// Copies a key through its DER encoding using the standard registry.
pub fn copy_key(key: &dyn PublicKey) -> Result<Box<dyn PublicKey>> {
    X509Codec::default().copy_key(key)
}
