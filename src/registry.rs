//! Algorithm registry: OID to algorithm name, and algorithm name to key constructor.
//!
//! ```
//! use spkikit::registry::AlgorithmRegistry;
//! use const_oid::db::rfc8410::ID_ED_25519;
//!
//! let registry = AlgorithmRegistry::standard();
//! assert_eq!(registry.oid_to_name(&ID_ED_25519), Some("Ed25519"));
//! assert!(registry.constructor("Ed25519").is_some());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use bon::Builder;
use const_oid::ObjectIdentifier;
use const_oid::db::rfc5912::{ID_EC_PUBLIC_KEY, RSA_ENCRYPTION};
use const_oid::db::rfc8410::{ID_ED_25519, ID_X_25519};
use x509_cert::spki::AlgorithmIdentifierOwned;

use crate::error::KeyRejected;
use crate::key::{self, PublicKey};

const ID_DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");
const DH_PUBLIC_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10046.2.1");

/// Builds a complete key from an `AlgorithmIdentifier` and the raw key bits.
pub type KeyDecoder =
    fn(&AlgorithmIdentifierOwned, &[u8]) -> Result<Box<dyn PublicKey>, KeyRejected>;

/// Registered way of creating keys of one algorithm.
///
/// A constructor without a decoder names an algorithm whose keys exist but
/// cannot be read from a SubjectPublicKeyInfo.
#[derive(Clone, Copy, Debug, Builder)]
pub struct KeyConstructor {
    pub decoder: Option<KeyDecoder>,
}

/// Lookup tables between algorithm OIDs, names and key constructors.
///
/// Built once, then only read. [`AlgorithmRegistry::standard`] is shared by the
/// free functions in [`crate::x509`].
#[derive(Clone, Debug, Default)]
pub struct AlgorithmRegistry {
    names: HashMap<ObjectIdentifier, String>,
    oids: HashMap<String, ObjectIdentifier>,
    constructors: HashMap<String, KeyConstructor>,
}

impl AlgorithmRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of algorithms bundled with this crate.
    pub fn standard() -> &'static AlgorithmRegistry {
        static STANDARD: OnceLock<AlgorithmRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            AlgorithmRegistry::new()
                .with_oid(RSA_ENCRYPTION, key::rsa::ALGORITHM)
                .with_oid(ID_EC_PUBLIC_KEY, key::ecdsa::ALGORITHM)
                .with_oid(ID_ED_25519, key::ed25519::ALGORITHM)
                .with_oid(ID_X_25519, key::x25519::ALGORITHM)
                .with_oid(ID_DSA, "DSA")
                .with_oid(DH_PUBLIC_NUMBER, "DH")
                .with_constructor(key::rsa::ALGORITHM, decodable(key::rsa::decode))
                .with_constructor(key::ecdsa::ALGORITHM, decodable(key::ecdsa::decode))
                .with_constructor(key::ed25519::ALGORITHM, decodable(key::ed25519::decode))
                .with_constructor(key::x25519::ALGORITHM, decodable(key::x25519::decode))
        })
    }

    /// Maps `oid` to `name`, replacing any earlier mapping of either.
    pub fn with_oid(mut self, oid: ObjectIdentifier, name: impl Into<String>) -> Self {
        let name = name.into();
        self.names.insert(oid, name.clone());
        self.oids.insert(name, oid);
        self
    }

    /// Registers the constructor for keys named `name`.
    pub fn with_constructor(mut self, name: impl Into<String>, constructor: KeyConstructor) -> Self {
        self.constructors.insert(name.into(), constructor);
        self
    }

    pub fn oid_to_name(&self, oid: &ObjectIdentifier) -> Option<&str> {
        self.names.get(oid).map(String::as_str)
    }

    pub fn name_to_oid(&self, name: &str) -> Option<ObjectIdentifier> {
        self.oids.get(name).copied()
    }

    pub fn constructor(&self, name: &str) -> Option<&KeyConstructor> {
        self.constructors.get(name)
    }
}

fn decodable(decoder: KeyDecoder) -> KeyConstructor {
    KeyConstructor::builder().decoder(decoder).build()
}
