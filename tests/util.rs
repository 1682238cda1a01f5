#![allow(dead_code)]

use const_oid::ObjectIdentifier;
use spkikit::error::{KeyKitError, KeyRejected};
use spkikit::key::{Capabilities, Capability, PublicKey, X509Encoder};
use spkikit::registry::{AlgorithmRegistry, KeyConstructor};
use x509_cert::spki::AlgorithmIdentifierOwned;

/// RFC 8410 section 10.1 example Ed25519 public key.
pub const ED25519_PEM: &str = "-----BEGIN PUBLIC KEY-----
MCowBQYDK2VwAyEAGb9ECWmEzf6FQbrBZ9w7lshQhqowtrbLDFw4rXAxZuE=
-----END PUBLIC KEY-----
";
pub const ED25519_KEY_ID: u64 = 0xeeb0_975d_08c0_1731;

pub const RSA_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAq8Rdg2HqpZnHKgRH67pr
Motv9FtqObYvsaSWFmSkiZS1cz/xrlTTOXNBLxDVI2LLsStQPLRxRzxbep29g0eb
0pDzKsOfS8NprOeMczWvysM30EwDCfoUmDaHzGjdzwLWsPBXvtJ4KxVjSwd8sZZG
s83G01jmVmkxjx5z6zh51GJsZgcZ1GPO3YiVTwQFQWuzh/wrGeaD57QmvKExYgNc
AURXHFIJUOvMM3cEReSzDjHK5xBDBQ/rrg7Loxo6FjgletZh6HcFsGMPMdx0zVkT
kkI9KJIitjAVBFExaIUAa5ZT354NAnj+iiMHF63WCauONr+wgYgcmbehV4D80kad
owIDAQAB
-----END PUBLIC KEY-----
";
pub const RSA_KEY_ID: u64 = 0x5697_eccc_326b_4205;

pub const P256_PEM: &str = "-----BEGIN PUBLIC KEY-----
MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEoCqdt451pZRsN4imegEF7Qj4qM6B
DwacH8r2XHXWHJzvuzyMav63J04vfECA15QBsef3NtIL8vP0vXSeP3Ci4w==
-----END PUBLIC KEY-----
";
pub const P256_KEY_ID: u64 = 0x2e20_30d8_bc44_22c1;

pub const X25519_PEM: &str = "-----BEGIN PUBLIC KEY-----
MCowBQYDK2VuAyEAyC7M+vG616+erHGLzFwc48lmkcjj+B9S5f94M9YI7go=
-----END PUBLIC KEY-----
";
pub const X25519_KEY_ID: u64 = 0x5333_1e64_77c6_c2a7;

/// Private-arc OID for the toy algorithm below.
pub const TOY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.55555.1");
pub const TOY_ALGORITHM: &str = "Toy";

/// A key that can only encrypt, with opaque key bits.
#[derive(Debug, Clone)]
pub struct ToyKey(pub Vec<u8>);

impl PublicKey for ToyKey {
    fn algo_name(&self) -> &str {
        TOY_ALGORITHM
    }

    fn capabilities(&self) -> Capabilities {
        Capability::Encrypting.into()
    }

    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        Some(self)
    }
}

impl X509Encoder for ToyKey {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: TOY_OID,
            parameters: None,
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        Ok(self.0.clone())
    }
}

/// A toy key whose algorithm identifier carries parameters.
#[derive(Debug, Clone)]
pub struct ParameterizedToyKey {
    pub parameters: der::Any,
    pub key_bits: Vec<u8>,
}

impl PublicKey for ParameterizedToyKey {
    fn algo_name(&self) -> &str {
        TOY_ALGORITHM
    }

    fn capabilities(&self) -> Capabilities {
        Capability::Encrypting.into()
    }

    fn x509_encoder(&self) -> Option<&dyn X509Encoder> {
        Some(self)
    }
}

impl X509Encoder for ParameterizedToyKey {
    fn algorithm_identifier(&self) -> Result<AlgorithmIdentifierOwned, KeyKitError> {
        Ok(AlgorithmIdentifierOwned {
            oid: TOY_OID,
            parameters: Some(self.parameters.clone()),
        })
    }

    fn key_bits(&self) -> Result<Vec<u8>, KeyKitError> {
        Ok(self.key_bits.clone())
    }
}

pub fn decode_toy(
    algorithm: &AlgorithmIdentifierOwned,
    key_bits: &[u8],
) -> Result<Box<dyn PublicKey>, KeyRejected> {
    if algorithm.parameters.is_some() {
        return Err(KeyRejected::new("toy keys take no parameters"));
    }
    Ok(Box::new(ToyKey(key_bits.to_vec())))
}

/// A signing key that has no X.509 form at all.
#[derive(Debug)]
pub struct OpaqueKey;

impl PublicKey for OpaqueKey {
    fn algo_name(&self) -> &str {
        "Opaque"
    }

    fn capabilities(&self) -> Capabilities {
        Capability::VerifyingWithoutRecovery.into()
    }
}

/// The standard algorithms are absent; only the toy algorithm is decodable.
pub fn toy_registry() -> AlgorithmRegistry {
    AlgorithmRegistry::new()
        .with_oid(TOY_OID, TOY_ALGORITHM)
        .with_constructor(TOY_ALGORITHM, KeyConstructor::builder().decoder(decode_toy).build())
}

/// Knows the toy OID but has no way of decoding it.
pub fn toy_registry_without_decoder() -> AlgorithmRegistry {
    AlgorithmRegistry::new()
        .with_oid(TOY_OID, TOY_ALGORITHM)
        .with_constructor(TOY_ALGORITHM, KeyConstructor::builder().build())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// A path in the system temp directory unique to this process and `name`.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("spkikit-{}-{}", std::process::id(), name))
}
