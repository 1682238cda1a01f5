//! # SpkiKit - X.509 Public Keys in Pure Rust
//!
//! SpkiKit reads and writes public keys in the X.509 `SubjectPublicKeyInfo`
//! form, built entirely on rustcrypto libraries. It dispatches on the algorithm
//! OID to per-algorithm adapters, computes short key identifiers, copies keys
//! through their serialized form, and works out which X.509 key usages a key
//! may carry.
//!
//! ## Supported Key Types
//!
//! - **RSA**: encryption and signature verification
//! - **ECDSA**: P-256, P-384 and P-521 curves
//! - **Ed25519**: Edwards curve digital signature algorithm
//! - **X25519**: Montgomery curve key agreement
//!
//! Further algorithms plug in through [`registry::AlgorithmRegistry`].
//!
//! ## Supported Formats
//!
//! - **DER**: Distinguished Encoding Rules (binary format)
//! - **PEM**: Privacy-Enhanced Mail, label `PUBLIC KEY`
//!
//! ## Quick Start
//!
//! ```rust
//! use spkikit::constraints::{KeyConstraints, KeyUsages, find_constraints};
//! use spkikit::key::{PublicKey, X25519Key};
//! use spkikit::{key_id::key_id, x509};
//!
//! # fn main() -> Result<(), spkikit::error::KeyKitError> {
//! let key = X25519Key::new(x25519_dalek::PublicKey::from([9u8; 32]));
//!
//! // Export to PEM format and load it back
//! let pem = x509::to_pem(&key)?;
//! let loaded = x509::load_key(pem.as_bytes())?;
//! assert_eq!(loaded.algo_name(), "X25519");
//! assert_eq!(key_id(loaded.as_ref())?, key_id(&key)?);
//!
//! // X25519 keys are only good for key agreement
//! let usages = find_constraints(loaded.as_ref(), KeyConstraints::all());
//! assert_eq!(usages, KeyConstraints::from(KeyUsages::KeyAgreement));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure to load a key is the same [`error::KeyKitError::DecodingError`];
//! the reason is logged through `tracing` at `debug` level but never returned,
//! so malformed input cannot be used to probe the parser.
//!
//! ```rust
//! use spkikit::{error::KeyKitError, x509};
//!
//! match x509::load_key(b"invalid pem data") {
//!     Ok(_) => println!("Key imported successfully"),
//!     Err(KeyKitError::DecodingError) => println!("Failed to decode key"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`x509`]: SubjectPublicKeyInfo encoding, decoding and key copies
//! - [`key`]: The public key trait, capabilities and bundled algorithms
//! - [`registry`]: Algorithm OIDs, names and key constructors
//! - [`key_id`]: 64-bit key identifiers
//! - [`constraints`]: Key usage resolution
//! - [`error`]: Error types
//! - [`pem_utils`]: PEM framing helpers

pub mod constraints;
pub mod error;
pub mod key;
pub mod key_id;
pub mod pem_utils;
pub mod registry;
pub mod x509;
