use std::ops::BitAnd;

use const_oid::AssociatedOid;
use der::flagset::FlagSet;
use der::oid::ObjectIdentifier;
use der::{Decode, Encode};
use x509_cert::ext::pkix::KeyUsage as X509KeyUsage;
pub use x509_cert::ext::pkix::KeyUsages;

use crate::error::KeyKitError;
use crate::key::{Capability, PublicKey};

/// A set of X.509 key usages.
///
/// Used both for what a key is able to do and for caller-imposed limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyConstraints(pub FlagSet<KeyUsages>);

impl KeyConstraints {
    /// OID of the KeyUsage extension.
    pub const OID: ObjectIdentifier = <X509KeyUsage as AssociatedOid>::OID;

    pub fn empty() -> Self {
        Self(FlagSet::empty())
    }

    pub fn all() -> Self {
        Self(FlagSet::full())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, usage: KeyUsages) -> bool {
        self.0.contains(usage)
    }

    /// Encodes the constraints as a DER KeyUsage extension value.
    pub fn to_x509_extension_value(&self) -> Result<Vec<u8>, KeyKitError> {
        X509KeyUsage(self.0)
            .to_der()
            .map_err(|e| KeyKitError::EncodingError(e.to_string()))
    }

    /// Decodes constraints from a DER KeyUsage extension value.
    pub fn from_x509_extension_value(extension: &[u8]) -> Result<Self, KeyKitError> {
        let ku = X509KeyUsage::from_der(extension).map_err(|e| {
            tracing::debug!(error = %e, "malformed KeyUsage extension");
            KeyKitError::DecodingError
        })?;
        Ok(Self(ku.0))
    }
}

impl From<FlagSet<KeyUsages>> for KeyConstraints {
    fn from(flags: FlagSet<KeyUsages>) -> Self {
        Self(flags)
    }
}

impl From<KeyUsages> for KeyConstraints {
    fn from(usage: KeyUsages) -> Self {
        Self(usage.into())
    }
}

impl BitAnd for KeyConstraints {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Finds the usages `key` may be put to, restricted to `limits`.
///
/// Empty `limits` impose no restriction. Both kinds of signature
/// verification map to `DigitalSignature` and `NonRepudiation`.
pub fn find_constraints(key: &dyn PublicKey, limits: KeyConstraints) -> KeyConstraints {
    let capabilities = key.capabilities();
    let mut constraints: FlagSet<KeyUsages> = FlagSet::empty();

    if capabilities.contains(Capability::Encrypting) {
        constraints |= KeyUsages::KeyEncipherment;
    }

    if capabilities.contains(Capability::KeyAgreement) {
        constraints |= KeyUsages::KeyAgreement;
    }

    if capabilities.contains(Capability::VerifyingWithoutRecovery)
        || capabilities.contains(Capability::VerifyingWithRecovery)
    {
        constraints |= KeyUsages::DigitalSignature | KeyUsages::NonRepudiation;
    }

    if !limits.is_empty() {
        constraints &= limits.0;
    }

    KeyConstraints(constraints)
}
