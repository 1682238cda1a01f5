use pem::{EncodeConfig, LineEnding, Pem};

use crate::error::DecodeFailure;

/// How far into a source to look for a PEM header.
const PEM_SEARCH_RANGE: usize = 4096;
const PEM_BEGIN: &[u8] = b"-----BEGIN ";

/// Convert DER‑encoded data into a PEM‑encoded string with the provided label.
pub fn der_to_pem(der: &[u8], label: &str) -> String {
    let pem = Pem::new(label, der);
    pem::encode_config(&pem, EncodeConfig::new().set_line_ending(LineEnding::LF))
}

/// Convert a PEM‑encoded block to DER‑encoded bytes, requiring `expected_label`.
pub(crate) fn pem_to_der(source: &[u8], expected_label: &str) -> Result<Vec<u8>, DecodeFailure> {
    let pem = pem::parse(source)?;
    if pem.tag() != expected_label {
        return Err(DecodeFailure::UnexpectedLabel(pem.tag().to_string()));
    }
    Ok(pem.into_contents())
}

/// Whether a PEM header appears near the start of `source`.
pub fn looks_like_pem(source: &[u8]) -> bool {
    let window = &source[..source.len().min(PEM_SEARCH_RANGE)];
    window
        .windows(PEM_BEGIN.len())
        .any(|candidate| candidate == PEM_BEGIN)
}
