use sha2::{Digest, Sha256};

/// SHA-256 of a rendered file, upper-case hex.
pub(crate) fn digest(bytes: impl AsRef<[u8]>) -> String {
    Sha256::digest(bytes.as_ref())
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect()
}
