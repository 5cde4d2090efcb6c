//! Encryption key references
//!
//! Keys are managed outside this crate; a reference identifies one by its
//! opaque id and never drives the key's lifecycle.

/// Opaque handle to an externally managed KMS key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRef {
    key_id: String,
}

impl KeyRef {
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    /// The opaque key identifier
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}
