use std::fmt;
use uuid::Uuid;

/// Identifier returned by a processor for a completed charge.
///
/// The prefix names the family that produced it; the remainder is a v4
/// UUID, so collisions stay negligible without any shared counter state.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generates a fresh identifier carrying the given family prefix.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
