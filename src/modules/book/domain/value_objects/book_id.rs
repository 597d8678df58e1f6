use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult};

/// Opaque identifier of a physical book copy. Supplied by the external
/// id generator, never derived inside the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("BookId cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
