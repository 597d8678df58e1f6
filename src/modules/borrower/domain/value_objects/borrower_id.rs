use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult};

/// Opaque borrower identifier. Supplied by the external id generator,
/// never derived inside the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorrowerId(String);

impl BorrowerId {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("BorrowerId cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
