use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult};

// Applied to the trimmed, lower-cased form, so lower-case classes suffice.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

/// Canonical email address: trimmed and lower-cased, matching a standard
/// local@domain pattern. Equality is on the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let normalized = raw.to_lowercase().trim().to_string();
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(DomainError::validation(format!(
                "Invalid email address: {}",
                raw
            )));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
