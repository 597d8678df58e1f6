use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult};

static ISBN_10: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}[0-9X]$").unwrap());
static ISBN_13: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

/// Canonical ISBN, the identity of a catalog entry.
///
/// Construction strips hyphens and spaces and upper-cases the check
/// character, so differently formatted inputs for the same ISBN compare
/// equal. The canonical form is either 10 characters (`[0-9]{9}[0-9X]`)
/// or 13 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let normalized = Self::normalize(raw);
        if ISBN_10.is_match(&normalized) || ISBN_13.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::validation(format!(
                "ISBN must be 10 or 13 digits. Got: {}",
                normalized
            )))
        }
    }

    /// Non-failing parse variant.
    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::new(raw).ok()
    }

    fn normalize(raw: &str) -> String {
        raw.replace(['-', ' '], "").to_uppercase()
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
