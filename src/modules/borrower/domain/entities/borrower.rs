use serde::{Deserialize, Serialize};

use crate::modules::borrower::domain::value_objects::{BorrowerId, EmailAddress};
use crate::shared::domain::Entity;
use crate::shared::errors::{DomainError, DomainResult};

/// A registered library member.
///
/// The name is trimmed and never blank. Email uniqueness across all
/// borrowers is not an invariant of this aggregate; the registration use
/// case checks it against the repository before construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    id: BorrowerId,
    name: String,
    email_address: EmailAddress,
}

impl Borrower {
    pub fn register(
        id: BorrowerId,
        name: &str,
        email_address: EmailAddress,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: validated_name(name)?,
            email_address,
        })
    }

    pub fn update_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validated_name(name)?;
        Ok(())
    }

    pub fn update_email_address(&mut self, email_address: EmailAddress) {
        self.email_address = email_address;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}

fn validated_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Name cannot be blank"));
    }
    Ok(trimmed.to_string())
}

impl Entity for Borrower {
    type Id = BorrowerId;

    fn id(&self) -> &BorrowerId {
        &self.id
    }
}
