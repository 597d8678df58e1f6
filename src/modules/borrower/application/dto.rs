use serde::Serialize;

use crate::modules::borrower::domain::entities::Borrower;
use crate::shared::domain::Entity;

/// Read projection of a borrower for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerDetails {
    pub id: String,
    pub name: String,
    pub email_address: String,
}

impl BorrowerDetails {
    pub fn from_borrower(borrower: &Borrower) -> Self {
        Self {
            id: borrower.id().value().to_string(),
            name: borrower.name().to_string(),
            email_address: borrower.email_address().value().to_string(),
        }
    }
}
