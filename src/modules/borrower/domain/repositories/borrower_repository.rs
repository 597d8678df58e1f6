use async_trait::async_trait;

use crate::modules::borrower::domain::entities::Borrower;
use crate::modules::borrower::domain::value_objects::{BorrowerId, EmailAddress};
use crate::shared::errors::DomainResult;

/// Port for borrower persistence and the email-existence check used by
/// the registration use case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowerRepository: Send + Sync {
    async fn save(&self, borrower: &Borrower) -> DomainResult<()>;

    async fn find_by_id(&self, id: &BorrowerId) -> DomainResult<Option<Borrower>>;

    async fn find_by_email_address(&self, email: &EmailAddress) -> DomainResult<Option<Borrower>>;

    async fn find_all(&self) -> DomainResult<Vec<Borrower>>;

    async fn exists_by_email_address(&self, email: &EmailAddress) -> DomainResult<bool>;
}
