use async_trait::async_trait;

use crate::modules::catalog::domain::entities::CatalogEntry;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::errors::DomainResult;

/// Port for catalog entry persistence. Infrastructure provides the
/// implementation; the core only sees this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogEntryRepository: Send + Sync {
    async fn save(&self, entry: &CatalogEntry) -> DomainResult<()>;

    async fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogEntry>>;

    async fn exists_by_isbn(&self, isbn: &Isbn) -> DomainResult<bool>;
}
