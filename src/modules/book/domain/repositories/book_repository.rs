use async_trait::async_trait;

use crate::modules::book::domain::book_with_catalog::BookWithCatalog;
use crate::modules::book::domain::entities::Book;
use crate::modules::book::domain::value_objects::BookId;
use crate::shared::errors::DomainResult;

/// Port for book copy persistence, including the joined read path used
/// by the list-all-books query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn save(&self, book: &Book) -> DomainResult<()>;

    async fn find_by_id(&self, id: &BookId) -> DomainResult<Option<Book>>;

    async fn find_all(&self) -> DomainResult<Vec<Book>>;

    async fn find_all_with_catalog(&self) -> DomainResult<Vec<BookWithCatalog>>;
}
