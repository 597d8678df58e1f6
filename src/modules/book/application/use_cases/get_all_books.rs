use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::book::application::dto::BookDetails;
use crate::modules::book::domain::repositories::BookRepository;
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

/// Query for listing every copy together with its catalog metadata.
#[derive(Debug, Clone, Default)]
pub struct GetAllBooksQuery;

pub struct GetAllBooksHandler {
    book_repository: Arc<dyn BookRepository>,
}

impl GetAllBooksHandler {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }
}

#[async_trait]
impl Query<GetAllBooksQuery, Vec<BookDetails>> for GetAllBooksHandler {
    async fn execute(&self, _query: GetAllBooksQuery) -> DomainResult<Vec<BookDetails>> {
        let rows = self.book_repository.find_all_with_catalog().await?;
        Ok(rows.iter().map(BookDetails::from_projection).collect())
    }
}
