use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::dto::CatalogEntryDetails;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::application::use_case::Query;
use crate::shared::errors::{DomainError, DomainResult};

/// Query for a single catalog entry by raw ISBN string.
#[derive(Debug, Clone)]
pub struct GetCatalogEntryByIsbnQuery {
    pub isbn: String,
}

impl GetCatalogEntryByIsbnQuery {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self { isbn: isbn.into() }
    }
}

pub struct GetCatalogEntryByIsbnHandler {
    catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
}

impl GetCatalogEntryByIsbnHandler {
    pub fn new(catalog_entry_repository: Arc<dyn CatalogEntryRepository>) -> Self {
        Self {
            catalog_entry_repository,
        }
    }
}

#[async_trait]
impl Query<GetCatalogEntryByIsbnQuery, CatalogEntryDetails> for GetCatalogEntryByIsbnHandler {
    async fn execute(&self, query: GetCatalogEntryByIsbnQuery) -> DomainResult<CatalogEntryDetails> {
        let isbn = Isbn::new(&query.isbn)?;

        self.catalog_entry_repository
            .find_by_isbn(&isbn)
            .await?
            .map(|entry| CatalogEntryDetails::from_entry(&entry))
            .ok_or_else(|| {
                DomainError::not_found(format!("Catalog entry not found with ISBN: {}", query.isbn))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::entities::CatalogEntry;
    use crate::modules::catalog::domain::repositories::MockCatalogEntryRepository;

    #[tokio::test]
    async fn projects_the_stored_entry() {
        let mut repo = MockCatalogEntryRepository::new();
        repo.expect_find_by_isbn().return_once(|_| {
            Ok(Some(
                CatalogEntry::new(
                    Isbn::new("9780132350884").unwrap(),
                    "Clean Code",
                    "Robert C. Martin",
                )
                .unwrap(),
            ))
        });

        let handler = GetCatalogEntryByIsbnHandler::new(Arc::new(repo));
        let details = handler
            .execute(GetCatalogEntryByIsbnQuery::new("978-0-13-235088-4"))
            .await
            .unwrap();

        assert_eq!(details.isbn, "9780132350884");
        assert_eq!(details.title, "Clean Code");
    }

    #[tokio::test]
    async fn fails_when_missing() {
        let mut repo = MockCatalogEntryRepository::new();
        repo.expect_find_by_isbn().return_once(|_| Ok(None));

        let handler = GetCatalogEntryByIsbnHandler::new(Arc::new(repo));
        let err = handler
            .execute(GetCatalogEntryByIsbnQuery::new("9780132350884"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
