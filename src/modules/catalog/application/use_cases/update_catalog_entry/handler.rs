use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::application::dto::CatalogEntryDetails;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::UpdateCatalogEntryCommand;

/// Use case handler for updating an existing catalog entry.
pub struct UpdateCatalogEntryHandler {
    catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
}

impl UpdateCatalogEntryHandler {
    pub fn new(catalog_entry_repository: Arc<dyn CatalogEntryRepository>) -> Self {
        Self {
            catalog_entry_repository,
        }
    }
}

#[async_trait]
impl UseCase<UpdateCatalogEntryCommand, CatalogEntryDetails> for UpdateCatalogEntryHandler {
    async fn execute(
        &self,
        command: UpdateCatalogEntryCommand,
    ) -> DomainResult<CatalogEntryDetails> {
        let isbn = Isbn::new(&command.isbn)?;

        let mut entry = self
            .catalog_entry_repository
            .find_by_isbn(&isbn)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Catalog entry not found with ISBN: {}",
                    command.isbn
                ))
            })?;

        entry.update_title(&command.title)?;
        entry.update_author(&command.author)?;
        self.catalog_entry_repository.save(&entry).await?;

        log::info!("Updated catalog entry {}", isbn);

        Ok(CatalogEntryDetails::from_entry(&entry))
    }
}
