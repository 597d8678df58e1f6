use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::book::application::dto::BookDetails;
use crate::modules::book::domain::repositories::BookRepository;
use crate::modules::book::domain::value_objects::BookId;
use crate::modules::borrower::domain::value_objects::BorrowerId;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::ReturnBookCommand;

/// Use case handler for returning a copy.
///
/// A copy may only be returned by the borrower who holds it. The book
/// aggregate alone cannot detect "wrong borrower" — it only knows
/// "borrowed" or not — so the holder comparison happens here, before
/// the state transition. Returning an available copy and returning
/// someone else's copy are the same error kind with distinct messages.
pub struct ReturnBookHandler {
    book_repository: Arc<dyn BookRepository>,
    catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
}

impl ReturnBookHandler {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
    ) -> Self {
        Self {
            book_repository,
            catalog_entry_repository,
        }
    }
}

#[async_trait]
impl UseCase<ReturnBookCommand, BookDetails> for ReturnBookHandler {
    async fn execute(&self, command: ReturnBookCommand) -> DomainResult<BookDetails> {
        let book_id = BookId::new(&command.book_id)?;
        let borrower_id = BorrowerId::new(&command.borrower_id)?;

        let mut book = self
            .book_repository
            .find_by_id(&book_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Book not found with id: {}", command.book_id))
            })?;

        match book.borrower_id() {
            None => return Err(DomainError::state("Book is not borrowed")),
            Some(holder) if *holder != borrower_id => {
                return Err(DomainError::state("Book is not borrowed by this borrower"))
            }
            Some(_) => {}
        }

        book.return_book()?;
        self.book_repository.save(&book).await?;

        let catalog_entry = self
            .catalog_entry_repository
            .find_by_isbn(book.isbn())
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Catalog entry not found with ISBN: {}",
                    book.isbn()
                ))
            })?;

        log::info!("Book {} returned by {}", command.book_id, command.borrower_id);

        Ok(BookDetails::from_book(&book, &catalog_entry))
    }
}
