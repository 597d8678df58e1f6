use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::book::application::dto::BookDetails;
use crate::modules::book::domain::repositories::BookRepository;
use crate::modules::book::domain::value_objects::BookId;
use crate::modules::borrower::domain::repositories::BorrowerRepository;
use crate::modules::borrower::domain::value_objects::BorrowerId;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::BorrowBookCommand;

/// Use case handler for borrowing a copy.
///
/// Lookup order is book first, borrower second; a missing book
/// short-circuits without touching the borrower store.
pub struct BorrowBookHandler {
    book_repository: Arc<dyn BookRepository>,
    borrower_repository: Arc<dyn BorrowerRepository>,
    catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
}

impl BorrowBookHandler {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        borrower_repository: Arc<dyn BorrowerRepository>,
        catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
    ) -> Self {
        Self {
            book_repository,
            borrower_repository,
            catalog_entry_repository,
        }
    }
}

#[async_trait]
impl UseCase<BorrowBookCommand, BookDetails> for BorrowBookHandler {
    async fn execute(&self, command: BorrowBookCommand) -> DomainResult<BookDetails> {
        let book_id = BookId::new(&command.book_id)?;
        let borrower_id = BorrowerId::new(&command.borrower_id)?;

        let mut book = self
            .book_repository
            .find_by_id(&book_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Book not found with id: {}", command.book_id))
            })?;

        self.borrower_repository
            .find_by_id(&borrower_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Borrower not found with id: {}",
                    command.borrower_id
                ))
            })?;

        book.borrow(borrower_id)?;
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

        log::info!("Book {} borrowed by {}", command.book_id, command.borrower_id);

        Ok(BookDetails::from_book(&book, &catalog_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::domain::entities::Book;
    use crate::modules::book::domain::repositories::MockBookRepository;
    use crate::modules::borrower::domain::entities::Borrower;
    use crate::modules::borrower::domain::repositories::MockBorrowerRepository;
    use crate::modules::borrower::domain::value_objects::EmailAddress;
    use crate::modules::catalog::domain::entities::CatalogEntry;
    use crate::modules::catalog::domain::repositories::MockCatalogEntryRepository;
    use crate::modules::catalog::domain::value_objects::Isbn;
    use chrono::Utc;

    const BOOK_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    const BORROWER_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAW";
    const ISBN: &str = "9780132350884";

    fn available_book() -> Book {
        Book::register(BookId::new(BOOK_ID).unwrap(), Isbn::new(ISBN).unwrap())
    }

    fn registered_borrower() -> Borrower {
        Borrower::register(
            BorrowerId::new(BORROWER_ID).unwrap(),
            "John Doe",
            EmailAddress::new("john.doe@example.com").unwrap(),
        )
        .unwrap()
    }

    fn catalog_entry() -> CatalogEntry {
        CatalogEntry::new(Isbn::new(ISBN).unwrap(), "Clean Code", "Robert C. Martin").unwrap()
    }

    #[tokio::test]
    async fn borrows_and_saves_the_book() {
        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(available_book())));
        book_repo
            .expect_save()
            .withf(|book| !book.is_available() && book.borrower_id().unwrap().value() == BORROWER_ID)
            .times(1)
            .return_once(|_| Ok(()));

        let mut borrower_repo = MockBorrowerRepository::new();
        borrower_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(registered_borrower())));

        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo
            .expect_find_by_isbn()
            .return_once(|_| Ok(Some(catalog_entry())));

        let handler = BorrowBookHandler::new(
            Arc::new(book_repo),
            Arc::new(borrower_repo),
            Arc::new(catalog_repo),
        );

        let result = handler
            .execute(BorrowBookCommand::new(BOOK_ID, BORROWER_ID))
            .await
            .unwrap();

        assert!(!result.available);
        assert_eq!(result.borrower_id.as_deref(), Some(BORROWER_ID));
        assert!(result.borrowed_on.is_some());
        assert_eq!(result.title, "Clean Code");
    }

    #[tokio::test]
    async fn missing_book_short_circuits_before_the_borrower_lookup() {
        let mut book_repo = MockBookRepository::new();
        book_repo.expect_find_by_id().return_once(|_| Ok(None));

        let mut borrower_repo = MockBorrowerRepository::new();
        borrower_repo.expect_find_by_id().times(0);

        let handler = BorrowBookHandler::new(
            Arc::new(book_repo),
            Arc::new(borrower_repo),
            Arc::new(MockCatalogEntryRepository::new()),
        );

        let err = handler
            .execute(BorrowBookCommand::new(BOOK_ID, BORROWER_ID))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::not_found(format!("Book not found with id: {}", BOOK_ID))
        );
    }

    #[tokio::test]
    async fn missing_borrower_fails_without_saving() {
        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(available_book())));
        book_repo.expect_save().times(0);

        let mut borrower_repo = MockBorrowerRepository::new();
        borrower_repo.expect_find_by_id().return_once(|_| Ok(None));

        let handler = BorrowBookHandler::new(
            Arc::new(book_repo),
            Arc::new(borrower_repo),
            Arc::new(MockCatalogEntryRepository::new()),
        );

        let err = handler
            .execute(BorrowBookCommand::new(BOOK_ID, BORROWER_ID))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn already_borrowed_book_propagates_the_state_error() {
        let mut borrowed = available_book();
        borrowed
            .borrow_at(BorrowerId::new("someone-else").unwrap(), Utc::now())
            .unwrap();

        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_id()
            .return_once(move |_| Ok(Some(borrowed)));
        book_repo.expect_save().times(0);

        let mut borrower_repo = MockBorrowerRepository::new();
        borrower_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(registered_borrower())));

        let handler = BorrowBookHandler::new(
            Arc::new(book_repo),
            Arc::new(borrower_repo),
            Arc::new(MockCatalogEntryRepository::new()),
        );

        let err = handler
            .execute(BorrowBookCommand::new(BOOK_ID, BORROWER_ID))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::state("Book is already borrowed"));
    }

    #[tokio::test]
    async fn dangling_catalog_link_surfaces_as_not_found() {
        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(available_book())));
        book_repo.expect_save().times(1).return_once(|_| Ok(()));

        let mut borrower_repo = MockBorrowerRepository::new();
        borrower_repo
            .expect_find_by_id()
            .return_once(|_| Ok(Some(registered_borrower())));

        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo.expect_find_by_isbn().return_once(|_| Ok(None));

        let handler = BorrowBookHandler::new(
            Arc::new(book_repo),
            Arc::new(borrower_repo),
            Arc::new(catalog_repo),
        );

        let err = handler
            .execute(BorrowBookCommand::new(BOOK_ID, BORROWER_ID))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::not_found(format!("Catalog entry not found with ISBN: {}", ISBN))
        );
    }
}
