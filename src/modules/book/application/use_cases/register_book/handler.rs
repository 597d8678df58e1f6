use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::book::application::dto::BookDetails;
use crate::modules::book::domain::entities::Book;
use crate::modules::book::domain::repositories::BookRepository;
use crate::modules::book::domain::value_objects::BookId;
use crate::modules::catalog::domain::entities::CatalogEntry;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::application::id_generator::IdGenerator;
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::RegisterBookCommand;

/// Use case handler for registering a new physical copy.
///
/// The catalog entry is resolved first: created from the supplied
/// title/author for a fresh ISBN, or matched case-insensitively against
/// the stored metadata for a known one. A mismatch conflicts before
/// anything is persisted or any id is generated, so the same ISBN can
/// never drift apart across registrations.
pub struct RegisterBookHandler {
    book_repository: Arc<dyn BookRepository>,
    catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl RegisterBookHandler {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        catalog_entry_repository: Arc<dyn CatalogEntryRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            book_repository,
            catalog_entry_repository,
            id_generator,
        }
    }

    async fn resolve_catalog_entry(
        &self,
        isbn: &Isbn,
        command: &RegisterBookCommand,
    ) -> DomainResult<CatalogEntry> {
        match self.catalog_entry_repository.find_by_isbn(isbn).await? {
            Some(existing) => {
                let title_matches = existing.title().eq_ignore_ascii_case(command.title.trim());
                let author_matches = existing.author().eq_ignore_ascii_case(command.author.trim());
                if !title_matches || !author_matches {
                    return Err(DomainError::conflict(format!(
                        "ISBN {} exists with different title/author metadata",
                        command.isbn
                    )));
                }
                Ok(existing)
            }
            None => {
                let entry = CatalogEntry::new(isbn.clone(), &command.title, &command.author)?;
                self.catalog_entry_repository.save(&entry).await?;
                log::info!("Created catalog entry {}", isbn);
                Ok(entry)
            }
        }
    }
}

#[async_trait]
impl UseCase<RegisterBookCommand, BookDetails> for RegisterBookHandler {
    async fn execute(&self, command: RegisterBookCommand) -> DomainResult<BookDetails> {
        let isbn = Isbn::new(&command.isbn)?;

        let catalog_entry = self.resolve_catalog_entry(&isbn, &command).await?;

        let book_id = BookId::new(self.id_generator.generate())?;
        let book = Book::register(book_id, isbn);
        self.book_repository.save(&book).await?;

        log::info!("Registered copy of {}", book.isbn());

        Ok(BookDetails::from_book(&book, &catalog_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::domain::repositories::MockBookRepository;
    use crate::modules::catalog::domain::repositories::MockCatalogEntryRepository;
    use crate::shared::application::id_generator::MockIdGenerator;

    const BOOK_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    const ISBN: &str = "9780132350884";
    const TITLE: &str = "Clean Code";
    const AUTHOR: &str = "Robert C. Martin";

    fn id_generator() -> MockIdGenerator {
        let mut generator = MockIdGenerator::new();
        generator.expect_generate().return_const(BOOK_ID.to_string());
        generator
    }

    fn existing_entry() -> CatalogEntry {
        CatalogEntry::new(Isbn::new(ISBN).unwrap(), TITLE, AUTHOR).unwrap()
    }

    #[tokio::test]
    async fn first_copy_creates_the_catalog_entry() {
        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo.expect_find_by_isbn().return_once(|_| Ok(None));
        catalog_repo
            .expect_save()
            .withf(|entry| entry.title() == TITLE && entry.author() == AUTHOR)
            .times(1)
            .return_once(|_| Ok(()));

        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_save()
            .withf(|book| book.isbn().value() == ISBN && book.is_available())
            .times(1)
            .return_once(|_| Ok(()));

        let handler = RegisterBookHandler::new(
            Arc::new(book_repo),
            Arc::new(catalog_repo),
            Arc::new(id_generator()),
        );

        let result = handler
            .execute(RegisterBookCommand::new("978-0-13-235088-4", TITLE, AUTHOR))
            .await
            .unwrap();

        assert_eq!(result.id, BOOK_ID);
        assert_eq!(result.isbn, ISBN);
        assert_eq!(result.title, TITLE);
        assert_eq!(result.author, AUTHOR);
        assert!(result.available);
    }

    #[tokio::test]
    async fn second_copy_reuses_the_entry_when_metadata_matches_case_insensitively() {
        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo
            .expect_find_by_isbn()
            .return_once(|_| Ok(Some(existing_entry())));
        catalog_repo.expect_save().times(0);

        let mut book_repo = MockBookRepository::new();
        book_repo.expect_save().times(1).return_once(|_| Ok(()));

        let handler = RegisterBookHandler::new(
            Arc::new(book_repo),
            Arc::new(catalog_repo),
            Arc::new(id_generator()),
        );

        let result = handler
            .execute(RegisterBookCommand::new(
                ISBN,
                "CLEAN CODE",
                "ROBERT C. MARTIN",
            ))
            .await
            .unwrap();

        // The stored metadata wins over the supplied casing.
        assert_eq!(result.title, TITLE);
        assert_eq!(result.author, AUTHOR);
    }

    #[tokio::test]
    async fn metadata_mismatch_conflicts_and_persists_nothing() {
        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo
            .expect_find_by_isbn()
            .return_once(|_| Ok(Some(existing_entry())));
        catalog_repo.expect_save().times(0);

        let mut book_repo = MockBookRepository::new();
        book_repo.expect_save().times(0);

        let mut generator = MockIdGenerator::new();
        generator.expect_generate().times(0);

        let handler = RegisterBookHandler::new(
            Arc::new(book_repo),
            Arc::new(catalog_repo),
            Arc::new(generator),
        );

        let err = handler
            .execute(RegisterBookCommand::new(ISBN, "Different Title", AUTHOR))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn author_mismatch_alone_also_conflicts() {
        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo
            .expect_find_by_isbn()
            .return_once(|_| Ok(Some(existing_entry())));

        let mut book_repo = MockBookRepository::new();
        book_repo.expect_save().times(0);

        let handler = RegisterBookHandler::new(
            Arc::new(book_repo),
            Arc::new(catalog_repo),
            Arc::new(MockIdGenerator::new()),
        );

        let err = handler
            .execute(RegisterBookCommand::new(ISBN, TITLE, "Somebody Else"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn malformed_isbn_fails_before_any_lookup() {
        let mut catalog_repo = MockCatalogEntryRepository::new();
        catalog_repo.expect_find_by_isbn().times(0);

        let handler = RegisterBookHandler::new(
            Arc::new(MockBookRepository::new()),
            Arc::new(catalog_repo),
            Arc::new(MockIdGenerator::new()),
        );

        let err = handler
            .execute(RegisterBookCommand::new("not-an-isbn", TITLE, AUTHOR))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }
}
