//! In-memory repository implementations.
//!
//! Backed by concurrent maps so the stores can be shared across tasks
//! without extra locking. Suitable for tests and embedding; durable
//! storage engines plug in behind the same ports.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::modules::book::domain::book_with_catalog::BookWithCatalog;
use crate::modules::book::domain::entities::Book;
use crate::modules::book::domain::repositories::BookRepository;
use crate::modules::book::domain::value_objects::BookId;
use crate::modules::borrower::domain::entities::Borrower;
use crate::modules::borrower::domain::repositories::BorrowerRepository;
use crate::modules::borrower::domain::value_objects::{BorrowerId, EmailAddress};
use crate::modules::catalog::domain::entities::CatalogEntry;
use crate::modules::catalog::domain::repositories::CatalogEntryRepository;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::domain::Entity;
use crate::shared::errors::DomainResult;

/// Shared backing store for all three aggregates. Catalog entries are
/// keyed by canonical ISBN, books and borrowers by their id tokens.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    books: DashMap<BookId, Book>,
    borrowers: DashMap<BorrowerId, Borrower>,
    catalog_entries: DashMap<Isbn, CatalogEntry>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

pub struct InMemoryBookRepository {
    database: Arc<InMemoryDatabase>,
}

impl InMemoryBookRepository {
    pub fn new(database: Arc<InMemoryDatabase>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn save(&self, book: &Book) -> DomainResult<()> {
        self.database.books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BookId) -> DomainResult<Option<Book>> {
        Ok(self.database.books.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Book>> {
        Ok(self
            .database
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_all_with_catalog(&self) -> DomainResult<Vec<BookWithCatalog>> {
        // Inner join against the catalog map; registration guarantees the
        // link exists, so unmatched books are simply skipped.
        Ok(self
            .database
            .books
            .iter()
            .filter_map(|entry| {
                let book = entry.value();
                self.database
                    .catalog_entries
                    .get(book.isbn())
                    .map(|catalog| {
                        BookWithCatalog::from_book(book, catalog.title(), catalog.author())
                    })
            })
            .collect())
    }
}

pub struct InMemoryBorrowerRepository {
    database: Arc<InMemoryDatabase>,
}

impl InMemoryBorrowerRepository {
    pub fn new(database: Arc<InMemoryDatabase>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl BorrowerRepository for InMemoryBorrowerRepository {
    async fn save(&self, borrower: &Borrower) -> DomainResult<()> {
        self.database
            .borrowers
            .insert(borrower.id().clone(), borrower.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BorrowerId) -> DomainResult<Option<Borrower>> {
        Ok(self.database.borrowers.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email_address(&self, email: &EmailAddress) -> DomainResult<Option<Borrower>> {
        Ok(self
            .database
            .borrowers
            .iter()
            .find(|entry| entry.value().email_address() == email)
            .map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Borrower>> {
        Ok(self
            .database
            .borrowers
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn exists_by_email_address(&self, email: &EmailAddress) -> DomainResult<bool> {
        Ok(self
            .database
            .borrowers
            .iter()
            .any(|entry| entry.value().email_address() == email))
    }
}

pub struct InMemoryCatalogEntryRepository {
    database: Arc<InMemoryDatabase>,
}

impl InMemoryCatalogEntryRepository {
    pub fn new(database: Arc<InMemoryDatabase>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl CatalogEntryRepository for InMemoryCatalogEntryRepository {
    async fn save(&self, entry: &CatalogEntry) -> DomainResult<()> {
        self.database
            .catalog_entries
            .insert(entry.isbn().clone(), entry.clone());
        Ok(())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> DomainResult<Option<CatalogEntry>> {
        Ok(self
            .database
            .catalog_entries
            .get(isbn)
            .map(|entry| entry.value().clone()))
    }

    async fn exists_by_isbn(&self, isbn: &Isbn) -> DomainResult<bool> {
        Ok(self.database.catalog_entries.contains_key(isbn))
    }
}
