use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::book::domain::book_with_catalog::BookWithCatalog;
use crate::modules::book::domain::entities::Book;
use crate::modules::catalog::domain::entities::CatalogEntry;
use crate::shared::domain::Entity;

/// Read projection of a copy plus its catalog metadata, in canonical
/// strings ready for serialization by an external transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub borrower_id: Option<String>,
    pub borrowed_on: Option<DateTime<Utc>>,
}

impl BookDetails {
    pub fn from_book(book: &Book, entry: &CatalogEntry) -> Self {
        Self {
            id: book.id().value().to_string(),
            isbn: book.isbn().value().to_string(),
            title: entry.title().to_string(),
            author: entry.author().to_string(),
            available: book.is_available(),
            borrower_id: book.borrower_id().map(|id| id.value().to_string()),
            borrowed_on: book.borrowed_on(),
        }
    }

    pub fn from_projection(row: &BookWithCatalog) -> Self {
        Self {
            id: row.id.value().to_string(),
            isbn: row.isbn.value().to_string(),
            title: row.title.clone(),
            author: row.author.clone(),
            available: row.available,
            borrower_id: row.borrower_id.as_ref().map(|id| id.value().to_string()),
            borrowed_on: row.borrowed_on,
        }
    }
}
