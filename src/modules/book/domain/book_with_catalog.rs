use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::book::domain::entities::Book;
use crate::modules::book::domain::value_objects::BookId;
use crate::modules::borrower::domain::value_objects::BorrowerId;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::domain::Entity;

/// Join-like projection of a copy together with its catalog metadata,
/// produced by the "list all books" read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookWithCatalog {
    pub id: BookId,
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub borrower_id: Option<BorrowerId>,
    pub borrowed_on: Option<DateTime<Utc>>,
}

impl BookWithCatalog {
    pub fn from_book(book: &Book, title: &str, author: &str) -> Self {
        Self {
            id: book.id().clone(),
            isbn: book.isbn().clone(),
            title: title.to_string(),
            author: author.to_string(),
            available: book.is_available(),
            borrower_id: book.borrower_id().cloned(),
            borrowed_on: book.borrowed_on(),
        }
    }
}
