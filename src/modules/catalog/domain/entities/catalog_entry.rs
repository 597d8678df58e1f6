use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::domain::Entity;
use crate::shared::errors::{DomainError, DomainResult};

/// Canonical bibliographic record, keyed by its normalized ISBN.
///
/// Title and author are trimmed and never blank; any sequence of updates
/// is legal as long as that holds after each call. Entries are created on
/// the first registration of a copy with their ISBN and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    isbn: Isbn,
    title: String,
    author: String,
}

impl CatalogEntry {
    pub fn new(isbn: Isbn, title: &str, author: &str) -> DomainResult<Self> {
        Ok(Self {
            isbn,
            title: validated("Title", title)?,
            author: validated("Author", author)?,
        })
    }

    pub fn update_title(&mut self, title: &str) -> DomainResult<()> {
        self.title = validated("Title", title)?;
        Ok(())
    }

    pub fn update_author(&mut self, author: &str) -> DomainResult<()> {
        self.author = validated("Author", author)?;
        Ok(())
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

fn validated(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be blank", field)));
    }
    Ok(trimmed.to_string())
}

impl Entity for CatalogEntry {
    type Id = Isbn;

    fn id(&self) -> &Isbn {
        &self.isbn
    }
}
