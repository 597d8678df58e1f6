use serde::Serialize;

use crate::modules::catalog::domain::entities::CatalogEntry;

/// Read projection of a catalog entry for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryDetails {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl CatalogEntryDetails {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            isbn: entry.isbn().value().to_string(),
            title: entry.title().to_string(),
            author: entry.author().to_string(),
        }
    }
}
