pub mod dto;
pub mod use_cases;

pub use dto::CatalogEntryDetails;
pub use use_cases::get_catalog_entry_by_isbn::{
    GetCatalogEntryByIsbnHandler, GetCatalogEntryByIsbnQuery,
};
pub use use_cases::update_catalog_entry::{UpdateCatalogEntryCommand, UpdateCatalogEntryHandler};
