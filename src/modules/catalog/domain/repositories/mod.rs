pub mod catalog_entry_repository;

pub use catalog_entry_repository::CatalogEntryRepository;

#[cfg(test)]
pub use catalog_entry_repository::MockCatalogEntryRepository;
