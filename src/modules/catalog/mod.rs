pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::dto::CatalogEntryDetails;
pub use domain::entities::CatalogEntry;
pub use domain::repositories::CatalogEntryRepository;
pub use domain::value_objects::Isbn;
