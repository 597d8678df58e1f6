pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::CatalogEntry;
pub use repositories::CatalogEntryRepository;
pub use value_objects::Isbn;
