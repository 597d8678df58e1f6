pub mod book_with_catalog;
pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use book_with_catalog::BookWithCatalog;
pub use entities::{Book, LendingState};
pub use repositories::BookRepository;
pub use value_objects::BookId;
