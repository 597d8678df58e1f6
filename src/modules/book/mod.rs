pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::dto::BookDetails;
pub use domain::entities::{Book, LendingState};
pub use domain::repositories::BookRepository;
pub use domain::value_objects::BookId;
pub use domain::BookWithCatalog;
