pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::dto::BorrowerDetails;
pub use domain::entities::Borrower;
pub use domain::repositories::BorrowerRepository;
pub use domain::value_objects::{BorrowerId, EmailAddress};
