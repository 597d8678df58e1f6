pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::Borrower;
pub use repositories::BorrowerRepository;
pub use value_objects::{BorrowerId, EmailAddress};
