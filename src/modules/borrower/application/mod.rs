pub mod dto;
pub mod use_cases;

pub use dto::BorrowerDetails;
pub use use_cases::get_all_borrowers::{GetAllBorrowersHandler, GetAllBorrowersQuery};
pub use use_cases::register_borrower::{RegisterBorrowerCommand, RegisterBorrowerHandler};
