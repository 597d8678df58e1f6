pub mod get_all_borrowers;
pub mod register_borrower;
