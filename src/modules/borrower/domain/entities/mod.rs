pub mod borrower;

pub use borrower::Borrower;
