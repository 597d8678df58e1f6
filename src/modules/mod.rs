pub mod book;
pub mod borrower;
pub mod catalog;
