pub mod dto;
pub mod use_cases;

pub use dto::BookDetails;
pub use use_cases::borrow_book::{BorrowBookCommand, BorrowBookHandler};
pub use use_cases::get_all_books::{GetAllBooksHandler, GetAllBooksQuery};
pub use use_cases::register_book::{RegisterBookCommand, RegisterBookHandler};
pub use use_cases::return_book::{ReturnBookCommand, ReturnBookHandler};
