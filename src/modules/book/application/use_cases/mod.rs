pub mod borrow_book;
pub mod get_all_books;
pub mod register_book;
pub mod return_book;
