pub mod command;
pub mod handler;

pub use command::BorrowBookCommand;
pub use handler::BorrowBookHandler;
