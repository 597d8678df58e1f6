pub mod command;
pub mod handler;

pub use command::ReturnBookCommand;
pub use handler::ReturnBookHandler;
