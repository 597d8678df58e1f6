pub mod command;
pub mod handler;

pub use command::RegisterBookCommand;
pub use handler::RegisterBookHandler;
