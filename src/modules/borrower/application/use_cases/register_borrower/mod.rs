pub mod command;
pub mod handler;

pub use command::RegisterBorrowerCommand;
pub use handler::RegisterBorrowerHandler;
