pub mod command;
pub mod handler;

pub use command::UpdateCatalogEntryCommand;
pub use handler::UpdateCatalogEntryHandler;
