pub mod book;

pub use book::{Book, LendingState};
