/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod id_generator;
pub mod use_case;

pub use id_generator::IdGenerator;
pub use use_case::{Query, UseCase};
