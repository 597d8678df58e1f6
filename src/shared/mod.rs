// Shared kernel used across all bounded contexts.

pub mod application; // Use-case traits and the id generator port
pub mod domain; // Identity / entity abstractions
pub mod errors; // Error types surfaced by the core

pub use application::id_generator::IdGenerator;
pub use application::use_case::{Query, UseCase};
pub use errors::{DomainError, DomainResult};
