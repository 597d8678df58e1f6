//! Library lending core.
//!
//! The crate is organised into bounded contexts under [`modules`], a shared
//! kernel under [`shared`], and collaborator implementations (id generation,
//! in-memory persistence) under [`infrastructure`]. Transport, real storage
//! and auth live outside this crate; they talk to it through the use-case
//! handlers and repository ports.

pub mod infrastructure;
pub mod modules;
pub mod shared;

pub use shared::errors::{DomainError, DomainResult};
