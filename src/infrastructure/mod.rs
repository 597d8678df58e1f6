// Collaborator implementations living outside the domain/use-case core.

pub mod id;
pub mod persistence;

pub use id::UuidGenerator;
pub use persistence::in_memory::{
    InMemoryBookRepository, InMemoryBorrowerRepository, InMemoryCatalogEntryRepository,
    InMemoryDatabase,
};
