pub mod in_memory;

pub use in_memory::{
    InMemoryBookRepository, InMemoryBorrowerRepository, InMemoryCatalogEntryRepository,
    InMemoryDatabase,
};
