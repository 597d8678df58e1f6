pub mod borrower_repository;

pub use borrower_repository::BorrowerRepository;

#[cfg(test)]
pub use borrower_repository::MockBorrowerRepository;
