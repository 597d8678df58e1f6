pub mod book_repository;

pub use book_repository::BookRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
