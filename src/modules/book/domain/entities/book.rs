use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::book::domain::value_objects::BookId;
use crate::modules::borrower::domain::value_objects::BorrowerId;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::domain::Entity;
use crate::shared::errors::{DomainError, DomainResult};

/// Circulation status of a copy. Holder and timestamp live in one
/// variant, so "borrower set but no timestamp" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LendingState {
    Available,
    #[serde(rename_all = "camelCase")]
    Borrowed {
        borrower_id: BorrowerId,
        since: DateTime<Utc>,
    },
}

/// A physical, uniquely identified copy of a catalog entry.
///
/// The aggregate cycles between `Available` and `Borrowed` for its whole
/// lifetime; the ISBN never changes after registration. Whether the
/// *right* borrower is returning a copy is a use-case concern — this
/// state machine can only tell "borrowed" from "not borrowed".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    isbn: Isbn,
    state: LendingState,
}

impl Book {
    /// Register a new copy. Every copy starts out available.
    pub fn register(id: BookId, isbn: Isbn) -> Self {
        Self {
            id,
            isbn,
            state: LendingState::Available,
        }
    }

    /// Rehydrate a borrowed copy from storage.
    pub fn borrowed_at(
        id: BookId,
        isbn: Isbn,
        borrower_id: BorrowerId,
        since: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            isbn,
            state: LendingState::Borrowed { borrower_id, since },
        }
    }

    /// Lend the copy out, stamped with the current UTC time.
    pub fn borrow(&mut self, borrower_id: BorrowerId) -> DomainResult<()> {
        self.borrow_at(borrower_id, Utc::now())
    }

    /// Lend the copy out with an explicit timestamp. Exists to keep the
    /// transition deterministic for tests and storage reconstruction.
    pub fn borrow_at(&mut self, borrower_id: BorrowerId, at: DateTime<Utc>) -> DomainResult<()> {
        if !self.is_available() {
            return Err(DomainError::state("Book is already borrowed"));
        }
        self.state = LendingState::Borrowed {
            borrower_id,
            since: at,
        };
        Ok(())
    }

    /// Take the copy back, clearing holder and timestamp.
    pub fn return_book(&mut self) -> DomainResult<()> {
        if self.is_available() {
            return Err(DomainError::state("Book is not borrowed"));
        }
        self.state = LendingState::Available;
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, LendingState::Available)
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn state(&self) -> &LendingState {
        &self.state
    }

    pub fn borrower_id(&self) -> Option<&BorrowerId> {
        match &self.state {
            LendingState::Available => None,
            LendingState::Borrowed { borrower_id, .. } => Some(borrower_id),
        }
    }

    pub fn borrowed_on(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            LendingState::Available => None,
            LendingState::Borrowed { since, .. } => Some(*since),
        }
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &BookId {
        &self.id
    }
}
