pub mod borrower_id;
pub mod email_address;

pub use borrower_id::BorrowerId;
pub use email_address::EmailAddress;
