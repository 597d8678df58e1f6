/// Command for borrowing a copy.
#[derive(Debug, Clone)]
pub struct BorrowBookCommand {
    pub book_id: String,
    pub borrower_id: String,
}

impl BorrowBookCommand {
    pub fn new(book_id: impl Into<String>, borrower_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            borrower_id: borrower_id.into(),
        }
    }
}
