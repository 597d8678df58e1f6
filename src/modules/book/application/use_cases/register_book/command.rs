/// Command for registering a new physical copy against the catalog.
#[derive(Debug, Clone)]
pub struct RegisterBookCommand {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl RegisterBookCommand {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}
