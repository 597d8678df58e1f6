/// Command for updating the title/author of an existing catalog entry.
#[derive(Debug, Clone)]
pub struct UpdateCatalogEntryCommand {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl UpdateCatalogEntryCommand {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}
