/// Command for registering a new borrower.
#[derive(Debug, Clone)]
pub struct RegisterBorrowerCommand {
    pub name: String,
    pub email_address: String,
}

impl RegisterBorrowerCommand {
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email_address: email_address.into(),
        }
    }
}
