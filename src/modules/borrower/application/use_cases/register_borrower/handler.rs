use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::borrower::application::dto::BorrowerDetails;
use crate::modules::borrower::domain::entities::Borrower;
use crate::modules::borrower::domain::repositories::BorrowerRepository;
use crate::modules::borrower::domain::value_objects::{BorrowerId, EmailAddress};
use crate::shared::application::id_generator::IdGenerator;
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{DomainError, DomainResult};

use super::command::RegisterBorrowerCommand;

/// Use case handler for registering a new borrower.
///
/// The duplicate-email check runs before id generation so that the
/// conflict path has no side effects at all.
pub struct RegisterBorrowerHandler {
    borrower_repository: Arc<dyn BorrowerRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl RegisterBorrowerHandler {
    pub fn new(
        borrower_repository: Arc<dyn BorrowerRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            borrower_repository,
            id_generator,
        }
    }
}

#[async_trait]
impl UseCase<RegisterBorrowerCommand, BorrowerDetails> for RegisterBorrowerHandler {
    async fn execute(&self, command: RegisterBorrowerCommand) -> DomainResult<BorrowerDetails> {
        let email_address = EmailAddress::new(&command.email_address)?;

        if self
            .borrower_repository
            .exists_by_email_address(&email_address)
            .await?
        {
            return Err(DomainError::conflict(format!(
                "A borrower with email {} already exists",
                command.email_address
            )));
        }

        let borrower_id = BorrowerId::new(self.id_generator.generate())?;
        let borrower = Borrower::register(borrower_id, &command.name, email_address)?;
        self.borrower_repository.save(&borrower).await?;

        log::info!("Registered borrower {}", borrower.email_address());

        Ok(BorrowerDetails::from_borrower(&borrower))
    }
}
