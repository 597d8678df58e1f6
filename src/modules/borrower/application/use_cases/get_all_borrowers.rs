use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::borrower::application::dto::BorrowerDetails;
use crate::modules::borrower::domain::repositories::BorrowerRepository;
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

/// Query for listing every registered borrower.
#[derive(Debug, Clone, Default)]
pub struct GetAllBorrowersQuery;

pub struct GetAllBorrowersHandler {
    borrower_repository: Arc<dyn BorrowerRepository>,
}

impl GetAllBorrowersHandler {
    pub fn new(borrower_repository: Arc<dyn BorrowerRepository>) -> Self {
        Self {
            borrower_repository,
        }
    }
}

#[async_trait]
impl Query<GetAllBorrowersQuery, Vec<BorrowerDetails>> for GetAllBorrowersHandler {
    async fn execute(&self, _query: GetAllBorrowersQuery) -> DomainResult<Vec<BorrowerDetails>> {
        let borrowers = self.borrower_repository.find_all().await?;
        Ok(borrowers.iter().map(BorrowerDetails::from_borrower).collect())
    }
}
