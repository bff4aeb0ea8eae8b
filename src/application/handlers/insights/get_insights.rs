//! GetInsightsHandler - Query handler for aggregate statistics.

use std::sync::Arc;

use crate::domain::decision::DecisionError;
use crate::domain::foundation::UserId;
use crate::domain::insights::InsightSummary;
use crate::ports::DecisionRepository;

/// Query for one owner's insight summary.
#[derive(Debug, Clone)]
pub struct GetInsightsQuery {
    pub owner_id: UserId,
}

/// Handler for computing insights. Takes a read-only snapshot of the
/// owner's decisions; the aggregation itself is pure.
pub struct GetInsightsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetInsightsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetInsightsQuery) -> Result<InsightSummary, DecisionError> {
        let decisions = self.repository.list_by_owner(&query.owner_id).await?;
        Ok(InsightSummary::compute(&decisions))
    }
}
