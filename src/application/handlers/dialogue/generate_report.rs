//! GenerateReportHandler - Query handler producing the cost allocation report.

use std::sync::Arc;

use crate::domain::allocation::{AllocationCalculator, CostAllocationReport, ReportError};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::DialogueSessionRepository;

/// Query for the report of a completed session.
#[derive(Debug, Clone)]
pub struct GenerateReportQuery {
    pub session_id: SessionId,
}

/// Handler for generating reports.
pub struct GenerateReportHandler {
    repository: Arc<dyn DialogueSessionRepository>,
}

impl GenerateReportHandler {
    pub fn new(repository: Arc<dyn DialogueSessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GenerateReportQuery) -> Result<CostAllocationReport, DomainError> {
        let session = self
            .repository
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Dialogue session not found")
                    .with_detail("session_id", query.session_id.to_string())
            })?;

        if !session.is_completed() {
            return Err(ReportError::DialogueNotComplete.into());
        }

        Ok(AllocationCalculator::report(&session.snapshot(), session.category()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionRepository;
    use crate::domain::dialogue::DialogueSession;
    use crate::domain::foundation::PropertyCategory;
    use crate::domain::questionnaire::{CatalogBuilder, CatalogFlavor, PhrasingRng};

    fn commercial_session() -> DialogueSession {
        let catalog = CatalogBuilder::new(PropertyCategory::Commercial, CatalogFlavor::TaxOnly)
            .build(&mut PhrasingRng::seeded(2))
            .unwrap();
        DialogueSession::start(SessionId::new(), PropertyCategory::Commercial, catalog).0
    }

    #[tokio::test]
    async fn incomplete_session_cannot_be_reported() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let session = commercial_session();
        repository.save(&session).await.unwrap();

        let err = GenerateReportHandler::new(repository)
            .handle(GenerateReportQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DialogueNotComplete);
    }

    #[tokio::test]
    async fn completed_session_produces_report() {
        let repository = Arc::new(InMemorySessionRepository::new());
        let mut session = commercial_session();
        for answer in ["Yes", "500000", "600000", "2023-01-15", "Office building", "0", "Purchase", "24%"] {
            session.submit(answer).unwrap();
        }
        repository.save(&session).await.unwrap();

        let report = GenerateReportHandler::new(repository)
            .handle(GenerateReportQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(report.category, PropertyCategory::Commercial);
        assert_eq!(report.cost_allocation.personal_property.value, 125_000);
        assert_eq!(report.summary.estimated_tax_savings, 6_600);
    }
}
