//! Cost allocation report sections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::dialogue::ResponseSnapshot;
use crate::domain::foundation::{whole_dollars, DomainError, ErrorCode, PropertyCategory, Timestamp};
use crate::domain::questionnaire::fields;

use super::calculator::CostAllocation;

/// Reasons a report cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Dialogue must be completed before generating a report")]
    DialogueNotComplete,
}

impl From<ReportError> for DomainError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::DialogueNotComplete => {
                DomainError::new(ErrorCode::DialogueNotComplete, err.to_string())
            }
        }
    }
}

/// Headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub depreciable_basis: i64,
    pub purchase_price: i64,
    /// Purchase price minus depreciable basis.
    pub land_value: i64,
    pub total_annual_depreciation: i64,
    pub first_year_benefit: i64,
    /// Marginal rate as a fraction (0.24 for 24%).
    pub tax_rate: f64,
    pub estimated_tax_savings: i64,
}

/// Building component answers echoed into the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeoffsBreakdown {
    pub foundation: Option<String>,
    pub walls: Option<String>,
    pub roofing: Option<String>,
    pub hvac: Option<String>,
    pub electrical: Option<String>,
    pub flooring: Option<String>,
    pub lighting: Option<String>,
    pub site_improvements: Option<String>,
    /// Special equipment if given, otherwise specialty system details.
    pub special_systems: Option<String>,
}

impl TakeoffsBreakdown {
    pub fn from_answers(answers: &ResponseSnapshot) -> Self {
        let text = |field: &str| answers.get(field).map(str::to_string);
        Self {
            foundation: text(fields::FOUNDATION_MATERIAL),
            walls: text(fields::WALL_MATERIAL),
            roofing: text(fields::ROOF_MATERIAL),
            hvac: text(fields::HVAC_SYSTEM_TYPE),
            electrical: text(fields::ELECTRICAL_SYSTEM_TYPE),
            flooring: text(fields::FLOORING_TYPES),
            lighting: text(fields::LIGHTING_TYPES),
            site_improvements: text(fields::SITE_IMPROVEMENTS),
            special_systems: answers
                .get(fields::SPECIAL_EQUIPMENT)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| answers.get(fields::SPECIALTY_SYSTEMS_DETAILS))
                .map(str::to_string),
        }
    }
}

/// Tax answers echoed into the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInformation {
    pub placed_in_service: Option<String>,
    pub property_use: Option<String>,
    pub acquisition_method: Option<String>,
    pub improvement_costs: i64,
    pub tax_bracket: Option<String>,
}

impl TaxInformation {
    pub fn from_answers(answers: &ResponseSnapshot) -> Self {
        let text = |field: &str| answers.get(field).map(str::to_string);
        Self {
            placed_in_service: text(fields::PLACED_IN_SERVICE_DATE),
            property_use: text(fields::PROPERTY_USE),
            acquisition_method: text(fields::ACQUISITION_METHOD),
            improvement_costs: whole_dollars(answers.get(fields::IMPROVEMENT_COSTS)),
            tax_bracket: text(fields::TAX_BRACKET),
        }
    }
}

/// Complete cost segregation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAllocationReport {
    pub category: PropertyCategory,
    pub summary: AllocationSummary,
    pub cost_allocation: CostAllocation,
    pub takeoffs_breakdown: TakeoffsBreakdown,
    pub tax_information: TaxInformation,
    pub generated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::ResponseStore;

    #[test]
    fn special_systems_prefers_special_equipment() {
        let mut store = ResponseStore::new();
        store.set(fields::SPECIAL_EQUIPMENT, "Server room");
        store.set(fields::SPECIALTY_SYSTEMS_DETAILS, "Fire suppression");
        let breakdown = TakeoffsBreakdown::from_answers(&store.snapshot());
        assert_eq!(breakdown.special_systems.as_deref(), Some("Server room"));
    }

    #[test]
    fn special_systems_falls_back_to_details() {
        let mut store = ResponseStore::new();
        store.set(fields::SPECIALTY_SYSTEMS_DETAILS, "Fire suppression");
        let breakdown = TakeoffsBreakdown::from_answers(&store.snapshot());
        assert_eq!(breakdown.special_systems.as_deref(), Some("Fire suppression"));
        assert_eq!(breakdown.foundation, None);
    }

    #[test]
    fn report_error_maps_to_domain_code() {
        let err: DomainError = ReportError::DialogueNotComplete.into();
        assert_eq!(err.code, ErrorCode::DialogueNotComplete);
    }
}
