//! Allocation calculator.
//!
//! Splits the depreciable basis into personal property (5-year), land
//! improvements (15-year) and real property (27.5 or 39-year) and derives the
//! first-year tax benefit.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::dialogue::ResponseSnapshot;
use crate::domain::foundation::{whole_dollars, PropertyCategory, Timestamp};
use crate::domain::questionnaire::fields;

use super::report::{AllocationSummary, CostAllocationReport, TakeoffsBreakdown, TaxInformation};
use super::tables::{Adjustment, AllocationTable};

/// Recovery period for personal property, in years.
pub const PERSONAL_PROPERTY_YEARS: f64 = 5.0;

/// Recovery period for land improvements, in years.
pub const LAND_IMPROVEMENT_YEARS: f64 = 15.0;

/// Share of the land-improvement annual amount taken as bonus in year one.
pub const LAND_IMPROVEMENT_BONUS_FACTOR: f64 = 0.5;

/// Marginal rate used when the bracket answer carries no percentage.
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 24;

static BRACKET_RATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)%").expect("bracket rate pattern is valid"));

/// One asset class in the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassAllocation {
    pub value: i64,
    pub percentage: f64,
    pub depreciation_period: f64,
    pub annual_depreciation: i64,
}

impl ClassAllocation {
    fn new(value: i64, percentage: f64, depreciation_period: f64) -> Self {
        Self {
            value,
            percentage,
            depreciation_period,
            annual_depreciation: (value as f64 / depreciation_period).round() as i64,
        }
    }
}

/// The basis split across the three asset classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAllocation {
    pub personal_property: ClassAllocation,
    pub land_improvements: ClassAllocation,
    pub real_property: ClassAllocation,
    pub adjustments: Vec<Adjustment>,
}

impl CostAllocation {
    pub fn total_annual_depreciation(&self) -> i64 {
        self.personal_property.annual_depreciation
            + self.land_improvements.annual_depreciation
            + self.real_property.annual_depreciation
    }

    /// Personal property annual amount plus half of the land improvements one.
    pub fn first_year_benefit(&self) -> i64 {
        self.personal_property.annual_depreciation
            + (self.land_improvements.annual_depreciation as f64 * LAND_IMPROVEMENT_BONUS_FACTOR)
                .round() as i64
    }
}

/// Stateless allocation functions over a completed response snapshot.
pub struct AllocationCalculator;

impl AllocationCalculator {
    /// Splits `basis` using the category table adjusted by the answers.
    ///
    /// Real property absorbs rounding so the three values sum to `basis`.
    /// Its percentage is recomputed from the value (0 when basis is 0).
    pub fn allocate(basis: i64, category: PropertyCategory, answers: &ResponseSnapshot) -> CostAllocation {
        let (table, adjustments) = AllocationTable::for_category(category).adjusted(answers);

        let share = |pct: f64| (basis as f64 * pct / 100.0).round() as i64;
        let personal = share(table.personal_property.value() as f64);
        let land = share(table.land_improvements.value() as f64);
        let real = basis.saturating_sub(personal).saturating_sub(land);
        let real_pct = if basis == 0 {
            0.0
        } else {
            real as f64 / basis as f64 * 100.0
        };

        CostAllocation {
            personal_property: ClassAllocation::new(
                personal,
                table.personal_property.value() as f64,
                PERSONAL_PROPERTY_YEARS,
            ),
            land_improvements: ClassAllocation::new(
                land,
                table.land_improvements.value() as f64,
                LAND_IMPROVEMENT_YEARS,
            ),
            real_property: ClassAllocation::new(
                real,
                real_pct,
                category.real_property_recovery_years(),
            ),
            adjustments,
        }
    }

    /// Reads the leading `NN%` from a bracket answer; defaults to 24%.
    pub fn tax_rate(bracket: Option<&str>) -> f64 {
        let percent = bracket
            .and_then(|text| BRACKET_RATE.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TAX_RATE_PERCENT);
        percent as f64 / 100.0
    }

    /// Builds the full report from a completed snapshot.
    pub fn report(answers: &ResponseSnapshot, category: PropertyCategory) -> CostAllocationReport {
        let basis = whole_dollars(answers.get(fields::DEPRECIABLE_BASIS));
        let purchase_price = whole_dollars(answers.get(fields::PURCHASE_PRICE));
        let allocation = Self::allocate(basis, category, answers);

        let first_year_benefit = allocation.first_year_benefit();
        let tax_rate = Self::tax_rate(answers.get(fields::TAX_BRACKET));
        let estimated_tax_savings = (first_year_benefit as f64 * tax_rate).round() as i64;

        tracing::info!(
            category = category.as_str(),
            basis,
            adjustments = allocation.adjustments.len(),
            first_year_benefit,
            "cost allocation computed"
        );

        CostAllocationReport {
            category,
            summary: AllocationSummary {
                depreciable_basis: basis,
                purchase_price,
                land_value: purchase_price.saturating_sub(basis),
                total_annual_depreciation: allocation.total_annual_depreciation(),
                first_year_benefit,
                tax_rate,
                estimated_tax_savings,
            },
            takeoffs_breakdown: TakeoffsBreakdown::from_answers(answers),
            tax_information: TaxInformation::from_answers(answers),
            cost_allocation: allocation,
            generated_at: Timestamp::now(),
        }
    }
}
