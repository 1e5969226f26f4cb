//! Allocation module - cost segregation arithmetic.
//!
//! Pure functions from a completed response snapshot and a property category
//! to a `CostAllocationReport`. No I/O.

mod calculator;
mod report;
mod tables;

pub use calculator::{
    AllocationCalculator, ClassAllocation, CostAllocation, DEFAULT_TAX_RATE_PERCENT,
    LAND_IMPROVEMENT_BONUS_FACTOR, LAND_IMPROVEMENT_YEARS, PERSONAL_PROPERTY_YEARS,
};
pub use report::{AllocationSummary, CostAllocationReport, ReportError, TakeoffsBreakdown, TaxInformation};
pub use tables::{Adjustment, AdjustmentReason, AllocationTable};
