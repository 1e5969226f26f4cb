//! Base allocation tables and answer-driven adjustments.

use serde::{Deserialize, Serialize};

use crate::domain::dialogue::ResponseSnapshot;
use crate::domain::foundation::{Percentage, PropertyCategory};
use crate::domain::questionnaire::fields;

/// Share of the depreciable basis assigned to each asset class.
///
/// Real property is whatever is left after the other two classes, so the
/// three shares always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTable {
    pub personal_property: Percentage,
    pub land_improvements: Percentage,
    pub real_property: Percentage,
}

impl AllocationTable {
    pub const fn new(personal_property: u8, land_improvements: u8, real_property: u8) -> Self {
        Self {
            personal_property: Percentage::new(personal_property),
            land_improvements: Percentage::new(land_improvements),
            real_property: Percentage::new(real_property),
        }
    }

    /// Base table for a category before adjustments.
    pub const fn for_category(category: PropertyCategory) -> Self {
        match category {
            PropertyCategory::Residential => Self::new(15, 10, 75),
            PropertyCategory::Commercial => Self::new(25, 15, 60),
            PropertyCategory::Industrial => Self::new(35, 20, 45),
            PropertyCategory::MixedUse => Self::new(20, 12, 68),
        }
    }

    /// Moves `points` from real property to personal property.
    pub fn shift_to_personal(self, points: u8) -> Self {
        Self {
            personal_property: self.personal_property.plus(points),
            land_improvements: self.land_improvements,
            real_property: self.real_property.minus(points),
        }
    }

    /// Applies every adjustment that the answers trigger.
    pub fn adjusted(self, answers: &ResponseSnapshot) -> (Self, Vec<Adjustment>) {
        let applied = Adjustment::detect(answers);
        let table = applied
            .iter()
            .fold(self, |table, adjustment| table.shift_to_personal(adjustment.points));
        (table, applied)
    }
}

/// Why personal property was increased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentReason {
    SpecialEquipment,
    SpecializedHvac,
    HeavyElectrical,
}

impl AdjustmentReason {
    pub fn points(&self) -> u8 {
        match self {
            Self::SpecialEquipment => 5,
            Self::SpecializedHvac => 3,
            Self::HeavyElectrical => 2,
        }
    }
}

/// An applied adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub reason: AdjustmentReason,
    pub points: u8,
}

impl Adjustment {
    fn from_reason(reason: AdjustmentReason) -> Self {
        Self {
            reason,
            points: reason.points(),
        }
    }

    /// Adjustments triggered by the answers, in fixed order.
    pub fn detect(answers: &ResponseSnapshot) -> Vec<Adjustment> {
        let mut applied = Vec::new();

        if answers
            .get(fields::SPECIAL_EQUIPMENT)
            .map(is_meaningful)
            .unwrap_or(false)
        {
            applied.push(Self::from_reason(AdjustmentReason::SpecialEquipment));
        }
        if mentions_any(answers.get(fields::HVAC_SYSTEM_TYPE), &["specialized", "industrial"]) {
            applied.push(Self::from_reason(AdjustmentReason::SpecializedHvac));
        }
        if mentions_any(
            answers.get(fields::ELECTRICAL_SYSTEM_TYPE),
            &["high voltage", "emergency"],
        ) {
            applied.push(Self::from_reason(AdjustmentReason::HeavyElectrical));
        }

        applied
    }
}

const NEGATIVE_ANSWERS: &[&str] = &["none", "no", "n/a", "na", "nothing"];

/// True when a free-text answer describes something rather than declining.
fn is_meaningful(raw: &str) -> bool {
    let trimmed = raw.trim().trim_end_matches('.').to_lowercase();
    !trimmed.is_empty() && !NEGATIVE_ANSWERS.contains(&trimmed.as_str())
}

fn mentions_any(raw: Option<&str>, needles: &[&str]) -> bool {
    raw.map(|value| {
        let lowered = value.to_lowercase();
        needles.iter().any(|needle| lowered.contains(needle))
    })
    .unwrap_or(false)
}
