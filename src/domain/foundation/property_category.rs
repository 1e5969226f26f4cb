//! PropertyCategory enum for the four supported property classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Property classification that parameterizes the question catalog
/// and selects the allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyCategory {
    #[default]
    Residential,
    Commercial,
    Industrial,
    MixedUse,
}

impl PropertyCategory {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [PropertyCategory] {
        &[
            PropertyCategory::Residential,
            PropertyCategory::Commercial,
            PropertyCategory::Industrial,
            PropertyCategory::MixedUse,
        ]
    }

    /// Parses a category name, falling back to `Residential` for anything
    /// unrecognized.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Returns the wire name (`mixed-use`, `commercial`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyCategory::Residential => "residential",
            PropertyCategory::Commercial => "commercial",
            PropertyCategory::Industrial => "industrial",
            PropertyCategory::MixedUse => "mixed-use",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyCategory::Residential => "Residential",
            PropertyCategory::Commercial => "Commercial",
            PropertyCategory::Industrial => "Industrial",
            PropertyCategory::MixedUse => "Mixed Use",
        }
    }

    /// Returns the recovery period for the building structure in years.
    ///
    /// Residential rental property uses 27.5 years; everything else is
    /// nonresidential real property at 39 years.
    pub fn real_property_recovery_years(&self) -> f64 {
        match self {
            PropertyCategory::Residential => 27.5,
            _ => 39.0,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PropertyCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "residential" => Ok(PropertyCategory::Residential),
            "commercial" => Ok(PropertyCategory::Commercial),
            "industrial" => Ok(PropertyCategory::Industrial),
            "mixeduse" => Ok(PropertyCategory::MixedUse),
            _ => Err(ValidationError::invalid_format(
                "property_category",
                format!("unknown category '{}'", s),
            )),
        }
    }
}
