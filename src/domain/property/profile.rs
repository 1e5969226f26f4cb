//! Property profile collected before the dialogue starts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PropertyCategory};

/// Required profile fields missing from a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),
}

impl From<ProfileError> for DomainError {
    fn from(err: ProfileError) -> Self {
        let message = err.to_string();
        match err {
            ProfileError::MissingRequired(fields) => {
                DomainError::new(ErrorCode::ValidationFailed, message)
                    .with_detail("missing", fields.join(","))
            }
        }
    }
}

/// Basic facts about the property under study.
///
/// Field names follow the intake form (`zipCode`, `purchasePrice`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyProfile {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub purchase_price: Option<i64>,
    pub purchase_date: Option<NaiveDate>,
    pub property_type: String,
    pub square_footage: Option<u32>,
    pub year_built: Option<u16>,

    pub land_value: Option<i64>,
    pub building_value: Option<i64>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<f32>,
    pub lot_size: Option<f64>,
    pub description: Option<String>,
}

impl PropertyProfile {
    /// Checks required fields, reporting all missing ones together.
    ///
    /// # Errors
    ///
    /// `ProfileError::MissingRequired` listing form field names in form order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let blank = |s: &str| s.trim().is_empty();
        let checks: [(&'static str, bool); 9] = [
            ("address", blank(&self.address)),
            ("city", blank(&self.city)),
            ("state", blank(&self.state)),
            ("zipCode", blank(&self.zip_code)),
            ("purchasePrice", self.purchase_price.is_none()),
            ("purchaseDate", self.purchase_date.is_none()),
            ("propertyType", blank(&self.property_type)),
            ("squareFootage", self.square_footage.is_none()),
            ("yearBuilt", self.year_built.is_none()),
        ];

        let missing: Vec<&'static str> = checks
            .iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProfileError::MissingRequired(missing))
        }
    }

    /// Category implied by the property type, residential when unrecognized.
    pub fn category(&self) -> PropertyCategory {
        PropertyCategory::parse_or_default(&self.property_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PropertyProfile {
        PropertyProfile {
            address: "12 Harbor Way".to_string(),
            city: "Portland".to_string(),
            state: "ME".to_string(),
            zip_code: "04101".to_string(),
            purchase_price: Some(850_000),
            purchase_date: NaiveDate::from_ymd_opt(2023, 3, 1),
            property_type: "commercial".to_string(),
            square_footage: Some(12_000),
            year_built: Some(1987),
            ..Default::default()
        }
    }

    #[test]
    fn complete_profile_validates() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn empty_profile_reports_every_required_field() {
        let err = PropertyProfile::default().validate().unwrap_err();
        assert_eq!(
            err,
            ProfileError::MissingRequired(vec![
                "address",
                "city",
                "state",
                "zipCode",
                "purchasePrice",
                "purchaseDate",
                "propertyType",
                "squareFootage",
                "yearBuilt",
            ])
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let profile = PropertyProfile {
            city: "   ".to_string(),
            ..complete()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::MissingRequired(vec!["city"]))
        );
    }

    #[test]
    fn optional_fields_are_not_required() {
        let profile = complete();
        assert!(profile.land_value.is_none());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn category_resolves_loosely() {
        let profile = PropertyProfile {
            property_type: "Mixed Use".to_string(),
            ..complete()
        };
        assert_eq!(profile.category(), PropertyCategory::MixedUse);

        let unknown = PropertyProfile {
            property_type: "lighthouse".to_string(),
            ..complete()
        };
        assert_eq!(unknown.category(), PropertyCategory::Residential);
    }

    #[test]
    fn deserializes_form_json() {
        let json = r#"{
            "address": "1 Main St", "city": "Austin", "state": "TX", "zipCode": "78701",
            "purchasePrice": 600000, "purchaseDate": "2022-06-30", "propertyType": "industrial",
            "squareFootage": 40000, "yearBuilt": 2001, "bedrooms": null
        }"#;
        let profile: PropertyProfile = serde_json::from_str(json).unwrap();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.category(), PropertyCategory::Industrial);
    }

    #[test]
    fn missing_fields_surface_in_domain_error() {
        let err: DomainError = PropertyProfile::default().validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details["missing"].starts_with("address,city"));
    }
}
