//! Response field identifiers shared by the catalog, the recap and the
//! allocation calculator.

// Tax phase
pub const DEPRECIABLE_BASIS: &str = "depreciableBasis";
pub const PURCHASE_PRICE: &str = "purchasePrice";
pub const PLACED_IN_SERVICE_DATE: &str = "placedInServiceDate";
pub const PROPERTY_USE: &str = "propertyUse";
pub const IMPROVEMENT_COSTS: &str = "improvementCosts";
pub const ACQUISITION_METHOD: &str = "acquisitionMethod";
pub const TAX_BRACKET: &str = "taxBracket";

// Takeoffs phase
pub const FOUNDATION_MATERIAL: &str = "foundationMaterial";
pub const WALL_MATERIAL: &str = "wallMaterial";
pub const ROOF_MATERIAL: &str = "roofMaterial";
pub const HVAC_SYSTEM_TYPE: &str = "hvacSystemType";
pub const ELECTRICAL_SYSTEM_TYPE: &str = "electricalSystemType";
pub const FLOORING_TYPES: &str = "flooringTypes";
pub const LIGHTING_TYPES: &str = "lightingTypes";
pub const SITE_IMPROVEMENTS: &str = "siteImprovements";
pub const HAS_SPECIALTY_SYSTEMS: &str = "hasSpecialtySystems";
pub const SPECIALTY_SYSTEMS_DETAILS: &str = "specialtySystemsDetails";

// Category extras
pub const SPECIAL_EQUIPMENT: &str = "specialEquipment";
pub const LOADING_DOCKS: &str = "loadingDocks";
pub const CRANE_SYSTEM: &str = "craneSystem";
pub const CRANE_DETAILS: &str = "craneDetails";
pub const COMMERCIAL_AREA_PERCENT: &str = "commercialAreaPercent";

/// How a field's raw answer is rendered in the completion recap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Whole dollars with thousands separators.
    Currency,
    /// Raw text as entered.
    Plain,
}

/// Returns the recap label for a field id, or the id itself when unknown.
pub fn label(field: &str) -> &str {
    match field {
        DEPRECIABLE_BASIS => "Depreciable Basis",
        PURCHASE_PRICE => "Purchase Price",
        PLACED_IN_SERVICE_DATE => "Placed in Service",
        PROPERTY_USE => "Property Use",
        IMPROVEMENT_COSTS => "Improvements",
        ACQUISITION_METHOD => "Acquisition Method",
        TAX_BRACKET => "Tax Bracket",
        FOUNDATION_MATERIAL => "Foundation",
        WALL_MATERIAL => "Walls",
        ROOF_MATERIAL => "Roofing",
        HVAC_SYSTEM_TYPE => "HVAC",
        ELECTRICAL_SYSTEM_TYPE => "Electrical",
        FLOORING_TYPES => "Flooring",
        LIGHTING_TYPES => "Lighting",
        SITE_IMPROVEMENTS => "Site Improvements",
        HAS_SPECIALTY_SYSTEMS => "Specialty Systems",
        SPECIALTY_SYSTEMS_DETAILS => "Specialty System Details",
        SPECIAL_EQUIPMENT => "Specialized Equipment",
        LOADING_DOCKS => "Loading Docks",
        CRANE_SYSTEM => "Crane Systems",
        CRANE_DETAILS => "Crane Details",
        COMMERCIAL_AREA_PERCENT => "Commercial Floor Area (%)",
        other => other,
    }
}

/// Returns the recap format for a field id.
pub fn format(field: &str) -> FieldFormat {
    match field {
        DEPRECIABLE_BASIS | PURCHASE_PRICE | IMPROVEMENT_COSTS => FieldFormat::Currency,
        _ => FieldFormat::Plain,
    }
}
