//! Prompt wording and option lists for the question catalog.
//!
//! Variant slices are picked from at build time; option lists are fixed per
//! category.

use crate::domain::foundation::PropertyCategory;

// ============================================================================
// Tax phase wording
// ============================================================================

pub const GREETING: &[&str] = &[
    "Hi there! I'm your tax assistant. Let's gather some information for your cost segregation analysis. Ready to begin?",
    "Hello! I'm here to help collect tax details for your property analysis. This will just take a few minutes. Shall we start?",
    "Welcome! I'll be guiding you through some tax questions for your cost segregation study. Let's get started!",
];

pub const GREETING_OPTIONS: &[&str] = &["Yes, let's begin", "I have questions first"];

pub fn depreciable_basis(category: PropertyCategory) -> &'static [&'static str] {
    match category {
        PropertyCategory::Residential => &[
            "Let's start with the financial details. What's the depreciable basis of your residential property? This is typically your purchase price minus the land value.",
            "For residential properties, we need the depreciable basis. This is usually what you paid for the property minus the value of the land underneath.",
            "What's the cost basis you'll use for depreciation on this residential property? Remember to exclude the land value from your total purchase price.",
        ],
        PropertyCategory::Commercial => &[
            "For commercial properties, what's your depreciable basis? This includes the building and improvements, but excludes land value.",
            "Let's discuss the depreciable basis for your commercial property. What's the building value excluding land?",
            "What's the depreciable cost basis for this commercial building? This should be your acquisition cost minus land value.",
        ],
        PropertyCategory::Industrial => &[
            "For industrial properties, what's your depreciable basis? This includes all building improvements and equipment, excluding land.",
            "What's the depreciable basis for your industrial facility? Include building and fixed equipment, but exclude land value.",
            "Let's determine the depreciable basis for your industrial property. What's the total cost minus land value?",
        ],
        PropertyCategory::MixedUse => &[
            "For mixed-use properties, what's your depreciable basis? Include both the commercial and residential portions of the building, but exclude land value.",
            "What's the depreciable basis for this mixed-use building? That's the total building cost across all uses, minus the land.",
            "Let's pin down the depreciable basis for your mixed-use property. What did the building itself cost, excluding land value?",
        ],
    }
}

pub const PURCHASE_PRICE: &[&str] = &[
    "What was the total purchase price of the property? This helps us verify our calculations.",
    "Could you share the total acquisition cost? We use this to validate the depreciable basis.",
];

pub const PLACED_IN_SERVICE: &[&str] = &[
    "When was this property first placed in service for business or rental use? Please provide the date (MM/DD/YYYY).",
    "What date did you first start using this property for business purposes? (MM/DD/YYYY format please)",
];

pub fn property_use(category: PropertyCategory) -> &'static [&'static str] {
    match category {
        PropertyCategory::Residential => &[
            "How do you plan to use this residential property?",
            "What's your intended use for this residential property?",
            "Tell me about how you'll be using this residential property:",
        ],
        PropertyCategory::Commercial => &[
            "What type of commercial use is planned for this property?",
            "How will this commercial property be utilized?",
            "What's the primary business use for this commercial property?",
        ],
        PropertyCategory::Industrial => &[
            "What type of industrial operations will take place here?",
            "How will this industrial facility be used?",
            "What's the primary industrial use for this property?",
        ],
        PropertyCategory::MixedUse => &[
            "How is this mixed-use property divided between its uses?",
            "What combination of uses will this mixed-use property have?",
            "Tell me how the space in this mixed-use building will be used:",
        ],
    }
}

pub fn property_use_options(category: PropertyCategory) -> &'static [&'static str] {
    match category {
        PropertyCategory::Residential => &[
            "Long-term rental property",
            "Short-term rental (Airbnb/VRBO)",
            "Primary residence with home office",
            "Investment property - hold and rent",
            "Fix and flip project",
        ],
        PropertyCategory::Commercial => &[
            "Office building",
            "Retail space",
            "Restaurant/Food service",
            "Medical/Healthcare facility",
            "Mixed-use commercial",
        ],
        PropertyCategory::Industrial => &[
            "Manufacturing facility",
            "Warehouse/Distribution",
            "Research and development",
            "Heavy machinery operations",
            "Storage facility",
        ],
        PropertyCategory::MixedUse => &[
            "Retail with apartments above",
            "Office with apartments above",
            "Restaurant with residential units",
            "Live/work units",
            "Other commercial and residential mix",
        ],
    }
}

pub const IMPROVEMENTS: &[&str] = &[
    "Have you made any significant improvements to the property after purchase? If yes, what was the total cost?",
    "Did you invest in any major renovations or improvements after acquiring the property? What was the total investment?",
];

pub const ACQUISITION_METHOD: &[&str] = &[
    "How did you acquire this property?",
    "What was the method of acquisition for this property?",
];

pub const ACQUISITION_OPTIONS: &[&str] = &[
    "Cash purchase",
    "Financed purchase",
    "Inherited property",
    "Received as gift",
    "1031 like-kind exchange",
    "Partnership contribution",
];

pub const TAX_BRACKET: &[&str] = &[
    "What's your approximate tax bracket? This helps estimate potential tax savings.",
    "To estimate your tax benefits, what's your current tax bracket?",
];

pub const TAX_BRACKET_OPTIONS: &[&str] = &[
    "22% (Individual: $41K-$89K, Married: $83K-$178K)",
    "24% (Individual: $89K-$191K, Married: $178K-$340K)",
    "32% (Individual: $191K-$416K, Married: $340K-$431K)",
    "35% (Individual: $416K-$418K, Married: $431K-$647K)",
    "37% (Individual: $418K+, Married: $647K+)",
];

pub const TAX_COMPLETION: &str = "Perfect! I've collected all the necessary tax information for your cost segregation analysis. Here's a summary of what we discussed:";

// ============================================================================
// Takeoffs phase wording
// ============================================================================

pub const PHASE_TRANSITION: &[&str] = &[
    "Great, that covers the tax details. Next I'll ask about the building's physical components so we can classify them. Ready to continue?",
    "Thanks! The tax portion is done. Now let's walk through the property takeoffs: foundation, walls, roof and building systems. Shall we continue?",
];

pub const PHASE_TRANSITION_OPTIONS: &[&str] = &["Continue to property takeoffs", "Let's keep going"];

pub const FOUNDATION: &[&str] = &[
    "What type of foundation does the building have?",
    "Let's start at the bottom. What is the building's foundation made of?",
];

pub const WALLS: &[&str] = &[
    "What is the primary exterior wall construction?",
    "How are the building's exterior walls constructed?",
];

pub const ROOF: &[&str] = &[
    "What kind of roofing system is installed?",
    "What material is the roof made of?",
];

pub const HVAC: &[&str] = &[
    "What type of HVAC system serves the building?",
    "How is the building heated and cooled?",
];

pub const ELECTRICAL: &[&str] = &[
    "How would you describe the electrical system?",
    "What kind of electrical service does the property have?",
];

pub const FLOORING: &[&str] = &[
    "What flooring types are used throughout the building? List all that apply (for example carpet, tile, hardwood, sealed concrete).",
    "Which floor coverings are installed? Please list each type (carpet, vinyl, tile, epoxy and so on).",
];

pub const LIGHTING: &[&str] = &[
    "What lighting is installed in the building?",
    "Which type of lighting best describes the property?",
];

pub const SITE_WORK: &[&str] = &[
    "Describe the site improvements on the property (parking, paving, landscaping, fencing, signage, drainage).",
    "What site work has been done outside the building? For example parking lots, sidewalks, landscaping or fencing.",
];

pub const SPECIALTY_SYSTEMS: &[&str] = &[
    "Does the property have any specialty systems such as security, fire suppression beyond code, or dedicated data cabling?",
    "Are there specialty building systems (security, specialized fire suppression, data/telecom) we should account for?",
];

pub const YES_NO_OPTIONS: &[&str] = &["Yes", "No"];

pub const SPECIALTY_DETAILS: &[&str] = &[
    "Please describe those specialty systems and their approximate cost if known.",
    "Tell me more about the specialty systems: what they are and roughly what they cost.",
];

pub const SPECIAL_EQUIPMENT: &[&str] = &[
    "Describe any specialized equipment that serves the business rather than the building (commercial kitchen, medical gas, refrigeration). Enter 'None' if there is none.",
    "Is there specialized business equipment installed, such as kitchen hoods, walk-in coolers or medical systems? Describe it, or enter 'None'.",
];

pub const LOADING_DOCKS: &[&str] = &[
    "How many loading docks does the facility have?",
    "How many dock doors or loading bays are there?",
];

pub const CRANE_SYSTEM: &[&str] = &[
    "Does the facility have any crane systems?",
    "Are there overhead or gantry cranes installed?",
];

pub const CRANE_OPTIONS: &[&str] = &[
    "Yes - overhead bridge crane",
    "Yes - gantry crane",
    "Yes - jib crane",
    "No crane systems",
];

pub const CRANE_DETAILS: &[&str] = &[
    "Please describe the crane systems: capacity, span, and whether the runway is part of the building structure.",
    "Tell me about the cranes: lifting capacity, coverage area and how they're supported.",
];

pub const COMMERCIAL_AREA: &[&str] = &[
    "Roughly what percentage of the building's floor area is used commercially?",
    "What share of the floor area (in percent) is commercial rather than residential?",
];

pub const COMBINED_COMPLETION: &str = "Perfect! I've collected all the tax and property takeoff information for your cost segregation analysis. Here's a summary of what we discussed:";

// ============================================================================
// Takeoffs option lists (None = category not recognized)
// ============================================================================

pub fn foundation_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Poured concrete slab",
            "Crawl space",
            "Full basement",
            "Pier and beam",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "Concrete slab on grade",
            "Spread footings",
            "Basement with parking level",
            "Deep piles or caissons",
        ],
        Some(PropertyCategory::Industrial) => &[
            "Reinforced slab on grade",
            "Thickened slab for heavy equipment",
            "Deep piles or caissons",
            "Spread footings",
        ],
        None => GENERIC_FOUNDATION,
    }
}

pub fn wall_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Wood frame with siding",
            "Brick veneer",
            "Stucco",
            "Concrete block",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "Curtain wall glass",
            "Brick or masonry",
            "Steel frame with metal panels",
            "Tilt-up concrete",
        ],
        Some(PropertyCategory::Industrial) => &[
            "Pre-engineered metal building",
            "Tilt-up concrete",
            "Concrete block",
            "Insulated metal panels",
        ],
        None => GENERIC_WALLS,
    }
}

pub fn roof_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Asphalt shingle",
            "Metal roofing",
            "Clay or concrete tile",
            "Flat membrane",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "TPO/EPDM membrane",
            "Built-up roofing",
            "Modified bitumen",
            "Standing seam metal",
        ],
        Some(PropertyCategory::Industrial) => &[
            "Standing seam metal",
            "TPO/EPDM membrane",
            "Built-up roofing",
            "Metal deck with insulation",
        ],
        None => GENERIC_ROOF,
    }
}

pub fn hvac_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Central forced air",
            "Heat pump",
            "Ductless mini-split",
            "Boiler with radiators",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "Rooftop packaged units",
            "Split systems",
            "Central plant with chillers",
            "Specialized HVAC for kitchens or labs",
        ],
        Some(PropertyCategory::Industrial) => &[
            "Industrial ventilation and exhaust",
            "Rooftop packaged units",
            "Radiant or unit heaters",
            "Specialized process cooling",
        ],
        None => GENERIC_HVAC,
    }
}

pub fn electrical_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Standard residential service (100-200A)",
            "Upgraded service (400A)",
            "Standard service with emergency generator",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "Standard commercial service",
            "Dedicated circuits for equipment",
            "Emergency backup power",
            "High voltage service with transformers",
        ],
        Some(PropertyCategory::Industrial) => &[
            "High voltage service (480V and above)",
            "Dedicated machinery circuits",
            "Emergency backup power",
            "Standard three-phase service",
        ],
        None => GENERIC_ELECTRICAL,
    }
}

pub fn lighting_options(category: Option<PropertyCategory>) -> &'static [&'static str] {
    match category {
        Some(PropertyCategory::Residential) => &[
            "Standard fixtures",
            "Recessed LED",
            "Decorative fixtures",
            "Exterior landscape lighting",
        ],
        Some(PropertyCategory::Commercial) | Some(PropertyCategory::MixedUse) => &[
            "LED troffers",
            "Track and accent lighting",
            "Decorative retail lighting",
            "Parking lot lighting",
        ],
        Some(PropertyCategory::Industrial) => &[
            "High-bay LED",
            "Metal halide high-bay",
            "Task lighting at workstations",
            "Yard and dock lighting",
        ],
        None => GENERIC_LIGHTING,
    }
}

const GENERIC_FOUNDATION: &[&str] = &["Concrete slab", "Basement", "Crawl space", "Other"];
const GENERIC_WALLS: &[&str] = &["Wood frame", "Masonry", "Steel frame", "Concrete", "Other"];
const GENERIC_ROOF: &[&str] = &["Shingle", "Membrane", "Metal", "Tile", "Other"];
const GENERIC_HVAC: &[&str] = &["Central system", "Packaged units", "Split systems", "Other"];
const GENERIC_ELECTRICAL: &[&str] = &["Standard service", "Upgraded service", "Other"];
const GENERIC_LIGHTING: &[&str] = &["Standard fixtures", "LED", "Decorative", "Other"];
