//! Question catalog builder.
//!
//! Produces the ordered question list for a property category. Only prompt
//! wording depends on the RNG; ids, types, fields, options and conditions are
//! fixed for a given category and flavor.

use crate::domain::foundation::PropertyCategory;

use super::catalog::{Catalog, CatalogError, CatalogFlavor};
use super::fields;
use super::phrasing::PhrasingRng;
use super::question::{Phase, Question, SkipCondition};
use super::templates;

/// Builds catalogs for one category.
///
/// `category` is `None` when the caller supplied a name we do not recognize.
/// Tax wording then falls back to residential and takeoff option lists fall
/// back to a generic set.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    category: Option<PropertyCategory>,
    flavor: CatalogFlavor,
}

impl CatalogBuilder {
    pub fn new(category: PropertyCategory, flavor: CatalogFlavor) -> Self {
        Self {
            category: Some(category),
            flavor,
        }
    }

    /// Loose entry point for category names coming from forms or the CLI.
    pub fn for_category_name(name: &str, flavor: CatalogFlavor) -> Self {
        let category = name.parse::<PropertyCategory>().ok();
        if category.is_none() {
            tracing::debug!(category = name, "unrecognized property category, using defaults");
        }
        Self { category, flavor }
    }

    /// Category used for wording and allocation (residential when unrecognized).
    pub fn resolved_category(&self) -> PropertyCategory {
        self.category.unwrap_or_default()
    }

    pub fn flavor(&self) -> CatalogFlavor {
        self.flavor
    }

    /// Builds a catalog, drawing wording variants from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the built-in question lists break a
    /// catalog invariant.
    pub fn build(&self, rng: &mut PhrasingRng) -> Result<Catalog, CatalogError> {
        let mut questions = self.tax_questions(rng);

        let (completion_text, completion_phase) = if self.flavor.includes_takeoffs() {
            questions.extend(self.takeoff_questions(rng));
            (templates::COMBINED_COMPLETION, Phase::PropertyTakeoffs)
        } else {
            (templates::TAX_COMPLETION, Phase::Tax)
        };
        questions.push(Question::summary("completion", completion_text).in_phase(completion_phase));

        Catalog::new(questions, self.flavor)
    }

    fn tax_questions(&self, rng: &mut PhrasingRng) -> Vec<Question> {
        // Tax wording exists for every recognized category
        let category = self.resolved_category();

        vec![
            Question::confirmation(
                "greeting",
                rng.pick(templates::GREETING),
                templates::GREETING_OPTIONS.iter().copied(),
            ),
            Question::numeric(
                "depreciableBasis",
                rng.pick(templates::depreciable_basis(category)),
                fields::DEPRECIABLE_BASIS,
            ),
            Question::numeric(
                "purchasePrice",
                rng.pick(templates::PURCHASE_PRICE),
                fields::PURCHASE_PRICE,
            ),
            Question::date(
                "placedInService",
                rng.pick(templates::PLACED_IN_SERVICE),
                fields::PLACED_IN_SERVICE_DATE,
            ),
            Question::single_select(
                "propertyUse",
                rng.pick(templates::property_use(category)),
                fields::PROPERTY_USE,
                templates::property_use_options(category).iter().copied(),
            ),
            Question::numeric(
                "improvements",
                rng.pick(templates::IMPROVEMENTS),
                fields::IMPROVEMENT_COSTS,
            )
            .allowing_zero(),
            Question::single_select(
                "acquisitionMethod",
                rng.pick(templates::ACQUISITION_METHOD),
                fields::ACQUISITION_METHOD,
                templates::ACQUISITION_OPTIONS.iter().copied(),
            ),
            Question::single_select(
                "taxBracket",
                rng.pick(templates::TAX_BRACKET),
                fields::TAX_BRACKET,
                templates::TAX_BRACKET_OPTIONS.iter().copied(),
            ),
        ]
    }

    fn takeoff_questions(&self, rng: &mut PhrasingRng) -> Vec<Question> {
        let category = self.category;

        let mut questions = vec![
            Question::confirmation(
                "phaseTransition",
                rng.pick(templates::PHASE_TRANSITION),
                templates::PHASE_TRANSITION_OPTIONS.iter().copied(),
            ),
            Question::single_select(
                "foundation",
                rng.pick(templates::FOUNDATION),
                fields::FOUNDATION_MATERIAL,
                templates::foundation_options(category).iter().copied(),
            ),
            Question::single_select(
                "walls",
                rng.pick(templates::WALLS),
                fields::WALL_MATERIAL,
                templates::wall_options(category).iter().copied(),
            ),
            Question::single_select(
                "roof",
                rng.pick(templates::ROOF),
                fields::ROOF_MATERIAL,
                templates::roof_options(category).iter().copied(),
            ),
            Question::single_select(
                "hvac",
                rng.pick(templates::HVAC),
                fields::HVAC_SYSTEM_TYPE,
                templates::hvac_options(category).iter().copied(),
            ),
            Question::single_select(
                "electrical",
                rng.pick(templates::ELECTRICAL),
                fields::ELECTRICAL_SYSTEM_TYPE,
                templates::electrical_options(category).iter().copied(),
            ),
            Question::free_text(
                "flooring",
                rng.pick(templates::FLOORING),
                fields::FLOORING_TYPES,
            ),
            Question::single_select(
                "lighting",
                rng.pick(templates::LIGHTING),
                fields::LIGHTING_TYPES,
                templates::lighting_options(category).iter().copied(),
            ),
            Question::free_text(
                "siteWork",
                rng.pick(templates::SITE_WORK),
                fields::SITE_IMPROVEMENTS,
            ),
            Question::single_select(
                "specialtySystems",
                rng.pick(templates::SPECIALTY_SYSTEMS),
                fields::HAS_SPECIALTY_SYSTEMS,
                templates::YES_NO_OPTIONS.iter().copied(),
            ),
            Question::free_text(
                "specialtySystemsDetails",
                rng.pick(templates::SPECIALTY_DETAILS),
                fields::SPECIALTY_SYSTEMS_DETAILS,
            )
            .shown_when(SkipCondition::starts_with(fields::HAS_SPECIALTY_SYSTEMS, "Yes")),
        ];

        match category {
            Some(PropertyCategory::Commercial) => {
                questions.push(Question::free_text(
                    "specialEquipment",
                    rng.pick(templates::SPECIAL_EQUIPMENT),
                    fields::SPECIAL_EQUIPMENT,
                ));
            }
            Some(PropertyCategory::Industrial) => {
                questions.push(
                    Question::numeric(
                        "loadingDocks",
                        rng.pick(templates::LOADING_DOCKS),
                        fields::LOADING_DOCKS,
                    )
                    .allowing_zero(),
                );
                questions.push(Question::single_select(
                    "craneSystem",
                    rng.pick(templates::CRANE_SYSTEM),
                    fields::CRANE_SYSTEM,
                    templates::CRANE_OPTIONS.iter().copied(),
                ));
                questions.push(
                    Question::free_text(
                        "craneDetails",
                        rng.pick(templates::CRANE_DETAILS),
                        fields::CRANE_DETAILS,
                    )
                    .shown_when(SkipCondition::starts_with(fields::CRANE_SYSTEM, "Yes")),
                );
            }
            Some(PropertyCategory::MixedUse) => {
                questions.push(
                    Question::numeric(
                        "commercialArea",
                        rng.pick(templates::COMMERCIAL_AREA),
                        fields::COMMERCIAL_AREA_PERCENT,
                    )
                    .allowing_zero(),
                );
            }
            Some(PropertyCategory::Residential) | None => {}
        }

        questions
            .into_iter()
            .map(|q| q.in_phase(Phase::PropertyTakeoffs))
            .collect()
    }
}

/// Builds a catalog for a category name with the given flavor.
///
/// Unrecognized names are not an error; see [`CatalogBuilder::for_category_name`].
pub fn build_catalog(
    category: &str,
    flavor: CatalogFlavor,
    rng: &mut PhrasingRng,
) -> Result<Catalog, CatalogError> {
    CatalogBuilder::for_category_name(category, flavor).build(rng)
}
