//! Human-readable recap emitted when a dialogue completes.

use crate::domain::foundation::{format_currency, parse_amount};
use crate::domain::questionnaire::fields::{self, FieldFormat};
use crate::domain::questionnaire::Catalog;

use super::response_store::ResponseSnapshot;

const NOT_SPECIFIED: &str = "Not specified";

const CLOSING: &str =
    "Everything looks good! You can now generate your cost segregation analysis.";

/// Builds the completion message: the completion text (if any), one bullet
/// per catalog target field, and the closing sentence.
pub fn compose(completion_text: Option<&str>, catalog: &Catalog, answers: &ResponseSnapshot) -> String {
    let mut out = String::new();
    if let Some(text) = completion_text {
        out.push_str(text);
        out.push_str("\n\n");
    }

    for field in catalog.target_fields() {
        out.push_str("• ");
        out.push_str(fields::label(field));
        out.push_str(": ");
        out.push_str(&render_value(field, answers.get(field)));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(CLOSING);
    out
}

fn render_value(field: &str, raw: Option<&str>) -> String {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return NOT_SPECIFIED.to_string(),
    };

    match fields::format(field) {
        FieldFormat::Currency => parse_amount(value)
            .map(|amount| format_currency(amount.round() as i64))
            .unwrap_or_else(|| value.to_string()),
        FieldFormat::Plain => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::ResponseStore;
    use crate::domain::questionnaire::{CatalogFlavor, Question};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Question::confirmation("greeting", "Ready?", ["Yes"]),
                Question::numeric("basis", "Basis?", fields::DEPRECIABLE_BASIS),
                Question::free_text("use", "Use?", fields::PROPERTY_USE),
                Question::date("date", "When?", fields::PLACED_IN_SERVICE_DATE),
                Question::summary("completion", "All done."),
            ],
            CatalogFlavor::TaxOnly,
        )
        .unwrap()
    }

    #[test]
    fn lists_fields_in_catalog_order_with_formatting() {
        let mut store = ResponseStore::new();
        store.set(fields::DEPRECIABLE_BASIS, "500000");
        store.set(fields::PROPERTY_USE, "Office building");

        let text = compose(Some("All done."), &catalog(), &store.snapshot());
        let expected = "All done.\n\n\
            • Depreciable Basis: $500,000\n\
            • Property Use: Office building\n\
            • Placed in Service: Not specified\n\
            \n\
            Everything looks good! You can now generate your cost segregation analysis.";
        assert_eq!(text, expected);
    }

    #[test]
    fn unparsable_currency_is_shown_verbatim() {
        let mut store = ResponseStore::new();
        store.set(fields::DEPRECIABLE_BASIS, "about half a million");
        let text = compose(None, &catalog(), &store.snapshot());
        assert!(text.starts_with("• Depreciable Basis: about half a million\n"));
    }

    #[test]
    fn blank_answer_is_not_specified() {
        let mut store = ResponseStore::new();
        store.set(fields::PROPERTY_USE, "   ");
        let text = compose(None, &catalog(), &store.snapshot());
        assert!(text.contains("• Property Use: Not specified"));
    }
}
