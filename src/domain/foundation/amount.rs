//! Lenient dollar-amount parsing and display.
//!
//! Answers arrive as free text ("$1,250,000", " 500000 "). Parsing strips
//! `$`, `,` and whitespace before reading the number.

/// Parses a dollar amount, returning `None` when nothing numeric remains.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a dollar amount, counting missing or unparsable input as zero.
pub fn amount_or_zero(raw: Option<&str>) -> f64 {
    raw.and_then(parse_amount).unwrap_or(0.0)
}

/// Largest magnitude a parsed amount may carry, one quadrillion dollars.
///
/// Keeps downstream sums and differences of amounts inside `i64`.
pub const MAX_WHOLE_DOLLARS: i64 = 1_000_000_000_000_000;

/// Parses a whole-dollar amount, rounding half away from zero and clamping
/// to `±MAX_WHOLE_DOLLARS`.
pub fn whole_dollars(raw: Option<&str>) -> i64 {
    let limit = MAX_WHOLE_DOLLARS as f64;
    amount_or_zero(raw).round().clamp(-limit, limit) as i64
}

/// Formats whole dollars as `$1,234,567`.
pub fn format_currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
