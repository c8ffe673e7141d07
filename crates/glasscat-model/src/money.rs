//! Monetary parsing and formatting.
//!
//! Source catalogs mix currency symbols, Latin (`1.234,56`) and US
//! (`1,234.56`) separators, and sentinel tokens such as `CONSULTAR`. A value
//! that cannot be read as a positive amount is absent, never zero.

/// Tokens that stand in for "no price" in source catalogs.
const SENTINELS: [&str; 8] = ["", "-", "\u{2013}", "CONSULTAR", "N/A", "NONE", "SIN DATO", "S/D"];

/// Parses a textual price into a positive amount.
///
/// Strips currency symbols and any other non-numeric characters, then
/// disambiguates thousands vs. decimal separators: when commas outnumber
/// dots, or the last comma follows the last dot, the text is read as Latin
/// format. Zero and sentinel tokens yield `None`.
pub fn parse_price(value: &str) -> Option<f64> {
    let upper = value.trim().to_uppercase();
    if SENTINELS.contains(&upper.as_str()) {
        return None;
    }

    let cleaned: String = upper
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
        .collect();
    if !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let commas = cleaned.matches(',').count();
    let dots = cleaned.matches('.').count();
    let latin = commas > dots
        || (commas > 0 && dots > 0 && cleaned.rfind(',') > cleaned.rfind('.'));
    let normalized = if latin {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };

    let amount = normalized.parse::<f64>().ok()?;
    if amount == 0.0 { None } else { Some(amount) }
}

/// True when a cell reads as a price for row classification.
///
/// Stricter than [`parse_price`]: besides an optional currency symbol the
/// cell may contain only digits and separators, so model tokens (`'05/'12`)
/// and dimensions (`497x745`) never count as prices while a bare numeric
/// code does.
pub fn is_price_like(cell: &str) -> bool {
    let stripped = cell.trim().trim_start_matches(['$', '\u{20ac}', ' ']).trim();
    if stripped.is_empty() {
        return false;
    }
    if !stripped
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
    {
        return false;
    }
    parse_price(stripped).is_some_and(|amount| amount > 0.0)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount in the fixed output form, e.g. `"$238,788.11"`.
pub fn format_price(value: f64) -> String {
    let rounded = round2(value);
    let negative = rounded < 0.0;
    let cents = (rounded.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (offset, digit) in whole.chars().enumerate() {
        if offset > 0 && (whole.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
