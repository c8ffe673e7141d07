//! Text cleanup helpers.

/// Trims and collapses internal whitespace runs to a single space.
/// Returns `None` when nothing but whitespace remains.
pub fn clean_text(raw: &str) -> Option<String> {
    let mut cleaned = String::with_capacity(raw.len());
    for part in raw.split_whitespace() {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(part);
    }
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// [`clean_text`] plus upper-casing, for brand and model fields.
pub fn clean_upper(raw: &str) -> Option<String> {
    clean_text(raw).map(|text| text.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            clean_text("  PUERTA   TRAS.\tIZQ.  "),
            Some("PUERTA TRAS. IZQ.".to_string())
        );
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text(""), None);
    }

    #[test]
    fn upper_cases_after_cleaning() {
        assert_eq!(clean_upper(" Astra  mod.'05 "), Some("ASTRA MOD.'05".to_string()));
    }
}
