//! Open-ended year-range expansion for model headers.
//!
//! Catalogs abbreviate "from year N onward" as `MOD.'08 EN ADEL.`; the
//! expanded form spells out the full year and `EN ADELANTE`. Closed ranges
//! like `'05/'12` are preserved verbatim.

const OPEN_TOKEN: &str = "EN ADEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearExpansion {
    /// No open-ended token; the text stands as written.
    None,
    /// Expanded replacement text.
    Expanded(String),
    /// Open-ended token present but no recognizable year; the raw text is
    /// kept and the token reported to the extraction log.
    Unparsed,
}

/// Two-digit years pivot at 49: `'08` → 2008, `'95` → 1995.
fn full_year(two_digit: u16) -> u16 {
    if two_digit <= 49 { 2000 + two_digit } else { 1900 + two_digit }
}

/// Finds an `'NN` token (apostrophe plus exactly two digits).
fn find_apostrophe_year(text: &str) -> Option<(usize, u16)> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if bytes[start] != b'\'' {
            continue;
        }
        let (Some(d0), Some(d1)) = (bytes.get(start + 1), bytes.get(start + 2)) else {
            continue;
        };
        if !d0.is_ascii_digit() || !d1.is_ascii_digit() {
            continue;
        }
        if bytes.get(start + 3).is_some_and(u8::is_ascii_digit) {
            continue;
        }
        let value = u16::from(d0 - b'0') * 10 + u16::from(d1 - b'0');
        return Some((start, value));
    }
    None
}

/// True when the text already spells a plausible four-digit year.
fn has_four_digit_year(text: &str) -> bool {
    let digits: Vec<(usize, u8)> = text
        .bytes()
        .enumerate()
        .filter(|(_, byte)| byte.is_ascii_digit())
        .collect();
    let bytes = text.as_bytes();
    for window in digits.windows(4) {
        let [a, b, c, d] = window else { continue };
        if b.0 != a.0 + 1 || c.0 != b.0 + 1 || d.0 != c.0 + 1 {
            continue;
        }
        let bounded = a.0.checked_sub(1).is_none_or(|i| !bytes[i].is_ascii_digit())
            && bytes.get(d.0 + 1).is_none_or(|byte| !byte.is_ascii_digit());
        if !bounded {
            continue;
        }
        let year = u16::from(a.1 - b'0') * 1000
            + u16::from(b.1 - b'0') * 100
            + u16::from(c.1 - b'0') * 10
            + u16::from(d.1 - b'0');
        if (1900..=2099).contains(&year) {
            return true;
        }
    }
    false
}

pub fn expand_open_range(model: &str) -> YearExpansion {
    if !model.contains(OPEN_TOKEN) {
        return YearExpansion::None;
    }

    let mut text = model.to_string();
    if let Some((index, two_digit)) = find_apostrophe_year(&text) {
        text.replace_range(index..index + 3, &full_year(two_digit).to_string());
    } else if !has_four_digit_year(&text) {
        return YearExpansion::Unparsed;
    }

    if !text.contains("EN ADELANTE") {
        text = text
            .replace("EN ADEL.", "EN ADELANTE")
            .replace(OPEN_TOKEN, "EN ADELANTE");
    }
    YearExpansion::Expanded(text)
}
