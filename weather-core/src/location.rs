use std::sync::LazyLock;

use regex::Regex;

/// Country suffix appended to every query; the dashboard only serves US locations.
const US_SUFFIX: &str = ",US";

/// Trailing state abbreviation such as `, OR` or `,CA`. The provider does not
/// understand US states in the `q` parameter.
static STATE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[A-Z]{2}$").expect("state suffix pattern is valid"));

/// Returns true for a bare five digit US zip code.
pub fn is_zip_code(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Turn free-form user input into a value for the provider's `q` parameter.
///
/// - `"97201"` becomes `"97201,US"`
/// - `"Portland, OR"` becomes `"Portland,US"`
/// - anything already carrying `,US` (any case) is left alone
///
/// Callers must reject blank input before calling this.
pub fn normalize_location(raw: &str) -> String {
    let trimmed = raw.trim();

    if is_zip_code(trimmed) {
        return format!("{trimmed}{US_SUFFIX}");
    }

    let stripped = STATE_SUFFIX.replace(trimmed, "");

    if stripped.to_uppercase().contains(US_SUFFIX) {
        stripped.into_owned()
    } else {
        format!("{stripped}{US_SUFFIX}")
    }
}
