//! Phone number classification and selection.
//!
//! Precedence: the first mobile candidate wins, otherwise the first landline,
//! otherwise nothing. A landline listed before a mobile still loses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::spec::EnumPhoneKind;

static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("valid mobile pattern"));
static LANDLINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}-?[0-9]{7,8}$").expect("valid landline pattern"));

/// 11 ASCII digits, first `1`, second `3`..`9`.
pub fn is_mobile_phone(candidate: &str) -> bool {
    MOBILE_PATTERN.is_match(candidate)
}

/// 3-4 digit area code, optional hyphen, 7-8 digit local number.
pub fn is_landline_phone(candidate: &str) -> bool {
    LANDLINE_PATTERN.is_match(candidate)
}

/// Classify one candidate; mobile is checked first.
pub fn classify_phone(candidate: &str) -> EnumPhoneKind {
    if is_mobile_phone(candidate) {
        EnumPhoneKind::Mobile
    } else if is_landline_phone(candidate) {
        EnumPhoneKind::Landline
    } else {
        EnumPhoneKind::Unknown
    }
}

/// Pick the contact number from ordered candidates; `""` when none qualifies.
pub fn select_phone<S: AsRef<str>>(candidates: &[S]) -> String {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|c| is_mobile_phone(c))
        .or_else(|| {
            candidates
                .iter()
                .map(AsRef::as_ref)
                .find(|c| is_landline_phone(c))
        })
        .unwrap_or("")
        .trim()
        .to_string()
}
