//! Combination lookup rules.
//!
//! Configured combination ids may spell the `9-4` shift as `AM`. Every
//! comparison against a schedule goes through [`resolve_alias`] first, and
//! multi-shift days are matched through the canonical [`combination_key`].

use std::borrow::Cow;

use crate::models::{ShiftCode, ShiftCombination};

/// Alias accepted in combination ids for the `9-4` shift.
pub const NINE_TO_FOUR_ALIAS: &str = "AM";

/// Separator between shift codes in a combination key.
pub const COMBINATION_SEPARATOR: &str = "+";

/// Replaces every `AM` in a combination id with `9-4`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::resolve_alias;
///
/// assert_eq!(resolve_alias("AM+N"), "9-4+N");
/// assert_eq!(resolve_alias("4-10"), "4-10");
/// ```
pub fn resolve_alias(id: &str) -> Cow<'_, str> {
    if id.contains(NINE_TO_FOUR_ALIAS) {
        Cow::Owned(id.replace(NINE_TO_FOUR_ALIAS, ShiftCode::NineToFour.as_str()))
    } else {
        Cow::Borrowed(id)
    }
}

/// Canonical key of a multi-shift day: the codes sorted by their string
/// form and joined with `+`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::combination_key;
/// use shift_earnings::models::ShiftCode;
///
/// let key = combination_key(&[ShiftCode::Night, ShiftCode::NineToFour, ShiftCode::FourToTen]);
/// assert_eq!(key, "4-10+9-4+N");
/// ```
pub fn combination_key(codes: &[ShiftCode]) -> String {
    let mut parts: Vec<&str> = codes.iter().map(ShiftCode::as_str).collect();
    parts.sort_unstable();
    parts.join(COMBINATION_SEPARATOR)
}

/// Finds the first combination whose alias-resolved id equals `id`.
pub fn find_combination<'a>(
    combinations: &'a [ShiftCombination],
    id: &str,
) -> Option<&'a ShiftCombination> {
    combinations
        .iter()
        .find(|combination| resolve_alias(&combination.id) == id)
}
