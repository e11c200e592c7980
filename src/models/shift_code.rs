//! Shift code model and the shift catalog.
//!
//! A [`ShiftCode`] identifies one of the four work shifts that can be placed
//! on a calendar day. Codes outside the catalog can still appear in stored
//! schedules; they are kept verbatim as [`ShiftCode::Other`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a work shift.
///
/// Serializes to and from its plain string form (`"9-4"`, `"4-10"`,
/// `"12-10"`, `"N"`). Codes have no `Ord`:
/// combination keys sort by the string form, display sorts by
/// [`ShiftCode::display_rank`].
///
/// # Example
///
/// ```
/// use shift_earnings::models::ShiftCode;
///
/// let code: ShiftCode = "12-10".parse().unwrap();
/// assert_eq!(code, ShiftCode::TwelveToTen);
/// assert_eq!(code.as_str(), "12-10");
/// assert!(ShiftCode::from("X").info().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftCode {
    /// Day shift, 9 AM to 4 PM (`9-4`). Sundays and special dates.
    NineToFour,
    /// Evening shift, 4 PM to 10 PM (`4-10`).
    FourToTen,
    /// Saturday shift, 12 PM to 10 PM (`12-10`).
    TwelveToTen,
    /// Night shift (`N`).
    Night,
    /// A code not in the catalog, kept as stored.
    Other(String),
}

/// Static catalog entry for a known shift code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftInfo {
    /// Display label.
    pub label: &'static str,
    /// Time-range text.
    pub time: &'static str,
    /// Colour token used by the presentation layer.
    pub color: &'static str,
}

/// The known shift codes in canonical display order.
pub const SHIFT_DISPLAY_ORDER: [ShiftCode; 4] = [
    ShiftCode::NineToFour,
    ShiftCode::FourToTen,
    ShiftCode::TwelveToTen,
    ShiftCode::Night,
];

const NINE_TO_FOUR: ShiftInfo = ShiftInfo {
    label: "Sunday/Special",
    time: "9:00 AM - 4:00 PM",
    color: "blue",
};

const FOUR_TO_TEN: ShiftInfo = ShiftInfo {
    label: "Evening",
    time: "4:00 PM - 10:00 PM",
    color: "purple",
};

const TWELVE_TO_TEN: ShiftInfo = ShiftInfo {
    label: "Saturday Regular",
    time: "12:00 PM - 10:00 PM",
    color: "orange",
};

const NIGHT: ShiftInfo = ShiftInfo {
    label: "Night",
    time: "10:00 PM - 7:00 AM",
    color: "indigo",
};

impl ShiftCode {
    /// Returns the string form of the code.
    pub fn as_str(&self) -> &str {
        match self {
            ShiftCode::NineToFour => "9-4",
            ShiftCode::FourToTen => "4-10",
            ShiftCode::TwelveToTen => "12-10",
            ShiftCode::Night => "N",
            ShiftCode::Other(code) => code,
        }
    }

    /// Returns the catalog entry, or `None` for codes outside the catalog.
    pub fn info(&self) -> Option<ShiftInfo> {
        match self {
            ShiftCode::NineToFour => Some(NINE_TO_FOUR),
            ShiftCode::FourToTen => Some(FOUR_TO_TEN),
            ShiftCode::TwelveToTen => Some(TWELVE_TO_TEN),
            ShiftCode::Night => Some(NIGHT),
            ShiftCode::Other(_) => None,
        }
    }

    /// Returns true for the four catalog codes.
    pub fn is_known(&self) -> bool {
        !matches!(self, ShiftCode::Other(_))
    }

    /// Position in the canonical display order. Unknown codes rank last.
    pub fn display_rank(&self) -> usize {
        SHIFT_DISPLAY_ORDER
            .iter()
            .position(|known| known == self)
            .unwrap_or(usize::MAX)
    }
}

/// Sorts codes into display order: `9-4, 4-10, 12-10, N`, then unknown codes
/// in their original relative order.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{sort_for_display, ShiftCode};
///
/// let mut codes = vec![ShiftCode::Night, ShiftCode::from("X"), ShiftCode::NineToFour];
/// sort_for_display(&mut codes);
/// assert_eq!(codes, vec![ShiftCode::NineToFour, ShiftCode::Night, ShiftCode::from("X")]);
/// ```
pub fn sort_for_display(codes: &mut [ShiftCode]) {
    // sort_by_key is stable, which keeps unknown codes in input order
    codes.sort_by_key(ShiftCode::display_rank);
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ShiftCode {
    fn from(value: &str) -> Self {
        match value {
            "9-4" => ShiftCode::NineToFour,
            "4-10" => ShiftCode::FourToTen,
            "12-10" => ShiftCode::TwelveToTen,
            "N" => ShiftCode::Night,
            other => ShiftCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ShiftCode {
    fn from(value: String) -> Self {
        match ShiftCode::from(value.as_str()) {
            ShiftCode::Other(_) => ShiftCode::Other(value),
            known => known,
        }
    }
}

impl From<ShiftCode> for String {
    fn from(code: ShiftCode) -> Self {
        match code {
            ShiftCode::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ShiftCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ShiftCode::from(s))
    }
}
