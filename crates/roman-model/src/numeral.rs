//! Integer to Roman-numeral conversion.
//!
//! Conversion is a greedy reduction over [`TABLE`], largest value first.
//! Values above 3999 keep repeating `M`; zero and negative values produce an empty numeral.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value/symbol pairs, ordered from largest to smallest.
pub const TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Roman-numeral string produced by [`to_roman`].
///
/// Serializes as a plain JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RomanNumeral(String);

impl RomanNumeral {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RomanNumeral> for String {
    fn from(n: RomanNumeral) -> Self {
        n.0
    }
}

/// Convert `value` to its Roman-numeral representation.
///
/// Output length grows linearly with `value` past 3999 (one `M` per thousand), so
/// `to_roman(i64::MAX)` would exhaust memory. Bound untrusted input first, e.g. with
/// [`RomanInput::check_max`](crate::RomanInput::check_max).
pub fn to_roman(value: i64) -> RomanNumeral {
    let mut rest = value;
    let mut out = String::new();

    for (n, symbol) in TABLE {
        if rest <= 0 {
            break;
        }
        let count = rest / n;
        rest %= n;
        for _ in 0..count {
            out.push_str(symbol);
        }
    }
    RomanNumeral(out)
}
