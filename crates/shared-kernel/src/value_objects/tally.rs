// crates/shared-kernel/src/value_objects/tally.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FieldValue;

/// Aggregated photo count.
///
/// `Invalid` is the not-a-number sentinel produced by an unparseable count.
/// It absorbs every addition, so one malformed record poisons each ancestor
/// total instead of being silently treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tally {
    Count(i64),
    Invalid,
}

impl Tally {
    #[inline]
    pub const fn zero() -> Self {
        Self::Count(0)
    }

    #[inline]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(n),
            Self::Invalid => None,
        }
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Lenient base-10 parse: leading whitespace and an optional sign, then
    /// the longest run of ASCII digits. Trailing garbage is ignored
    /// (`"12px"` is 12); no digits at all is `Invalid`.
    pub fn parse_lenient(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Self::Invalid;
        }
        let magnitude = &rest[..digits];
        let parsed = if negative {
            format!("-{magnitude}").parse::<i64>()
        } else {
            magnitude.parse::<i64>()
        };
        parsed.map_or(Self::Invalid, Self::Count)
    }

    /// Exact base-10 parse: the whole trimmed input must be an integer.
    pub fn parse_exact(input: &str) -> Option<i64> {
        input.trim().parse::<i64>().ok()
    }

    /// Tally for a `count` field value; a missing field is `Invalid`.
    pub fn from_field(value: Option<&FieldValue>) -> Self {
        match value {
            Some(FieldValue::Integer(n)) => Self::Count(*n),
            Some(FieldValue::Number(n)) => Self::parse_lenient(&number_text(*n)),
            Some(other) => Self::parse_lenient(&other.as_key()),
            None => Self::Invalid,
        }
    }
}

/// Decimal text of a float, in exponent form outside `[1e-6, 1e21)`:
/// `1e21` counts as 1 rather than overflowing, `1e-7` as 1 rather than 0.
fn number_text(n: f64) -> String {
    let magnitude = n.abs();
    if n.is_finite() && (magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6)) {
        format!("{n:e}")
    } else {
        n.to_string()
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Count(a), Self::Count(b)) => a.checked_add(b).map_or(Self::Invalid, Self::Count),
            _ => Self::Invalid,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Tally> for Tally {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i64> for Tally {
    fn from(value: i64) -> Self {
        Self::Count(value)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Invalid => f.write_str("NaN"),
        }
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.map_or(Self::Invalid, Self::Count))
    }
}
