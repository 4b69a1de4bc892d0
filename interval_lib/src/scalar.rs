//! The capabilities a type needs before it can be used as the bound of an
//! [`crate::Interval`].
//!
//! Two things are required: a total three-way comparison ([`Ordered`]) and
//! a conversion to and from a canonical text ([`TextConvertible`]).  The
//! text is what appears in the interval notation, and is also the bridge
//! used by [`crate::Interval::convert`] to move between scalar types.
//!
//! Implementations are provided for the integer and float primitives,
//! [`String`], and, depending on features, `rust_decimal::Decimal` and the
//! chrono date and time types.

use crate::errors::{Error, Result};
use crate::notation::is_infinity;
use std::cmp::Ordering;

/// A total order on the values of a type.
///
/// Floats are ordered with [`f64::total_cmp`], so every value (NaN
/// included) has a well-defined position and `-0.0` sorts before `0.0`.
pub trait Ordered {
    fn compare(&self, other: &Self) -> Ordering;

    /// Equality derived from [`Ordered::compare`].
    fn same_as(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

/// Two-way conversion with the canonical text of a value.
///
/// `from_text(&v.to_text())` must give back a value equal to `v` (as seen
/// by [`Ordered`]).  Outside of double quotes, the text must not contain a
/// comma, which separates the two bounds in the interval notation.
pub trait TextConvertible: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Result<Self>;
}

/// Umbrella bound for everything the interval algebra needs.
pub trait Scalar: Ordered + TextConvertible + Clone {}

impl<T: Ordered + TextConvertible + Clone> Scalar for T {}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }

            impl TextConvertible for $t {
                fn to_text(&self) -> String {
                    self.to_string()
                }
                fn from_text(text: &str) -> Result<Self> {
                    text.parse::<$t>()
                        .map_err(|e| Error::invalid_bound(text, e))
                }
            }
        )*
    };
}

integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }

            impl TextConvertible for $t {
                fn to_text(&self) -> String {
                    self.to_string()
                }
                fn from_text(text: &str) -> Result<Self> {
                    text.parse::<$t>()
                        .map_err(|e| Error::invalid_bound(text, e))
                }
            }
        )*
    };
}

float_scalar!(f32, f64);

impl Ordered for String {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Strings are written as is, unless the notation would read them as
/// something else.  They are then double-quoted, escaping `"` and `\\`.
impl TextConvertible for String {
    fn to_text(&self) -> String {
        if !needs_quotes(self) {
            return self.clone();
        }
        let mut quoted = String::with_capacity(self.len() + 2);
        quoted.push('"');
        for c in self.chars() {
            if c == '"' || c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        quoted
    }

    fn from_text(text: &str) -> Result<Self> {
        let Some(inner) = text.strip_prefix('"') else {
            return Ok(text.to_string());
        };
        let unclosed = || Error::invalid_bound(text, "missing closing quote");
        let inner = inner.strip_suffix('"').ok_or_else(unclosed)?;
        let mut result = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => result.push(chars.next().ok_or_else(unclosed)?),
                '"' => {
                    return Err(Error::invalid_bound(text, "unescaped quote"));
                }
                c => result.push(c),
            }
        }
        Ok(result)
    }
}

/// Empty strings, strings with surrounding spaces, commas or quotes, and
/// anything that looks like an infinity, cannot be written as is.
fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.trim() != text
        || text.contains([',', '"'])
        || is_infinity(text)
}

#[cfg(feature = "decimal")]
mod decimal {
    use super::{Ordered, TextConvertible};
    use crate::errors::{Error, Result};
    use rust_decimal::Decimal;
    use std::cmp::Ordering;
    use std::str::FromStr;

    impl Ordered for Decimal {
        fn compare(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl TextConvertible for Decimal {
        fn to_text(&self) -> String {
            self.to_string()
        }

        /// Accepts both plain ("1.25") and scientific ("1.25e3") notations.
        fn from_text(text: &str) -> Result<Self> {
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map_err(|e| Error::invalid_bound(text, e))
        }
    }
}

#[cfg(feature = "chrono")]
mod times {
    use super::{Ordered, TextConvertible};
    use crate::errors::{Error, Result};
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
    use std::cmp::Ordering;

    const DATE_FORMAT: &str = "%Y-%m-%d";
    const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    impl Ordered for NaiveDate {
        fn compare(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl TextConvertible for NaiveDate {
        fn to_text(&self) -> String {
            self.format(DATE_FORMAT).to_string()
        }
        fn from_text(text: &str) -> Result<Self> {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map_err(|e| Error::invalid_bound(text, e))
        }
    }

    impl Ordered for NaiveDateTime {
        fn compare(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl TextConvertible for NaiveDateTime {
        fn to_text(&self) -> String {
            self.format(DATETIME_FORMAT).to_string()
        }
        fn from_text(text: &str) -> Result<Self> {
            NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .map_err(|e| Error::invalid_bound(text, e))
        }
    }

    impl Ordered for DateTime<Utc> {
        fn compare(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl TextConvertible for DateTime<Utc> {
        fn to_text(&self) -> String {
            self.to_rfc3339()
        }
        fn from_text(text: &str) -> Result<Self> {
            DateTime::parse_from_rfc3339(text)
                .map(|d| d.with_timezone(&Utc))
                .map_err(|e| Error::invalid_bound(text, e))
        }
    }

    impl Ordered for DateTime<FixedOffset> {
        fn compare(&self, other: &Self) -> Ordering {
            self.cmp(other)
        }
    }

    impl TextConvertible for DateTime<FixedOffset> {
        fn to_text(&self) -> String {
            self.to_rfc3339()
        }
        fn from_text(text: &str) -> Result<Self> {
            DateTime::parse_from_rfc3339(text)
                .map_err(|e| Error::invalid_bound(text, e))
        }
    }
}
