//! Text notation for intervals, as in `[1, 10)` or `(-∞, 5]`.
//!
//! A square bracket means the bound is part of the interval, a parenthesis
//! that it is not.  Infinite bounds are written `-∞` and `+∞` and always use
//! a parenthesis.  When parsing, any token containing `∞`, `♾` or the word
//! "infinity" (in any case) is an infinite bound, and so is an empty token,
//! so that `(, 5]` and `[1,)` are also accepted.
//!
//! A bound may be written between double quotes, with `\"` and `\\`
//! escapes, and is then never taken as an infinite bound.  Text bounds
//! use this when they would otherwise be ambiguous, as in `["a,b", c]`.

use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::scalar::{Scalar, TextConvertible};
use itertools::Itertools;

pub const NEG_INFINITY: &str = "-∞";
pub const POS_INFINITY: &str = "+∞";

impl<T: Scalar> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self.start() {
            None => write!(f, "({}", NEG_INFINITY)?,
            Some(s) if self.exclude_start() => write!(f, "({}", s.to_text())?,
            Some(s) => write!(f, "[{}", s.to_text())?,
        }
        match self.end() {
            None => write!(f, ", {})", POS_INFINITY)?,
            Some(e) if self.exclude_end() => write!(f, ", {})", e.to_text())?,
            Some(e) => write!(f, ", {}]", e.to_text())?,
        }
        Ok(())
    }
}

impl<T: Scalar> Interval<T> {
    /// Parse the text notation of an interval.
    /// ```
    ///    use interval_lib::Interval;
    ///    let intv = Interval::<i32>::parse("(-∞, 5]").unwrap();
    ///    assert!(intv.is_start_unbounded());
    ///    assert_eq!(intv.end(), Some(&5));
    ///    assert_eq!(intv.to_string(), "(-∞, 5]");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }
        let Some((left, right)) =
            split_bounds(trimmed).into_iter().collect_tuple()
        else {
            return Err(Error::malformed(text, "expected exactly one comma"));
        };

        let left = left.trim();
        let (exclude_start, start) = if let Some(s) = left.strip_prefix('[') {
            (false, s)
        } else if let Some(s) = left.strip_prefix('(') {
            (true, s)
        } else {
            return Err(Error::malformed(text, "must start with '[' or '('"));
        };

        let right = right.trim();
        let (exclude_end, end) = if let Some(s) = right.strip_suffix(']') {
            (false, s)
        } else if let Some(s) = right.strip_suffix(')') {
            (true, s)
        } else {
            return Err(Error::malformed(text, "must end with ']' or ')'"));
        };

        Self::new(
            parse_bound(start)?,
            parse_bound(end)?,
            exclude_start,
            exclude_end,
        )
    }

    /// Same as [`Interval::parse()`], but returns None on errors.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        match Self::parse(text) {
            Ok(intv) => Some(intv),
            Err(e) => {
                log::debug!("not an interval {text:?}: {e}");
                None
            }
        }
    }
}

impl<T: Scalar> ::core::str::FromStr for Interval<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Split on the commas that are not part of a quoted bound.
fn split_bounds(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut quoted = false;
    let mut escaped = false;
    let mut from = 0;
    for (idx, c) in text.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ',' if !quoted => {
                pieces.push(&text[from..idx]);
                from = idx + 1;
            }
            _ => {}
        }
    }
    pieces.push(&text[from..]);
    pieces
}

fn parse_bound<T: TextConvertible>(token: &str) -> Result<Option<T>> {
    let token = token.trim();
    if token.is_empty() || (!token.starts_with('"') && is_infinity(token)) {
        Ok(None)
    } else {
        T::from_text(token).map(Some)
    }
}

pub(crate) fn is_infinity(token: &str) -> bool {
    token.contains(|c| c == '∞' || c == '♾')
        || token.to_lowercase().contains("infinity")
}

#[cfg(feature = "serde")]
mod serde_support {
    use crate::intervals::Interval;
    use crate::scalar::Scalar;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Intervals are serialized as their text notation
    impl<T: Scalar> Serialize for Interval<T> {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, T: Scalar> Deserialize<'de> for Interval<T> {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Interval::parse(&text).map_err(serde::de::Error::custom)
        }
    }
}
