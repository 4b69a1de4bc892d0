//! This crate provides immutable mathematical intervals.
//! Such intervals include all values between two bounds, each of which can
//! be closed (the value is part of the interval), open, or infinite.
//!
//!  |Interval |Constructor                    |Description
//!  |---------|-------------------------------|--------------
//!  | `[A, B]`|[`Interval::closed`]           |left-closed, right-closed
//!  | `[A, B)`|[`Interval::closed_open`]      |left-closed, right-open
//!  | `(A, B)`|[`Interval::open`]             |left-open, right-open
//!  | `(A, B]`|[`Interval::open_closed`]      |left-open, right-closed
//!  | `[A, A]`|[`Interval::point`]            |single value
//!  | `[A, +∞)`|[`Interval::at_least`]        |left-closed, right-unbounded
//!  | `(A, +∞)`|[`Interval::greater_than`]    |left-open, right-unbounded
//!  | `(-∞, B]`|[`Interval::at_most`]         |left-unbounded, right-closed
//!  | `(-∞, B)`|[`Interval::less_than`]       |left-unbounded, right-open
//!  | `(-∞, +∞)`|[`Interval::unbounded`]     |doubly unbounded
//!
//! There is no empty interval: building one (like `[A, A)`) fails, as does
//! any operation whose result would be empty or made of two separate
//! pieces.
//!
//! Any type implementing [`Ordered`] and [`TextConvertible`] can be used for
//! the bounds.  This includes the integer and float types, `String`,
//! `rust_decimal::Decimal` (feature `decimal`) and chrono's dates and
//! timestamps (feature `chrono`).
//!
//! Given two intervals, we can compute the following:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!        [------)                     Subtraction (A - B)
//!                        (------]     Subtraction (B - A)
//!               [--------]            Intersection (A & B)
//!        [----------------------]     Union (A | B)
//! ```
//!
//! When the two intervals do not overlap:
//! ```text
//!      [---A---]   [----B----]
//!
//!      [-------]                  Subtraction (A - B)
//!                  [---------]    Subtraction (B - A)
//!                                 Intersection (A & B) fails
//!                                 Union (A | B) fails, non contiguous
//! ```
//!
//! Intervals are written and parsed with the usual notation:
//! ```
//!    use interval_lib::Interval;
//!    let a = Interval::<i32>::parse("(0, 10)").unwrap();
//!    let b = Interval::<i32>::parse("[5, 15]").unwrap();
//!    assert_eq!((&a & &b).unwrap().to_string(), "[5, 10)");
//!    assert_eq!((&a | &b).unwrap().to_string(), "(0, 15]");
//!    assert_eq!((&a - &b).unwrap().to_string(), "(0, 5)");
//! ```

mod convert;
pub mod errors;
mod extensions;
mod intervals;
mod notation;
pub mod scalar;

pub use crate::errors::{Error, Result};
pub use crate::extensions::IntervalExt;
pub use crate::intervals::Interval;
pub use crate::notation::{NEG_INFINITY, POS_INFINITY};
pub use crate::scalar::{Ordered, Scalar, TextConvertible};
