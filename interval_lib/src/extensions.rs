use crate::errors::Result;
use crate::intervals::Interval;
use crate::scalar::Scalar;

/// Fluent construction of intervals from their bounds.
/// ```
///    use interval_lib::IntervalExt;
///    let week = 1_u32.until(8).unwrap();       // [1, 8)
///    assert!(week.contains(&7));
///    assert_eq!(5_i32.and_above().to_string(), "[5, +∞)");
/// ```
pub trait IntervalExt: Scalar {
    /// `[self, end]`
    fn to(self, end: Self) -> Result<Interval<Self>> {
        Interval::closed(self, end)
    }

    /// `[self, end)`
    fn until(self, end: Self) -> Result<Interval<Self>> {
        Interval::closed_open(self, end)
    }

    /// `[self, +∞)`
    #[must_use]
    fn and_above(self) -> Interval<Self> {
        Interval::at_least(self)
    }

    /// `(-∞, self]`
    #[must_use]
    fn and_below(self) -> Interval<Self> {
        Interval::at_most(self)
    }

    /// `[self, self]`
    #[must_use]
    fn as_point(self) -> Interval<Self> {
        Interval::point(self)
    }
}

impl<T: Scalar> IntervalExt for T {}

impl<T: Scalar> Interval<T> {
    /// Returns the same interval, with the lower bound included or not.
    /// This fails if the result would be empty, as in `[A, A]` -> `(A, A]`.
    pub fn with_start_excluded(&self, exclude: bool) -> Result<Self> {
        Interval::new(
            self.start().cloned(),
            self.end().cloned(),
            exclude,
            self.exclude_end(),
        )
    }

    /// Returns the same interval, with the upper bound included or not.
    pub fn with_end_excluded(&self, exclude: bool) -> Result<Self> {
        Interval::new(
            self.start().cloned(),
            self.end().cloned(),
            self.exclude_start(),
            exclude,
        )
    }
}
