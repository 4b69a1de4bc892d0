use crate::errors::{Error, Result};
use crate::scalar::{Ordered, Scalar};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A contiguous range of values.
///
/// Each bound is either a value or absent, an absent bound standing for
/// -infinity (start) or +infinity (end).  An infinite bound is never part
/// of the interval.
///
/// Intervals are always valid: `start <= end`, and a degenerate interval
/// `[A, A]` must include its single value.  They never change once built;
/// operations like [`Interval::union()`] return new intervals.
///
/// ```
///    use interval_lib::Interval;
///    let intv = Interval::closed_open(1, 10).unwrap();    // [1, 10)
///    assert!(intv.contains(&1));
///    assert!(!intv.contains(&10));
/// ```
#[derive(Clone, Debug)]
pub struct Interval<T> {
    start: Option<T>,
    end: Option<T>,
    exclude_start: bool,
    exclude_end: bool,
}

impl<T> Interval<T> {
    /// The lower bound, or None if the interval extends to -infinity.
    #[must_use]
    pub fn start(&self) -> Option<&T> {
        self.start.as_ref()
    }

    /// The upper bound, or None if the interval extends to +infinity.
    #[must_use]
    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    /// Whether the lower bound is not part of the interval.  Always true
    /// for an infinite lower bound.
    #[must_use]
    pub fn exclude_start(&self) -> bool {
        self.exclude_start
    }

    /// Whether the upper bound is not part of the interval.  Always true
    /// for an infinite upper bound.
    #[must_use]
    pub fn exclude_end(&self) -> bool {
        self.exclude_end
    }

    /// Whether the interval extends to -infinity.
    #[must_use]
    pub fn is_start_unbounded(&self) -> bool {
        self.start.is_none()
    }

    /// Whether the interval extends to +infinity.
    #[must_use]
    pub fn is_end_unbounded(&self) -> bool {
        self.end.is_none()
    }

    /// The interval that contains every value (`(-∞, +∞)`).
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
            exclude_start: true,
            exclude_end: true,
        }
    }
}

impl<T: Scalar> Interval<T> {
    /// Create a new interval.  A missing bound is infinite, and is always
    /// excluded whatever the flag says.
    ///
    /// Fails with [`Error::ReversedEdges`] when start is greater than end,
    /// and with [`Error::EmptyInterval`] for `[A, A)`, `(A, A]` or `(A, A)`.
    pub fn new(
        start: Option<T>,
        end: Option<T>,
        exclude_start: bool,
        exclude_end: bool,
    ) -> Result<Self> {
        let exclude_start = exclude_start || start.is_none();
        let exclude_end = exclude_end || end.is_none();
        if let (Some(s), Some(e)) = (&start, &end) {
            match s.compare(e) {
                Ordering::Greater => {
                    return Err(Error::ReversedEdges {
                        start: s.to_text(),
                        end: e.to_text(),
                    });
                }
                Ordering::Equal if exclude_start || exclude_end => {
                    return Err(Error::EmptyInterval);
                }
                Ordering::Equal | Ordering::Less => {}
            }
        }
        Ok(Self {
            start,
            end,
            exclude_start,
            exclude_end,
        })
    }

    /// Left-closed, right-closed interval (`[A, B]`)
    pub fn closed(start: T, end: T) -> Result<Self> {
        Self::new(Some(start), Some(end), false, false)
    }

    /// Left-open, right-open interval (`(A, B)`)
    pub fn open(start: T, end: T) -> Result<Self> {
        Self::new(Some(start), Some(end), true, true)
    }

    /// Left-closed, right-open interval (`[A, B)`)
    pub fn closed_open(start: T, end: T) -> Result<Self> {
        Self::new(Some(start), Some(end), false, true)
    }

    /// Left-open, right-closed interval (`(A, B]`)
    pub fn open_closed(start: T, end: T) -> Result<Self> {
        Self::new(Some(start), Some(end), true, false)
    }

    /// The interval `[A, A]` that contains a single value.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            start: Some(value.clone()),
            end: Some(value),
            exclude_start: false,
            exclude_end: false,
        }
    }

    /// `[A, +∞)`
    #[must_use]
    pub fn at_least(start: T) -> Self {
        Self {
            start: Some(start),
            end: None,
            exclude_start: false,
            exclude_end: true,
        }
    }

    /// `(A, +∞)`
    #[must_use]
    pub fn greater_than(start: T) -> Self {
        Self {
            start: Some(start),
            end: None,
            exclude_start: true,
            exclude_end: true,
        }
    }

    /// `(-∞, B]`
    #[must_use]
    pub fn at_most(end: T) -> Self {
        Self {
            start: None,
            end: Some(end),
            exclude_start: true,
            exclude_end: false,
        }
    }

    /// `(-∞, B)`
    #[must_use]
    pub fn less_than(end: T) -> Self {
        Self {
            start: None,
            end: Some(end),
            exclude_start: true,
            exclude_end: true,
        }
    }

    /// True if self is of the form `[A, A]`.
    #[must_use]
    pub fn is_point(&self) -> bool {
        match (&self.start, &self.end) {
            (Some(s), Some(e)) => s.same_as(e),
            (None, _) | (_, None) => false,
        }
    }

    /// Whether value is contained in the interval
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let after_start = self
            .start
            .as_ref()
            .map_or(true, |s| s.compare(value) == Ordering::Less);
        let before_end = self
            .end
            .as_ref()
            .map_or(true, |e| e.compare(value) == Ordering::Greater);
        (after_start && before_end)
            || (!self.exclude_start
                && self.start.as_ref().is_some_and(|s| s.same_as(value)))
            || (!self.exclude_end
                && self.end.as_ref().is_some_and(|e| e.same_as(value)))
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    #[must_use]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.intersection(other).is_ok_and(|common| common == *other)
    }

    /// Whether the two intervals have at least one value in common.
    /// ```txt
    ///    [----- A -----]
    ///                  (----- B -----)    no overlap, B excludes A's end
    /// ```
    #[must_use]
    pub fn has_overlap(&self, other: &Self) -> bool {
        !ends_before(self, other) && !ends_before(other, self)
    }

    /// Returns the union of the two intervals.
    /// This fails with [`Error::SeparatedIntervals`] when the intervals
    /// have no value in common, even if they meet like `[1, 5)` and `[5, 9]`.
    /// Two intervals that share a single included value, like `[1, 5]` and
    /// `[5, 9]`, are contiguous.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.has_overlap(other) {
            return Err(self.separated(other));
        }
        let (start, exclude_start) = pick_bound(
            (&self.start, self.exclude_start),
            (&other.start, other.exclude_start),
            Ordering::Less,
            Combine::Widest,
        );
        let (end, exclude_end) = pick_bound(
            (&self.end, self.exclude_end),
            (&other.end, other.exclude_end),
            Ordering::Greater,
            Combine::Widest,
        );
        Self::new(start, end, exclude_start, exclude_end)
    }

    /// Returns the values common to both intervals.
    /// Fails with [`Error::SeparatedIntervals`] if they do not overlap.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        if !self.has_overlap(other) {
            return Err(self.separated(other));
        }
        let (start, exclude_start) = pick_bound(
            (&self.start, self.exclude_start),
            (&other.start, other.exclude_start),
            Ordering::Greater,
            Combine::Narrowest,
        );
        let (end, exclude_end) = pick_bound(
            (&self.end, self.exclude_end),
            (&other.end, other.exclude_end),
            Ordering::Less,
            Combine::Narrowest,
        );
        Self::new(start, end, exclude_start, exclude_end)
    }

    /// Returns the values of self that are not in other.
    ///
    /// ```txt
    ///        [------ A ------]
    ///               [----- B -------]
    ///        [------)                     A - B
    ///                        (------]     B - A
    /// ```
    ///
    /// The removed part is a prefix when it starts at the same value as self,
    /// a suffix when it ends at the same value.  Only values are compared,
    /// so `[0, 5] - (0, 2]` is `(2, 5]`.
    ///
    /// Fails with [`Error::EmptyInterval`] when nothing would remain, and
    /// with [`Error::InconsistentSubtraction`] when other lies strictly inside
    /// self, since the remaining values are not contiguous.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        if !self.has_overlap(other) {
            log::trace!("nothing to remove from {self}");
            return Ok(self.clone());
        }
        let common = self.intersection(other)?;
        if common == *self {
            return Err(Error::EmptyInterval);
        }
        if same_bound(&common.start, &self.start) {
            log::trace!("removing a prefix {common} from {self}");
            Self::new(
                common.end,
                self.end.clone(),
                !common.exclude_end,
                self.exclude_end,
            )
        } else if same_bound(&common.end, &self.end) {
            log::trace!("removing a suffix {common} from {self}");
            Self::new(
                self.start.clone(),
                common.start,
                self.exclude_start,
                !common.exclude_start,
            )
        } else {
            Err(Error::InconsistentSubtraction {
                minuend: self.to_string(),
                subtrahend: other.to_string(),
            })
        }
    }

    fn separated(&self, other: &Self) -> Error {
        Error::SeparatedIntervals {
            left: self.to_string(),
            right: other.to_string(),
        }
    }
}

/// True if every value of left is strictly less than every value of right.
fn ends_before<T: Ordered>(left: &Interval<T>, right: &Interval<T>) -> bool {
    match (&left.end, &right.start) {
        (Some(e), Some(s)) => match e.compare(s) {
            Ordering::Less => true,
            Ordering::Equal => left.exclude_end || right.exclude_start,
            Ordering::Greater => false,
        },
        (None, _) | (_, None) => false,
    }
}

/// Two bounds on the same side are at the same place: both infinite, or the
/// same value whatever their exclusion.
fn same_bound<T: Ordered>(left: &Option<T>, right: &Option<T>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => l.same_as(r),
        (None, Some(_)) | (Some(_), None) => false,
    }
}

/// How to combine two bounds on the same side, when they have the same
/// value.
#[derive(Clone, Copy)]
enum Combine {
    /// The value is included if either interval includes it (union).
    Widest,
    /// The value is included only if both intervals include it
    /// (intersection).
    Narrowest,
}

/// Select one of two bounds on the same side of an interval.
/// `prefer` is the ordering the selected value has with respect to the
/// other one.  An infinite bound wins when widening, and loses when
/// narrowing.
fn pick_bound<T: Scalar>(
    left: (&Option<T>, bool),
    right: (&Option<T>, bool),
    prefer: Ordering,
    combine: Combine,
) -> (Option<T>, bool) {
    match (left.0, right.0, combine) {
        (None, _, Combine::Widest) | (_, None, Combine::Widest) => {
            (None, true)
        }
        (None, None, Combine::Narrowest) => (None, true),
        (None, Some(r), Combine::Narrowest) => (Some(r.clone()), right.1),
        (Some(l), None, Combine::Narrowest) => (Some(l.clone()), left.1),
        (Some(l), Some(r), _) => match l.compare(r) {
            Ordering::Equal => {
                let excluded = match combine {
                    Combine::Widest => left.1 && right.1,
                    Combine::Narrowest => left.1 || right.1,
                };
                (Some(l.clone()), excluded)
            }
            ord if ord == prefer => (Some(l.clone()), left.1),
            Ordering::Less | Ordering::Greater => (Some(r.clone()), right.1),
        },
    }
}

impl<T: Ordered> PartialEq for Interval<T> {
    /// Bounds are compared by value, through [`Ordered`].
    fn eq(&self, other: &Self) -> bool {
        self.exclude_start == other.exclude_start
            && self.exclude_end == other.exclude_end
            && same_bound(&self.start, &other.start)
            && same_bound(&self.end, &other.end)
    }
}

impl<T: Ordered> Eq for Interval<T> {}

/// Only consistent with equality when `T`'s own `Hash` agrees with its
/// [`Ordered`] implementation, which holds for every type this crate
/// implements [`Ordered`] for.
impl<T: Ordered + Hash> Hash for Interval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.exclude_start.hash(state);
        self.exclude_end.hash(state);
    }
}

///  &Interval & &Interval
impl<T: Scalar> std::ops::BitAnd<&Interval<T>> for &Interval<T> {
    type Output = Result<Interval<T>>;

    fn bitand(self, rhs: &Interval<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  Interval & Interval
impl<T: Scalar> std::ops::BitAnd<Interval<T>> for Interval<T> {
    type Output = Result<Interval<T>>;

    fn bitand(self, rhs: Interval<T>) -> Self::Output {
        self.intersection(&rhs)
    }
}

///  &Interval | &Interval
impl<T: Scalar> std::ops::BitOr<&Interval<T>> for &Interval<T> {
    type Output = Result<Interval<T>>;

    fn bitor(self, rhs: &Interval<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  Interval | Interval
impl<T: Scalar> std::ops::BitOr<Interval<T>> for Interval<T> {
    type Output = Result<Interval<T>>;

    fn bitor(self, rhs: Interval<T>) -> Self::Output {
        self.union(&rhs)
    }
}

///   &Interval - &Interval
impl<T: Scalar> std::ops::Sub<&Interval<T>> for &Interval<T> {
    type Output = Result<Interval<T>>;

    /// Same as [`Interval::subtract()`]
    fn sub(self, rhs: &Interval<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

///   Interval - Interval
impl<T: Scalar> std::ops::Sub<Interval<T>> for Interval<T> {
    type Output = Result<Interval<T>>;

    /// Same as [`Interval::subtract()`]
    fn sub(self, rhs: Interval<T>) -> Self::Output {
        self.subtract(&rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn intv(text: &str) -> Interval<i32> {
        Interval::parse(text).unwrap()
    }

    #[test]
    fn test_new() {
        let i = Interval::new(Some(1), Some(4), false, true).unwrap();
        assert_eq!(i.start(), Some(&1));
        assert_eq!(i.end(), Some(&4));
        assert!(!i.exclude_start());
        assert!(i.exclude_end());

        // Infinite bounds are always excluded
        let i = Interval::<i32>::new(None, Some(4), false, false).unwrap();
        assert!(i.exclude_start());
        assert!(!i.exclude_end());
        assert!(i.is_start_unbounded());
        assert!(!i.is_end_unbounded());
        let i = Interval::<i32>::new(None, None, false, false).unwrap();
        assert_eq!(i, Interval::unbounded());

        assert_eq!(
            Interval::closed(5, 1),
            Err(Error::ReversedEdges {
                start: "5".into(),
                end: "1".into()
            }),
        );
        assert_eq!(Interval::closed_open(5, 5), Err(Error::EmptyInterval));
        assert_eq!(Interval::open_closed(5, 5), Err(Error::EmptyInterval));
        assert_eq!(Interval::open(5, 5), Err(Error::EmptyInterval));
    }

    #[test]
    fn test_point() {
        let p = Interval::new(Some(5), Some(5), false, false).unwrap();
        assert_eq!(p, Interval::point(5));
        assert!(p.is_point());
        assert!(p.contains(&5));
        assert!(!p.contains(&4));
        assert!(!p.contains(&6));
        assert_eq!(
            Interval::new(Some(5), Some(5), true, false),
            Err(Error::EmptyInterval),
        );
        assert!(!Interval::closed(0, 2).unwrap().is_point());
        assert!(!Interval::at_least(0).is_point());
    }

    #[test]
    fn test_contains() {
        let intv1 = Interval::closed_open(1, 10).unwrap(); // [1,10)
        assert!(!intv1.contains(&0));
        assert!(intv1.contains(&1));
        assert!(intv1.contains(&9));
        assert!(!intv1.contains(&10));

        let intv2 = Interval::open_closed(1, 10).unwrap(); // (1,10]
        assert!(!intv2.contains(&1));
        assert!(intv2.contains(&2));
        assert!(intv2.contains(&10));
        assert!(!intv2.contains(&11));

        let intv3 = Interval::at_most(10); // (-∞,10]
        assert!(intv3.contains(&i32::MIN));
        assert!(intv3.contains(&10));
        assert!(!intv3.contains(&11));

        let intv4 = Interval::greater_than(10); // (10,+∞)
        assert!(!intv4.contains(&10));
        assert!(intv4.contains(&i32::MAX));

        let intv5 = Interval::<i32>::unbounded();
        assert!(intv5.contains(&i32::MIN));
        assert!(intv5.contains(&0));
        assert!(intv5.contains(&i32::MAX));

        let intv6 = Interval::open(0.0, 1.0).unwrap();
        assert!(intv6.contains(&f64::EPSILON));
        assert!(!intv6.contains(&1.0));
    }

    #[test]
    fn test_contains_interval() {
        let outer = intv("[0, 10]");
        assert!(outer.contains_interval(&intv("[0, 10]")));
        assert!(outer.contains_interval(&intv("(0, 10)")));
        assert!(outer.contains_interval(&intv("[3, 3]")));
        assert!(!outer.contains_interval(&intv("[5, 11]")));
        assert!(!outer.contains_interval(&intv("[20, 30]")));
        assert!(!intv("(0, 10)").contains_interval(&outer));
        assert!(Interval::unbounded().contains_interval(&outer));
        assert!(!outer.contains_interval(&Interval::at_least(0)));
    }

    #[test]
    fn test_overlap() {
        assert!(!intv("(0, 10]").has_overlap(&intv("(10, 20)")));
        assert!(!intv("(0, 10)").has_overlap(&intv("[10, 20)")));
        assert!(intv("(0, 10]").has_overlap(&intv("[10, 20)")));
        assert!(intv("[10, 20]").has_overlap(&intv("(10, 20)")));
        assert!(!intv("[0, 5]").has_overlap(&intv("[6, 9]")));
        assert!(!intv("[6, 9]").has_overlap(&intv("[0, 5]")));
        assert!(intv("(-∞, 0]").has_overlap(&intv("[0, +∞)")));
        assert!(!intv("(-∞, 0)").has_overlap(&intv("[0, +∞)")));
        assert!(Interval::unbounded().has_overlap(&intv("[3, 3]")));
    }

    #[test]
    fn test_scenario() {
        let first = intv("(0, 10)");
        let second = intv("[5, 15]");

        assert_eq!(first.intersection(&second), Ok(intv("[5, 10)")));
        assert_eq!(first.union(&second), Ok(intv("(0, 15]")));
        assert_eq!(first.subtract(&second), Ok(intv("(0, 5)")));
        assert_eq!(second.subtract(&first), Ok(intv("[10, 15]")));
    }

    #[test]
    fn test_union() {
        assert_eq!(
            intv("(1, 5)").union(&intv("(5, 9)")),
            Err(Error::SeparatedIntervals {
                left: "(1, 5)".into(),
                right: "(5, 9)".into()
            }),
        );
        assert!(intv("[1, 4]").union(&intv("[6, 9]")).is_err());

        // Meeting at a value only one side includes is not enough
        assert_eq!(
            intv("[1, 5)").union(&intv("[5, 9]")),
            Err(Error::SeparatedIntervals {
                left: "[1, 5)".into(),
                right: "[5, 9]".into()
            }),
        );
        assert!(matches!(
            intv("[5, 9]").union(&intv("[1, 5)")),
            Err(Error::SeparatedIntervals { .. }),
        ));
        assert!(matches!(
            intv("(1, 5]").union(&intv("(5, 9)")),
            Err(Error::SeparatedIntervals { .. }),
        ));

        // Both include the shared value
        assert_eq!(intv("[1, 5]").union(&intv("[5, 9]")), Ok(intv("[1, 9]")));
        assert_eq!(
            intv("(5, 9)").union(&intv("(1, 5]")),
            Err(Error::SeparatedIntervals {
                left: "(5, 9)".into(),
                right: "(1, 5]".into()
            }),
        );
        assert_eq!(intv("[5, 9)").union(&intv("(1, 5]")), Ok(intv("(1, 9)")));

        // Same bound value: inclusion wins
        assert_eq!(intv("(1, 5)").union(&intv("[1, 5)")), Ok(intv("[1, 5)")));
        assert_eq!(intv("(1, 5)").union(&intv("(1, 5]")), Ok(intv("(1, 5]")));

        // Infinite bounds
        assert_eq!(
            intv("(-∞, 3]").union(&intv("[0, 8)")),
            Ok(intv("(-∞, 8)")),
        );
        assert_eq!(
            intv("[2, +∞)").union(&intv("[0, 8)")),
            Ok(intv("[0, +∞)")),
        );
        assert_eq!(
            intv("(-∞, 3]").union(&intv("[3, +∞)")),
            Ok(Interval::unbounded()),
        );
    }

    #[test]
    fn test_intersection() {
        assert!(matches!(
            intv("(0, 10]").intersection(&intv("(10, 20)")),
            Err(Error::SeparatedIntervals { .. }),
        ));
        assert_eq!(
            intv("(0, 10]").intersection(&intv("[10, 20)")),
            Ok(Interval::point(10)),
        );

        // Same bound value: exclusion wins
        assert_eq!(
            intv("[1, 5]").intersection(&intv("(1, 5)")),
            Ok(intv("(1, 5)")),
        );

        // Infinite bounds
        assert_eq!(
            intv("(-∞, 3]").intersection(&intv("(0, 8)")),
            Ok(intv("(0, 3]")),
        );
        assert_eq!(
            intv("(-∞, 3]").intersection(&intv("(-∞, 1)")),
            Ok(intv("(-∞, 1)")),
        );
        assert_eq!(
            Interval::unbounded().intersection(&intv("[2, +∞)")),
            Ok(intv("[2, +∞)")),
        );
    }

    #[test]
    fn test_subtract() {
        // Disjoint: nothing removed
        let a = intv("[0, 5]");
        assert_eq!(a.subtract(&intv("(5, 9]")), Ok(a.clone()));
        assert_eq!(a.subtract(&intv("[10, 20]")), Ok(a.clone()));

        // Everything removed
        assert_eq!(a.subtract(&intv("[0, 5]")), Err(Error::EmptyInterval));
        assert_eq!(
            a.subtract(&Interval::unbounded()),
            Err(Error::EmptyInterval),
        );

        // Prefix and suffix
        assert_eq!(a.subtract(&intv("[-3, 2)")), Ok(intv("[2, 5]")));
        assert_eq!(a.subtract(&intv("(-∞, 2]")), Ok(intv("(2, 5]")));
        assert_eq!(a.subtract(&intv("(3, 8]")), Ok(intv("[0, 3]")));
        assert_eq!(a.subtract(&intv("[0, 5)")), Ok(Interval::point(5)));
        assert_eq!(a.subtract(&intv("(0, 2]")), Ok(intv("(2, 5]")));
        assert_eq!(a.subtract(&intv("[3, 5)")), Ok(intv("[0, 3)")));
        assert_eq!(a.subtract(&intv("(0, 5]")), Err(Error::EmptyInterval));
        assert_eq!(a.subtract(&intv("(0, 5)")), Err(Error::EmptyInterval));
        assert_eq!(
            intv("(-∞, 5]").subtract(&intv("[3, 10]")),
            Ok(intv("(-∞, 3)")),
        );
        assert_eq!(
            Interval::unbounded().subtract(&intv("[3, +∞)")),
            Ok(intv("(-∞, 3)")),
        );

        // A hole in the middle
        assert_eq!(
            a.subtract(&intv("[1, 2]")),
            Err(Error::InconsistentSubtraction {
                minuend: "[0, 5]".into(),
                subtrahend: "[1, 2]".into(),
            }),
        );
        assert!(Interval::unbounded().subtract(&intv("[1, 2]")).is_err());
        assert_eq!(a.subtract(&intv("(0, 2)")), Ok(intv("[2, 5]")));
    }

    #[test]
    fn test_operators() {
        let a = intv("[0, 10]");
        let b = intv("[5, 15]");
        assert_eq!(&a & &b, Ok(intv("[5, 10]")));
        assert_eq!(&a | &b, Ok(intv("[0, 15]")));
        assert_eq!(&a - &b, Ok(intv("[0, 5)")));
        assert_eq!(a.clone() & b.clone(), Ok(intv("[5, 10]")));
        assert_eq!(a.clone() | b.clone(), Ok(intv("[0, 15]")));
        assert_eq!(b - a, Ok(intv("(10, 15]")));
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        assert_eq!(intv("[1, 4]"), Interval::closed(1, 4).unwrap());
        assert_ne!(intv("[1, 4]"), intv("[1, 4)"));
        assert_ne!(intv("[1, 4]"), intv("(1, 4]"));
        assert_ne!(intv("[1, 4]"), intv("[1, 5]"));
        assert_ne!(intv("[1, +∞)"), intv("[1, 5]"));

        let set: HashSet<Interval<i32>> =
            ["[1, 4]", "[1,4]", " [ 1 , 4 ] ", "[1, 4)"]
                .into_iter()
                .map(intv)
                .collect();
        assert_eq!(set.len(), 2);
    }

    fn bound() -> impl Strategy<Value = Option<i8>> {
        prop_oneof![1 => Just(None), 6 => (-20_i8..20).prop_map(Some)]
    }

    prop_compose! {
        fn interval()(start in bound(), end in bound(),
                      exclude_start in any::<bool>(),
                      exclude_end in any::<bool>())
            -> Interval<i8>
        {
            let (start, end) = match (start, end) {
                (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
                other => other,
            };
            Interval::new(start, end, exclude_start, exclude_end)
                .unwrap_or_else(|_| Interval::point(start.unwrap_or(0)))
        }
    }

    /// The boolean implication operation.
    fn implies(a: bool, b: bool) -> bool {
        !a || b
    }

    /// Whether v is one of the finite bounds of the interval.
    fn is_edge(intv: &Interval<i8>, v: i8) -> bool {
        intv.start() == Some(&v) || intv.end() == Some(&v)
    }

    proptest! {
        #[test]
        fn overlap_is_commutative(a in interval(), b in interval()) {
            prop_assert_eq!(a.has_overlap(&b), b.has_overlap(&a));
        }

        #[test]
        fn overlap_semantics(v in any::<i8>(), a in interval(), b in interval()) {
            prop_assert!(implies(a.contains(&v) && b.contains(&v),
                                 a.has_overlap(&b)));
        }

        #[test]
        fn union_is_commutative(a in interval(), b in interval()) {
            prop_assert_eq!(a.union(&b).ok(), b.union(&a).ok());
        }

        #[test]
        fn union_semantics(v in any::<i8>(), a in interval(), b in interval()) {
            if let Ok(u) = a.union(&b) {
                prop_assert_eq!(u.contains(&v), a.contains(&v) || b.contains(&v));
            }
        }

        #[test]
        fn intersection_is_commutative(a in interval(), b in interval()) {
            prop_assert_eq!(a.intersection(&b).ok(), b.intersection(&a).ok());
        }

        #[test]
        fn intersection_semantics(v in any::<i8>(), a in interval(), b in interval()) {
            match a.intersection(&b) {
                Ok(common) => prop_assert_eq!(
                    common.contains(&v), a.contains(&v) && b.contains(&v)),
                Err(_) => prop_assert!(!(a.contains(&v) && b.contains(&v))),
            }
        }

        #[test]
        fn subtract_disjoint_is_identity(a in interval(), b in interval()) {
            if !a.has_overlap(&b) {
                prop_assert_eq!(a.subtract(&b), Ok(a.clone()));
            }
        }

        #[test]
        fn subtract_semantics(v in any::<i8>(), a in interval(), b in interval()) {
            // A value of self at one of its edges may be dropped along with
            // the part that is removed
            let kept = a.contains(&v) && !b.contains(&v);
            match a.subtract(&b) {
                Ok(rest) => {
                    prop_assert!(implies(rest.contains(&v), kept));
                    prop_assert!(implies(kept && !is_edge(&a, v), rest.contains(&v)));
                }
                Err(Error::EmptyInterval) => {
                    prop_assert!(a.has_overlap(&b));
                    prop_assert!(implies(kept, is_edge(&a, v)));
                }
                Err(_) => prop_assert!(a.has_overlap(&b)),
            }
        }

        #[test]
        fn parse_display_roundtrip(a in interval()) {
            prop_assert_eq!(Interval::parse(&a.to_string()), Ok(a));
        }
    }
}
