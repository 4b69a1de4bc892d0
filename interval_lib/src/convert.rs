use crate::errors::Result;
use crate::intervals::Interval;
use crate::scalar::Scalar;

impl<T: Scalar> Interval<T> {
    /// Convert to an interval on another scalar type, going through the
    /// text of each bound.  Infinite bounds and inclusion are preserved.
    ///
    /// This fails when a bound has no equivalent in the target type (for
    /// instance `2.5` as an integer), or when the converted bounds no
    /// longer make a valid interval.
    /// ```
    ///    use interval_lib::Interval;
    ///    let small = Interval::<u8>::parse("[1, 200)").unwrap();
    ///    let wide: Interval<f64> = small.convert().unwrap();
    ///    assert_eq!(wide.to_string(), "[1, 200)");
    /// ```
    pub fn convert<U: Scalar>(&self) -> Result<Interval<U>> {
        let start = self
            .start()
            .map(|s| U::from_text(&s.to_text()))
            .transpose()?;
        let end = self
            .end()
            .map(|e| U::from_text(&e.to_text()))
            .transpose()?;
        Interval::new(start, end, self.exclude_start(), self.exclude_end())
    }
}
