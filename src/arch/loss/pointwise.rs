/// A loss evaluated element by element over parallel expected and actual outputs.
pub trait PointwiseLoss {
    /// The loss of a single prediction `actual` against its target `expected`.
    fn f(&self, expected: f64, actual: f64) -> f64;

    /// The derivative of `f` with respect to `actual`.
    fn df(&self, expected: f64, actual: f64) -> f64;

    /// Whether `f` is only defined for `actual` inside `(0, 1)`.
    fn bounded_f(&self) -> bool {
        false
    }

    /// Whether `df` is only defined for `actual` inside `(0, 1)`.
    fn bounded_df(&self) -> bool {
        false
    }
}
