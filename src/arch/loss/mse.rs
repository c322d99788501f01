use super::PointwiseLoss;

/// Squared error, averaged by callers that need the mean.
#[derive(Default, Clone, Copy, Debug)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl PointwiseLoss for Mse {
    fn f(&self, expected: f64, actual: f64) -> f64 {
        (actual - expected).powi(2)
    }

    fn df(&self, expected: f64, actual: f64) -> f64 {
        actual - expected
    }
}
