use super::PointwiseLoss;

/// Binary cross entropy between a target probability and a predicted probability.
#[derive(Default, Clone, Copy, Debug)]
pub struct CrossEntropy;

impl CrossEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl PointwiseLoss for CrossEntropy {
    fn f(&self, expected: f64, actual: f64) -> f64 {
        -expected * actual.ln() - (1. - expected) * (1. - actual).ln()
    }

    fn df(&self, expected: f64, actual: f64) -> f64 {
        (actual - expected) / (actual * (1. - actual))
    }

    fn bounded_f(&self) -> bool {
        true
    }

    fn bounded_df(&self) -> bool {
        true
    }
}

/// Cross entropy against a one-hot or soft categorical target, meant to follow a softmax.
#[derive(Default, Clone, Copy, Debug)]
pub struct CategoricalCrossEntropy;

impl CategoricalCrossEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl PointwiseLoss for CategoricalCrossEntropy {
    fn f(&self, expected: f64, actual: f64) -> f64 {
        -expected * actual.ln()
    }

    fn df(&self, expected: f64, actual: f64) -> f64 {
        actual - expected
    }

    fn bounded_f(&self) -> bool {
        true
    }
}
