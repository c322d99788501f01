use serde::{Deserialize, Serialize};

use super::{CategoricalCrossEntropy, CrossEntropy, Mse, PointwiseLoss};

/// The closed set of loss functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFn {
    MeanSquaredError,
    CrossEntropy,
    BinaryCrossEntropy,
    CategoricalCrossEntropy,
}

impl LossFn {
    /// Returns the pointwise implementation behind this variant.
    pub fn pointwise(&self) -> &'static dyn PointwiseLoss {
        match self {
            Self::MeanSquaredError => &Mse,
            Self::CrossEntropy | Self::BinaryCrossEntropy => &CrossEntropy,
            Self::CategoricalCrossEntropy => &CategoricalCrossEntropy,
        }
    }
}
