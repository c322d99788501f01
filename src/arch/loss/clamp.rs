use serde::{Deserialize, Serialize};

use crate::{NumErr, Result};

/// The default distance kept between a clamped prediction and the edges of `(0, 1)`.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// How predictions outside the domain of the cross entropy losses are handled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clamp {
    /// Bounds every prediction into `[ε, 1 - ε]` before evaluating.
    Epsilon(f64),
    /// Fails with a domain error at the first prediction outside `(0, 1)`.
    Disabled,
}

impl Default for Clamp {
    fn default() -> Self {
        Self::Epsilon(DEFAULT_EPSILON)
    }
}

impl Clamp {
    /// Checks the clamp is usable.
    ///
    /// # Returns
    /// An `InvalidEpsilon` error unless the epsilon lies in `(0, 0.5)` and `1 - eps` is
    /// still below 1.
    pub fn validate(self) -> Result<Self> {
        match self {
            Self::Epsilon(eps) if !(eps > 0. && eps < 0.5 && 1. - eps < 1.) => {
                Err(NumErr::InvalidEpsilon(eps))
            }
            clamp => Ok(clamp),
        }
    }

    /// Brings a prediction into the domain of the cross entropy losses.
    ///
    /// # Arguments
    /// * `index` - The position of the prediction, reported on domain errors.
    /// * `actual` - The prediction.
    ///
    /// # Returns
    /// The prediction to evaluate, or a domain error if `actual` is NaN or clamping is
    /// disabled and `actual` is outside `(0, 1)`.
    pub(super) fn admit(&self, index: usize, actual: f64) -> Result<f64> {
        match *self {
            Self::Epsilon(_) if actual.is_nan() => Err(NumErr::Domain {
                index,
                value: actual,
            }),
            Self::Epsilon(eps) => Ok(actual.clamp(eps, 1. - eps)),
            Self::Disabled if actual > 0. && actual < 1. => Ok(actual),
            Self::Disabled => Err(NumErr::Domain {
                index,
                value: actual,
            }),
        }
    }
}
