use serde::{Deserialize, Serialize};

/// Leaky rectified linear unit, lets a small gradient through for negative inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeakyRelu {
    slope: f64,
}

impl Default for LeakyRelu {
    fn default() -> Self {
        Self { slope: 0.01 }
    }
}

impl LeakyRelu {
    pub fn new(slope: f64) -> Self {
        Self { slope }
    }

    pub fn f(&self, x: f64) -> f64 {
        if x >= 0. { x } else { self.slope * x }
    }

    pub fn df(&self, x: f64) -> f64 {
        if x >= 0. { 1. } else { self.slope }
    }
}
