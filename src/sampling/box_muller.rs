use std::f64::consts::PI;

use rand::Rng;
use rand_distr::Distribution;

use crate::{NumErr, Result};

/// A normal distribution sampled through the Box-Muller transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMuller {
    mean: f64,
    std_dev: f64,
}

impl BoxMuller {
    /// Creates a new `BoxMuller` distribution.
    ///
    /// # Arguments
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// An error if `mean` is not finite or `std_dev` is negative or not finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(NumErr::InvalidDistribution(format!(
                "mean must be finite, got {mean}"
            )));
        }

        if !std_dev.is_finite() || std_dev < 0. {
            return Err(NumErr::InvalidDistribution(format!(
                "standard deviation must be finite and non-negative, got {std_dev}"
            )));
        }

        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // ln(0) is undefined, u1 has to be strictly positive.
        let u1 = loop {
            let u: f64 = rng.random();
            if u > 0. {
                break u;
            }
        };
        let u2: f64 = rng.random();

        let z = (-2. * u1.ln()).sqrt() * (2. * PI * u2).cos();
        self.mean + z * self.std_dev
    }
}
