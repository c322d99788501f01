use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, x: f64) -> f64 {
        // e^-x overflows for large negative x, so that half uses e^x instead.
        if x >= 0. {
            1. / (1. + (-x).exp())
        } else {
            let e = x.exp();
            e / (1. + e)
        }
    }

    pub fn df(&self, x: f64) -> f64 {
        let s = self.f(x);
        s * (1. - s)
    }
}
