use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tanh;

impl Tanh {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, x: f64) -> f64 {
        x.tanh()
    }

    pub fn df(&self, x: f64) -> f64 {
        1. - x.tanh().powi(2)
    }
}
