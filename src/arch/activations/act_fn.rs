use serde::{Deserialize, Serialize};

use super::{LeakyRelu, Sigmoid, Tanh};

/// The closed set of activation functions, each with its forward function `f` and its
/// derivative `df`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFn {
    LeakyRelu(LeakyRelu),
    Sigmoid(Sigmoid),
    Tanh(Tanh),
}

impl ActFn {
    /// Leaky ReLU with the usual `0.01` slope for negative inputs.
    pub fn leaky_relu() -> Self {
        Self::LeakyRelu(LeakyRelu::default())
    }

    pub fn leaky_relu_with_slope(slope: f64) -> Self {
        Self::LeakyRelu(LeakyRelu::new(slope))
    }

    pub fn sigmoid() -> Self {
        Self::Sigmoid(Sigmoid::new())
    }

    pub fn tanh() -> Self {
        Self::Tanh(Tanh::new())
    }

    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::LeakyRelu(a) => a.f(x),
            Self::Sigmoid(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
        }
    }

    pub fn df(&self, x: f64) -> f64 {
        match self {
            Self::LeakyRelu(a) => a.df(x),
            Self::Sigmoid(a) => a.df(x),
            Self::Tanh(a) => a.df(x),
        }
    }

    /// Applies the activation to every element of `xs`.
    pub fn apply(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.f(x)).collect()
    }

    /// Applies the derivative of the activation to every element of `xs`.
    pub fn apply_derivative(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.df(x)).collect()
    }
}

pub fn activation_forward(act_fn: ActFn, x: f64) -> f64 {
    act_fn.f(x)
}

pub fn activation_derivative(act_fn: ActFn, x: f64) -> f64 {
    act_fn.df(x)
}
