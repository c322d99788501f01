mod clamp;
mod cross_entropy;
mod kernel;
mod loss_fn;
mod mse;
mod pointwise;

pub use clamp::{Clamp, DEFAULT_EPSILON};
pub use cross_entropy::{CategoricalCrossEntropy, CrossEntropy};
pub use kernel::{LossKernel, loss_derivative, loss_forward};
pub use loss_fn::LossFn;
pub use mse::Mse;
pub use pointwise::PointwiseLoss;
