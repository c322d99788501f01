mod act_fn;
mod leaky_relu;
mod sigmoid;
mod tanh;

pub use act_fn::{ActFn, activation_derivative, activation_forward};
pub use leaky_relu::LeakyRelu;
pub use sigmoid::Sigmoid;
pub use tanh::Tanh;
