//! Parallel numeric primitives for neural network style computation: dense matrix
//! multiplication, uniform and gaussian sampling, and pointwise activation and loss kernels.
//!
//! The parallel operations fork a set of workers per call, hand each of them a disjoint part
//! of the output and join them before returning.

pub mod arch;
pub mod config;
pub mod error;
mod execution;
pub mod linalg;
pub mod partition;
pub mod sampling;

pub use arch::{
    activations::{ActFn, activation_derivative, activation_forward},
    loss::{Clamp, LossFn, LossKernel, loss_derivative, loss_forward},
};
pub use config::{Dispatch, ParallelConfig};
pub use error::{NumErr, Result};
pub use linalg::{Matrix, ParallelMatMul, multiply};
pub use partition::{ChunkRange, available_threads, partition};
pub use sampling::{BoxMuller, ParallelSampler, sample_gaussian, sample_uniform};
