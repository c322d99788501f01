mod matmul;
mod matrix;

pub use matmul::{ParallelMatMul, multiply};
pub use matrix::Matrix;
