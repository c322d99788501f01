mod box_muller;
mod sampler;

pub use box_muller::BoxMuller;
pub use sampler::{ParallelSampler, sample_gaussian, sample_uniform};
