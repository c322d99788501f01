use log::debug;
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};

use super::BoxMuller;
use crate::{
    NumErr, Result,
    config::ParallelConfig,
    execution::{self, Job},
    partition::partition,
};

/// Fills buffers with independently drawn random values, one chunk of the buffer per worker.
///
/// Every worker owns its own generator, derived from a per-call master generator before the
/// workers are spawned. The master is seeded from the configuration when a seed is given and
/// from the OS otherwise.
#[derive(Debug, Clone, Default)]
pub struct ParallelSampler {
    config: ParallelConfig,
}

impl ParallelSampler {
    /// Creates a new `ParallelSampler`.
    ///
    /// # Arguments
    /// * `config` - The execution bounds.
    ///
    /// # Returns
    /// A new `ParallelSampler` instance.
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Samples `size` values from `distribution` in parallel.
    ///
    /// # Arguments
    /// * `size` - The length of the output buffer.
    /// * `distribution` - The distribution every value is drawn from.
    ///
    /// # Returns
    /// A freshly allocated buffer of `size` values.
    pub fn sample<D>(&self, size: usize, distribution: &D) -> Vec<f64>
    where
        D: Distribution<f64> + Sync,
    {
        let mut out = vec![0.; size];
        let workers = self.config.workers_for(size);
        let chunks = partition(size, workers);

        let mut master = match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let jobs: Vec<_> = execution::split_slice_mut(&mut out, &chunks)
            .into_iter()
            .map(|Job { worker, range, part }| Job {
                worker,
                range,
                part: (part, StdRng::from_rng(&mut master)),
            })
            .collect();

        debug!(size = size, workers = jobs.len(); "sampling");

        execution::fork_join(self.config.dispatch(), jobs, |_, _, (part, mut rng)| {
            part.iter_mut()
                .for_each(|x| *x = distribution.sample(&mut rng));
        });

        out
    }

    /// Samples `size` values uniformly from `[lower, upper)`.
    ///
    /// # Arguments
    /// * `size` - The length of the output buffer.
    /// * `lower` - The inclusive lower limit.
    /// * `upper` - The exclusive upper limit.
    ///
    /// # Returns
    /// The samples, or an error if the range is empty or not finite.
    pub fn uniform(&self, size: usize, lower: f64, upper: f64) -> Result<Vec<f64>> {
        let uniform = Uniform::new(lower, upper)?;
        Ok(self.sample(size, &uniform))
    }

    /// Samples `size` values from a normal distribution via the Box-Muller transform.
    ///
    /// # Arguments
    /// * `size` - The length of the output buffer.
    /// * `mean` - The mean of the distribution.
    /// * `std_dev` - The standard deviation of the distribution.
    ///
    /// # Returns
    /// The samples, or an error if `mean` or `std_dev` are invalid.
    pub fn gaussian(&self, size: usize, mean: f64, std_dev: f64) -> Result<Vec<f64>> {
        let normal = BoxMuller::new(mean, std_dev)?;
        Ok(self.sample(size, &normal))
    }

    /// Samples weights using Xavier uniform initialization.
    ///
    /// # Arguments
    /// * `size` - The amount of weights.
    /// * `fan_in` - The number of input units in the weight tensor.
    /// * `fan_out` - The number of output units in the weight tensor.
    pub fn xavier_uniform(&self, size: usize, fan_in: usize, fan_out: usize) -> Result<Vec<f64>> {
        let range = (6. / fan(fan_in + fan_out)?).sqrt();
        self.uniform(size, -range, range)
    }

    /// Samples weights using LeCun uniform initialization.
    pub fn lecun_uniform(&self, size: usize, fan_in: usize) -> Result<Vec<f64>> {
        let range = (3. / fan(fan_in)?).sqrt();
        self.uniform(size, -range, range)
    }

    /// Samples weights using Kaiming normal initialization.
    ///
    /// # Arguments
    /// * `size` - The amount of weights.
    /// * `fan_in` - The number of input units in the weight tensor.
    pub fn kaiming(&self, size: usize, fan_in: usize) -> Result<Vec<f64>> {
        let std_dev = (2. / fan(fan_in)?).sqrt();
        self.gaussian(size, 0., std_dev)
    }

    /// Samples weights using Xavier normal initialization.
    pub fn xavier(&self, size: usize, fan_in: usize, fan_out: usize) -> Result<Vec<f64>> {
        self.kaiming(size, fan_in + fan_out)
    }

    /// Samples weights using LeCun normal initialization.
    pub fn lecun(&self, size: usize, fan_in: usize) -> Result<Vec<f64>> {
        let std_dev = (1. / fan(fan_in)?).sqrt();
        self.gaussian(size, 0., std_dev)
    }
}

fn fan(units: usize) -> Result<f64> {
    match units {
        0 => Err(NumErr::InvalidDistribution(
            "fan can't be zero".to_string(),
        )),
        n => Ok(n as f64),
    }
}

/// Samples `size` values uniformly from `[lower, upper)` with the default configuration.
pub fn sample_uniform(size: usize, lower: f64, upper: f64) -> Result<Vec<f64>> {
    ParallelSampler::default().uniform(size, lower, upper)
}

/// Samples `size` normally distributed values with the default configuration.
pub fn sample_gaussian(size: usize, mean: f64, std_dev: f64) -> Result<Vec<f64>> {
    ParallelSampler::default().gaussian(size, mean, std_dev)
}
