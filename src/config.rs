use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::partition::available_threads;

/// How the workers of a single call are run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// Spawns a fresh set of scoped threads per call and joins them before returning.
    #[default]
    Spawn,
    /// Runs the workers on the rayon global pool, still joining before returning.
    Pool,
}

/// Execution bounds for the parallel primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    threads: Option<NonZeroUsize>,
    seed: Option<u64>,
    dispatch: Dispatch,
}

impl ParallelConfig {
    /// Creates a new configuration which uses every available core, OS entropy for the
    /// random streams and a fresh set of threads per call.
    ///
    /// # Returns
    /// A `ParallelConfig` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the amount of workers instead of asking the hardware.
    pub fn with_threads(mut self, threads: NonZeroUsize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Seeds the random streams, sampling with the same seed and thread count is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Returns the amount of workers to use for a call.
    ///
    /// # Returns
    /// The configured thread count or the hardware concurrency.
    pub fn threads(&self) -> NonZeroUsize {
        self.threads.unwrap_or_else(available_threads)
    }

    /// Returns the amount of workers to use for a call over `n` items, never more than `n`.
    ///
    /// # Arguments
    /// * `n` - The amount of items to process.
    pub fn workers_for(&self, n: usize) -> NonZeroUsize {
        let threads = self.threads();
        NonZeroUsize::new(n).map_or(NonZeroUsize::MIN, |n| threads.min(n))
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }
}
