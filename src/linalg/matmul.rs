use log::debug;
use ndarray::{Array2, linalg, s};

use super::Matrix;
use crate::{NumErr, Result, config::ParallelConfig, execution, partition::partition};

/// Multiplies dense matrices, partitioning the rows of the product across workers.
#[derive(Debug, Clone, Default)]
pub struct ParallelMatMul {
    config: ParallelConfig,
}

impl ParallelMatMul {
    /// Creates a new `ParallelMatMul`.
    ///
    /// # Arguments
    /// * `config` - The execution bounds.
    ///
    /// # Returns
    /// A new `ParallelMatMul` instance.
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Computes the product `a·b`.
    ///
    /// Every worker owns a contiguous block of rows of the product and computes
    /// `c[i][j] = Σ_k a[i][k]·b[k][j]` for those rows only.
    ///
    /// # Arguments
    /// * `a` - The left `R×K` operand.
    /// * `b` - The right `K×C` operand.
    ///
    /// # Returns
    /// The `R×C` product, or a `DimensionMismatch` if `a` has not as many columns as `b` rows.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.ncols() != b.nrows() {
            return Err(NumErr::DimensionMismatch {
                left: a.shape(),
                right: b.shape(),
            });
        }

        let rows = a.nrows();
        let mut c = Array2::zeros((rows, b.ncols()));
        let chunks = partition(rows, self.config.workers_for(rows));
        let jobs = execution::split_rows_mut(c.view_mut(), &chunks);

        debug!(rows = rows, inner = a.ncols(), cols = b.ncols(), workers = jobs.len(); "multiplying");

        let (a, b) = (a.view(), b.view());
        execution::fork_join(self.config.dispatch(), jobs, |_, range, mut c_rows| {
            let a_rows = a.slice(s![range.as_range(), ..]);
            linalg::general_mat_mul(1.0, &a_rows, &b, 0.0, &mut c_rows);
        });

        Ok(Matrix::from_product(c))
    }
}

/// Computes the product `a·b` with the default configuration.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ParallelMatMul::default().multiply(a, b)
}
