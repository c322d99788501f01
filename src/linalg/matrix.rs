use ndarray::{Array2, ArrayView2};

use crate::{NumErr, Result};

/// A dense, rectangular matrix with at least one row and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Creates a new `Matrix` from its rows.
    ///
    /// # Arguments
    /// * `rows` - The rows of the matrix, all of them must have the same length.
    ///
    /// # Returns
    /// A new `Matrix` instance or an error if the rows are ragged or empty.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);

        if let Some((row, got)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != ncols)
        {
            return Err(NumErr::RaggedMatrix {
                row,
                got,
                expected: ncols,
            });
        }

        let data = Array2::from_shape_fn((nrows, ncols), |(i, j)| rows[i][j]);
        Self::from_array(data)
    }

    /// Wraps an already rectangular array.
    ///
    /// # Returns
    /// A new `Matrix` instance or an error if `data` has no rows or no columns.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(NumErr::EmptyMatrix);
        }

        Ok(Self { data })
    }

    /// Creates the `n×n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_array(Array2::eye(n))
    }

    /// Wraps a freshly computed product, its shape is guaranteed non empty by its operands.
    pub(super) fn from_product(data: Array2<f64>) -> Self {
        Self { data }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the `(rows, columns)` shape of this matrix.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = NumErr;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
