use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// A matrix constrained to a single row or a single column, with a flat,
/// position-indexed accessor.
///
/// The orientation is an explicit tag rather than something probed from the
/// shape at every access. Converting an existing [`Matrix`] via `TryFrom`
/// aliases its storage — no cells are copied, so mutation through the vector
/// is visible through the source matrix and vice versa.
#[derive(Debug, Clone)]
pub enum Vector {
    Row(Matrix),
    Column(Matrix),
}

impl Vector {
    /// Fresh zero-filled row-shaped vector of the given length.
    pub fn row(len: usize) -> Result<Vector> {
        Ok(Vector::Row(Matrix::zeros(len, 1)?))
    }

    /// Fresh zero-filled column-shaped vector of the given length.
    pub fn column(len: usize) -> Result<Vector> {
        Ok(Vector::Column(Matrix::zeros(1, len)?))
    }

    /// Row-shaped vector initialized from the given values.
    pub fn row_from(values: &[f64]) -> Result<Vector> {
        let mut vector = Vector::row(values.len())?;
        for (position, value) in values.iter().enumerate() {
            vector.set(position, *value)?;
        }
        Ok(vector)
    }

    /// Column-shaped vector initialized from the given values.
    pub fn column_from(values: &[f64]) -> Result<Vector> {
        let mut vector = Vector::column(values.len())?;
        for (position, value) in values.iter().enumerate() {
            vector.set(position, *value)?;
        }
        Ok(vector)
    }

    pub fn len(&self) -> usize {
        match self {
            Vector::Row(m) => m.columns(),
            Vector::Column(m) => m.rows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        // A vector always has at least one cell.
        false
    }

    pub fn get(&self, position: usize) -> Result<f64> {
        match self {
            Vector::Row(m) => m.get(position, 0),
            Vector::Column(m) => m.get(0, position),
        }
    }

    pub fn set(&mut self, position: usize, value: f64) -> Result<()> {
        match self {
            Vector::Row(m) => m.set(position, 0, value),
            Vector::Column(m) => m.set(0, position, value),
        }
    }

    /// The underlying matrix handle. Shares storage with this vector.
    pub fn matrix(&self) -> &Matrix {
        match self {
            Vector::Row(m) | Vector::Column(m) => m,
        }
    }

    pub fn into_matrix(self) -> Matrix {
        match self {
            Vector::Row(m) | Vector::Column(m) => m,
        }
    }

    /// Transposed copy with the opposite orientation; fresh storage.
    pub fn transpose(&self) -> Result<Vector> {
        Vector::try_from(self.matrix().transpose())
    }
}

impl TryFrom<Matrix> for Vector {
    type Error = Error;

    /// Wraps a single-row or single-column matrix without copying it. A 1x1
    /// matrix becomes row-shaped. Fails when neither dimension is 1.
    fn try_from(matrix: Matrix) -> Result<Vector> {
        if matrix.rows() == 1 {
            Ok(Vector::Row(matrix))
        } else if matrix.columns() == 1 {
            Ok(Vector::Column(matrix))
        } else {
            Err(Error::NotAVector {
                columns: matrix.columns(),
                rows: matrix.rows(),
            })
        }
    }
}
