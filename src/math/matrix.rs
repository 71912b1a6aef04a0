use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Dense 2D grid of `f64` cells with fixed dimensions.
///
/// Cells are addressed `(column, row)` — column first — throughout the API.
/// Storage is row-major behind a shared handle: `Clone` does not copy the
/// grid, it produces another handle onto the same cells, so mutation through
/// any clone is visible through all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    name: Option<String>,
    data: Rc<RefCell<Vec<f64>>>,
}

impl Matrix {
    /// Zero-filled matrix. Both dimensions must be at least 1.
    pub fn zeros(columns: usize, rows: usize) -> Result<Matrix> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidArgument(format!(
                "matrix dimensions must be positive, got {columns}x{rows}"
            )));
        }
        Ok(Matrix {
            rows,
            columns,
            name: None,
            data: Rc::new(RefCell::new(vec![0.0; rows * columns])),
        })
    }

    /// Builds a matrix from row-major data. Rows must be non-empty and all
    /// of equal length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let columns = data.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidArgument(
                "matrix data must have at least one row and one column".into(),
            ));
        }
        if data.iter().any(|row| row.len() != columns) {
            return Err(Error::DimensionMismatch(
                "rows have different lengths".into(),
            ));
        }
        let result = Matrix::zeros(columns, rows)?;
        result.data.borrow_mut().copy_from_slice(&data.concat());
        Ok(result)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn offset(&self, column: usize, row: usize) -> Result<usize> {
        if column >= self.columns || row >= self.rows {
            return Err(Error::IndexOutOfRange(format!(
                "cell ({column}, {row}) outside {}x{} matrix",
                self.columns, self.rows
            )));
        }
        Ok(row * self.columns + column)
    }

    pub fn get(&self, column: usize, row: usize) -> Result<f64> {
        let offset = self.offset(column, row)?;
        Ok(self.data.borrow()[offset])
    }

    pub fn set(&mut self, column: usize, row: usize, value: f64) -> Result<()> {
        let offset = self.offset(column, row)?;
        self.data.borrow_mut()[offset] = value;
        Ok(())
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.borrow_mut().fill(value);
    }

    fn ensure_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.rows != other.rows {
            return Err(Error::DimensionMismatch("different count of rows".into()));
        }
        if self.columns != other.columns {
            return Err(Error::DimensionMismatch(
                "different count of columns".into(),
            ));
        }
        Ok(())
    }

    /// Elementwise sum into a new matrix; operands are left untouched.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other)?;
        let result = Matrix::zeros(self.columns, self.rows)?;
        {
            let a = self.data.borrow();
            let b = other.data.borrow();
            let mut out = result.data.borrow_mut();
            for (cell, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
                *cell = x + y;
            }
        }
        Ok(result)
    }

    /// Elementwise difference into a new matrix; operands are left untouched.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_shape(other)?;
        let result = Matrix::zeros(self.columns, self.rows)?;
        {
            let a = self.data.borrow();
            let b = other.data.borrow();
            let mut out = result.data.borrow_mut();
            for (cell, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
                *cell = x - y;
            }
        }
        Ok(result)
    }

    /// In-place elementwise addition of a scalar.
    pub fn add_scalar(&mut self, delta: f64) {
        for cell in self.data.borrow_mut().iter_mut() {
            *cell += delta;
        }
    }

    /// In-place elementwise multiplication by a scalar.
    pub fn scale(&mut self, factor: f64) {
        for cell in self.data.borrow_mut().iter_mut() {
            *cell *= factor;
        }
    }

    /// Matrix product. Requires `self.columns == other.rows`; the result has
    /// shape (other.columns x self.rows). Each cell accumulates
    /// `sum_j self[i][j] * other[j][k]` in ascending `j`, so results are
    /// bit-for-bit deterministic.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns != other.rows {
            return Err(Error::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.columns, self.rows, other.columns, other.rows
            )));
        }
        let result = Matrix::zeros(other.columns, self.rows)?;
        {
            let a = self.data.borrow();
            let b = other.data.borrow();
            let mut out = result.data.borrow_mut();
            for i in 0..self.rows {
                for k in 0..other.columns {
                    let mut sum = 0.0;
                    for j in 0..self.columns {
                        sum += a[i * self.columns + j] * b[j * other.columns + k];
                    }
                    out[i * other.columns + k] = sum;
                }
            }
        }
        Ok(result)
    }

    /// New matrix with swapped dimensions; transposing twice restores the
    /// original cell-for-cell.
    pub fn transpose(&self) -> Matrix {
        let mut transposed = vec![0.0; self.rows * self.columns];
        {
            let src = self.data.borrow();
            for row in 0..self.rows {
                for column in 0..self.columns {
                    transposed[column * self.rows + row] = src[row * self.columns + column];
                }
            }
        }
        Matrix {
            rows: self.columns,
            columns: self.rows,
            name: None,
            data: Rc::new(RefCell::new(transposed)),
        }
    }

    /// New matrix with `functor` applied to every cell; the source is left
    /// untouched.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let mapped: Vec<f64> = self.data.borrow().iter().map(|x| functor(*x)).collect();
        Matrix {
            rows: self.rows,
            columns: self.columns,
            name: None,
            data: Rc::new(RefCell::new(mapped)),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "Matrix {name}")?;
        }
        let data = self.data.borrow();
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "\t\t{}", data[row * self.columns + column])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
