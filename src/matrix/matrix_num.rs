use crate::matrix::matrix::{Matrix, MatrixError};
use crate::rings::scalar::Scalar;
use itertools::Itertools;
use num_traits::{One, Zero};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::ops::Add;
use std::ops::Mul;

/// Dense row-major matrix over int/float cells.
#[derive(Debug, Clone)]
#[pyclass]
pub struct MatrixNum {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<Scalar>,
}

#[pymethods]
impl MatrixNum {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<Scalar>>) -> PyResult<Self> {
        match Matrix::from_list(lines) {
            Ok(result) => Ok(result),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    #[staticmethod]
    pub fn identity(n: usize) -> Self {
        Matrix::identity(n)
    }

    #[staticmethod]
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        MatrixNum {
            rows,
            cols,
            cells: (0..rows * cols)
                .map(|_| Scalar::Int(rng.gen_range(-9..10)))
                .collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<Scalar>> {
        Matrix::to_list(self)
    }

    pub fn set_list(&mut self, lines: Vec<Vec<Scalar>>) -> PyResult<()> {
        match Matrix::set_list(self, lines) {
            Ok(()) => Ok(()),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn __add__(&self, rhs: &MatrixNum) -> PyResult<MatrixNum> {
        match self.add(rhs) {
            Ok(result) => Ok(result),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn __mul__(&self, rhs: &MatrixNum) -> PyResult<MatrixNum> {
        match self.mul(rhs) {
            Ok(result) => Ok(result),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn __eq__(&self, rhs: &Bound<'_, PyAny>) -> bool {
        if let Ok(other) = rhs.extract::<MatrixNum>() {
            return *self == other;
        }
        // a plain list of lists compares against the grid itself
        if let Ok(grid) = rhs.extract::<Vec<Vec<Scalar>>>() {
            return *self == grid;
        }
        false
    }

    pub fn __repr__(&self) -> String {
        format!("{}", self)
    }

    #[getter]
    pub fn T(&self) -> MatrixNum {
        self.transpose()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn determinant(&self) -> PyResult<Scalar> {
        match Matrix::determinant(self) {
            Ok(value) => Ok(value),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn row_echelon(&self) -> MatrixNum {
        Matrix::row_echelon(self)
    }

    pub fn is_rref(&self) -> bool {
        Matrix::is_rref(self)
    }

    pub fn is_inverse(&self, rhs: &MatrixNum) -> PyResult<bool> {
        match Matrix::is_inverse(self, rhs) {
            Ok(value) => Ok(value),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }
}

impl Matrix<Scalar> for MatrixNum {
    fn from_list(lines: Vec<Vec<Scalar>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|line| line.len()).unwrap_or(0);
        if lines.iter().any(|line| line.len() != cols) {
            return Err(MatrixError::Shape);
        }

        Ok(MatrixNum {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<Scalar>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn set_list(&mut self, lines: Vec<Vec<Scalar>>) -> Result<(), MatrixError> {
        *self = Matrix::from_list(lines)?;
        Ok(())
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let pivot_col_opt = (0..self.cols).find(|&col| !self.at(i, col).is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if (0..self.cols).any(|col| !self.at(r, col).is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !self.at(i, pivot_col).is_one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn determinant(&self) -> Result<Scalar, MatrixError> {
        let n = self.rows;

        if n == 0 || (n == 1 && self.cols == 0) {
            return Ok(Scalar::zero());
        }
        if n != self.cols {
            return Err(MatrixError::NonSquare);
        }
        if n == 1 {
            return Ok(self.at(0, 0));
        }
        if n == 2 {
            return Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0));
        }

        // Laplace expansion along row 0; with the row fixed, the cofactor
        // sign only depends on the column
        let mut det = Scalar::zero();
        for j in 0..n {
            let sub = self.minor(0, j);
            let term = self.at(0, j) * Matrix::determinant(&sub)?;
            det = if j % 2 == 0 { det + term } else { det - term };
        }
        Ok(det)
    }

    fn row_echelon(&self) -> MatrixNum {
        let mut mat = self.clone();
        let rows = mat.rows;
        let cols = mat.cols;

        let mut lead = 0;
        for r in 0..rows {
            if lead >= cols {
                return mat;
            }

            // first row at or below r with a nonzero entry in the lead
            // column; when a column is exhausted, move the search one
            // column right without advancing r
            let mut i = r;
            while mat.at(i, lead).is_zero() {
                i += 1;
                if i == rows {
                    i = r;
                    lead += 1;
                    if lead == cols {
                        return mat;
                    }
                }
            }

            if i != r {
                for k in 0..cols {
                    mat.cells.swap(r * cols + k, i * cols + k);
                }
            }

            // normalize the pivot row; exact zeros are pinned to 0.0
            // instead of going through the division
            let pivot = mat.at(r, lead);
            for k in 0..cols {
                let entry = mat.at(r, k);
                let normalized = if entry.is_zero() {
                    Scalar::Float(0.0)
                } else {
                    entry / pivot
                };
                mat.cells[r * cols + k] = normalized;
            }

            // clear the lead column in every other row
            for i in 0..rows {
                if i != r {
                    let factor = mat.at(i, lead);
                    for k in 0..cols {
                        let value = mat.at(i, k) - factor * mat.at(r, k);
                        mat.cells[i * cols + k] = value;
                    }
                }
            }

            lead += 1;
        }

        mat
    }

    fn is_inverse(&self, rhs: &MatrixNum) -> Result<bool, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NonSquare);
        }

        // if AB = BA, the two are treated as inverses of each other
        let ab = (self * rhs)?;
        let ba = (rhs * self)?;
        Ok(ab == ba)
    }

    fn identity(n: usize) -> MatrixNum {
        MatrixNum {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| {
                    (0..n).map(move |j| if i == j { Scalar::one() } else { Scalar::zero() })
                })
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixNum {
        MatrixNum {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> Scalar {
        self.cells[row * self.cols + col]
    }
}

impl MatrixNum {
    // TODO: move in `Matrix` trait
    pub fn new(rows: usize, cols: usize) -> MatrixNum {
        MatrixNum {
            rows,
            cols,
            cells: vec![Scalar::zero(); rows * cols],
        }
    }

    pub fn minor(&self, skip_row: usize, skip_col: usize) -> MatrixNum {
        MatrixNum {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != skip_row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != skip_col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        }
    }
}

impl ops::Add<&MatrixNum> for &MatrixNum {
    type Output = Result<MatrixNum, MatrixError>;

    fn add(self, rhs: &MatrixNum) -> Result<MatrixNum, MatrixError> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch);
        }

        Ok(MatrixNum {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        })
    }
}

impl ops::Mul<&MatrixNum> for &MatrixNum {
    type Output = Result<MatrixNum, MatrixError>;

    fn mul(self, rhs: &MatrixNum) -> Result<MatrixNum, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch);
        }

        let mut result = MatrixNum::new(self.rows, rhs.cols);

        result
            .cells
            .par_chunks_mut(rhs.cols.max(1))
            .enumerate()
            .for_each(|(r, row)| {
                for (c, cell) in row.iter_mut().enumerate() {
                    // float accumulator, so mixed int/float inputs sum cleanly
                    *cell = (0..self.cols).fold(Scalar::Float(0.0), |acc, k| {
                        acc + self.at(r, k) * rhs.at(k, c)
                    });
                }
            });

        Ok(result)
    }
}

impl PartialEq<MatrixNum> for MatrixNum {
    fn eq(&self, rhs: &MatrixNum) -> bool {
        self.rows == rhs.rows && self.cols == rhs.cols && self.cells == rhs.cells
    }
}

impl PartialEq<Vec<Vec<Scalar>>> for MatrixNum {
    fn eq(&self, rhs: &Vec<Vec<Scalar>>) -> bool {
        self.rows == rhs.len()
            && rhs.iter().enumerate().all(|(r, line)| {
                line.len() == self.cols
                    && line.iter().enumerate().all(|(c, x)| self.at(r, c) == *x)
            })
    }
}

impl Display for MatrixNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            Matrix::to_list(self)
                .iter()
                .map(|line| format!("[{}]", line.iter().join(", ")))
                .join(", ")
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
