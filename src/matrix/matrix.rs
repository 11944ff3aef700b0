#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Rows have inconsistent lengths")]
    Shape,

    #[error("Dimensions not compatible")]
    DimensionMismatch,

    #[error("Matrix is not square")]
    NonSquare,
}

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;
    /// Replaces the whole grid. All-or-nothing: a ragged replacement is
    /// rejected and the current grid stays in place.
    fn set_list(&mut self, lines: Vec<Vec<T>>) -> Result<(), MatrixError>;

    fn is_rref(&self) -> bool;
    fn determinant(&self) -> Result<T, MatrixError>;
    /// Gauss-Jordan reduction to reduced row-echelon form. Returns a new
    /// matrix; `self` is left untouched.
    fn row_echelon(&self) -> Self;
    /// Commutation test: true iff `self * rhs == rhs * self`. The identity
    /// commutes with everything, so callers must not pass it as `rhs`.
    fn is_inverse(&self, rhs: &Self) -> Result<bool, MatrixError>;
    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
