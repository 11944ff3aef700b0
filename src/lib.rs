use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_num;
}
pub mod rings {
    pub mod scalar;
}

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_num::MatrixNum>()?;
    Ok(())
}
