mod deck;
mod layout;
mod packing;

#[macro_use]
mod macros;

use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::{DobbleError, ErrorKind};

impl From<DobbleError> for PyErr {
    fn from(err: DobbleError) -> PyErr {
        let msg = err.to_string();
        match err.kind() {
            ErrorKind::InvalidArgument | ErrorKind::Malformed => PyValueError::new_err(msg),
            ErrorKind::NotFound => PyFileNotFoundError::new_err(msg),
            ErrorKind::Io => PyIOError::new_err(msg),
        }
    }
}

/// Dobble Layout - deck generation and card layout in Rust
#[pymodule]
pub fn dobble_layout(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Deck / projective plane
    deck::register(m)?;
    // Packing tables and pixel mapping
    packing::register(m)?;
    // Card layout and rendering
    layout::register(m)?;
    Ok(())
}
