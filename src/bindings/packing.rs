use numpy::{IntoPyArray, PyArray1};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::create_binding;
use crate::packing::{compute_radii_by_name, PackingFamily};

create_binding!(coords_to_pixels, crate::ops::coords_to_pixels, [rel_coords: (f64, f64), image_size: u32] -> (u32, u32));
create_binding!(radius_to_pixels, crate::ops::radius_to_pixels, [rel_radius: f64, bg_size: u32] -> u32);

#[pyfunction]
pub fn compute_radii<'py>(
    py: Python<'py>,
    largest_radius: f64,
    num_circles: usize,
    packing_type: &str,
) -> PyResult<&'py PyArray1<f64>> {
    let radii = compute_radii_by_name(largest_radius, num_circles, packing_type)?;
    Ok(ndarray::Array1::from(radii).into_pyarray(py))
}

#[pyfunction]
pub fn packing_families() -> Vec<&'static str> {
    PackingFamily::ALL.iter().map(|f| f.name()).collect()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(coords_to_pixels, m)?)?;
    m.add_function(wrap_pyfunction!(radius_to_pixels, m)?)?;
    m.add_function(wrap_pyfunction!(compute_radii, m)?)?;
    m.add_function(wrap_pyfunction!(packing_families, m)?)?;
    Ok(())
}
