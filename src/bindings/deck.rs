use numpy::{IntoPyArray, PyArray2};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::create_binding;
use crate::deck::Deck;
use crate::ops;

#[pyfunction]
pub fn is_prime_power(num: f64) -> bool {
    ops::is_prime_power(num)
}

#[pyfunction]
pub fn incidence_matrix<'py>(py: Python<'py>, order: usize) -> PyResult<&'py PyArray2<bool>> {
    let matrix = py.allow_threads(|| ops::incidence_matrix(order))?;
    Ok(matrix.into_pyarray(py))
}

create_binding!(deck_size, crate::ops::deck_size, [order: usize] -> usize);

/// 카드별 심볼 인덱스 (오름차순)
#[pyfunction]
pub fn deck_cards(py: Python, order: usize) -> PyResult<Vec<Vec<usize>>> {
    let deck = py.allow_threads(|| Deck::generate(order))?;
    Ok(deck.cards().to_vec())
}

/// 카드별 심볼 이름
#[pyfunction]
pub fn named_deck(py: Python, order: usize, names: Vec<String>) -> PyResult<Vec<Vec<String>>> {
    let deck = py.allow_threads(|| Deck::generate(order))?;
    Ok(deck.name_cards(&names)?)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_prime_power, m)?)?;
    m.add_function(wrap_pyfunction!(incidence_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(deck_size, m)?)?;
    m.add_function(wrap_pyfunction!(deck_cards, m)?)?;
    m.add_function(wrap_pyfunction!(named_deck, m)?)?;
    Ok(())
}
