//! Deck assignment: one card per line of the projective plane, one symbol
//! per point.

use rayon::prelude::*;
use tracing::info;

use crate::error::{DobbleError, DobbleResult};
use crate::ops::projective::{plane_size, ProjectivePlane};

/// Ascending symbol indices of each card, read row by row from an incidence
/// matrix.
pub fn assign_cards(incidence: &ndarray::Array2<bool>) -> Vec<Vec<usize>> {
    incidence
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(symbol, &on)| on.then_some(symbol))
                .collect()
        })
        .collect()
}

fn shared_symbols(a: &[usize], b: &[usize]) -> usize {
    // Both sides are sorted.
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    order: usize,
    cards: Vec<Vec<usize>>,
}

impl Deck {
    /// Builds the full deck for a prime-power `order`: `n² + n + 1` cards of
    /// `n + 1` symbols each.
    pub fn generate(order: usize) -> DobbleResult<Self> {
        let plane = ProjectivePlane::new(order)?;
        let cards = assign_cards(plane.incidence());
        info!(order, cards = cards.len(), "generated deck");
        Ok(Self { order, cards })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn cards(&self) -> &[Vec<usize>] {
        &self.cards
    }

    pub fn card(&self, idx: usize) -> Option<&[usize]> {
        self.cards.get(idx).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn symbols_per_card(&self) -> usize {
        self.order + 1
    }

    pub fn num_symbols(&self) -> usize {
        plane_size(self.order)
    }

    /// Every pair of cards shares exactly one symbol.
    pub fn verify(&self) -> bool {
        let cards = &self.cards;
        (0..cards.len()).into_par_iter().all(|i| {
            cards[i + 1..]
                .iter()
                .all(|other| shared_symbols(&cards[i], other) == 1)
        })
    }

    /// Replaces symbol indices by names; `names` needs one entry per symbol.
    pub fn name_cards<S: AsRef<str>>(&self, names: &[S]) -> DobbleResult<Vec<Vec<String>>> {
        if names.len() < self.num_symbols() {
            return Err(DobbleError::invalid(format!(
                "a deck of order {} needs {} symbol names, got {}",
                self.order,
                self.num_symbols(),
                names.len()
            )));
        }
        Ok(self
            .cards
            .iter()
            .map(|card| card.iter().map(|&s| names[s].as_ref().to_string()).collect())
            .collect())
    }
}
