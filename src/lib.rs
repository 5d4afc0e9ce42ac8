//! Dobble Layout - spot-it style deck generation and card layout in Rust
//!
//! Decks come from finite projective planes of prime-power order; symbols
//! are placed on a card using precomputed circle packings.

pub mod config;
pub mod deck;
pub mod error;
pub mod layout;
pub mod ops;
pub mod packing;
pub mod render;

#[cfg(feature = "python")]
mod bindings;

pub use config::GeneratorConfig;
pub use deck::Deck;
pub use error::{DobbleError, DobbleResult, ErrorKind};
pub use layout::{CardLayoutEngine, Placement, RenderedCard};
pub use ops::{coords_to_pixels, incidence_matrix, is_prime_power, radius_to_pixels};
pub use packing::{compute_radii, PackingCatalog, PackingFamily};
pub use render::{Renderer, SymbolProvider};
