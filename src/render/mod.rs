//! Rendering collaborators: where symbol images come from and how they are
//! composited onto a card.
//!
//! The layout engine only talks to the [`SymbolProvider`] and [`Renderer`]
//! traits. [`raster::RasterRenderer`] and [`provider::DirectorySymbolProvider`]
//! are the stock implementations on top of the `image` crate.

pub mod provider;
pub mod raster;

pub use image::RgbaImage;
pub use provider::{DirectorySymbolProvider, MemorySymbolProvider};
pub use raster::RasterRenderer;

use crate::error::{DobbleError, DobbleResult};

/// Fails unless `angle` is in [0, 360).
pub fn check_rotation(angle: f64) -> DobbleResult<()> {
    if (0.0..360.0).contains(&angle) {
        Ok(())
    } else {
        Err(DobbleError::invalid(format!(
            "invalid rotation angle {}: must be in the range [0, 360)",
            angle
        )))
    }
}

pub trait SymbolProvider: Send + Sync {
    /// Loads `name` from `symbol_set` as a square RGBA image with a
    /// transparent background.
    fn load(&self, symbol_set: &str, name: &str) -> DobbleResult<RgbaImage>;
}

pub trait Renderer {
    type Card;

    /// Square canvas of `card_size` pixels, transparent outside the
    /// inscribed circle.
    fn blank_card(&self, card_size: u32) -> Self::Card;

    /// Draws `symbol` centered on `center`, scaled to `diameter` pixels and
    /// rotated counter-clockwise by `rotation` degrees. Later calls occlude
    /// earlier ones.
    fn place_symbol(
        &self,
        card: &mut Self::Card,
        symbol: &RgbaImage,
        center: (u32, u32),
        diameter: u32,
        rotation: f64,
    ) -> DobbleResult<()>;

    /// Rotates the whole card by `angle` degrees without growing the canvas.
    fn rotate_card(&self, card: &mut Self::Card, angle: f64) -> DobbleResult<()>;
}
