//! Card layout: packing circles → pixel placements → rendered card.

use image::{Rgba, RgbaImage};
use rand::Rng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::{DobbleError, DobbleResult};
use crate::ops::coords::{coords_to_pixels, radius_to_pixels};
use crate::packing::{Circle, PackingCatalog, PackingFamily};
use crate::render::{check_rotation, RasterRenderer, Renderer, SymbolProvider};

/// Where and how one symbol lands on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<S> {
    pub symbol: S,
    /// Pixel center `(x, y)`.
    pub center: (u32, u32),
    /// Pixel diameter.
    pub diameter: u32,
    /// Counter-clockwise rotation in degrees, [0, 360).
    pub rotation: f64,
}

/// A composed card together with the layout that produced it.
#[derive(Debug, Clone)]
pub struct RenderedCard<C, S> {
    pub card: C,
    pub placements: Vec<Placement<S>>,
    pub card_rotation: f64,
}

/// Uniform whole-degree rotation in [0, 360).
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0..360u32) as f64
}

pub struct CardLayoutEngine<C> {
    catalog: C,
    card_size: u32,
    family: PackingFamily,
}

impl<C: PackingCatalog> CardLayoutEngine<C> {
    pub fn new(catalog: C, card_size: u32, family: PackingFamily) -> DobbleResult<Self> {
        if card_size == 0 {
            return Err(DobbleError::invalid("card size must be at least one pixel"));
        }
        Ok(Self {
            catalog,
            card_size,
            family,
        })
    }

    /// Same as [`CardLayoutEngine::new`] with the family given by name.
    pub fn with_family_name(catalog: C, card_size: u32, packing_type: &str) -> DobbleResult<Self> {
        Self::new(catalog, card_size, PackingFamily::from_name(packing_type)?)
    }

    pub fn card_size(&self) -> u32 {
        self.card_size
    }

    pub fn family(&self) -> PackingFamily {
        self.family
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Relative circles for an `num_circles` packing, smallest first.
    ///
    /// Fails with [`DobbleError::CircleCount`] unless the catalog returns
    /// exactly `num_circles` centers.
    pub fn circles(&self, num_circles: usize) -> DobbleResult<Vec<Circle>> {
        let solution = self.catalog.solution(self.family, num_circles)?;
        solution.check_count(num_circles)?;
        solution.circles()
    }

    /// Pixel center and diameter of every circle, without rotations.
    pub fn pixel_circles(&self, num_circles: usize) -> DobbleResult<Vec<((u32, u32), u32)>> {
        self.circles(num_circles)?
            .iter()
            .map(|c| {
                Ok((
                    coords_to_pixels(c.center, self.card_size)?,
                    radius_to_pixels(c.radius, self.card_size)?,
                ))
            })
            .collect()
    }

    /// Pairs `symbols[i]` with circle `i` and draws one rotation per symbol.
    ///
    /// Either every symbol gets a placement or the call fails.
    pub fn layout<S: Clone, R: Rng + ?Sized>(
        &self,
        symbols: &[S],
        rng: &mut R,
    ) -> DobbleResult<Vec<Placement<S>>> {
        let circles = self.pixel_circles(symbols.len())?;
        let placements = symbols
            .iter()
            .zip(circles)
            .map(|(symbol, (center, diameter))| Placement {
                symbol: symbol.clone(),
                center,
                diameter,
                rotation: random_rotation(&mut *rng),
            })
            .collect();
        Ok(placements)
    }

    /// Lays out every card of `deck`.
    ///
    /// The packing for `n + 1` symbols is resolved before any card is laid
    /// out; a failure aborts the whole deck.
    pub fn layout_deck<R: Rng + ?Sized>(
        &self,
        deck: &Deck,
        rng: &mut R,
    ) -> DobbleResult<Vec<Vec<Placement<usize>>>> {
        self.pixel_circles(deck.symbols_per_card())?;
        deck.cards()
            .iter()
            .map(|card| self.layout(card, &mut *rng))
            .collect()
    }

    /// Renders one card: symbols in list order, then one whole-card rotation.
    pub fn render_card<S, P, Rd, R>(
        &self,
        renderer: &Rd,
        provider: &P,
        symbol_set: &str,
        symbols: &[S],
        rng: &mut R,
    ) -> DobbleResult<RenderedCard<Rd::Card, S>>
    where
        S: AsRef<str> + Clone,
        P: SymbolProvider + ?Sized,
        Rd: Renderer,
        R: Rng + ?Sized,
    {
        let placements = self.layout(symbols, &mut *rng)?;
        let card_rotation = random_rotation(&mut *rng);
        check_rotation(card_rotation)?;

        // 모든 이미지를 먼저 읽어서 중간 실패 시 그리다 만 카드가 남지 않게 함
        let images = placements
            .iter()
            .map(|p| provider.load(symbol_set, p.symbol.as_ref()))
            .collect::<DobbleResult<Vec<_>>>()?;

        let mut card = renderer.blank_card(self.card_size);
        for (placement, image) in placements.iter().zip(&images) {
            renderer.place_symbol(
                &mut card,
                image,
                placement.center,
                placement.diameter,
                placement.rotation,
            )?;
        }
        renderer.rotate_card(&mut card, card_rotation)?;
        debug!(symbols = placements.len(), card_rotation, "rendered card");

        Ok(RenderedCard {
            card,
            placements,
            card_rotation,
        })
    }

    /// Renders every card of a named deck, stopping at the first failure.
    pub fn render_deck<S, P, Rd, R>(
        &self,
        renderer: &Rd,
        provider: &P,
        symbol_set: &str,
        cards: &[Vec<S>],
        rng: &mut R,
    ) -> DobbleResult<Vec<RenderedCard<Rd::Card, S>>>
    where
        S: AsRef<str> + Clone,
        P: SymbolProvider + ?Sized,
        Rd: Renderer,
        R: Rng + ?Sized,
    {
        if let Some(first) = cards.first() {
            if cards.iter().any(|c| c.len() != first.len()) {
                return Err(DobbleError::invalid(
                    "all cards of a deck must carry the same number of symbols",
                ));
            }
            self.pixel_circles(first.len())?;
        }
        info!(cards = cards.len(), family = %self.family, "rendering deck");
        cards
            .iter()
            .map(|card| self.render_card(renderer, provider, symbol_set, card, &mut *rng))
            .collect()
    }

    /// Empty card with every packing circle outlined, to eyeball a table.
    pub fn render_packing_outline(
        &self,
        renderer: &RasterRenderer,
        num_circles: usize,
    ) -> DobbleResult<RgbaImage> {
        let circles = self.pixel_circles(num_circles)?;
        let mut card = renderer.blank_card(self.card_size);
        for (center, diameter) in circles {
            renderer.draw_circle(&mut card, center, diameter, false, Rgba([0, 0, 0, 255]));
        }
        Ok(card)
    }
}
