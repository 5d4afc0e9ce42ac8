//! Generator configuration.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{DobbleError, DobbleResult};
use crate::layout::CardLayoutEngine;
use crate::ops::is_prime_power;
use crate::packing::{CachedCatalog, DirectoryCatalog, PackingFamily};
use crate::render::DirectorySymbolProvider;

/// Everything needed to lay out and render a full deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Card edge in pixels.
    /// Default: 512.
    pub card_size: u32,

    /// Packing family name, see [`PackingFamily`].
    /// Default: "ccib".
    pub packing_type: String,

    /// Projective plane order; each card carries `order + 1` symbols.
    /// Default: 7 (57 cards of 8 symbols).
    pub order: usize,

    /// Name of the symbol set directory.
    pub symbol_set: String,

    /// Root of the packing tables.
    pub packings_dir: PathBuf,

    /// Root of the symbol sets.
    pub symbols_dir: PathBuf,

    /// Use the outline variant of each symbol.
    pub outline_only: bool,

    /// Fixed seed for rotations; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            card_size: 512,
            packing_type: "ccib".to_string(),
            order: 7,
            symbol_set: "classic-dobble".to_string(),
            packings_dir: PathBuf::from("data/coords"),
            symbols_dir: PathBuf::from("data/emojis"),
            outline_only: false,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(text: &str) -> DobbleResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| DobbleError::invalid(format!("config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> DobbleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects a bad order or family before any deck work starts.
    pub fn validate(&self) -> DobbleResult<()> {
        if self.card_size == 0 {
            return Err(DobbleError::invalid("card_size must be > 0"));
        }
        if !is_prime_power(self.order) {
            return Err(DobbleError::invalid(format!(
                "order must be a prime power, got {}",
                self.order
            )));
        }
        PackingFamily::from_name(&self.packing_type)?;
        if self.symbol_set.is_empty() {
            return Err(DobbleError::invalid("symbol_set must not be empty"));
        }
        Ok(())
    }

    pub fn family(&self) -> DobbleResult<PackingFamily> {
        PackingFamily::from_name(&self.packing_type)
    }

    pub fn layout_engine(&self) -> DobbleResult<CardLayoutEngine<CachedCatalog<DirectoryCatalog>>> {
        self.validate()?;
        let catalog = CachedCatalog::new(DirectoryCatalog::new(&self.packings_dir));
        CardLayoutEngine::new(catalog, self.card_size, self.family()?)
    }

    pub fn symbol_provider(&self) -> DirectorySymbolProvider {
        DirectorySymbolProvider::new(&self.symbols_dir).outline_only(self.outline_only)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
