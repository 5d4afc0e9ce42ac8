use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use super::SymbolProvider;
use crate::error::{DobbleError, DobbleResult};

/// Symbol images on disk at `<root>/<set>/<color|outline>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirectorySymbolProvider {
    root: PathBuf,
    outline_only: bool,
}

impl DirectorySymbolProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outline_only: false,
        }
    }

    /// Loads the `outline` variant of every symbol instead of `color`.
    pub fn outline_only(mut self, outline_only: bool) -> Self {
        self.outline_only = outline_only;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn symbol_path(&self, symbol_set: &str, name: &str) -> PathBuf {
        let variant = if self.outline_only { "outline" } else { "color" };
        self.root
            .join(symbol_set)
            .join(variant)
            .join(format!("{}.png", name))
    }
}

impl SymbolProvider for DirectorySymbolProvider {
    fn load(&self, symbol_set: &str, name: &str) -> DobbleResult<RgbaImage> {
        let path = self.symbol_path(symbol_set, name);
        if !path.is_file() {
            return Err(DobbleError::not_found(format!(
                "failed to load symbol: {} is not a valid PNG file",
                path.display()
            )));
        }
        debug!(path = %path.display(), "loading symbol");
        Ok(image::open(&path)?.to_rgba8())
    }
}

/// Symbols kept in memory, keyed by `(set, name)`.
#[derive(Debug, Clone, Default)]
pub struct MemorySymbolProvider {
    symbols: HashMap<(String, String), RgbaImage>,
}

impl MemorySymbolProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol_set: &str, name: &str, image: RgbaImage) {
        self.symbols
            .insert((symbol_set.to_string(), name.to_string()), image);
    }
}

impl SymbolProvider for MemorySymbolProvider {
    fn load(&self, symbol_set: &str, name: &str) -> DobbleResult<RgbaImage> {
        self.symbols
            .get(&(symbol_set.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| {
                DobbleError::not_found(format!("symbol '{}' not in set '{}'", name, symbol_set))
            })
    }
}
