use std::path::PathBuf;

use pyo3::prelude::*;
use pyo3::types::PyModule;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::DobbleError;
use crate::layout::CardLayoutEngine;
use crate::packing::{CachedCatalog, DirectoryCatalog};
use crate::render::{DirectorySymbolProvider, RasterRenderer};

type Engine = CardLayoutEngine<CachedCatalog<DirectoryCatalog>>;

#[pyclass(name = "CardLayout")]
pub struct CardLayoutPy {
    engine: Engine,
    rng: StdRng,
}

#[pymethods]
impl CardLayoutPy {
    #[new]
    #[pyo3(signature = (packings_dir, card_size = 512, packing_type = "ccib", seed = None))]
    pub fn new(
        packings_dir: PathBuf,
        card_size: u32,
        packing_type: &str,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let catalog = CachedCatalog::new(DirectoryCatalog::new(packings_dir));
        let engine = CardLayoutEngine::with_family_name(catalog, card_size, packing_type)?;
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self { engine, rng })
    }

    #[getter]
    fn card_size(&self) -> u32 {
        self.engine.card_size()
    }

    #[getter]
    fn packing_type(&self) -> &'static str {
        self.engine.family().name()
    }

    /// (중심 픽셀, 지름 픽셀) 목록, 작은 원부터
    fn circles(&self, num_circles: usize) -> PyResult<Vec<((u32, u32), u32)>> {
        Ok(self.engine.pixel_circles(num_circles)?)
    }

    /// (심볼, 중심, 지름, 회전각) 목록
    fn layout(&mut self, symbols: Vec<String>) -> PyResult<Vec<(String, (u32, u32), u32, f64)>> {
        let placements = self.engine.layout(&symbols, &mut self.rng)?;
        Ok(placements
            .into_iter()
            .map(|p| (p.symbol, p.center, p.diameter, p.rotation))
            .collect())
    }

    /// 카드를 PNG로 저장하고 카드 전체 회전각을 반환
    #[pyo3(signature = (symbols_dir, symbol_set, symbols, output, outline_only = false))]
    fn render_card(
        &mut self,
        py: Python,
        symbols_dir: PathBuf,
        symbol_set: &str,
        symbols: Vec<String>,
        output: PathBuf,
        outline_only: bool,
    ) -> PyResult<f64> {
        let provider = DirectorySymbolProvider::new(symbols_dir).outline_only(outline_only);
        let renderer = RasterRenderer::default();
        let engine = &self.engine;
        let rng = &mut self.rng;
        let rotation = py.allow_threads(|| -> Result<f64, DobbleError> {
            let rendered = engine.render_card(&renderer, &provider, symbol_set, &symbols, rng)?;
            rendered.card.save(&output)?;
            Ok(rendered.card_rotation)
        })?;
        Ok(rotation)
    }

    fn render_packing_outline(&self, num_circles: usize, output: PathBuf) -> PyResult<()> {
        let img = self
            .engine
            .render_packing_outline(&RasterRenderer::default(), num_circles)?;
        img.save(&output).map_err(DobbleError::from)?;
        Ok(())
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<CardLayoutPy>()?;
    Ok(())
}
