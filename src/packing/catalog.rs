use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::family::PackingFamily;
use super::table::{find_radius, parse_coordinates};
use super::types::PackingSolution;
use crate::error::{DobbleError, DobbleResult};

/// Read-only source of precomputed circle packings, keyed by family and
/// circle count.
pub trait PackingCatalog: Send + Sync {
    /// Normalized centers, smallest circle first.
    fn coordinates(&self, family: PackingFamily, num_circles: usize)
        -> DobbleResult<Vec<(f64, f64)>>;

    fn largest_radius(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<f64>;

    fn solution(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<PackingSolution> {
        let centers = self.coordinates(family, num_circles)?;
        let largest_radius = self.largest_radius(family, num_circles)?;
        let solution = PackingSolution {
            family,
            centers,
            largest_radius,
        };
        solution.check_count(num_circles)?;
        Ok(solution)
    }

    /// Same as [`PackingCatalog::solution`] with the family given by name.
    fn lookup(&self, packing_type: &str, num_circles: usize) -> DobbleResult<PackingSolution> {
        let family = PackingFamily::from_name(packing_type)?;
        self.solution(family, num_circles)
    }
}

impl<C: PackingCatalog + ?Sized> PackingCatalog for Arc<C> {
    fn coordinates(
        &self,
        family: PackingFamily,
        num_circles: usize,
    ) -> DobbleResult<Vec<(f64, f64)>> {
        (**self).coordinates(family, num_circles)
    }

    fn largest_radius(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<f64> {
        (**self).largest_radius(family, num_circles)
    }

    fn solution(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<PackingSolution> {
        (**self).solution(family, num_circles)
    }
}

fn read_table(path: &Path, what: &str) -> DobbleResult<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            DobbleError::not_found(format!("{} file {} not found", what, path.display()))
        }
        _ => DobbleError::Io(e),
    })
}

/// Packing tables on disk:
///
/// ```text
/// <root>/<family>/<family><N>.txt   one "index x y" line per circle
/// <root>/<family>/radius.txt        "N radius" lines
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn coordinates_path(&self, family: PackingFamily, num_circles: usize) -> PathBuf {
        self.root
            .join(family.name())
            .join(format!("{}{}.txt", family.name(), num_circles))
    }

    pub fn radius_path(&self, family: PackingFamily) -> PathBuf {
        self.root.join(family.name()).join("radius.txt")
    }
}

impl PackingCatalog for DirectoryCatalog {
    fn coordinates(
        &self,
        family: PackingFamily,
        num_circles: usize,
    ) -> DobbleResult<Vec<(f64, f64)>> {
        let path = self.coordinates_path(family, num_circles);
        debug!(path = %path.display(), "reading packing coordinates");
        let text = read_table(&path, "coordinates")?;
        let coords = parse_coordinates(&text, &path)?;
        if coords.len() != num_circles {
            return Err(DobbleError::Malformed {
                path,
                line: 0,
                reason: format!("expected {} circles, found {}", num_circles, coords.len()),
            });
        }
        Ok(coords)
    }

    fn largest_radius(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<f64> {
        let path = self.radius_path(family);
        debug!(path = %path.display(), num_circles, "reading largest radius");
        let text = read_table(&path, "radius")?;
        find_radius(&text, &path, num_circles)?.ok_or_else(|| {
            DobbleError::not_found(format!(
                "no radius found for packing type '{}' with {} circles",
                family, num_circles
            ))
        })
    }
}

/// In-memory packing table, mostly for tests and embedded data.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<(PackingFamily, usize), PackingSolution>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a solution; fails if the radius is not in (0, 1].
    pub fn insert(
        &mut self,
        family: PackingFamily,
        centers: Vec<(f64, f64)>,
        largest_radius: f64,
    ) -> DobbleResult<()> {
        if !(largest_radius > 0.0 && largest_radius <= 1.0) {
            return Err(DobbleError::invalid(format!(
                "largest radius must be in (0, 1], got {}",
                largest_radius
            )));
        }
        let key = (family, centers.len());
        self.entries.insert(
            key,
            PackingSolution {
                family,
                centers,
                largest_radius,
            },
        );
        Ok(())
    }

    pub fn with_solution(
        mut self,
        family: PackingFamily,
        centers: Vec<(f64, f64)>,
        largest_radius: f64,
    ) -> DobbleResult<Self> {
        self.insert(family, centers, largest_radius)?;
        Ok(self)
    }

    fn entry(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<&PackingSolution> {
        self.entries.get(&(family, num_circles)).ok_or_else(|| {
            DobbleError::not_found(format!(
                "no '{}' packing with {} circles",
                family, num_circles
            ))
        })
    }
}

impl PackingCatalog for MemoryCatalog {
    fn coordinates(
        &self,
        family: PackingFamily,
        num_circles: usize,
    ) -> DobbleResult<Vec<(f64, f64)>> {
        Ok(self.entry(family, num_circles)?.centers.clone())
    }

    fn largest_radius(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<f64> {
        Ok(self.entry(family, num_circles)?.largest_radius)
    }

    fn solution(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<PackingSolution> {
        self.entry(family, num_circles).cloned()
    }
}

/// Read-through cache in front of another catalog.
///
/// Successful lookups are kept forever; failures are not cached. Safe for
/// concurrent readers.
#[derive(Debug)]
pub struct CachedCatalog<C> {
    inner: C,
    solutions: DashMap<(PackingFamily, usize), Arc<PackingSolution>>,
}

impl<C: PackingCatalog> CachedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            solutions: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.solutions.len()
    }

    pub fn get(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<Arc<PackingSolution>> {
        let key = (family, num_circles);
        if let Some(hit) = self.solutions.get(&key) {
            debug!(%family, num_circles, "packing cache hit");
            return Ok(Arc::clone(hit.value()));
        }
        let loaded = Arc::new(self.inner.solution(family, num_circles)?);
        // 동시에 적재된 경우 먼저 들어간 값을 유지
        let entry = self.solutions.entry(key).or_insert(loaded);
        Ok(Arc::clone(entry.value()))
    }
}

impl<C: PackingCatalog> PackingCatalog for CachedCatalog<C> {
    fn coordinates(
        &self,
        family: PackingFamily,
        num_circles: usize,
    ) -> DobbleResult<Vec<(f64, f64)>> {
        Ok(self.get(family, num_circles)?.centers.clone())
    }

    fn largest_radius(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<f64> {
        Ok(self.get(family, num_circles)?.largest_radius)
    }

    fn solution(&self, family: PackingFamily, num_circles: usize) -> DobbleResult<PackingSolution> {
        Ok(self.get(family, num_circles)?.as_ref().clone())
    }
}
