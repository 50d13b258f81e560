//! Load-once caching for the catalog.
//!
//! The catalog is read at most once per cache: the first successful `get`
//! stores the dataset and every later call hands back the same allocation
//! without touching the file. A failed load stores nothing, so the next
//! call tries again.
//!
//! Two flavours are provided:
//! - [`DatasetCache`], an owned cache tied to one path
//! - [`load_shared`], a process-wide cache for binaries

use crate::error::Result;
use crate::types::Dataset;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Lazily loads and then keeps a catalog in memory.
///
/// `OnceCell::get_or_try_init` is the init-once guard: concurrent or
/// re-entrant callers never construct the dataset twice.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    /// Create a cache for the catalog at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Return the cached dataset, loading it on first use
    pub fn get(&self) -> Result<Arc<Dataset>> {
        if let Some(dataset) = self.cell.get() {
            debug!("Catalog cache hit for {:?}", self.path);
            return Ok(Arc::clone(dataset));
        }
        self.cell
            .get_or_try_init(|| Dataset::load_from_file(&self.path).map(Arc::new))
            .map(Arc::clone)
    }

    /// Whether the catalog has been loaded
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

static SHARED: OnceCell<Dataset> = OnceCell::new();

/// Load the catalog into the process-wide cache.
///
/// The first successful call decides which file backs the cache; later
/// calls return that dataset regardless of `path`.
pub fn load_shared(path: &Path) -> Result<&'static Dataset> {
    SHARED.get_or_try_init(|| Dataset::load_from_file(path))
}
