//! Startup loading of the catalog and similarity artifacts
//!
//! Loading is the only phase that touches the filesystem. It either yields a
//! consistent [`SimilarityRecommender`] or a load error; nothing is served
//! from a half-loaded pair.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::catalog::{ItemCatalog, DEFAULT_NAME_COLUMN};
use crate::error::{MedrecError, Result};
use crate::matrix::SimilarityMatrix;
use crate::recommend::SimilarityRecommender;
use crate::trace_time;

/// Locations of the two startup artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Catalog artifact (JSON)
    pub catalog: PathBuf,
    /// Similarity matrix artifact (JSON)
    pub similarity: PathBuf,
    /// Column holding display names in table-shaped catalogs
    pub name_column: String,
}

impl ArtifactPaths {
    /// Paths with the default name column
    pub fn new(catalog: impl Into<PathBuf>, similarity: impl Into<PathBuf>) -> Self {
        ArtifactPaths {
            catalog: catalog.into(),
            similarity: similarity.into(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
        }
    }

    /// Load both artifacts and check that they agree in size
    pub fn load(&self) -> Result<SimilarityRecommender> {
        let start = Instant::now();

        let catalog = ItemCatalog::load(&self.catalog, &self.name_column)?;
        trace_time!(start, "load_catalog_done", items = catalog.len());

        let matrix = SimilarityMatrix::load(&self.similarity)?;
        trace_time!(start, "load_similarity_done", dim = matrix.dim());

        let recommender = SimilarityRecommender::from_parts(catalog, matrix)?;
        debug!(
            items = recommender.len(),
            elapsed = ?start.elapsed(),
            "load_artifacts"
        );
        Ok(recommender)
    }
}

/// Read an artifact file, reporting a missing file as a load error
pub(crate) fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MedrecError::ArtifactMissing {
            path: path.to_path_buf(),
        },
        _ => MedrecError::io_operation("read artifact", path.display(), e),
    })
}
