//! Similarity recommender: ranked alternatives for a catalog item

use std::cmp::Ordering;

use serde::Serialize;
use tracing::trace;

use crate::catalog::ItemCatalog;
use crate::error::{MedrecError, Result};
use crate::matrix::SimilarityMatrix;

/// Number of alternatives returned when the caller does not ask otherwise
pub const DEFAULT_LIMIT: usize = 5;

/// One ranked alternative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Catalog position of the alternative
    pub index: usize,
    /// Display name of the alternative
    pub name: String,
    /// Similarity score against the query item
    pub score: f64,
}

/// Read-only catalog + matrix pair answering "what is most like X?"
///
/// Immutable after construction, so a single instance can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct SimilarityRecommender {
    catalog: ItemCatalog,
    matrix: SimilarityMatrix,
}

impl SimilarityRecommender {
    /// Pair a catalog with its matrix; both must describe the same items
    pub fn from_parts(catalog: ItemCatalog, matrix: SimilarityMatrix) -> Result<Self> {
        if catalog.len() != matrix.dim() {
            return Err(MedrecError::DimensionMismatch {
                catalog: catalog.len(),
                rows: matrix.dim(),
            });
        }
        Ok(SimilarityRecommender { catalog, matrix })
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Number of catalog items
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Names of the `k` items most similar to `name`, most similar first.
    ///
    /// The query item itself is never returned. Fails with
    /// [`MedrecError::NotFound`] if `name` is not in the catalog.
    pub fn recommend(&self, name: &str, k: usize) -> Result<Vec<String>> {
        Ok(self
            .recommend_scored(name, k)?
            .into_iter()
            .map(|r| r.name)
            .collect())
    }

    /// Same ranking as [`recommend`](Self::recommend), with positions and scores
    pub fn recommend_scored(&self, name: &str, k: usize) -> Result<Vec<Recommendation>> {
        let index = self
            .catalog
            .position(name)
            .ok_or_else(|| MedrecError::item_not_found(name))?;

        let row = self
            .matrix
            .row(index)
            .ok_or_else(|| MedrecError::Other(format!("no similarity row for index {}", index)))?;

        let ranked = rank_row(row, index, k);
        trace!(query = name, index, returned = ranked.len(), "recommend");

        Ok(ranked
            .into_iter()
            .filter_map(|(j, score)| {
                self.catalog.name(j).map(|name| Recommendation {
                    index: j,
                    name: name.to_string(),
                    score,
                })
            })
            .collect())
    }
}

/// Rank the columns of `row` by descending score, skipping `exclude`.
///
/// Equal scores keep their column order. At most `k` pairs are returned.
pub fn rank_row(row: &[f64], exclude: usize, k: usize) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|(j, _)| *j != exclude)
        .collect();

    // sort_by is stable: ties stay in ascending index order
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    candidates.truncate(k);
    candidates
}
