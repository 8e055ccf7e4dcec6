//! Dense, square similarity matrix
//!
//! Stored row-major in a single buffer. Only rows are ever read, so no
//! symmetry is assumed.

use std::path::Path;

use tracing::debug;

use crate::artifacts::read_artifact;
use crate::error::{MedrecError, Result};

/// N×N table of finite similarity scores
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build a matrix from rows.
    ///
    /// Rows must be square and every score finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        validate_rows(&rows)
            .map_err(|reason| MedrecError::invalid_value("similarity matrix", reason))?;
        Ok(Self::flatten(rows))
    }

    /// Load a matrix artifact: a JSON array of N arrays of N numbers
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_artifact(path)?;
        let rows: Vec<Vec<f64>> = serde_json::from_str(&content)
            .map_err(|e| MedrecError::invalid_artifact(path, e))?;
        validate_rows(&rows).map_err(|reason| MedrecError::invalid_artifact(path, reason))?;

        let matrix = Self::flatten(rows);
        debug!(path = %path.display(), dim = matrix.dim(), "load_similarity");
        Ok(matrix)
    }

    fn flatten(rows: Vec<Vec<f64>>) -> Self {
        let dim = rows.len();
        let scores = rows.into_iter().flatten().collect();
        SimilarityMatrix { dim, scores }
    }

    /// Number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Scores of item `index` against every item, in catalog order
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.dim {
            return None;
        }
        let start = index * self.dim;
        Some(&self.scores[start..start + self.dim])
    }
}

fn validate_rows(rows: &[Vec<f64>]) -> std::result::Result<(), String> {
    let dim = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(format!(
                "row {} has {} columns, expected {} (matrix must be square)",
                i,
                row.len(),
                dim
            ));
        }
        if let Some(j) = row.iter().position(|score| !score.is_finite()) {
            return Err(format!("score at ({}, {}) is not finite", i, j));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_from_rows_and_row_access() {
        let matrix =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.2], vec![0.3, 1.0]]).unwrap();
        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.row(1), Some(&[0.3, 1.0][..]));
        assert_eq!(matrix.row(0).unwrap()[1], 0.2);
        assert_eq!(matrix.row(2), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SimilarityMatrix::from_rows(vec![vec![1.0, 0.2], vec![0.3]]).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 columns, expected 2"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = SimilarityMatrix::from_rows(vec![vec![1.0, f64::NAN], vec![0.3, 1.0]])
            .unwrap_err();
        assert!(err.to_string().contains("(0, 1) is not finite"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        fs::write(&path, "[[1, 0.5, 0], [0.5, 1, 0.25], [0, 0.25, 1]]").unwrap();

        let matrix = SimilarityMatrix::load(&path).unwrap();
        assert_eq!(matrix.dim(), 3);
        assert_eq!(matrix.row(1), Some(&[0.5, 1.0, 0.25][..]));
    }

    #[test]
    fn test_load_non_square_is_artifact_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        fs::write(&path, "[[1, 0.5, 0], [0.5, 1, 0.25]]").unwrap();

        let err = SimilarityMatrix::load(&path).unwrap_err();
        assert!(matches!(err, MedrecError::InvalidArtifact { .. }));
        assert!(err.is_load_error());
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("similarity.json");
        fs::write(&path, "[[1, \"x\"]]").unwrap();

        let err = SimilarityMatrix::load(&path).unwrap_err();
        assert!(matches!(err, MedrecError::InvalidArtifact { .. }));
    }
}
