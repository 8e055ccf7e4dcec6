//! Medrec Core Library
//!
//! Core domain logic for the medrec medicine alternatives recommender: the
//! item catalog, the dense similarity matrix, and the ranking over them.

pub mod artifacts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod link;
pub mod logging;
pub mod matrix;
pub mod recommend;
pub mod records;

pub use artifacts::ArtifactPaths;
pub use catalog::ItemCatalog;
pub use matrix::SimilarityMatrix;
pub use recommend::{Recommendation, SimilarityRecommender, DEFAULT_LIMIT};
