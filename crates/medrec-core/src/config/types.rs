//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_NAME_COLUMN;
use crate::recommend::DEFAULT_LIMIT;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Config file name looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "medrec.toml";

/// Default purchase search link
pub const DEFAULT_LINK_TEMPLATE: &str = "https://pharmeasy.in/search/all?name={name}";

/// Recommender configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog artifact path, relative to the config file's directory
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Similarity matrix artifact path, relative to the config file's directory
    #[serde(default = "default_similarity")]
    pub similarity: String,

    /// Column holding display names in table-shaped catalogs
    #[serde(default = "default_name_column")]
    pub name_column: String,

    /// Number of alternatives shown when `--limit` is not given
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Purchase search link; `{name}` is replaced by the encoded item name
    #[serde(default = "default_link_template")]
    pub link_template: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        RecommenderConfig {
            version: default_version(),
            catalog: default_catalog(),
            similarity: default_similarity(),
            name_column: default_name_column(),
            default_limit: default_limit(),
            link_template: default_link_template(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_catalog() -> String {
    "medicine_dict.json".to_string()
}

fn default_similarity() -> String {
    "similarity.json".to_string()
}

fn default_name_column() -> String {
    DEFAULT_NAME_COLUMN.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_link_template() -> String {
    DEFAULT_LINK_TEMPLATE.to_string()
}
