//! Recommender configuration for medrec
//!
//! Configuration is stored in `medrec.toml`. Artifact paths inside it are
//! resolved against the directory that holds the file.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artifacts::ArtifactPaths;
use crate::bail_invalid;
use crate::error::{MedrecError, Result};
use crate::link::LinkTemplate;

pub use types::{
    RecommenderConfig, CONFIG_FILE_NAME, CONFIG_FORMAT_VERSION, DEFAULT_LINK_TEMPLATE,
};

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Explicit(PathBuf),
    /// `medrec.toml` in the root directory
    Root(PathBuf),
    /// The per-user global config file
    Global(PathBuf),
    /// Nothing found; built-in defaults
    Defaults,
}

/// Configuration plus the directory its relative paths are resolved against
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: RecommenderConfig,
    pub base_dir: PathBuf,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    /// Artifact locations with relative paths anchored at `base_dir`
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            catalog: self.base_dir.join(&self.config.catalog),
            similarity: self.base_dir.join(&self.config.similarity),
            name_column: self.config.name_column.clone(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MedrecError::io_operation("read config", path.display(), e))?;
        let config: RecommenderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MedrecError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| MedrecError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject values that would make the recommender unusable
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.default_limit == 0 {
            bail_invalid!("default_limit", "must be at least 1");
        }
        LinkTemplate::new(self.link_template.as_str())?;
        if self.name_column.is_empty() {
            bail_invalid!("name_column", "must not be empty");
        }
        Ok(())
    }
}

/// Resolve the effective configuration.
///
/// Order: `explicit` path, `medrec.toml` in `root`, the global config file,
/// then defaults anchored at `root`.
pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let global = global::global_config_path().ok();
    resolve_with_global(root, explicit, global.as_deref())
}

fn resolve_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global: Option<&Path>,
) -> Result<ResolvedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(MedrecError::not_found("config file", path.display()));
        }
        return from_file(path, ConfigSource::Explicit(path.to_path_buf()));
    }

    let local = root.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return from_file(&local, ConfigSource::Root(local.clone()));
    }

    if let Some(path) = global.filter(|p| p.is_file()) {
        return from_file(path, ConfigSource::Global(path.to_path_buf()));
    }

    debug!(root = %root.display(), "config_defaults");
    Ok(ResolvedConfig {
        config: RecommenderConfig::default(),
        base_dir: root.to_path_buf(),
        source: ConfigSource::Defaults,
    })
}

fn from_file(path: &Path, source: ConfigSource) -> Result<ResolvedConfig> {
    let config = RecommenderConfig::load(path)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(path = %path.display(), ?source, "config_loaded");
    Ok(ResolvedConfig {
        config,
        base_dir,
        source,
    })
}
