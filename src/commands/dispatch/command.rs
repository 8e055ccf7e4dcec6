//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use medrec_core::artifacts::ArtifactPaths;
use medrec_core::config::{self, ResolvedConfig};
use medrec_core::error::Result;
use medrec_core::SimilarityRecommender;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Effective configuration for this invocation
    pub fn resolve_config(&self) -> Result<ResolvedConfig> {
        let explicit = self
            .cli
            .config
            .as_deref()
            .map(|path| resolve_against(self.root, path));
        config::resolve(self.root, explicit.as_deref())
    }

    /// Artifact locations, with `--catalog`/`--similarity` applied on top
    pub fn artifact_paths(&self, resolved: &ResolvedConfig) -> ArtifactPaths {
        let mut paths = resolved.artifact_paths();
        if let Some(catalog) = &self.cli.catalog {
            paths.catalog = resolve_against(self.root, catalog);
        }
        if let Some(similarity) = &self.cli.similarity {
            paths.similarity = resolve_against(self.root, similarity);
        }
        paths
    }

    /// Startup barrier: resolve config and load both artifacts, or fail
    pub fn load_recommender(&self) -> Result<(ResolvedConfig, SimilarityRecommender)> {
        let resolved = self.resolve_config()?;
        let paths = self.artifact_paths(&resolved);
        debug!(
            catalog = %paths.catalog.display(),
            similarity = %paths.similarity.display(),
            source = ?resolved.source,
            "artifact_paths"
        );

        let recommender = paths.load()?;
        debug!(items = recommender.len(), elapsed = ?self.start.elapsed(), "load_recommender");
        Ok((resolved, recommender))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("medrec {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Find similar alternatives for a medicine.");
        println!();
        println!("Run `medrec --help` for usage information.");
        Ok(())
    }
}
