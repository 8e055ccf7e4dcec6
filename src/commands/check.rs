//! `medrec check` command - validate the startup artifacts
//!
//! Runs the same load as `recommend` and reports what was found. Any load
//! error is returned unchanged so the exit code matches a failed startup.

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use medrec_core::artifacts::ArtifactPaths;
use medrec_core::config::{ConfigSource, ResolvedConfig};
use medrec_core::error::Result;
use medrec_core::records::header;

/// Execute the check command
pub fn execute(cli: &Cli, resolved: &ResolvedConfig, paths: &ArtifactPaths) -> Result<()> {
    let recommender = paths.load()?;
    let items = recommender.len();
    let dim = recommender.matrix().dim();

    let source = match &resolved.source {
        ConfigSource::Explicit(path) | ConfigSource::Root(path) | ConfigSource::Global(path) => {
            path.display().to_string()
        }
        ConfigSource::Defaults => "defaults".to_string(),
    };

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            None,
            &[
                ("config", serde_json::json!(source)),
                ("catalog", serde_json::json!(paths.catalog.display().to_string())),
                ("similarity", serde_json::json!(paths.similarity.display().to_string())),
                ("items", serde_json::json!(items)),
                ("dimension", serde_json::json!(dim)),
            ],
        ),
        human => {
            if !cli.quiet {
                println!("config:     {}", source);
                println!("catalog:    {} ({} items)", paths.catalog.display(), items);
                println!("similarity: {} ({}x{})", paths.similarity.display(), dim, dim);
                println!("ok");
            }
        },
        records => {
            println!(
                "{}",
                header(
                    "check",
                    &[
                        ("status", "ok".to_string()),
                        ("items", items.to_string()),
                        ("dimension", dim.to_string()),
                    ],
                )
            );
        }
    )
}
