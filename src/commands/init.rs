//! `medrec init` command - write a default medrec.toml

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use medrec_core::config::{RecommenderConfig, CONFIG_FILE_NAME};
use medrec_core::error::{MedrecError, Result};

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        return Err(MedrecError::already_exists("config", path.display()));
    }

    std::fs::create_dir_all(root)
        .map_err(|e| MedrecError::io_operation("create directory", root.display(), e))?;
    RecommenderConfig::default().save(&path)?;

    tracing::debug!(path = %path.display(), force, "init");

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Config written"),
            &[("config", serde_json::json!(path.display().to_string()))],
        ),
        human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
                println!();
                println!("Put the catalog and similarity artifacts next to it.");
                println!("Run `medrec check` to validate them.");
            }
        },
        records => {
            println!(
                "{}",
                medrec_core::records::header(
                    "init",
                    &[("config", path.display().to_string()), ("status", "ok".to_string())],
                )
            );
        }
    )
}
