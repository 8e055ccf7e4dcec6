//! `medrec recommend` command - alternatives for a medicine
//!
//! - `medrec recommend <name>` - the configured number of most similar items
//! - `--limit` overrides the count
//! - `--scores` shows similarity scores
//! - `--no-links` drops the purchase search links
//!
//! An unknown name is an error (exit code 3), never an empty list.

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use medrec_core::config::ResolvedConfig;
use medrec_core::error::Result;
use medrec_core::link::LinkTemplate;
use medrec_core::SimilarityRecommender;

use self::format::{output_human, output_json, output_records};

/// Options for the recommend command
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    pub limit: usize,
    pub scores: bool,
    pub links: bool,
}

/// One line of recommend output
#[derive(Debug, Clone)]
pub struct RecommendRow {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub link: Option<String>,
}

/// Execute the recommend command
pub fn execute(
    cli: &Cli,
    resolved: &ResolvedConfig,
    recommender: &SimilarityRecommender,
    name: &str,
    options: &RecommendOptions,
) -> Result<()> {
    let start = Instant::now();

    let template = if options.links {
        Some(LinkTemplate::new(resolved.config.link_template.as_str())?)
    } else {
        None
    };

    let rows: Vec<RecommendRow> = recommender
        .recommend_scored(name, options.limit)?
        .into_iter()
        .enumerate()
        .map(|(i, rec)| RecommendRow {
            rank: i + 1,
            link: template.as_ref().map(|t| t.render(&rec.name)),
            name: rec.name,
            score: rec.score,
        })
        .collect();

    debug!(
        query = name,
        limit = options.limit,
        result_count = rows.len(),
        elapsed = ?start.elapsed(),
        "recommend"
    );

    match cli.format {
        OutputFormat::Json => output_json(name, options, &rows)?,
        OutputFormat::Human => output_human(cli, name, options, &rows),
        OutputFormat::Records => output_records(name, options, &rows),
    }

    Ok(())
}
