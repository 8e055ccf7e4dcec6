//! Human-readable output formatting for recommend command

use crate::cli::Cli;
use crate::commands::recommend::{RecommendOptions, RecommendRow};

/// Output in human-readable format
pub fn output_human(cli: &Cli, query: &str, options: &RecommendOptions, rows: &[RecommendRow]) {
    if rows.is_empty() {
        if !cli.quiet {
            println!("No alternatives found for '{}'", query);
        }
        return;
    }

    if !cli.quiet {
        println!("Alternatives for '{}':", query);
    }

    for row in rows {
        if options.scores {
            println!("{}. {} ({:.4})", row.rank, row.name, row.score);
        } else {
            println!("{}. {}", row.rank, row.name);
        }
        if let Some(link) = &row.link {
            println!("   {}", link);
        }
    }
}
