//! Command implementations for all medrec commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use medrec_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { force } => crate::commands::init::execute(ctx.cli, ctx.root, *force),
            Commands::List { filter } => execute_list(ctx, filter.as_deref()),
            Commands::Recommend {
                name,
                limit,
                scores,
                no_links,
            } => execute_recommend(ctx, name, *limit, *scores, *no_links),
            Commands::Check => execute_check(ctx),
        }
    }
}

fn execute_list(ctx: &CommandContext, filter: Option<&str>) -> Result<()> {
    let (_, recommender) = ctx.load_recommender()?;
    crate::commands::list::execute(ctx.cli, recommender.catalog(), filter)
}

fn execute_recommend(
    ctx: &CommandContext,
    name: &str,
    limit: Option<usize>,
    scores: bool,
    no_links: bool,
) -> Result<()> {
    let (resolved, recommender) = ctx.load_recommender()?;
    let options = crate::commands::recommend::RecommendOptions {
        limit: limit.unwrap_or(resolved.config.default_limit),
        scores,
        links: !no_links,
    };
    crate::commands::recommend::execute(ctx.cli, &resolved, &recommender, name, &options)
}

fn execute_check(ctx: &CommandContext) -> Result<()> {
    let resolved = ctx.resolve_config()?;
    let paths = ctx.artifact_paths(&resolved);
    crate::commands::check::execute(ctx.cli, &resolved, &paths)
}
