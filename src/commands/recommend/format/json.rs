//! JSON output formatting for recommend command

use crate::commands::recommend::{RecommendOptions, RecommendRow};
use medrec_core::error::Result;

/// Output in JSON format
pub fn output_json(query: &str, options: &RecommendOptions, rows: &[RecommendRow]) -> Result<()> {
    let results: Vec<_> = rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::json!({
                "rank": row.rank,
                "name": row.name,
            });

            if let Some(obj_mut) = obj.as_object_mut() {
                if options.scores {
                    obj_mut.insert("score".to_string(), serde_json::json!(row.score));
                }
                if let Some(link) = &row.link {
                    obj_mut.insert("link".to_string(), serde_json::json!(link));
                }
            }

            obj
        })
        .collect();

    let output = serde_json::json!({
        "query": query,
        "limit": options.limit,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
