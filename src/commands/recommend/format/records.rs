//! Records output formatting for recommend command

use crate::commands::recommend::{RecommendOptions, RecommendRow};
use medrec_core::records::{escape_quotes, header};

/// Output in records format
pub fn output_records(query: &str, options: &RecommendOptions, rows: &[RecommendRow]) {
    println!(
        "{}",
        header(
            "recommend",
            &[
                ("query", format!("\"{}\"", escape_quotes(query))),
                ("limit", options.limit.to_string()),
                ("results", rows.len().to_string()),
            ],
        )
    );

    for row in rows {
        let mut line = format!(
            "R {} \"{}\" score={}",
            row.rank,
            escape_quotes(&row.name),
            row.score
        );
        if let Some(link) = &row.link {
            line.push_str(&format!(" link={}", link));
        }
        println!("{}", line);
    }
}
