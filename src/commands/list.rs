//! `medrec list` command - list catalog items
//!
//! Items are printed in catalog order. `--filter` keeps names containing the
//! given text, ignoring case.

use crate::cli::{Cli, OutputFormat};
use medrec_core::catalog::{Item, ItemCatalog};
use medrec_core::error::Result;
use medrec_core::records::{escape_quotes, header};

/// Execute the list command
pub fn execute(cli: &Cli, catalog: &ItemCatalog, filter: Option<&str>) -> Result<()> {
    let items: Vec<Item<'_>> = match filter {
        Some(needle) => catalog.filter(needle).collect(),
        None => catalog.iter().collect(),
    };

    tracing::debug!(total = catalog.len(), shown = items.len(), ?filter, "list");

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = items
                .iter()
                .map(|item| serde_json::json!({ "index": item.index, "name": item.name }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if items.is_empty() {
                if !cli.quiet {
                    match filter {
                        Some(needle) => println!("No items match '{}'", needle),
                        None => println!("Catalog is empty"),
                    }
                }
                return Ok(());
            }
            for item in &items {
                println!("{}", item.name);
            }
        }
        OutputFormat::Records => {
            let mut fields = vec![("items", items.len().to_string())];
            if let Some(needle) = filter {
                fields.push(("filter", format!("\"{}\"", escape_quotes(needle))));
            }
            println!("{}", header("list", &fields));
            for item in &items {
                println!("I {} \"{}\"", item.index, escape_quotes(item.name));
            }
        }
    }

    Ok(())
}
