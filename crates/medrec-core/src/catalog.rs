//! Item catalog: ordered display names with stable matrix positions
//!
//! Position `i` in the catalog is row/column `i` of the similarity matrix.
//! Lookup by name is exact and case-sensitive.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::artifacts::read_artifact;
use crate::bail_artifact;
use crate::error::{MedrecError, Result};

/// Default name column in dataframe-style catalog artifacts
pub const DEFAULT_NAME_COLUMN: &str = "Drug_Name";

/// A catalog entry borrowed from an [`ItemCatalog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    /// Row/column index in the similarity matrix
    pub index: usize,
    /// Display name
    pub name: &'a str,
}

/// Immutable, ordered catalog of uniquely named items
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build a catalog from names in matrix order.
    ///
    /// Fails with [`MedrecError::DuplicateItem`] if a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), index).is_some() {
                return Err(MedrecError::DuplicateItem { name: name.clone() });
            }
        }

        Ok(ItemCatalog { names, positions })
    }

    /// Load a catalog artifact.
    ///
    /// Accepts a plain JSON array of names, or a column-oriented table
    /// (`{"Drug_Name": {"0": "..", "1": ".."}}` or `{"Drug_Name": [..]}`)
    /// from which `name_column` is taken.
    pub fn load(path: &Path, name_column: &str) -> Result<Self> {
        let content = read_artifact(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| MedrecError::invalid_artifact(path, e))?;

        let names = match value {
            Value::Array(entries) => names_from_list(path, entries)?,
            Value::Object(mut columns) => match columns.remove(name_column) {
                Some(Value::Array(entries)) => names_from_list(path, entries)?,
                Some(Value::Object(rows)) => names_from_keyed_rows(path, rows)?,
                Some(_) => bail_artifact!(
                    path,
                    "column '{}' must be a list or an index-keyed object",
                    name_column
                ),
                None => bail_artifact!(path, "missing name column '{}'", name_column),
            },
            _ => bail_artifact!(path, "expected a list of names or a table of columns"),
        };

        if names.is_empty() {
            return Err(MedrecError::EmptyCatalog {
                path: path.to_path_buf(),
            });
        }

        let catalog = Self::from_names(names)?;
        debug!(path = %path.display(), items = catalog.len(), "load_catalog");
        Ok(catalog)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a display name to its matrix position
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Display name at a matrix position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All display names in catalog order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over items in catalog order
    pub fn iter(&self) -> impl Iterator<Item = Item<'_>> {
        self.names.iter().enumerate().map(|(index, name)| Item {
            index,
            name: name.as_str(),
        })
    }

    /// Items whose name contains `needle`, ignoring case, in catalog order
    pub fn filter<'a>(&'a self, needle: &str) -> impl Iterator<Item = Item<'a>> + 'a {
        let needle = needle.to_lowercase();
        self.iter()
            .filter(move |item| item.name.to_lowercase().contains(&needle))
    }
}

fn names_from_list(path: &Path, entries: Vec<Value>) -> Result<Vec<String>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::String(name) => Ok(name),
            other => Err(MedrecError::invalid_artifact(
                path,
                format!("row {} is not a string: {}", index, other),
            )),
        })
        .collect()
}

/// Rows keyed by stringified index, as a dataframe `to_dict()` emits them.
/// Keys must be canonical decimal indices covering exactly `0..N`.
fn names_from_keyed_rows(path: &Path, rows: serde_json::Map<String, Value>) -> Result<Vec<String>> {
    let mut ordered = BTreeMap::new();
    for (key, entry) in rows {
        let index: usize = match key.parse() {
            Ok(index) => index,
            Err(_) => bail_artifact!(path, "row key '{}' is not an index", key),
        };
        // "01" and "+1" would alias row 1
        if index.to_string() != key {
            bail_artifact!(path, "row key '{}' is not a canonical index", key);
        }
        let name = match entry {
            Value::String(name) => name,
            other => bail_artifact!(path, "row {} is not a string: {}", index, other),
        };
        if ordered.insert(index, name).is_some() {
            bail_artifact!(path, "row index {} appears more than once", index);
        }
    }

    for (expected, index) in ordered.keys().enumerate() {
        if *index != expected {
            bail_artifact!(path, "row index {} is missing", expected);
        }
    }

    Ok(ordered.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("catalog.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_names_positions() {
        let catalog = ItemCatalog::from_names(["Crocin", "Dolo 650", "Calpol"]).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position("Dolo 650"), Some(1));
        assert_eq!(catalog.name(2), Some("Calpol"));
        assert_eq!(catalog.position("dolo 650"), None);
    }

    #[test]
    fn test_from_names_rejects_duplicates() {
        let err = ItemCatalog::from_names(["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, MedrecError::DuplicateItem { ref name } if name == "A"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = ItemCatalog::from_names(["Azithral 500", "Augmentin", "azee"]).unwrap();
        let found: Vec<_> = catalog.filter("AZ").map(|item| item.name).collect();
        assert_eq!(found, vec!["Azithral 500", "azee"]);
    }

    #[test]
    fn test_load_plain_list() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"["A", "B", "C"]"#);
        let catalog = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap();
        assert_eq!(catalog.names(), &["A", "B", "C"]);
    }

    #[test]
    fn test_load_dataframe_dict() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            r#"{
                "Drug_Name": {"1": "B", "0": "A", "10": "K", "2": "C", "3": "D",
                              "4": "E", "5": "F", "6": "G", "7": "H", "8": "I", "9": "J"},
                "tags": {"0": "x"}
            }"#,
        );
        let catalog = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap();
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.name(0), Some("A"));
        assert_eq!(catalog.name(10), Some("K"));
    }

    #[test]
    fn test_load_list_column() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"{"name": ["A", "B"], "other": 3}"#);
        let catalog = ItemCatalog::load(&path, "name").unwrap();
        assert_eq!(catalog.position("B"), Some(1));
    }

    #[test]
    fn test_load_missing_column() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"{"Name": ["A"]}"#);
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("missing name column 'Drug_Name'"));
    }

    #[test]
    fn test_load_rejects_gap_in_row_keys() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"{"Drug_Name": {"0": "A", "2": "C"}}"#);
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(err.to_string().contains("row index 1 is missing"));
    }

    #[test]
    fn test_load_rejects_aliased_row_keys() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            r#"{"Drug_Name": {"0": "A", "1": "B", "01": "C"}}"#,
        );
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(matches!(err, MedrecError::InvalidArtifact { .. }));
        assert!(err.to_string().contains("row key '01' is not a canonical index"));

        let path = write(dir.path(), r#"{"Drug_Name": {"0": "A", "+1": "B"}}"#);
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn test_load_rejects_non_string_name() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), r#"["A", 7]"#);
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(matches!(err, MedrecError::InvalidArtifact { .. }));
    }

    #[test]
    fn test_load_empty_catalog() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "[]");
        let err = ItemCatalog::load(&path, DEFAULT_NAME_COLUMN).unwrap_err();
        assert!(matches!(err, MedrecError::EmptyCatalog { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ItemCatalog::load(&dir.path().join("nope.json"), DEFAULT_NAME_COLUMN)
            .unwrap_err();
        assert!(matches!(err, MedrecError::ArtifactMissing { .. }));
    }
}
