//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the root directory.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Anchor a command-line path at `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_path() {
        let explicit = PathBuf::from("/tmp/test/path");
        let result = resolve_root_path(Some(explicit.clone()));
        assert_eq!(result, explicit);
    }

    #[test]
    fn test_resolve_without_path_uses_current_dir() {
        let result = resolve_root_path(None);
        if let Ok(current) = env::current_dir() {
            assert!(result == current || result == PathBuf::from("."));
        } else {
            assert_eq!(result, PathBuf::from("."));
        }
    }

    #[test]
    fn test_resolve_against_keeps_absolute() {
        let root = Path::new("/data");
        assert_eq!(
            resolve_against(root, Path::new("/abs/similarity.json")),
            PathBuf::from("/abs/similarity.json")
        );
        assert_eq!(
            resolve_against(root, Path::new("catalog.json")),
            PathBuf::from("/data/catalog.json")
        );
    }
}
