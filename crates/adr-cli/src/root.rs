use adr_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the store directory.
///
/// Priority:
/// 1. `--dir` flag / `ADR_STORE_DIR` env var (passed in as `explicit`)
/// 2. `docs/decisions` relative to the current directory
pub fn resolve_store_dir(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(paths::DEFAULT_STORE_DIR),
    }
}
