use std::path::Path;

use anyhow::{Context, Result};

pub const DATA_FILE: &str = "prisoners.ttl";
pub const SCHEMA_FILE: &str = "schema.ttl";

/// Create `dir` and its parents if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output directory: {}", dir.display()))
}
