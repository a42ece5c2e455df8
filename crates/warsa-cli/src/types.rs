use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use warsa_map::AssemblyStats;

/// Outcome of one `convert` run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub data_file: PathBuf,
    pub schema_file: PathBuf,
    #[serde(flatten)]
    pub stats: AssemblyStats,
}

impl RunSummary {
    /// Write the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize run summary")?;
        fs::write(path, json).with_context(|| format!("write report: {}", path.display()))
    }
}
