//! Writing the rendered page to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::CliConfig;

/// Render the page and write it to `<dir>/<file_name>`.
///
/// `out_dir` overrides `[output].dir`. Missing directories are created.
/// Returns the written path.
pub fn write_page(config: &CliConfig, out_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = out_dir.unwrap_or(&config.output.dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let html = jm_site::render_page(&config.site);
    let path = dir.join(&config.output.file_name);
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(bytes = html.len(), path = %path.display(), "Rendered page");
    Ok(path)
}
