use acontext_core::task::{Task, read_tasks};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Load task records from a file, or from stdin when no path (or "-") is given.
pub fn load_tasks(path: Option<&Path>) -> Result<Vec<Task>> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading tasks from file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_tasks(BufReader::new(file))
                .with_context(|| format!("Failed to load tasks from {}", path.display()))
        }
        _ => {
            debug!("Reading tasks from stdin");
            read_tasks(io::stdin().lock()).context("Failed to load tasks from stdin")
        }
    }
}
