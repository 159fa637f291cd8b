use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::input::load_tasks;

/// Fails with the first decoding error; `main` reports it.
pub fn run(path: Option<&Path>) -> Result<()> {
    let tasks = load_tasks(path)?;
    info!(count = tasks.len(), "All task records are valid");
    println!("OK: {} task(s)", tasks.len());
    Ok(())
}
