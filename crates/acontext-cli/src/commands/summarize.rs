use acontext_core::task::{group_by_session, tasks_to_json_pretty};
use anyhow::Result;
use std::path::Path;

use super::input::load_tasks;

/// Prints tasks grouped by session and ordered by `task_order`.
///
/// With `as_json` the same ordering is printed as a single JSON array, which
/// `validate` and `summarize` accept back as input.
pub fn run(path: Option<&Path>, as_json: bool) -> Result<()> {
    let grouped = group_by_session(load_tasks(path)?);

    if as_json {
        let ordered: Vec<_> = grouped.into_values().flatten().collect();
        println!("{}", tasks_to_json_pretty(&ordered)?);
        return Ok(());
    }

    for (session_id, siblings) in grouped {
        println!("Session {}", session_id);
        for task in &siblings {
            println!("  {}", task.summary());
        }
    }

    Ok(())
}
