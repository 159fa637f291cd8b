//! Task domain model.
//!
//! This module contains the task record that a session owns and the closed set
//! of statuses a task may report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::Display;
use uuid::Uuid;

use crate::error::AcontextError;

/// Task-specific payload. Its shape is owned by whoever produced the task.
pub type TaskData = HashMap<String, serde_json::Value>;

/// Represents the current status of a task.
///
/// Exactly four values exist; anything else is rejected when a record is
/// decoded or a status string is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    /// The task has been recorded but has not started.
    Pending,
    /// The task is in progress.
    Running,
    /// The task finished successfully.
    Success,
    /// The task finished with a failure.
    Failed,
}

impl TaskStatus {
    /// All statuses in declaration order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::Running,
        TaskStatus::Success,
        TaskStatus::Failed,
    ];
}

impl FromStr for TaskStatus {
    type Err = AcontextError;

    /// Parses a wire value. Matching is case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.to_string() == value)
            .ok_or_else(|| AcontextError::invalid_status(value))
    }
}

/// A unit of work belonging to a session.
///
/// The record is a passive description: ordering among siblings, a free-text
/// description, the current status, an opaque payload, a digestion flag and the
/// raw messages it was derived from. Nothing here moves a task between
/// statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub id: Uuid,
    /// Owning session
    pub session_id: Uuid,
    /// Position among sibling tasks in the same session
    pub task_order: i64,
    /// Free-text description
    pub task_description: String,
    /// Current status
    pub task_status: TaskStatus,
    /// Task-specific payload
    pub task_data: TaskData,
    /// Whether the downstream space digestion has processed this task
    pub space_digested: bool,
    /// Raw messages associated with this task, in insertion order
    pub raw_message_ids: Vec<Uuid>,
}

impl Task {
    /// One-line human readable summary, e.g. `Task 3: Fetch URL (Status: running)`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task {}: {} (Status: {})",
            self.task_order, self.task_description, self.task_status
        )
    }
}
