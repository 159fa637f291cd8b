//! JSON decoding of task records at the system boundary.
//!
//! Everything that turns external input into a [`Task`] goes through here, so
//! a record with an unknown status or a mistyped field never reaches the rest
//! of the program.

use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

use super::model::{Task, TaskStatus};
use crate::error::{AcontextError, Result};

impl Task {
    /// Decodes a single task record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decodes a single task record from an already parsed JSON value.
    ///
    /// A string `task_status` outside the four known values is reported as
    /// [`AcontextError::InvalidStatus`]; every other problem is an
    /// [`AcontextError::InvalidRecord`].
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = &value else {
            return Err(AcontextError::invalid_record(format!(
                "expected a task object, found {}",
                kind_of(&value)
            )));
        };

        if let Some(Value::String(status)) = fields.get("task_status") {
            status.parse::<TaskStatus>()?;
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Encodes this task as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        to_pretty(self)
    }
}

/// Encodes a list of tasks as one pretty-printed JSON array.
///
/// The output is accepted by [`parse_tasks`] and [`read_tasks`].
pub fn tasks_to_json_pretty(tasks: &[Task]) -> Result<String> {
    to_pretty(tasks)
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| AcontextError::Serialization {
        format: "JSON".to_string(),
        message: e.to_string(),
    })
}

/// Decodes either one task object or an array of task objects.
///
/// The whole batch fails on the first invalid element, and the error carries
/// that element's zero-based index.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    let value: Value = serde_json::from_str(json)?;
    tasks_from_value(value)
}

/// Same as [`parse_tasks`], reading the JSON document from a stream.
pub fn read_tasks<R: Read>(reader: R) -> Result<Vec<Task>> {
    let value: Value = serde_json::from_reader(reader)?;
    tasks_from_value(value)
}

fn tasks_from_value(value: Value) -> Result<Vec<Task>> {
    let tasks = match value {
        Value::Object(_) => vec![Task::from_value(value)?],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Task::from_value(item).map_err(|e| e.at_index(index)))
            .collect::<Result<Vec<_>>>()?,
        other => {
            return Err(AcontextError::invalid_record(format!(
                "expected a task object or an array of task objects, found {}",
                kind_of(&other)
            )));
        }
    };

    debug!(count = tasks.len(), "Decoded task records");
    Ok(tasks)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
