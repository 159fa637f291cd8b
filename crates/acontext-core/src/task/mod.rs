//! Task domain module.
//!
//! This module contains the task record owned by a session, its status
//! enumeration, boundary decoding from JSON, and read-only views.
//!
//! # Module Structure
//!
//! - `model`: `Task`, `TaskStatus` and the `TaskData` payload type
//! - `codec`: decoding records (single or batch) from JSON text or streams
//! - `view`: grouping and ordering helpers that never modify a record
//!
//! # Usage
//!
//! ```
//! use acontext_core::task::Task;
//!
//! let task = Task::from_json_str(r#"{
//!     "id": "7f1c2a9e-3b1d-4c55-9a0e-2d4b6f8a1c30",
//!     "session_id": "0b9d8e7f-6a5c-4b3d-8e2f-1a0b9c8d7e6f",
//!     "task_order": 3,
//!     "task_description": "Fetch URL",
//!     "task_status": "running",
//!     "task_data": {},
//!     "space_digested": false,
//!     "raw_message_ids": []
//! }"#).unwrap();
//! assert_eq!(task.summary(), "Task 3: Fetch URL (Status: running)");
//! ```

pub mod codec;
mod model;
pub mod view;

// Re-export public API
pub use codec::{parse_tasks, read_tasks, tasks_to_json_pretty};
pub use model::{Task, TaskData, TaskStatus};
pub use view::group_by_session;
