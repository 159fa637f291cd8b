//! Read-only views over decoded task records.

use std::collections::BTreeMap;
use uuid::Uuid;

use super::model::Task;

/// Groups tasks by owning session, each group sorted by `task_order`.
///
/// The sort is stable, so tasks sharing an order keep their input order.
pub fn group_by_session<I>(tasks: I) -> BTreeMap<Uuid, Vec<Task>>
where
    I: IntoIterator<Item = Task>,
{
    let mut sessions: BTreeMap<Uuid, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        sessions.entry(task.session_id).or_default().push(task);
    }
    for siblings in sessions.values_mut() {
        siblings.sort_by_key(|task| task.task_order);
    }
    sessions
}
