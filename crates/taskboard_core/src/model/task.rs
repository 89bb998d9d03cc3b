//! Task record.
//!
//! # Invariants
//! - `id` and `project_id` never change after creation.
//! - `status` is free text; no state machine is enforced.

use super::project::ProjectId;
use serde::{Deserialize, Serialize};

/// Opaque task identifier.
pub type TaskId = String;

/// Header row of the tasks file, in column order.
pub const TASK_COLUMNS: [&str; 5] = ["id", "project_id", "title", "description", "status"];

/// Status pre-filled in the "new task" form.
pub const DEFAULT_TASK_STATUS: &str = "pendente";

/// Unit of work belonging to one project.
///
/// Short rows load with empty strings for the missing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl Task {
    /// Creates a task under `project_id` with a generated id.
    pub fn new(
        project_id: impl Into<ProjectId>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            project_id: project_id.into(),
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Returns whether this task belongs to `project_id`.
    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project_id == project_id
    }
}
