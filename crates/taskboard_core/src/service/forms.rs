//! Form payloads and their validated inputs.
//!
//! # Invariants
//! - A field absent from the submitted form is an error.
//! - A field present but empty is accepted verbatim.

use super::tracker_service::ServiceError;
use serde::Deserialize;

/// Raw project form as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Raw task form as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Editable project fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
}

/// Editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl ProjectForm {
    pub fn into_input(self) -> Result<ProjectInput, ServiceError> {
        Ok(ProjectInput {
            name: require("name", self.name)?,
            description: require("description", self.description)?,
        })
    }
}

impl TaskForm {
    pub fn into_input(self) -> Result<TaskInput, ServiceError> {
        Ok(TaskInput {
            title: require("title", self.title)?,
            description: require("description", self.description)?,
            status: require("status", self.status)?,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> Result<String, ServiceError> {
    value.ok_or(ServiceError::MissingField(field))
}
