//! Core domain logic for Taskboard.
//! This crate owns the record model, the CSV store and the tracker use-cases.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, PROJECT_CREATED_AT};
pub use model::task::{Task, TaskId, DEFAULT_TASK_STATUS};
pub use repo::record_store::{CsvStore, RecordStore, PROJECTS_FILE_NAME, TASKS_FILE_NAME};
pub use repo::{StoreError, StoreResult};
pub use service::forms::{ProjectForm, ProjectInput, TaskForm, TaskInput};
pub use service::tracker_service::{
    DeleteOutcome, ProjectView, ServiceError, ServiceResult, TrackerService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
