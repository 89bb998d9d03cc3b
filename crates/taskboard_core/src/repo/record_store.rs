//! Record store contract and CSV-file implementation.
//!
//! # Responsibility
//! - Expose whole-collection load/save for projects and tasks.
//! - Map each collection to its backing file inside one data directory.
//!
//! # Invariants
//! - Loads return records in file order.
//! - Saves write records in the order given, preceded by the header row.

use super::csv_table::{read_table, write_table};
use super::StoreResult;
use crate::model::project::{Project, PROJECT_COLUMNS};
use crate::model::task::{Task, TASK_COLUMNS};
use std::path::{Path, PathBuf};

/// File name of the projects collection inside the data directory.
pub const PROJECTS_FILE_NAME: &str = "projetos.csv";
/// File name of the tasks collection inside the data directory.
pub const TASKS_FILE_NAME: &str = "tarefas.csv";

/// Whole-collection persistence for projects and tasks.
pub trait RecordStore {
    fn load_projects(&self) -> StoreResult<Vec<Project>>;
    fn save_projects(&self, projects: &[Project]) -> StoreResult<()>;
    fn load_tasks(&self) -> StoreResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()>;
}

/// Store backed by two CSV files in a data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    projects_path: PathBuf,
    tasks_path: PathBuf,
}

impl CsvStore {
    /// Creates a store rooted at `data_dir`.
    ///
    /// The directory is not touched until the first save.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            projects_path: data_dir.join(PROJECTS_FILE_NAME),
            tasks_path: data_dir.join(TASKS_FILE_NAME),
        }
    }

    pub fn projects_path(&self) -> &Path {
        &self.projects_path
    }

    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }
}

impl RecordStore for CsvStore {
    fn load_projects(&self) -> StoreResult<Vec<Project>> {
        read_table(&self.projects_path)
    }

    fn save_projects(&self, projects: &[Project]) -> StoreResult<()> {
        write_table(&self.projects_path, &PROJECT_COLUMNS, projects)
    }

    fn load_tasks(&self) -> StoreResult<Vec<Task>> {
        read_table(&self.tasks_path)
    }

    fn save_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        write_table(&self.tasks_path, &TASK_COLUMNS, tasks)
    }
}
