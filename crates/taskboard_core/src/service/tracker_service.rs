//! Project/task tracker use-case service.
//!
//! # Responsibility
//! - Implement every tracker operation as load → scan/mutate → save.
//! - Report missing records as `None` so callers pick redirect or error.
//!
//! # Invariants
//! - Nothing is cached between calls; each call reloads from the store.
//! - Lookups are linear and the first matching id wins.
//! - Deleting a project removes every task whose `project_id` matches.
//! - Edits never touch `id`, `created_at` or `project_id`.

use super::forms::{ProjectForm, ProjectInput, TaskForm, TaskInput};
use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::record_store::RecordStore;
use crate::repo::StoreError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for tracker use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A required form field was not submitted.
    MissingField(&'static str),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::MissingField(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Project detail with the tasks that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub project: Project,
    /// Tasks in file order.
    pub tasks: Vec<Task>,
}

/// What a project delete actually removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub project_removed: bool,
    pub tasks_removed: usize,
}

/// Tracker service over an injected record store.
pub struct TrackerService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> TrackerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists all projects in file order.
    pub fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        Ok(self.store.load_projects()?)
    }

    /// Appends a new project with a generated id and the fixed creation date.
    pub fn create_project(&self, input: ProjectInput) -> ServiceResult<Project> {
        let mut projects = self.store.load_projects()?;
        let project = Project::new(input.name, input.description);
        projects.push(project.clone());
        self.store.save_projects(&projects)?;

        info!(
            "event=project_create module=service status=ok project_id={} total={}",
            project.id,
            projects.len()
        );
        Ok(project)
    }

    /// Gets one project by id.
    pub fn get_project(&self, project_id: &str) -> ServiceResult<Option<Project>> {
        let projects = self.store.load_projects()?;
        Ok(projects.into_iter().find(|project| project.id == project_id))
    }

    /// Gets one project together with its tasks.
    ///
    /// Tasks are loaded only when the project exists.
    pub fn view_project(&self, project_id: &str) -> ServiceResult<Option<ProjectView>> {
        let Some(project) = self.get_project(project_id)? else {
            return Ok(None);
        };
        let tasks = self
            .store
            .load_tasks()?
            .into_iter()
            .filter(|task| task.belongs_to(project_id))
            .collect();
        Ok(Some(ProjectView { project, tasks }))
    }

    /// Replaces name and description of one project.
    ///
    /// The record is looked up before the form is checked: a missing project
    /// returns `None` without writing, whatever the form holds.
    pub fn update_project(
        &self,
        project_id: &str,
        form: ProjectForm,
    ) -> ServiceResult<Option<Project>> {
        let mut projects = self.store.load_projects()?;
        let Some(project) = projects.iter_mut().find(|project| project.id == project_id) else {
            info!(
                "event=project_update module=service status=not_found project_id={project_id}"
            );
            return Ok(None);
        };
        let input = form.into_input()?;
        project.name = input.name;
        project.description = input.description;
        let updated = project.clone();
        self.store.save_projects(&projects)?;

        info!("event=project_update module=service status=ok project_id={project_id}");
        Ok(Some(updated))
    }

    /// Removes a project and cascades to its tasks.
    ///
    /// Both files are rewritten even when nothing matched.
    pub fn delete_project(&self, project_id: &str) -> ServiceResult<DeleteOutcome> {
        let mut projects = self.store.load_projects()?;
        let projects_before = projects.len();
        projects.retain(|project| project.id != project_id);
        self.store.save_projects(&projects)?;

        let mut tasks = self.store.load_tasks()?;
        let tasks_before = tasks.len();
        tasks.retain(|task| !task.belongs_to(project_id));
        self.store.save_tasks(&tasks)?;

        let outcome = DeleteOutcome {
            project_removed: projects.len() < projects_before,
            tasks_removed: tasks_before - tasks.len(),
        };
        info!(
            "event=project_delete module=service status=ok project_id={} removed={} tasks_removed={}",
            project_id, outcome.project_removed, outcome.tasks_removed
        );
        Ok(outcome)
    }

    /// Appends a task under `project_id`.
    ///
    /// The project is not required to exist.
    pub fn create_task(&self, project_id: &str, input: TaskInput) -> ServiceResult<Task> {
        let mut tasks = self.store.load_tasks()?;
        let task = Task::new(project_id, input.title, input.description, input.status);
        tasks.push(task.clone());
        self.store.save_tasks(&tasks)?;

        info!(
            "event=task_create module=service status=ok project_id={} task_id={}",
            project_id, task.id
        );
        Ok(task)
    }

    /// Gets one task by id.
    pub fn get_task(&self, task_id: &str) -> ServiceResult<Option<Task>> {
        let tasks = self.store.load_tasks()?;
        Ok(tasks.into_iter().find(|task| task.id == task_id))
    }

    /// Replaces title, description and status of one task.
    ///
    /// Like `update_project`, a missing task returns `None` before the form
    /// is checked.
    pub fn update_task(&self, task_id: &str, form: TaskForm) -> ServiceResult<Option<Task>> {
        let mut tasks = self.store.load_tasks()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
            info!("event=task_update module=service status=not_found task_id={task_id}");
            return Ok(None);
        };
        let input = form.into_input()?;
        task.title = input.title;
        task.description = input.description;
        task.status = input.status;
        let updated = task.clone();
        self.store.save_tasks(&tasks)?;

        info!("event=task_update module=service status=ok task_id={task_id}");
        Ok(Some(updated))
    }

    /// Removes one task. Returns whether anything was removed.
    pub fn delete_task(&self, task_id: &str) -> ServiceResult<bool> {
        let mut tasks = self.store.load_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        self.store.save_tasks(&tasks)?;

        let removed = tasks.len() < before;
        info!("event=task_delete module=service status=ok task_id={task_id} removed={removed}");
        Ok(removed)
    }
}
