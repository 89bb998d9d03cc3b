//! Route handlers.
//!
//! Each handler extracts path/form input, runs one tracker use-case and
//! either renders a view or redirects.

pub mod health;
pub mod projects;
pub mod tasks;

pub use health::health_check;
pub use projects::{
    create_project, dashboard, delete_project, edit_project_form, new_project_form,
    update_project, view_project,
};
pub use tasks::{create_task, delete_task, edit_task_form, new_task_form, update_task};
