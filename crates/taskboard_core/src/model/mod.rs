//! Domain model for projects and their tasks.
//!
//! # Responsibility
//! - Define the two record shapes persisted by the store.
//! - Keep the column order of each record in one place.
//!
//! # Invariants
//! - Ids are opaque strings; generated ids are UUID v4 text.
//! - `Task::project_id` should reference an existing `Project::id`, but the
//!   model does not enforce it.

pub mod project;
pub mod task;

/// Generates a fresh opaque record id.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
