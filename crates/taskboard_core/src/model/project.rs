//! Project record.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - Edits replace `name` and `description` only.

use serde::{Deserialize, Serialize};

/// Opaque project identifier.
pub type ProjectId = String;

/// Creation date stamped on every new project.
///
/// Projects are dated with a fixed value rather than the wall clock, so
/// existing data files keep a uniform `created_at` column.
pub const PROJECT_CREATED_AT: &str = "2025-05-09";

/// Header row of the projects file, in column order.
pub const PROJECT_COLUMNS: [&str; 4] = ["id", "name", "description", "created_at"];

/// Top-level grouping that owns zero or more tasks.
///
/// Columns missing from a stored row load as empty strings, so the row
/// survives the next full rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl Project {
    /// Creates a project with a generated id and the fixed creation date.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: super::generate_id(),
            name: name.into(),
            description: description.into(),
            created_at: PROJECT_CREATED_AT.to_string(),
        }
    }

    /// Blank project used to render the "new project" form.
    pub fn blank() -> Self {
        Self::default()
    }
}
