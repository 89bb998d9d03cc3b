//! URL builders shared by views and redirects.
//!
//! Ids are opaque, so every id is percent-encoded as one path segment.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that must be escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\');

fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

pub const DASHBOARD: &str = "/";
pub const NEW_PROJECT: &str = "/novo_projeto";
pub const SAVE_NEW_PROJECT: &str = "/salvar_novo_projeto";
pub const HEALTH: &str = "/health";

pub fn project(project_id: &str) -> String {
    format!("/projeto/{}", segment(project_id))
}

pub fn edit_project(project_id: &str) -> String {
    format!("/editar_projeto/{}", segment(project_id))
}

pub fn delete_project(project_id: &str) -> String {
    format!("/deletar_projeto/{}", segment(project_id))
}

pub fn new_task(project_id: &str) -> String {
    format!("/nova_tarefa/{}", segment(project_id))
}

pub fn edit_task(project_id: &str, task_id: &str) -> String {
    format!(
        "/editar_tarefa/{}/{}",
        segment(project_id),
        segment(task_id)
    )
}

pub fn delete_task(project_id: &str, task_id: &str) -> String {
    format!(
        "/deletar_tarefa/{}/{}",
        segment(project_id),
        segment(task_id)
    )
}
