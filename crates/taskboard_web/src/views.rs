//! HTML views.
//!
//! Every function is pure: structured data in, markup out. All record
//! fields are escaped before they reach the page.

use crate::paths;
use axum::http::StatusCode;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;
use taskboard_core::{Project, ProjectView, Task, DEFAULT_TASK_STATUS};

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n<nav><a href=\"{}\">Projetos</a></nav>\n\
         <main>\n{}</main>\n</body>\n</html>\n",
        text(title),
        paths::DASHBOARD,
        body
    )
}

/// Project list with links to view, edit and delete each project.
pub fn dashboard(projects: &[Project]) -> String {
    let mut body = String::from("<h1>Projetos</h1>\n");
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Novo projeto</a></p>",
        paths::NEW_PROJECT
    );

    if projects.is_empty() {
        body.push_str("<p class=\"empty\">Nenhum projeto cadastrado.</p>\n");
        return layout("Projetos", &body);
    }

    body.push_str("<ul class=\"projects\">\n");
    for project in projects {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\">{}</a> <small>{}</small> <span>{}</span> \
             <a href=\"{}\">Editar</a> <a href=\"{}\">Excluir</a></li>",
            attr(&paths::project(&project.id)),
            text(&project.name),
            text(&project.created_at),
            text(&project.description),
            attr(&paths::edit_project(&project.id)),
            attr(&paths::delete_project(&project.id)),
        );
    }
    body.push_str("</ul>\n");
    layout("Projetos", &body)
}

/// Create/edit form. A project with an empty id renders the create form.
pub fn project_form(project: &Project) -> String {
    let (title, action) = if project.id.is_empty() {
        ("Novo projeto", paths::NEW_PROJECT.to_string())
    } else {
        ("Editar projeto", paths::edit_project(&project.id))
    };

    let mut body = format!("<h1>{}</h1>\n", text(title));
    let _ = write!(
        body,
        "<form method=\"post\" action=\"{}\">\n\
         <label>Nome <input name=\"name\" value=\"{}\"></label>\n\
         <label>Descrição <textarea name=\"description\">{}</textarea></label>\n\
         <button type=\"submit\">Salvar</button>\n</form>\n",
        attr(&action),
        attr(&project.name),
        text(&project.description),
    );
    layout(title, &body)
}

/// Project detail with its task list.
pub fn project_page(view: &ProjectView) -> String {
    let project = &view.project;
    let mut body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><small>Criado em {}</small></p>\n",
        text(&project.name),
        text(&project.description),
        text(&project.created_at)
    );
    let _ = writeln!(
        body,
        "<p><a href=\"{}\">Nova tarefa</a></p>",
        attr(&paths::new_task(&project.id))
    );

    if view.tasks.is_empty() {
        body.push_str("<p class=\"empty\">Nenhuma tarefa.</p>\n");
    } else {
        body.push_str("<table class=\"tasks\">\n<tr><th>Título</th><th>Descrição</th><th>Status</th><th></th></tr>\n");
        for task in &view.tasks {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>\
                 <a href=\"{}\">Editar</a> <a href=\"{}\">Excluir</a></td></tr>",
                text(&task.title),
                text(&task.description),
                text(&task.status),
                attr(&paths::edit_task(&project.id, &task.id)),
                attr(&paths::delete_task(&project.id, &task.id)),
            );
        }
        body.push_str("</table>\n");
    }
    layout(&project.name, &body)
}

/// Empty task form under `project_id`.
pub fn new_task_form(project_id: &str) -> String {
    task_form(
        "Nova tarefa",
        &paths::new_task(project_id),
        "",
        "",
        DEFAULT_TASK_STATUS,
    )
}

/// Task form pre-filled with `task`.
pub fn edit_task_form(project_id: &str, task: &Task) -> String {
    task_form(
        "Editar tarefa",
        &paths::edit_task(project_id, &task.id),
        &task.title,
        &task.description,
        &task.status,
    )
}

fn task_form(heading: &str, action: &str, title: &str, description: &str, status: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<form method=\"post\" action=\"{}\">\n\
         <label>Título <input name=\"title\" value=\"{}\"></label>\n\
         <label>Descrição <textarea name=\"description\">{}</textarea></label>\n\
         <label>Status <input name=\"status\" value=\"{}\"></label>\n\
         <button type=\"submit\">Salvar</button>\n</form>\n",
        text(heading),
        attr(action),
        attr(title),
        text(description),
        attr(status),
    );
    layout(heading, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!("<h1>{}</h1>\n<p>{}</p>\n", text(&heading), text(message));
    layout(&heading, &body)
}
