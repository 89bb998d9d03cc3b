//! Task handlers. Every task route redirects back to the owning project.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use taskboard_core::TaskForm;

use crate::error::AppError;
use crate::paths;
use crate::state::AppState;
use crate::views;

/// GET /nova_tarefa/{project_id}
pub async fn new_task_form(Path(project_id): Path<String>) -> Html<String> {
    Html(views::new_task_form(&project_id))
}

/// POST /nova_tarefa/{project_id}
pub async fn create_task(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    let input = form.into_input()?;
    let target = paths::project(&project_id);
    state
        .run(move |service| service.create_task(&project_id, input))
        .await?;
    Ok(Redirect::to(&target))
}

/// GET /editar_tarefa/{project_id}/{task_id}
pub async fn edit_task_form(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let task = state.run(move |service| service.get_task(&task_id)).await?;
    Ok(match task {
        Some(task) => Html(views::edit_task_form(&project_id, &task)).into_response(),
        None => Redirect::to(&paths::project(&project_id)).into_response(),
    })
}

/// POST /editar_tarefa/{project_id}/{task_id}
pub async fn update_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, AppError> {
    state
        .run(move |service| service.update_task(&task_id, form))
        .await?;
    Ok(Redirect::to(&paths::project(&project_id)))
}

/// GET /deletar_tarefa/{project_id}/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    state
        .run(move |service| service.delete_task(&task_id))
        .await?;
    Ok(Redirect::to(&paths::project(&project_id)))
}
