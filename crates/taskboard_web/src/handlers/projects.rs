//! Project handlers.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use taskboard_core::{Project, ProjectForm};

use crate::error::AppError;
use crate::paths;
use crate::state::AppState;
use crate::views;

/// GET / - project list
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state.run(|service| service.list_projects()).await?;
    Ok(Html(views::dashboard(&projects)))
}

/// GET /novo_projeto - empty project form
pub async fn new_project_form() -> Html<String> {
    Html(views::project_form(&Project::blank()))
}

/// POST /novo_projeto and POST /salvar_novo_projeto
pub async fn create_project(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> Result<Redirect, AppError> {
    let input = form.into_input()?;
    state
        .run(move |service| service.create_project(input))
        .await?;
    Ok(Redirect::to(paths::DASHBOARD))
}

/// GET /editar_projeto/{project_id}
pub async fn edit_project_form(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .run(move |service| service.get_project(&project_id))
        .await?;
    Ok(match project {
        Some(project) => Html(views::project_form(&project)).into_response(),
        None => Redirect::to(paths::DASHBOARD).into_response(),
    })
}

/// POST /editar_projeto/{project_id}
///
/// Redirects to the dashboard whether or not the project exists; the form is
/// only checked for a project that exists.
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Form(form): Form<ProjectForm>,
) -> Result<Redirect, AppError> {
    state
        .run(move |service| service.update_project(&project_id, form))
        .await?;
    Ok(Redirect::to(paths::DASHBOARD))
}

/// GET /deletar_projeto/{project_id} - removes the project and its tasks
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Redirect, AppError> {
    state
        .run(move |service| service.delete_project(&project_id))
        .await?;
    Ok(Redirect::to(paths::DASHBOARD))
}

/// GET /projeto/{project_id}
pub async fn view_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Response, AppError> {
    let view = state
        .run(move |service| service.view_project(&project_id))
        .await?;
    Ok(match view {
        Some(view) => Html(views::project_page(&view)).into_response(),
        None => Redirect::to(paths::DASHBOARD).into_response(),
    })
}
