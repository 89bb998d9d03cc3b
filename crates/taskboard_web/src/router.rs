//! Router assembly, request logging and shutdown signal.

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::time::Instant;
use tokio::signal;

use crate::handlers::{
    create_project, create_task, dashboard, delete_project, delete_task, edit_project_form,
    edit_task_form, health_check, new_project_form, new_task_form, update_project, update_task,
    view_project,
};
use crate::paths;
use crate::state::AppState;

/// Builds the full route table over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(paths::DASHBOARD, get(dashboard))
        .route(
            paths::NEW_PROJECT,
            get(new_project_form).post(create_project),
        )
        .route(paths::SAVE_NEW_PROJECT, post(create_project))
        .route(
            "/editar_projeto/{project_id}",
            get(edit_project_form).post(update_project),
        )
        .route("/deletar_projeto/{project_id}", get(delete_project))
        .route("/projeto/{project_id}", get(view_project))
        .route(
            "/nova_tarefa/{project_id}",
            get(new_task_form).post(create_task),
        )
        .route(
            "/editar_tarefa/{project_id}/{task_id}",
            get(edit_task_form).post(update_task),
        )
        .route("/deletar_tarefa/{project_id}/{task_id}", get(delete_task))
        .route(paths::HEALTH, get(health_check))
        .with_state(state)
        .layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=web status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}

/// Completes on SIGINT, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("event=server_shutdown module=web status=error error={err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::error!("event=server_shutdown module=web status=error error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("event=server_shutdown module=web status=start signal=SIGINT");
        },
        _ = terminate => {
            info!("event=server_shutdown module=web status=start signal=SIGTERM");
        },
    }
}
