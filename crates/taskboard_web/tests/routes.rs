//! Route-level tests driving the router with in-process requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use taskboard_core::{Project, RecordStore, Task, PROJECTS_FILE_NAME};
use taskboard_web::{build_router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    _dir: TempDir,
    state: AppState,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::with_data_dir(dir.path());
        let router = build_router(state.clone());
        Self {
            _dir: dir,
            state,
            router,
        }
    }

    async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    fn projects(&self) -> Vec<Project> {
        self.state.service().store().load_projects().unwrap()
    }

    fn tasks(&self) -> Vec<Task> {
        self.state.service().store().load_tasks().unwrap()
    }
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a location")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn dashboard_is_empty_without_data_files() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Nenhum projeto"));
}

#[tokio::test]
async fn create_project_redirects_to_dashboard_and_lists_it() {
    let app = TestApp::new();

    let response = app
        .post_form("/novo_projeto", "name=Alpha&description=x")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let projects = app.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Alpha");
    assert_eq!(projects[0].created_at, "2025-05-09");
    assert!(!projects[0].id.is_empty());

    let page = body_text(app.get("/").await).await;
    assert!(page.contains("Alpha"));
    assert!(page.contains(&format!("/projeto/{}", projects[0].id)));
}

#[tokio::test]
async fn alternate_create_endpoint_behaves_the_same() {
    let app = TestApp::new();

    let response = app
        .post_form("/salvar_novo_projeto", "name=Beta&description=y")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(app.projects()[0].name, "Beta");
}

#[tokio::test]
async fn new_project_form_renders_blank_form() {
    let app = TestApp::new();

    let response = app.get("/novo_projeto").await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("action=\"/novo_projeto\""));
    assert!(page.contains("name=\"name\""));
}

#[tokio::test]
async fn missing_form_field_is_a_bad_request() {
    let app = TestApp::new();

    let response = app.post_form("/novo_projeto", "name=Alpha").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("description"));
    assert!(app.projects().is_empty());
}

#[tokio::test]
async fn edit_project_updates_name_and_description_only() {
    let app = TestApp::new();
    app.post_form("/novo_projeto", "name=Alpha&description=x")
        .await;
    let original = app.projects().remove(0);

    let form = app.get(&format!("/editar_projeto/{}", original.id)).await;
    assert_eq!(form.status(), StatusCode::OK);
    assert!(body_text(form).await.contains("value=\"Alpha\""));

    let response = app
        .post_form(
            &format!("/editar_projeto/{}", original.id),
            "name=Gamma&description=new+text",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let updated = app.projects().remove(0);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.name, "Gamma");
    assert_eq!(updated.description, "new text");
}

#[tokio::test]
async fn missing_project_redirects_to_dashboard() {
    let app = TestApp::new();

    for uri in ["/projeto/nope", "/editar_projeto/nope"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/");
    }

    let response = app
        .post_form("/editar_projeto/nope", "name=a&description=b")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(app.projects().is_empty());
}

#[tokio::test]
async fn task_lifecycle_under_a_project() {
    let app = TestApp::new();
    app.post_form("/novo_projeto", "name=P&description=").await;
    app.post_form("/novo_projeto", "name=Q&description=").await;
    let projects = app.projects();
    let (p, q) = (&projects[0], &projects[1]);

    let form = app.get(&format!("/nova_tarefa/{}", p.id)).await;
    assert_eq!(form.status(), StatusCode::OK);
    assert!(body_text(form).await.contains("value=\"pendente\""));

    let response = app
        .post_form(
            &format!("/nova_tarefa/{}", p.id),
            "title=Write&description=docs&status=todo",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/projeto/{}", p.id));

    let task = app.tasks().remove(0);
    assert_eq!(task.project_id, p.id);

    let page_p = body_text(app.get(&format!("/projeto/{}", p.id)).await).await;
    assert!(page_p.contains("Write"));
    let page_q = body_text(app.get(&format!("/projeto/{}", q.id)).await).await;
    assert!(!page_q.contains("Write"));

    let edit_uri = format!("/editar_tarefa/{}/{}", p.id, task.id);
    let form = app.get(&edit_uri).await;
    assert_eq!(form.status(), StatusCode::OK);
    assert!(body_text(form).await.contains("value=\"Write\""));

    let response = app
        .post_form(&edit_uri, "title=Write&description=docs&status=done")
        .await;
    assert_eq!(location(&response), format!("/projeto/{}", p.id));
    assert_eq!(app.tasks()[0].status, "done");

    let response = app
        .get(&format!("/deletar_tarefa/{}/{}", p.id, task.id))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/projeto/{}", p.id));
    assert!(app.tasks().is_empty());
}

#[tokio::test]
async fn missing_task_redirects_to_project_view() {
    let app = TestApp::new();

    let response = app.get("/editar_tarefa/p-1/nope").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/projeto/p-1");

    let response = app.get("/deletar_tarefa/p-1/nope").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/projeto/p-1");
}

#[tokio::test]
async fn incomplete_edit_of_missing_record_still_redirects() {
    let app = TestApp::new();

    let response = app.post_form("/editar_tarefa/p-1/nope", "title=x").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/projeto/p-1");
    assert!(app.tasks().is_empty());

    let response = app.post_form("/editar_projeto/nope", "name=x").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert!(app.projects().is_empty());
}

#[tokio::test]
async fn incomplete_edit_of_existing_task_is_a_bad_request() {
    let app = TestApp::new();
    app.post_form("/nova_tarefa/p-1", "title=a&description=b&status=todo")
        .await;
    let task = app.tasks().remove(0);

    let response = app
        .post_form(&format!("/editar_tarefa/p-1/{}", task.id), "title=x")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.tasks(), vec![task]);
}

#[tokio::test]
async fn delete_project_cascades_to_tasks() {
    let app = TestApp::new();
    app.post_form("/novo_projeto", "name=Alpha&description=x")
        .await;
    app.post_form("/novo_projeto", "name=Beta&description=y")
        .await;
    let projects = app.projects();
    let (alpha, beta) = (&projects[0], &projects[1]);

    app.post_form(
        &format!("/nova_tarefa/{}", alpha.id),
        "title=a&description=&status=todo",
    )
    .await;
    app.post_form(
        &format!("/nova_tarefa/{}", beta.id),
        "title=b&description=&status=todo",
    )
    .await;

    let response = app.get(&format!("/deletar_projeto/{}", alpha.id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    assert_eq!(app.projects(), vec![beta.clone()]);
    let tasks = app.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].project_id, beta.id);
}

#[tokio::test]
async fn unreadable_store_is_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(PROJECTS_FILE_NAME)).unwrap();
    let router = build_router(AppState::with_data_dir(dir.path()));

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = body_text(response).await;
    assert!(!page.contains(PROJECTS_FILE_NAME));
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
