use axum::http::StatusCode;
use gym_roster::api;
use gym_roster::db::init_db;
use gym_roster::Repository;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(api::AppState::new(repo.clone()));

    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn request(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn session_body(session_id: i64) -> Value {
    json!({
        "session_id": session_id,
        "member_id": 1,
        "session_date": 20240115,
        "session_time": "07:30",
        "activity": "rowing",
        "duration_minutes": 45,
        "calories_burned": 410
    })
}

#[tokio::test]
async fn test_session_round_trip() {
    let t = setup_test_app().await;

    let (status, body) = request(
        t.app.clone(),
        "POST",
        "/add_session",
        Some(session_body(5)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "New session: 5 was added to the database!");
    assert_eq!(body["session_id"], 5);

    let (status, body) = request(t.app, "GET", "/session/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, session_body(5));
}

#[tokio::test]
async fn test_get_unknown_session_is_not_found() {
    let t = setup_test_app().await;

    let (status, body) = request(t.app, "GET", "/session/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found!");
}

#[tokio::test]
async fn test_add_session_reports_every_missing_field() {
    let t = setup_test_app().await;

    let (status, body) = request(
        t.app,
        "POST",
        "/add_session",
        Some(json!({"session_id": 1, "member_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["fields"].as_object().unwrap();
    for name in [
        "session_date",
        "session_time",
        "activity",
        "duration_minutes",
        "calories_burned",
    ] {
        assert!(fields.contains_key(name), "missing error for {}", name);
    }
    assert!(!fields.contains_key("member_id"));
    assert!(!t.repo.session_exists(1).await.unwrap());
}

#[tokio::test]
async fn test_add_session_without_id_assigns_one() {
    let t = setup_test_app().await;
    let mut body = session_body(0);
    body.as_object_mut().unwrap().remove("session_id");

    let (status, resp) = request(t.app, "POST", "/add_session", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let id = resp["session_id"].as_i64().unwrap();
    assert!(t.repo.session_exists(id).await.unwrap());
}

#[tokio::test]
async fn test_add_duplicate_session_is_conflict() {
    let t = setup_test_app().await;

    let (status, _) = request(t.app.clone(), "POST", "/add_session", Some(session_body(2))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(t.app, "POST", "/add_session", Some(session_body(2))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_session_replaces_columns() {
    let t = setup_test_app().await;
    request(t.app.clone(), "POST", "/add_session", Some(session_body(3))).await;

    let mut body = session_body(3);
    body["activity"] = json!("cycling");
    body["calories_burned"] = json!(520);

    let (status, resp) = request(t.app, "PUT", "/sessions/3", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["message"], "Session id: 3 has been updated!");

    let session = t.repo.get_session(3).await.unwrap().unwrap();
    assert_eq!(session.activity, "cycling");
    assert_eq!(session.calories_burned, 520);
}

#[tokio::test]
async fn test_update_session_can_reassign_id() {
    let t = setup_test_app().await;
    request(t.app.clone(), "POST", "/add_session", Some(session_body(3))).await;

    let (status, resp) = request(t.app, "PUT", "/sessions/3", Some(session_body(8))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["message"], "Session id: 8 has been updated!");
    assert!(!t.repo.session_exists(3).await.unwrap());
    assert!(t.repo.session_exists(8).await.unwrap());
}

#[tokio::test]
async fn test_update_unknown_session_is_not_found() {
    let t = setup_test_app().await;

    let (status, body) = request(t.app, "PUT", "/sessions/4", Some(session_body(4))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found!");
}

#[tokio::test]
async fn test_update_session_requires_full_payload() {
    let t = setup_test_app().await;
    request(t.app.clone(), "POST", "/add_session", Some(session_body(3))).await;

    let (status, body) = request(
        t.app,
        "PUT",
        "/sessions/3",
        Some(json!({"activity": "yoga"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"]["session_time"].is_array());
    assert_eq!(t.repo.get_session(3).await.unwrap().unwrap().activity, "rowing");
}

#[tokio::test]
async fn test_delete_session_twice() {
    let t = setup_test_app().await;
    request(t.app.clone(), "POST", "/add_session", Some(session_body(6))).await;

    let (status, body) = request(t.app.clone(), "DELETE", "/sessions/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Session id: 6 has been deleted!");

    let (status, body) = request(t.app, "DELETE", "/sessions/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found!");
}
