use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use help_center_tui::app::App;
use help_center_tui::config::{ApiConfig, Config, UiConfig};
use serde_json::{json, Value};

/// Redirect pause used by tests; short so the suite stays fast.
pub const TEST_REDIRECT_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned responses for each endpoint.
#[derive(Debug, Clone)]
pub struct Responses {
    pub list: (StatusCode, Value),
    pub detail: (StatusCode, Value),
    pub create: (StatusCode, Value),
}

impl Default for Responses {
    fn default() -> Self {
        Self {
            list: (StatusCode::OK, json!([])),
            detail: (StatusCode::NOT_FOUND, json!({ "detail": "Topic not found" })),
            create: (StatusCode::CREATED, topic_json(1, "Created", vec![])),
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    responses: Responses,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeState {
    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest { method, path, body });
    }
}

/// In-process stand-in for the Help Center API.
pub struct FakeApi {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeApi {
    pub async fn start(responses: Responses) -> Self {
        let state = Arc::new(FakeState {
            responses,
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/api/topics", get(list_topics).post(create_topic))
            .route("/api/topics/{id}", get(get_topic))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn app(&self) -> App {
        let config = Config {
            api: ApiConfig {
                base_url: self.base_url(),
            },
            ui: UiConfig {
                redirect_delay_ms: TEST_REDIRECT_DELAY_MS,
                ..UiConfig::default()
            },
            ..Config::default()
        };
        App::new(config).unwrap()
    }
}

async fn list_topics(State(api): State<Arc<FakeState>>) -> Response {
    api.record("GET", "/api/topics".to_string(), None);
    let (status, body) = api.responses.list.clone();
    (status, Json(body)).into_response()
}

async fn get_topic(State(api): State<Arc<FakeState>>, Path(id): Path<String>) -> Response {
    api.record("GET", format!("/api/topics/{}", id), None);
    let (status, body) = api.responses.detail.clone();
    (status, Json(body)).into_response()
}

async fn create_topic(State(api): State<Arc<FakeState>>, Json(body): Json<Value>) -> Response {
    api.record("POST", "/api/topics".to_string(), Some(body));
    let (status, body) = api.responses.create.clone();
    (status, Json(body)).into_response()
}

pub fn tip_json(tip_id: i64, topic_id: i64, title: &str, display_order: i64) -> Value {
    json!({
        "tip_id": tip_id,
        "title": title,
        "description": format!("{} description", title),
        "display_order": display_order,
        "topic_id": topic_id,
        "created_at": "2024-03-15T10:30:00",
        "updated_at": "2024-03-15T10:30:00"
    })
}

pub fn topic_json(topic_id: i64, title: &str, tips: Vec<Value>) -> Value {
    json!({
        "topic_id": topic_id,
        "title": title,
        "description": format!("{} description", title),
        "display_order": topic_id,
        "isNew": true,
        "icon": "",
        "tipCount": tips.len(),
        "tips": tips,
        "created_at": "2024-03-15T10:30:00",
        "updated_at": "2024-03-15T10:30:00"
    })
}

/// Applies the next event, failing the test if none arrives in time.
pub async fn next_event(app: &mut App) {
    let handled = tokio::time::timeout(Duration::from_secs(5), app.process_next_event())
        .await
        .expect("timed out waiting for an app event");
    assert!(handled, "event channel closed");
}

/// True when no event shows up within `wait`.
pub async fn stays_quiet(app: &mut App, wait: Duration) -> bool {
    tokio::time::timeout(wait, app.process_next_event()).await.is_err()
}
