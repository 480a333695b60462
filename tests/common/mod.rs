//! In-process mock of the tutoring backend.
//!
//! Serves generic CRUD over in-memory JSON under `/api/{collection}`, with
//! courses embedded in their chapter the way the real backend returns them.
//! Individual responses can be replaced with `respond_once` to simulate
//! failures.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use parking_lot::Mutex;
use serde_json::{Map, Value, json};
use tutordesk::api::ApiClient;
use tutordesk::state::AppState;
use tutordesk_cache::CacheConfig;
use tutordesk_config::{ApiConfig, UploadConfig};

/// How list and record responses are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `[...]` and `{...}`
    Bare,
    /// `{"data": [...]}` and `{"data": {...}}`
    Data,
    /// `{"data": {"data": [...], "total": n}}` and `{"data": {...}}`
    Paginated,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path below `/api`, without the query string.
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
    pub request_id: Option<String>,
    pub authorization: Option<String>,
}

struct Scripted {
    method: Method,
    path: String,
    status: StatusCode,
    body: ScriptedBody,
}

enum ScriptedBody {
    Json(Value),
    Text(String),
}

struct MockState {
    collections: HashMap<String, Vec<Value>>,
    next_id: i64,
    envelope: Envelope,
    scripted: Vec<Scripted>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockBackend {
    pub base_url: String,
    state: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState {
            collections: HashMap::new(),
            next_id: 1,
            envelope: Envelope::Data,
            scripted: Vec::new(),
            requests: Vec::new(),
        }));

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::default().with_base_url(&self.base_url)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.api_config()).unwrap()
    }

    pub fn app_state(&self) -> AppState {
        self.app_state_with(UploadConfig::default())
    }

    pub fn app_state_with(&self, upload: UploadConfig) -> AppState {
        AppState::new(self.api_config(), &CacheConfig::default(), upload).unwrap()
    }

    /// Replaces a collection's records. Later ids continue past the largest
    /// seeded one.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut state = self.state.lock();
        let max = records
            .iter()
            .filter_map(|r| r["id"].as_i64())
            .chain(
                records
                    .iter()
                    .flat_map(|r| r["courses"].as_array().cloned().unwrap_or_default())
                    .filter_map(|c| c["id"].as_i64()),
            )
            .max()
            .unwrap_or(0);
        state.next_id = state.next_id.max(max + 1);
        state.collections.insert(collection.to_string(), records);
    }

    pub fn set_next_id(&self, id: i64) {
        self.state.lock().next_id = id;
    }

    pub fn set_envelope(&self, envelope: Envelope) {
        self.state.lock().envelope = envelope;
    }

    /// The next request matching `method` and `path` gets this response
    /// instead of the normal one.
    pub fn respond_once(&self, method: Method, path: &str, status: u16, body: Value) {
        self.state.lock().scripted.push(Scripted {
            method,
            path: normalize(path),
            status: StatusCode::from_u16(status).unwrap(),
            body: ScriptedBody::Json(body),
        });
    }

    /// Like `respond_once`, with a `text/plain` body.
    pub fn respond_text_once(&self, method: Method, path: &str, status: u16, body: &str) {
        self.state.lock().scripted.push(Scripted {
            method,
            path: normalize(path),
            status: StatusCode::from_u16(status).unwrap(),
            body: ScriptedBody::Text(body.to_string()),
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self, method: Method, path: &str) -> usize {
        let path = normalize(path);
        self.state
            .lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn record(&self, collection: &str, id: i64) -> Option<Value> {
        self.records(collection)
            .into_iter()
            .find(|r| r["id"].as_i64() == Some(id))
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(State(state): State<Shared>, req: Request) -> Response {
    let method = req.method().clone();
    let path = normalize(req.uri().path().trim_start_matches("/api"));
    let query = req.uri().query().map(str::to_string);
    let request_id = header(req.headers(), "x-request-id");
    let authorization = header(req.headers(), "authorization");

    let segments: Vec<String> = path
        .trim_matches('/')
        .split('/')
        .map(str::to_string)
        .collect();
    let is_upload = method == Method::POST
        && segments.len() == 3
        && segments[0] == "courses"
        && segments[2] == "upload";

    let body = if is_upload {
        read_multipart(req).await
    } else {
        let bytes = to_bytes(req.into_body(), usize::MAX).await.unwrap_or_default();
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    let mut state = state.lock();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        body: body.clone(),
        request_id,
        authorization,
    });

    if let Some(idx) = state
        .scripted
        .iter()
        .position(|s| s.method == method && s.path == path)
    {
        let scripted = state.scripted.remove(idx);
        return match scripted.body {
            ScriptedBody::Json(body) => (scripted.status, axum::Json(body)).into_response(),
            ScriptedBody::Text(body) => (scripted.status, body).into_response(),
        };
    }

    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", [collection]) => list(&state, collection, query.as_deref()),
        ("GET", [collection, id]) => match find(&state, collection, id) {
            Some(record) => state.record_response(StatusCode::OK, record),
            None => not_found(),
        },
        ("POST", ["courses", id, "upload"]) => upload(&mut state, id, body),
        ("POST", [collection]) => create(&mut state, collection, body),
        ("PUT", [collection, id]) => update(&mut state, collection, id, body),
        ("DELETE", [collection, id]) => delete(&mut state, collection, id),
        _ => not_found(),
    }
}

async fn read_multipart(req: Request) -> Value {
    let Ok(mut multipart) = Multipart::from_request(req, &()).await else {
        return Value::Null;
    };

    let mut fields = Map::new();
    let mut files = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.unwrap_or_default();
                files.push(json!({
                    "field": name,
                    "file_name": file_name,
                    "content_type": content_type,
                    "size": bytes.len(),
                }));
            }
            None => {
                let text = field.text().await.unwrap_or_default();
                fields.insert(name, Value::String(text));
            }
        }
    }
    fields.insert("files".to_string(), Value::Array(files));
    Value::Object(fields)
}

impl MockState {
    fn record_response(&self, status: StatusCode, record: Value) -> Response {
        let body = match self.envelope {
            Envelope::Bare => record,
            Envelope::Data | Envelope::Paginated => json!({ "data": record }),
        };
        (status, axum::Json(body)).into_response()
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn course_mut(&mut self, id: i64) -> Option<&mut Value> {
        self.collections
            .get_mut("chapters")?
            .iter_mut()
            .filter_map(|chapter| chapter["courses"].as_array_mut())
            .flat_map(|courses| courses.iter_mut())
            .find(|course| course["id"].as_i64() == Some(id))
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "message": "العنصر غير موجود" })),
    )
        .into_response()
}

fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        Value::Bool(b) => b.to_string() == expected,
        _ => false,
    }
}

fn list(state: &MockState, collection: &str, query: Option<&str>) -> Response {
    let filters: Vec<(String, String)> = query
        .unwrap_or_default()
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(k, _)| !matches!(*k, "page" | "per_page" | "search"))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let items: Vec<Value> = state
        .collections
        .get(collection)
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .filter(|item| filters.iter().all(|(k, v)| value_matches(&item[k.as_str()], v)))
        .collect();

    let total = items.len();
    let body = match state.envelope {
        Envelope::Bare => Value::Array(items),
        Envelope::Data => json!({ "data": items }),
        Envelope::Paginated => json!({ "data": { "data": items, "total": total } }),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

fn find(state: &MockState, collection: &str, id: &str) -> Option<Value> {
    let id: i64 = id.parse().ok()?;
    state
        .collections
        .get(collection)?
        .iter()
        .find(|r| r["id"].as_i64() == Some(id))
        .cloned()
}

fn create(state: &mut MockState, collection: &str, body: Value) -> Response {
    let Value::Object(mut record) = body else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({ "message": "بيانات غير صالحة" })),
        )
            .into_response();
    };
    let id = state.allocate_id();
    record.insert("id".to_string(), json!(id));

    if collection == "courses" {
        let chapter_id = record.get("chapter_id").and_then(Value::as_i64);
        let chapter = state
            .collections
            .get_mut("chapters")
            .and_then(|chapters| {
                chapters
                    .iter_mut()
                    .find(|c| c["id"].as_i64().is_some() && c["id"].as_i64() == chapter_id)
            });
        let Some(chapter) = chapter else {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({ "errors": { "chapter_id": ["الفصل غير موجود"] } })),
            )
                .into_response();
        };
        let record = Value::Object(record);
        match chapter["courses"].as_array_mut() {
            Some(courses) => courses.push(record.clone()),
            None => chapter["courses"] = json!([record.clone()]),
        }
        return state.record_response(StatusCode::CREATED, record);
    }

    if collection == "sessions" && !record.contains_key("status") {
        record.insert("status".to_string(), json!("pending"));
    }
    if collection == "chapters" && !record.contains_key("courses") {
        record.insert("courses".to_string(), json!([]));
    }

    let record = Value::Object(record);
    state
        .collections
        .entry(collection.to_string())
        .or_default()
        .push(record.clone());
    state.record_response(StatusCode::CREATED, record)
}

fn merge(target: &mut Value, patch: Value) {
    if let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) {
        for (k, v) in patch {
            target.insert(k, v);
        }
    }
}

fn update(state: &mut MockState, collection: &str, id: &str, body: Value) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };

    let updated = if collection == "courses" {
        state.course_mut(id).map(|course| {
            merge(course, body);
            course.clone()
        })
    } else {
        state
            .collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| r["id"].as_i64() == Some(id)))
            .map(|record| {
                merge(record, body);
                record.clone()
            })
    };

    match updated {
        Some(record) => state.record_response(StatusCode::OK, record),
        None => not_found(),
    }
}

fn delete(state: &mut MockState, collection: &str, id: &str) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };

    let removed = if collection == "courses" {
        state
            .collections
            .get_mut("chapters")
            .map(|chapters| {
                chapters
                    .iter_mut()
                    .filter_map(|c| c["courses"].as_array_mut())
                    .any(|courses| {
                        let before = courses.len();
                        courses.retain(|c| c["id"].as_i64() != Some(id));
                        courses.len() != before
                    })
            })
            .unwrap_or(false)
    } else {
        state
            .collections
            .get_mut(collection)
            .map(|records| {
                let before = records.len();
                records.retain(|r| r["id"].as_i64() != Some(id));
                records.len() != before
            })
            .unwrap_or(false)
    };

    if removed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found()
    }
}

fn upload(state: &mut MockState, id: &str, body: Value) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return not_found();
    };
    let files = body["files"].as_array().cloned().unwrap_or_default();

    let Some(course) = state.course_mut(id) else {
        return not_found();
    };
    for file in files {
        let field = file["field"].as_str().unwrap_or_default();
        let file_name = file["file_name"].as_str().unwrap_or_default();
        course[format!("{}_pdf", field).as_str()] = json!(format!("/storage/courses/{}", file_name));
    }
    let course = course.clone();
    state.record_response(StatusCode::OK, course)
}

// Fixtures

pub fn teacher_json(id: i64) -> Value {
    let name: String = Name().fake();
    json!({
        "id": id,
        "name": name,
        "phone": "01012345678",
        "module": "فيزياء",
        "price_per_session": "150.00",
        "monthly_price": 500,
        "grades": ["third_secondary"],
        "branches": ["scientific"],
    })
}

pub fn student_json(id: i64) -> Value {
    let name: String = Name().fake();
    json!({
        "id": id,
        "name": name,
        "phone": "01098765432",
        "year_target": "third_secondary",
        "branch": "scientific",
        "subscription_status": "active",
    })
}

pub fn chapter_json(id: i64, courses: Vec<Value>) -> Value {
    let description: String = Sentence(3..6).fake();
    json!({
        "id": id,
        "title": format!("الفصل {}", id),
        "description": description,
        "year_target": "third_secondary",
        "courses": courses,
    })
}

pub fn course_json(id: i64, chapter_id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "chapter_id": chapter_id,
        "title": title,
        "duration": 45,
    })
}

pub fn session_json(id: i64, status: &str, scheduled_at: &str) -> Value {
    json!({
        "id": id,
        "teacher_id": 1,
        "teacher_name": "أ. منى",
        "module": "فيزياء",
        "scheduled_at": scheduled_at,
        "duration_minutes": 90,
        "status": status,
    })
}

pub fn payment_json(id: i64, amount: f64, payment_type: &str) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "payment_type": payment_type,
        "teacher_id": 1,
        "paid_at": "2024-03-01T10:00:00Z",
    })
}
