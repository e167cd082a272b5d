#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use reackathon::entities::{User, UserRole};
use reackathon::{AppState, Config, Session};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "ilmiobellissimotokendiprova";

/// Backend finto in memoria
#[derive(Default)]
pub struct MockBackend {
    /// user_id -> lista di partecipazioni (JSON come restituito dal backend)
    pub attendants: HashMap<String, Value>,
    /// Inviti creati, come coppie (mittente, destinatario)
    pub sent_invites: Vec<(String, String)>,
    /// invite_id -> stato
    pub invite_status: HashMap<String, String>,
    pub hackathons: Vec<Value>,
    /// Numero di richieste ricevute
    pub requests: usize,
}

pub type SharedBackend = Arc<Mutex<MockBackend>>;

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

fn api_error(status: StatusCode, error: &str, details: Option<&str>) -> ApiError {
    (status, Json(json!({ "error": error, "details": details })))
}

fn check_auth(headers: &HeaderMap) -> Result<(), ApiError> {
    let expected = format!("Bearer {}", TEST_TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(api_error(StatusCode::UNAUTHORIZED, "Invalid or missing token", None)),
    }
}

async fn user_attendants(
    State(backend): State<SharedBackend>,
    Path(user_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult {
    let mut backend = backend.lock().unwrap();
    backend.requests += 1;
    check_auth(&headers)?;
    Ok(Json(
        backend
            .attendants
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| json!([])),
    ))
}

async fn create_invite(
    State(backend): State<SharedBackend>,
    Path(from): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut backend = backend.lock().unwrap();
    backend.requests += 1;
    check_auth(&headers)?;

    let to = body["to"].as_str().unwrap_or_default().to_string();
    if to == "ghost" {
        return Err(api_error(StatusCode::NOT_FOUND, "Attendant not found", None));
    }
    if backend.sent_invites.contains(&(from.clone(), to.clone())) {
        return Err(api_error(
            StatusCode::CONFLICT,
            "Invite already sent",
            Some("pending invite exists"),
        ));
    }
    backend.sent_invites.push((from, to));
    Ok(Json(json!({})))
}

async fn respond_to_invite(
    State(backend): State<SharedBackend>,
    Path((invite_id, action)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult {
    let mut backend = backend.lock().unwrap();
    backend.requests += 1;
    check_auth(&headers)?;

    let next = match action.as_str() {
        "accept" => "accepted",
        "decline" => "declined",
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Unknown action", None)),
    };
    let Some(status) = backend.invite_status.get_mut(&invite_id) else {
        return Err(api_error(StatusCode::NOT_FOUND, "Invite not found", None));
    };
    if status != "pending" {
        return Err(api_error(StatusCode::CONFLICT, "Invite is not pending", None));
    }
    *status = next.to_string();
    Ok(Json(json!({})))
}

async fn list_hackathons(
    State(backend): State<SharedBackend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut backend = backend.lock().unwrap();
    backend.requests += 1;

    let matching: Vec<Value> = backend
        .hackathons
        .iter()
        .filter(|h| match params.get("search") {
            Some(search) => h["name"].as_str().unwrap_or_default().contains(search.as_str()),
            None => true,
        })
        .filter(|h| match params.get("status") {
            Some(status) => h["status"].as_str() == Some(status.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(Value::Array(matching))
}

async fn create_hackathon(
    State(backend): State<SharedBackend>,
    Json(mut body): Json<Value>,
) -> ApiResult {
    let mut backend = backend.lock().unwrap();
    backend.requests += 1;

    if body["name"] == "duplicate" {
        return Err(api_error(
            StatusCode::CONFLICT,
            "Hackathon already exists",
            Some("name taken"),
        ));
    }
    body["_id"] = json!(format!("h{}", backend.hackathons.len() + 1));
    body["status"] = json!("pending");
    backend.hackathons.push(body.clone());
    Ok(Json(body))
}

/// Avvia il backend finto su una porta libera
///
/// # Returns
/// URL base del server e handle condiviso sullo stato del backend
pub async fn spawn_backend(backend: MockBackend) -> (String, SharedBackend) {
    let shared = Arc::new(Mutex::new(backend));
    let app = Router::new()
        .route("/users/{user_id}/attendants", get(user_attendants))
        .route("/attendants/{from}/invites", post(create_invite))
        .route("/invites/{invite_id}/{action}", post(respond_to_invite))
        .route("/hackathons", get(list_hackathons).post(create_hackathon))
        .with_state(shared.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server crashed");
    });

    (format!("http://{}", addr), shared)
}

pub fn test_user() -> User {
    User {
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        avatar: None,
        skills: Vec::new(),
        badge: None,
        role: Some(UserRole::Client),
    }
}

/// AppState autenticato con il token atteso dal backend finto
pub fn logged_state(base_url: &str) -> AppState {
    let session = Session::new(test_user(), TEST_TOKEN);
    AppState::new(&Config::with_base_url(base_url), Some(session))
        .expect("Failed to create app state")
}

pub fn anonymous_state(base_url: &str) -> AppState {
    AppState::new(&Config::with_base_url(base_url), None).expect("Failed to create app state")
}

/// Partecipazione in formato JSON, senza inviti
pub fn attendant_json(attendant_id: &str, user_id: &str, group: Option<u32>) -> Value {
    json!({
        "_id": attendant_id,
        "hackathon": { "_id": "h1", "name": "Rust Jam" },
        "user": { "_id": user_id, "username": format!("user-{}", user_id) },
        "group": group,
        "invites": []
    })
}

pub fn hackathon_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "location": "Torino",
        "start_date": "2024-05-01T09:00:00Z",
        "end_date": "2024-05-02T18:00:00Z",
        "max_group_components": 4,
        "status": status
    })
}
