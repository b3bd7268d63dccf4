//! In-memory replica of the todo.ly API surface for integration tests.
//!
//! Mirrors the service's quirks the client has to cope with: one response
//! envelope for errors and payloads distinguished by `ErrorCode`, timestamps
//! as `"/Date(<millis>)/"` strings, auth failures reported inside a 200
//! body, and delete answering a plain 404 for unknown ids. Wire records are
//! defined independently of the client crate; the integration tests catch
//! schema drift.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Login the server accepts over HTTP Basic auth.
pub const LOGIN: &str = "user@example.com";
/// Password paired with [`LOGIN`].
pub const PASSWORD: &str = "hunter2";
/// Token issued on successful authentication and required on item routes.
pub const TOKEN: &str = "mock-session-token";

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemRecord {
    pub id: i64,
    pub content: String,
    pub checked: bool,
    pub priority: i64,
    pub created_date: String,
    pub item_type: i64,
    pub item_order: i64,
    pub parent_id: i64,
    pub deleted: bool,
    pub children: Vec<ItemRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TokenReply {
    user_email: String,
    token_string: String,
    expiration_time: String,
    error_code: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorReply {
    error_code: i64,
    error_message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreatePayload {
    content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CheckedPayload {
    #[serde(default)]
    checked: bool,
}

struct Store {
    items: BTreeMap<i64, ItemRecord>,
    next_id: i64,
}

type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store {
        items: BTreeMap::new(),
        next_id: 1,
    }));
    Router::new()
        .route("/api/authentication/token.json", get(issue_token))
        .route("/api/items.json", get(list_items).post(create_item))
        .route("/api/items/{id}", post(update_item))
        .route("/api/{id}", delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn wire_date(millis: i64) -> String {
    format!("/Date({millis})/")
}

/// The service reports both auth failures and bad tokens inside a 200 body.
fn error_reply(code: i64, message: &str) -> Response {
    Json(ErrorReply {
        error_code: code,
        error_message: message.to_string(),
    })
    .into_response()
}

fn basic_auth_matches(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return false;
    };
    let Some(encoded) = value.to_str().ok().and_then(|v| v.strip_prefix("Basic ")) else {
        return false;
    };
    let Ok(decoded) = BASE64.decode(encoded) else {
        return false;
    };
    decoded == format!("{LOGIN}:{PASSWORD}").into_bytes()
}

fn token_matches(headers: &HeaderMap) -> bool {
    headers
        .get("Token")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == TOKEN)
        .unwrap_or(false)
}

/// Item routes carry the id as a `<number>.json` path segment.
fn parse_id_segment(segment: &str) -> Option<i64> {
    segment.strip_suffix(".json")?.parse().ok()
}

async fn issue_token(headers: HeaderMap) -> Response {
    if !basic_auth_matches(&headers) {
        return error_reply(102, "Login failed");
    }
    let expires = Utc::now().timestamp_millis() + 4 * 3600 * 1000;
    Json(TokenReply {
        user_email: LOGIN.to_string(),
        token_string: TOKEN.to_string(),
        expiration_time: wire_date(expires),
        error_code: 0,
    })
    .into_response()
}

async fn list_items(State(db): State<Db>, headers: HeaderMap) -> Response {
    if !token_matches(&headers) {
        return error_reply(1, "Invalid token");
    }
    let store = db.read().await;
    let items: Vec<ItemRecord> = store.items.values().cloned().collect();
    Json(items).into_response()
}

async fn create_item(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(payload): Json<CreatePayload>,
) -> Response {
    if !token_matches(&headers) {
        return error_reply(1, "Invalid token");
    }
    let mut store = db.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let order = store.items.len() as i64 + 1;
    let item = ItemRecord {
        id,
        content: payload.content,
        checked: false,
        priority: 4,
        created_date: wire_date(Utc::now().timestamp_millis()),
        item_type: 1,
        item_order: order,
        parent_id: 0,
        deleted: false,
        children: Vec::new(),
    };
    store.items.insert(id, item.clone());
    Json(item).into_response()
}

async fn update_item(
    State(db): State<Db>,
    Path(segment): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<CheckedPayload>,
) -> Response {
    if !token_matches(&headers) {
        return error_reply(1, "Invalid token");
    }
    let Some(id) = parse_id_segment(&segment) else {
        return error_reply(3, "Item not found");
    };
    let mut store = db.write().await;
    match store.items.get_mut(&id) {
        Some(item) => {
            item.checked = payload.checked;
            Json(item.clone()).into_response()
        }
        None => error_reply(3, "Item not found"),
    }
}

async fn delete_item(
    State(db): State<Db>,
    Path(segment): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !token_matches(&headers) {
        return error_reply(1, "Invalid token");
    }
    let Some(id) = parse_id_segment(&segment) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let mut store = db.write().await;
    match store.items.remove(&id) {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
