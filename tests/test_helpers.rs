// tests/test_helpers.rs
// Minimal in-process stand-in for the Warungin backend. Each handler
// records what it saw so pipeline tests can assert on request counts and
// bearer headers.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use warungin_client::config::WarunginConfig;
use warungin_client::{ApiClient, MemorySessionStore};

pub struct BackendState {
    /// The one access token the protected routes currently accept.
    pub valid_token: Mutex<String>,
    /// The one refresh token the refresh route currently accepts.
    pub valid_refresh: Mutex<String>,
    /// When false the refresh route rejects everything.
    pub refresh_ok: AtomicBool,
    /// When true the products route answers 500.
    pub products_fail: AtomicBool,
    /// When true outlet creation answers the plan-quota rejection.
    pub outlet_quota_blocked: AtomicBool,
    /// When true the protected routes 401 every bearer, even a freshly
    /// rotated one.
    pub reject_all_bearers: AtomicBool,
    /// When true void requests get the server-side window rejection.
    pub void_rejected: AtomicBool,

    pub me_requests: AtomicUsize,
    pub products_requests: AtomicUsize,
    pub refresh_requests: AtomicUsize,
    pub rotations: AtomicUsize,
    /// Bearer token of every protected-route request, in arrival order.
    pub seen_bearers: Mutex<Vec<Option<String>>>,
}

impl BackendState {
    pub fn new(valid_token: &str, valid_refresh: &str) -> Arc<Self> {
        Arc::new(Self {
            valid_token: Mutex::new(valid_token.to_string()),
            valid_refresh: Mutex::new(valid_refresh.to_string()),
            refresh_ok: AtomicBool::new(true),
            products_fail: AtomicBool::new(false),
            outlet_quota_blocked: AtomicBool::new(false),
            reject_all_bearers: AtomicBool::new(false),
            void_rejected: AtomicBool::new(false),
            me_requests: AtomicUsize::new(0),
            products_requests: AtomicUsize::new(0),
            refresh_requests: AtomicUsize::new(0),
            rotations: AtomicUsize::new(0),
            seen_bearers: Mutex::new(Vec::new()),
        })
    }

    pub fn bearers(&self) -> Vec<Option<String>> {
        self.seen_bearers.lock().unwrap().clone()
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn authorized(state: &BackendState, headers: &HeaderMap) -> bool {
    let token = bearer(headers);
    state.seen_bearers.lock().unwrap().push(token.clone());
    if state.reject_all_bearers.load(Ordering::SeqCst) {
        return false;
    }
    token.as_deref() == Some(state.valid_token.lock().unwrap().as_str())
}

async fn me(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.me_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        );
    }
    // Bare object, no envelope; /auth/me predates the {data} wrapper.
    (
        StatusCode::OK,
        Json(json!({
            "user": {
                "id": "u-1",
                "tenant_id": "t-1",
                "email": "owner@warung.id",
                "name": "Owner",
                "role": "owner",
                "is_active": true
            },
            "tenant": {
                "id": "t-1",
                "name": "Warung Sejahtera",
                "business_type": "fnb",
                "email": "owner@warung.id"
            }
        })),
    )
}

async fn refresh(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.refresh_requests.fetch_add(1, Ordering::SeqCst);

    if !state.refresh_ok.load(Ordering::SeqCst) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid refresh token" })),
        );
    }

    let expected = state.valid_refresh.lock().unwrap().clone();
    if body.get("refresh_token").and_then(Value::as_str) != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid refresh token" })),
        );
    }

    let n = state.rotations.fetch_add(1, Ordering::SeqCst) + 1;
    let new_access = format!("access-r{n}");
    let new_refresh = format!("refresh-r{n}");
    *state.valid_token.lock().unwrap() = new_access.clone();
    *state.valid_refresh.lock().unwrap() = new_refresh.clone();

    (
        StatusCode::OK,
        Json(json!({ "access_token": new_access, "refresh_token": new_refresh })),
    )
}

async fn products(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.products_requests.fetch_add(1, Ordering::SeqCst);
    if state.products_fail.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        );
    }
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": [
                { "id": "p-1", "name": "Kopi Susu", "price": 15000, "category": "minuman" },
                { "id": "p-2", "name": "Nasi Goreng", "price": 22000 }
            ]
        })),
    )
}

async fn create_outlet(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        );
    }
    if state.outlet_quota_blocked.load(Ordering::SeqCst) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Batas outlet untuk paket Anda sudah tercapai" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "data": {
                "id": "o-2",
                "name": body.get("name").and_then(Value::as_str).unwrap_or("Outlet"),
                "address": body.get("address"),
                "phone": body.get("phone")
            }
        })),
    )
}

async fn checkout(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "data": {
                "id": "trx-9",
                "invoice_number": "INV/2025/0009",
                "status": "completed",
                "total": 37000,
                "payment_method": body.get("payment_method").and_then(Value::as_str).unwrap_or("cash"),
                "created_at": "2025-08-25T04:00:00Z",
                "items": []
            }
        })),
    )
}

async fn void_transaction(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized" })),
        );
    }
    if state.void_rejected.load(Ordering::SeqCst) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Batas waktu void sudah lewat" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": {
                "id": id,
                "invoice_number": "INV/2025/0009",
                "status": "voided",
                "total": 37000,
                "payment_method": "cash",
                "created_at": "2025-08-25T04:00:00Z",
                "items": []
            }
        })),
    )
}

/// Install a test-writer subscriber once so pipeline warnings show up in
/// failing test output.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

pub async fn spawn_backend(state: Arc<BackendState>) -> String {
    init_tracing();
    let app = Router::new()
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/products", get(products))
        .route("/api/v1/outlets", post(create_outlet))
        .route("/api/v1/transactions", post(checkout))
        .route("/api/v1/transactions/{id}/void", post(void_transaction))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    format!("http://{addr}")
}

pub fn client_for(base_url: &str, session: Arc<MemorySessionStore>) -> ApiClient {
    let config = WarunginConfig {
        api_url: base_url.to_string(),
        request_timeout: 5,
        session_file: None,
        log_level: "debug".to_string(),
    };
    ApiClient::new(&config, session).expect("build client")
}
