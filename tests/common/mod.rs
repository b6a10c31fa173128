// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process stub of the activities API.

use activity_signup::config::Config;
use activity_signup::models::{Activity, Catalog};
use activity_signup::services::ViewSynchronizer;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Server-side catalog, shared with the test so it can be inspected or
/// changed behind the client's back.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

#[allow(dead_code)]
pub const SIGNUP_DELAY: Duration = Duration::from_millis(300);
#[allow(dead_code)]
pub const REMOVAL_DELAY: Duration = Duration::from_millis(200);

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Catalog used by most tests.
#[allow(dead_code)]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Chess Club".to_string(),
        activity(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
    );
    catalog.insert(
        "Programming Class".to_string(),
        activity(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
    );
    catalog.insert(
        "Gym Class".to_string(),
        activity(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &[],
        ),
    );
    catalog.insert(
        "Art & Music".to_string(),
        activity("Painting and band practice", "Saturdays, 10:00 AM", 1, &["olivia@mergington.edu"]),
    );
    catalog
}

async fn list_activities(State(db): State<SharedCatalog>) -> Json<Catalog> {
    Json(db.lock().await.clone())
}

async fn signup(
    State(db): State<SharedCatalog>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut db = db.lock().await;
    let Some(activity) = db.get_mut(&name) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"})));
    };
    if activity.participants.contains(&query.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Student is already signed up"})),
        );
    }
    activity.participants.push(query.email.clone());
    (
        StatusCode::OK,
        Json(json!({"message": format!("Signed up {} for {}", query.email, name)})),
    )
}

async fn unregister(
    State(db): State<SharedCatalog>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> (StatusCode, Json<Value>) {
    let mut db = db.lock().await;
    let Some(activity) = db.get_mut(&name) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Activity not found"})));
    };
    let Some(pos) = activity.participants.iter().position(|p| *p == query.email) else {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "Not registered"})));
    };
    activity.participants.remove(pos);
    (
        StatusCode::OK,
        Json(json!({"message": format!("Removed {} from {}", query.email, name)})),
    )
}

/// Router implementing the activities API over `db`.
pub fn api_router(db: SharedCatalog) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/{name}/signup",
            axum::routing::post(signup).delete(unregister),
        )
        .with_state(db)
}

/// Router whose catalog is not JSON.
#[allow(dead_code)]
pub fn broken_router() -> Router {
    Router::new().route("/activities", get(|| async { "<html>maintenance</html>" }))
}

/// Router that lists `catalog` but whose signup endpoints answer without
/// JSON. POST fails with an HTML 502, except for `garbled@...` which gets a
/// plain-text 200. DELETE succeeds with plain text.
#[allow(dead_code)]
pub fn flaky_router(catalog: Catalog) -> Router {
    let db: SharedCatalog = Arc::new(Mutex::new(catalog));
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/{name}/signup",
            axum::routing::post(|Query(query): Query<EmailQuery>| async move {
                if query.email.starts_with("garbled@") {
                    (StatusCode::OK, "signed up, probably")
                } else {
                    (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
                }
            })
            .delete(|| async { (StatusCode::OK, "removed, probably") }),
        )
        .with_state(db)
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });
    format!("http://{}", addr)
}

/// Start the stub API over `catalog`.
#[allow(dead_code)]
pub async fn spawn_api(catalog: Catalog) -> (String, SharedCatalog) {
    let db = Arc::new(Mutex::new(catalog));
    let base_url = serve(api_router(db.clone())).await;
    (base_url, db)
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Config pointing at `base_url` with short message delays.
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        signup_message_delay: SIGNUP_DELAY,
        removal_message_delay: REMOVAL_DELAY,
        http_timeout: Duration::from_secs(5),
    }
}

/// Synchronizer talking to `base_url`.
pub fn create_sync(base_url: &str) -> ViewSynchronizer {
    ViewSynchronizer::from_config(&test_config(base_url)).expect("Failed to create synchronizer")
}

/// Synchronizer with the sample catalog already loaded.
#[allow(dead_code)]
pub async fn loaded_sync() -> (ViewSynchronizer, SharedCatalog) {
    let (base_url, db) = spawn_api(sample_catalog()).await;
    let sync = create_sync(&base_url);
    sync.load_catalog().await.expect("Catalog should load");
    (sync, db)
}
