use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoogleAccount {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

pub type Db = Arc<RwLock<BTreeMap<i64, GoogleAccount>>>;

/// Router with no accounts.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router serving `accounts`.
pub fn app_with(accounts: Vec<GoogleAccount>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        accounts.into_iter().map(|a| (a.id, a)).collect(),
    ));
    Router::new()
        .route("/google", get(list_accounts))
        .route("/google/{id}", get(get_account))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Accounts served by the standalone binary.
pub fn demo_accounts() -> Vec<GoogleAccount> {
    vec![
        GoogleAccount {
            id: 1,
            name: "Acme".to_string(),
            email: Some("ops@acme.test".to_string()),
        },
        GoogleAccount {
            id: 2,
            name: "Globex".to_string(),
            email: None,
        },
    ]
}

pub async fn run(listener: TcpListener, accounts: Vec<GoogleAccount>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(accounts)).await
}

async fn list_accounts(State(db): State<Db>) -> Json<ApiResponse<Vec<GoogleAccount>>> {
    let accounts = db.read().await;
    Json(ApiResponse {
        data: accounts.values().cloned().collect(),
    })
}

async fn get_account(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<GoogleAccount>>, (StatusCode, &'static str)> {
    let accounts = db.read().await;
    accounts
        .get(&id)
        .cloned()
        .map(|data| Json(ApiResponse { data }))
        .ok_or((StatusCode::NOT_FOUND, "Not Found"))
}
