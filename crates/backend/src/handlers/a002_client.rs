use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_client::aggregate::Client;

use crate::domain::a002_client;
use crate::shared::data::db::get_connection;

/// GET /api/clients
pub async fn list_all() -> Result<Json<Vec<Client>>, StatusCode> {
    match a002_client::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list clients: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/clients/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Client>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a002_client::service::get_by_id(get_connection(), uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load client {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
