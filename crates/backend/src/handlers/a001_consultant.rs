use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_consultant::aggregate::Consultant;

use crate::domain::a001_consultant;
use crate::shared::data::db::get_connection;

/// GET /api/consultants
pub async fn list_all() -> Result<Json<Vec<Consultant>>, StatusCode> {
    match a001_consultant::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list consultants: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/consultants/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Consultant>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a001_consultant::service::get_by_id(get_connection(), uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load consultant {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
