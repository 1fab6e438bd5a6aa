use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_task::aggregate::{
    Keyword, SuggestKeywordsRequest, SuggestKeywordsResponse, Task, TaskDto,
};

use crate::domain::a004_task::{keyword_suggester, service};
use crate::shared::data::db::get_connection;

/// GET /api/tasks
pub async fn list_all() -> Result<Json<Vec<Task>>, StatusCode> {
    match service::list(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list tasks: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/tasks/:id
pub async fn get_by_id(Path(id): Path<i32>) -> Result<Json<Task>, StatusCode> {
    match service::get_by_id(get_connection(), id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load task {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/tasks
pub async fn create(Json(dto): Json<TaskDto>) -> Result<Json<Task>, StatusCode> {
    if let Err(e) = dto.validate() {
        tracing::warn!("Rejected task: {}", e);
        return Err(StatusCode::BAD_REQUEST);
    }
    match service::create(get_connection(), dto).await {
        Ok(task) => {
            tracing::info!("Created task {} '{}'", task.id, task.title);
            Ok(Json(task))
        }
        Err(e) => {
            tracing::error!("Failed to create task: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/tasks/:id/toggle
pub async fn toggle(Path(id): Path<i32>) -> Result<Json<Task>, StatusCode> {
    match service::toggle(get_connection(), id).await {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to toggle task {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/keywords
pub async fn list_keywords() -> Result<Json<Vec<Keyword>>, StatusCode> {
    match service::list_keywords(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list keywords: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/tasks/suggest-keywords
pub async fn suggest_keywords(
    Json(request): Json<SuggestKeywordsRequest>,
) -> Result<Json<SuggestKeywordsResponse>, StatusCode> {
    let suggester = keyword_suggester::default_suggester();
    match service::suggest_keywords(get_connection(), suggester.as_ref(), &request).await {
        Ok(keywords) => Ok(Json(SuggestKeywordsResponse { keywords })),
        Err(e) => {
            tracing::error!("Keyword suggestion failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
