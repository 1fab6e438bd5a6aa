use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a004_task::aggregate::{
    Keyword, SuggestKeywordsRequest, SuggestKeywordsResponse, Task, TaskDto,
};

pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    get_json("/api/tasks").await
}

pub async fn fetch_keywords() -> Result<Vec<Keyword>, String> {
    get_json("/api/keywords").await
}

pub async fn create_task(dto: &TaskDto) -> Result<Task, String> {
    post_json("/api/tasks", dto).await
}

pub async fn toggle_task(id: i32) -> Result<Task, String> {
    post_json(&format!("/api/tasks/{}/toggle", id), &()).await
}

pub async fn suggest_keywords(request: &SuggestKeywordsRequest) -> Result<Vec<String>, String> {
    let response: SuggestKeywordsResponse =
        post_json("/api/tasks/suggest-keywords", request).await?;
    Ok(response.keywords)
}
