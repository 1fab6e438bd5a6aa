use super::keyword_suggester::KeywordSuggester;
use super::repository;
use contracts::domain::a004_task::aggregate::{
    normalize_keyword_names, Keyword, SuggestKeywordsRequest, Task, TaskDto,
    SUGGESTION_MIN_TITLE_LEN,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<Task>> {
    repository::list_tasks(db).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Task>> {
    repository::get_task(db, id).await
}

pub async fn list_keywords(db: &DatabaseConnection) -> anyhow::Result<Vec<Keyword>> {
    repository::list_keywords(db).await
}

/// Match names case-insensitively against stored keywords, creating the
/// missing ones in lower case
pub async fn find_or_create_keywords<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> anyhow::Result<Vec<Keyword>> {
    let mut existing = repository::list_keywords(db).await?;
    let mut result = Vec::new();

    for name in normalize_keyword_names(names) {
        let found = existing
            .iter()
            .find(|k| k.name.to_lowercase() == name)
            .cloned();
        let keyword = match found {
            Some(k) => k,
            None => {
                let created = repository::insert_keyword(db, &name).await?;
                tracing::info!("Created keyword '{}' (id {})", created.name, created.id);
                existing.push(created.clone());
                created
            }
        };
        result.push(keyword);
    }
    Ok(result)
}

pub async fn create(db: &DatabaseConnection, dto: TaskDto) -> anyhow::Result<Task> {
    dto.validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let txn = db.begin().await?;
    let keywords = find_or_create_keywords(&txn, &dto.keywords).await?;
    let keyword_ids: Vec<i32> = keywords.iter().map(|k| k.id).collect();
    let id = repository::insert_task(&txn, dto.title.trim(), false, &keyword_ids).await?;
    txn.commit().await?;

    Ok(Task {
        id,
        title: dto.title.trim().to_string(),
        is_done: false,
        keywords,
    })
}

/// Toggle the done flag; `None` for an unknown id
pub async fn toggle(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Task>> {
    match repository::toggle_task(db, id).await? {
        Some(_) => repository::get_task(db, id).await,
        None => Ok(None),
    }
}

/// Suggested keyword names for a title, minus the ones already picked
pub async fn suggest_keywords(
    db: &DatabaseConnection,
    suggester: &dyn KeywordSuggester,
    request: &SuggestKeywordsRequest,
) -> anyhow::Result<Vec<String>> {
    let title = request.task_title.trim();
    if title.chars().count() < SUGGESTION_MIN_TITLE_LEN {
        return Ok(vec![]);
    }

    let known: Vec<String> = repository::list_keywords(db)
        .await?
        .into_iter()
        .map(|k| k.name)
        .collect();
    let excluded = normalize_keyword_names(&request.exclude);

    let suggestions = suggester.suggest(title, &known).await;
    Ok(normalize_keyword_names(&suggestions)
        .into_iter()
        .filter(|s| !excluded.contains(s))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_task::keyword_suggester::HeuristicSuggester;
    use crate::shared::data::db::test_connection;

    fn dto(title: &str, keywords: &[&str]) -> TaskDto {
        TaskDto {
            title: title.into(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_reuses_keywords_case_insensitively() {
        let db = test_connection().await;
        let first = create(&db, dto("Write docs", &["Docs", "planning"]))
            .await
            .unwrap();
        let second = create(&db, dto("Review docs", &["DOCS", "docs", "review"]))
            .await
            .unwrap();

        assert_eq!(first.keywords.len(), 2);
        assert_eq!(second.keywords.len(), 2);
        assert_eq!(first.keywords[0].id, second.keywords[0].id);
        assert_eq!(second.keywords[0].name, "docs");
        assert_eq!(list_keywords(&db).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let db = test_connection().await;
        assert!(create(&db, dto("   ", &[])).await.is_err());
        assert!(list(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_by_id_with_keywords() {
        let db = test_connection().await;
        create(&db, dto("First", &["a"])).await.unwrap();
        create(&db, dto("Second", &[])).await.unwrap();

        let tasks = list(&db).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].id < tasks[1].id);
        assert_eq!(tasks[0].keywords[0].name, "a");
        assert!(tasks[1].keywords.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_flips_state_and_reports_unknown_id() {
        let db = test_connection().await;
        let task = create(&db, dto("Toggle me", &[])).await.unwrap();

        let toggled = toggle(&db, task.id).await.unwrap().unwrap();
        assert!(toggled.is_done);
        let toggled = toggle(&db, task.id).await.unwrap().unwrap();
        assert!(!toggled.is_done);

        assert!(toggle(&db, 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_suggestions_skip_short_titles_and_excluded() {
        let db = test_connection().await;
        create(&db, dto("Seed", &["design", "frontend"])).await.unwrap();
        let suggester = HeuristicSuggester;

        let short = SuggestKeywordsRequest {
            task_title: "ab".into(),
            exclude: vec![],
        };
        assert!(suggest_keywords(&db, &suggester, &short)
            .await
            .unwrap()
            .is_empty());

        let request = SuggestKeywordsRequest {
            task_title: "Design the frontend layout".into(),
            exclude: vec!["Design".into()],
        };
        let suggestions = suggest_keywords(&db, &suggester, &request).await.unwrap();
        assert!(suggestions.contains(&"frontend".to_string()));
        assert!(!suggestions.contains(&"design".to_string()));
    }
}
