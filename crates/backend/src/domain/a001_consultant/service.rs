use super::repository;
use contracts::domain::a001_consultant::aggregate::Consultant;
use contracts::domain::common::AggregateRoot;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Create a consultant
pub async fn create(
    db: &DatabaseConnection,
    code: &str,
    description: &str,
    fixed_cost: f64,
) -> anyhow::Result<Uuid> {
    let mut aggregate = Consultant::new_for_insert(code.into(), description.into(), fixed_cost);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();
    tracing::debug!(
        "{} {}: inserting {}",
        Consultant::aggregate_index(),
        Consultant::collection_name(),
        aggregate.code()
    );

    repository::insert(db, &aggregate).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<Consultant>> {
    repository::get_by_id(db, id).await
}

/// All active consultants, ordered by name
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Consultant>> {
    repository::list_all(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_create_and_list_sorted_by_name() {
        let db = test_connection().await;
        create(&db, "renato.pereira", "Renato Pereira", 3500.0).await.unwrap();
        let id = create(&db, "ana.souza", "ana Souza", 2800.0).await.unwrap();

        let all = list_all(&db).await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.base.description.as_str()).collect();
        assert_eq!(names, vec!["ana Souza", "Renato Pereira"]);

        let loaded = get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(loaded.base.code, "ana.souza");
        assert_eq!(loaded.fixed_cost, 2800.0);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_consultant() {
        let db = test_connection().await;
        assert!(create(&db, "", "Nobody", 100.0).await.is_err());
        assert!(repository::count(&db).await.unwrap() == 0);
    }
}
