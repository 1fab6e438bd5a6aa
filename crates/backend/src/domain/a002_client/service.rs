use super::repository;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::common::AggregateRoot;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub async fn create(
    db: &DatabaseConnection,
    code: &str,
    description: &str,
    legal_name: &str,
) -> anyhow::Result<Uuid> {
    let mut aggregate = Client::new_for_insert(code.into(), description.into(), legal_name.into());

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();
    tracing::debug!(
        "{} {}: inserting {}",
        Client::aggregate_index(),
        Client::collection_name(),
        aggregate.code()
    );

    repository::insert(db, &aggregate).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<Option<Client>> {
    repository::get_by_id(db, id).await
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Client>> {
    repository::list_all(db).await
}
