use contracts::domain::a004_task::aggregate::{Keyword, Task};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

pub mod task {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a004_task")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub title: String,
        pub is_done: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod keyword {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a004_keyword")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod task_keyword {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "a004_task_keyword")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub task_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub keyword_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<keyword::Model> for Keyword {
    fn from(m: keyword::Model) -> Self {
        Keyword {
            id: m.id,
            name: m.name,
        }
    }
}

/// Attach keywords to task rows in a single pass over the link table
async fn attach_keywords(
    db: &DatabaseConnection,
    rows: Vec<task::Model>,
) -> anyhow::Result<Vec<Task>> {
    let task_ids: Vec<i32> = rows.iter().map(|t| t.id).collect();
    let links = task_keyword::Entity::find()
        .filter(task_keyword::Column::TaskId.is_in(task_ids))
        .order_by_asc(task_keyword::Column::KeywordId)
        .all(db)
        .await?;
    let keywords: HashMap<i32, Keyword> = keyword::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|k| (k.id, Keyword::from(k)))
        .collect();

    let mut by_task: HashMap<i32, Vec<Keyword>> = HashMap::new();
    for link in links {
        if let Some(k) = keywords.get(&link.keyword_id) {
            by_task.entry(link.task_id).or_default().push(k.clone());
        }
    }

    Ok(rows
        .into_iter()
        .map(|t| Task {
            keywords: by_task.remove(&t.id).unwrap_or_default(),
            id: t.id,
            title: t.title,
            is_done: t.is_done,
        })
        .collect())
}

pub async fn list_tasks(db: &DatabaseConnection) -> anyhow::Result<Vec<Task>> {
    let rows = task::Entity::find()
        .order_by_asc(task::Column::Id)
        .all(db)
        .await?;
    attach_keywords(db, rows).await
}

pub async fn get_task(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Task>> {
    let Some(row) = task::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    Ok(attach_keywords(db, vec![row]).await?.pop())
}

/// Task row and its keyword links in one transaction
pub async fn insert_task<C>(
    db: &C,
    title: &str,
    is_done: bool,
    keyword_ids: &[i32],
) -> anyhow::Result<i32>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let active = task::ActiveModel {
        title: Set(title.to_string()),
        is_done: Set(is_done),
        ..Default::default()
    };
    let model = active.insert(&txn).await?;

    for keyword_id in keyword_ids {
        let link = task_keyword::ActiveModel {
            task_id: Set(model.id),
            keyword_id: Set(*keyword_id),
        };
        task_keyword::Entity::insert(link).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(model.id)
}

/// Flip `is_done`; `None` when the task does not exist
pub async fn toggle_task(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<bool>> {
    let Some(row) = task::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let new_state = !row.is_done;
    let mut active: task::ActiveModel = row.into();
    active.is_done = Set(new_state);
    active.update(db).await?;
    Ok(Some(new_state))
}

pub async fn list_keywords<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Keyword>> {
    Ok(keyword::Entity::find()
        .order_by_asc(keyword::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn insert_keyword<C: ConnectionTrait>(db: &C, name: &str) -> anyhow::Result<Keyword> {
    let active = keyword::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(active.insert(db).await?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    #[tokio::test]
    async fn test_insert_task_links_keywords() {
        let db = test_connection().await;
        let k = insert_keyword(&db, "docs").await.unwrap();
        let id = insert_task(&db, "Write docs", false, &[k.id]).await.unwrap();

        let task = get_task(&db, id).await.unwrap().unwrap();
        assert_eq!(task.title, "Write docs");
        assert_eq!(task.keywords, vec![k]);
    }

    #[tokio::test]
    async fn test_failed_link_rolls_back_task() {
        let db = test_connection().await;
        let k = insert_keyword(&db, "x").await.unwrap();

        // Duplicate link violates the composite key
        assert!(insert_task(&db, "Half written", false, &[k.id, k.id])
            .await
            .is_err());
        assert!(list_tasks(&db).await.unwrap().is_empty());
    }
}
