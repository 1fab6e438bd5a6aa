use chrono::{NaiveDate, Utc};
use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceId, InvoiceStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_invoice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Invoice number
    pub code: String,
    /// Billed system
    pub description: String,
    pub comment: Option<String>,
    pub consultant_ref: String,
    pub client_ref: String,
    pub service_order: String,
    pub issue_date: NaiveDate,
    pub gross_amount: f64,
    pub tax_pct: f64,
    pub commission_pct: f64,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Invoice {
            base: BaseAggregate::with_metadata(
                InvoiceId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            consultant_ref: m.consultant_ref,
            client_ref: m.client_ref,
            service_order: m.service_order,
            issue_date: m.issue_date,
            gross_amount: m.gross_amount,
            tax_pct: m.tax_pct,
            commission_pct: m.commission_pct,
            status: InvoiceStatus::from_str_lossy(&m.status),
        }
    }
}

/// Invoices issued within `[date_from, date_to]`, oldest first
pub async fn list_by_period(
    db: &DatabaseConnection,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> anyhow::Result<Vec<Invoice>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::IssueDate.gte(date_from))
        .filter(Column::IssueDate.lte(date_to))
        .order_by_asc(Column::IssueDate)
        .order_by_asc(Column::Code)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Invoice) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        consultant_ref: Set(aggregate.consultant_ref.clone()),
        client_ref: Set(aggregate.client_ref.clone()),
        service_order: Set(aggregate.service_order.clone()),
        issue_date: Set(aggregate.issue_date),
        gross_amount: Set(aggregate.gross_amount),
        tax_pct: Set(aggregate.tax_pct),
        commission_pct: Set(aggregate.commission_pct),
        status: Set(aggregate.status.as_str().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(db).await?;
    Ok(uuid)
}
