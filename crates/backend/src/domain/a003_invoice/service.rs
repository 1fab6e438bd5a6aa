use super::repository;
use chrono::NaiveDate;
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Validate and store an invoice
pub async fn create(db: &DatabaseConnection, mut aggregate: Invoice) -> anyhow::Result<Uuid> {
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();
    tracing::debug!(
        "{} {}: inserting {}",
        Invoice::aggregate_index(),
        Invoice::collection_name(),
        aggregate.code()
    );

    repository::insert(db, &aggregate).await
}

pub async fn list_by_period(
    db: &DatabaseConnection,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> anyhow::Result<Vec<Invoice>> {
    if date_from > date_to {
        return Err(anyhow::anyhow!(
            "Invalid date range: {} is after {}",
            date_from,
            date_to
        ));
    }
    repository::list_by_period(db, date_from, date_to).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use contracts::domain::a003_invoice::aggregate::InvoiceStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn invoice(number: &str, issue_date: NaiveDate) -> Invoice {
        Invoice::new_for_insert(
            number.into(),
            "Portal".into(),
            "consultant".into(),
            "client".into(),
            "OS-1".into(),
            issue_date,
            1000.0,
            10.0,
            5.0,
            InvoiceStatus::Issued,
        )
    }

    #[tokio::test]
    async fn test_list_by_period_includes_both_bounds() {
        let db = test_connection().await;
        for (number, d) in [
            ("NF-1", date(2006, 12, 31)),
            ("NF-2", date(2007, 1, 1)),
            ("NF-3", date(2007, 1, 31)),
            ("NF-4", date(2007, 2, 1)),
        ] {
            create(&db, invoice(number, d)).await.unwrap();
        }

        let found = list_by_period(&db, date(2007, 1, 1), date(2007, 1, 31))
            .await
            .unwrap();
        let numbers: Vec<&str> = found.iter().map(|i| i.base.code.as_str()).collect();
        assert_eq!(numbers, vec!["NF-2", "NF-3"]);
        assert_eq!(found[0].status, InvoiceStatus::Issued);
    }

    #[tokio::test]
    async fn test_list_by_period_rejects_reversed_range() {
        let db = test_connection().await;
        assert!(list_by_period(&db, date(2007, 2, 1), date(2007, 1, 1))
            .await
            .is_err());
    }
}
