use contracts::dashboards::d400_performance::{PerformanceRequest, PerformanceResponse};
use sea_orm::DatabaseConnection;
use thiserror::Error;

use super::{aggregation, repository};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("selection is empty")]
    EmptySelection,

    #[error("invalid date range: {from} is after {to}")]
    InvalidRange { from: String, to: String },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ReportError {
    /// Errors caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ReportError::Storage(_))
    }
}

pub fn validate_request(request: &PerformanceRequest) -> Result<(), ReportError> {
    if request.selected_refs.iter().all(|r| r.trim().is_empty()) {
        return Err(ReportError::EmptySelection);
    }
    if request.date_from > request.date_to {
        return Err(ReportError::InvalidRange {
            from: request.date_from.to_string(),
            to: request.date_to.to_string(),
        });
    }
    Ok(())
}

/// Compute the commercial performance report
pub async fn get_performance(
    db: &DatabaseConnection,
    request: &PerformanceRequest,
) -> Result<PerformanceResponse, ReportError> {
    validate_request(request)?;

    let facts = repository::get_invoice_facts(db, request.date_from, request.date_to).await?;
    let report = aggregation::build_report(request, &facts);

    tracing::info!(
        "Performance report by {} for {}..{}: {} of {} invoices in {} rows",
        request.group_by.as_str(),
        request.date_from,
        request.date_to,
        report.details.len(),
        facts.len(),
        report.rows.len()
    );
    Ok(report)
}

pub async fn list_periods(db: &DatabaseConnection) -> anyhow::Result<Vec<String>> {
    repository::get_active_periods(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_consultant, a002_client, a003_invoice};
    use crate::shared::data::db::test_connection;
    use chrono::NaiveDate;
    use contracts::dashboards::d400_performance::GroupBy;
    use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(refs: Vec<String>, from: NaiveDate, to: NaiveDate) -> PerformanceRequest {
        PerformanceRequest {
            group_by: GroupBy::Consultant,
            selected_refs: refs,
            date_from: from,
            date_to: to,
        }
    }

    #[test]
    fn test_validation_errors() {
        let empty = request(vec![], date(2007, 1, 1), date(2007, 1, 31));
        assert!(matches!(
            validate_request(&empty),
            Err(ReportError::EmptySelection)
        ));

        let reversed = request(vec!["x".into()], date(2007, 2, 1), date(2007, 1, 1));
        let err = validate_request(&reversed).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().starts_with("invalid date range"));
    }

    #[tokio::test]
    async fn test_report_reads_stored_invoices() {
        let db = test_connection().await;
        let consultant = a001_consultant::service::create(&db, "ana", "Ana", 1500.0)
            .await
            .unwrap()
            .to_string();
        let client = a002_client::service::create(&db, "acme", "Acme", "Acme Ltda")
            .await
            .unwrap()
            .to_string();
        for (number, day) in [("1", 1), ("2", 31)] {
            let invoice = Invoice::new_for_insert(
                number.into(),
                "Portal".into(),
                consultant.clone(),
                client.clone(),
                "OS".into(),
                date(2007, 1, day),
                1000.0,
                10.0,
                10.0,
                InvoiceStatus::Issued,
            );
            a003_invoice::service::create(&db, invoice).await.unwrap();
        }

        let report = get_performance(
            &db,
            &request(vec![consultant.clone()], date(2007, 1, 1), date(2007, 1, 31)),
        )
        .await
        .unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "Ana");
        assert!((report.rows[0].net_revenue - 1800.0).abs() < 1e-9);
        assert!((report.rows[0].commission - 180.0).abs() < 1e-9);
        assert_eq!(report.rows[0].fixed_cost, Some(1500.0));
        assert_eq!(report.details[0].client_name, "Acme");

        assert_eq!(list_periods(&db).await.unwrap(), vec!["2007-01".to_string()]);
    }
}
