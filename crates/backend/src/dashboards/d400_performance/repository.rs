use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

/// Invoice joined with its consultant and client, as read for the report
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult)]
pub struct InvoiceFact {
    pub invoice_ref: String,
    pub invoice_number: String,
    pub system_name: String,
    pub service_order: String,
    /// "YYYY-MM-DD"
    pub issue_date: String,
    pub gross_amount: f64,
    pub tax_pct: f64,
    pub commission_pct: f64,
    pub status: String,
    pub consultant_ref: String,
    pub consultant_name: Option<String>,
    /// Monthly fixed cost; None when the consultant record is missing
    pub consultant_fixed_cost: Option<f64>,
    pub client_ref: String,
    pub client_name: Option<String>,
}

/// Invoices issued within `[date_from, date_to]` with consultant and client data
pub async fn get_invoice_facts(
    db: &DatabaseConnection,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<Vec<InvoiceFact>> {
    let sql = r#"
        SELECT
            inv.id AS invoice_ref,
            inv.code AS invoice_number,
            inv.description AS system_name,
            inv.service_order,
            inv.issue_date,
            inv.gross_amount,
            inv.tax_pct,
            inv.commission_pct,
            inv.status,
            inv.consultant_ref,
            con.description AS consultant_name,
            con.fixed_cost AS consultant_fixed_cost,
            inv.client_ref,
            cli.description AS client_name
        FROM a003_invoice inv
        LEFT JOIN a001_consultant con ON inv.consultant_ref = con.id AND con.is_deleted = 0
        LEFT JOIN a002_client cli ON inv.client_ref = cli.id AND cli.is_deleted = 0
        WHERE inv.is_deleted = 0
            AND inv.issue_date >= ? AND inv.issue_date <= ?
        ORDER BY inv.issue_date, inv.code
    "#;

    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Sqlite,
        sql,
        [
            date_from.format("%Y-%m-%d").to_string().into(),
            date_to.format("%Y-%m-%d").to_string().into(),
        ],
    );

    let results = InvoiceFact::find_by_statement(stmt).all(db).await?;
    Ok(results)
}

/// Months ("YYYY-MM") that have at least one invoice, ascending
pub async fn get_active_periods(db: &DatabaseConnection) -> Result<Vec<String>> {
    let sql = r#"
        SELECT DISTINCT substr(issue_date, 1, 7) AS period
        FROM a003_invoice
        WHERE is_deleted = 0
        ORDER BY period
    "#;

    #[derive(Debug, FromQueryResult)]
    struct PeriodInfo {
        period: Option<String>,
    }

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let results = PeriodInfo::find_by_statement(stmt).all(db).await?;

    Ok(results.into_iter().filter_map(|r| r.period).collect())
}
