use crate::domain::a003_invoice::aggregate::InvoiceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dimension the performance report is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Consultant,
    Client,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Consultant => "consultant",
            GroupBy::Client => "client",
        }
    }
}

/// Request for the commercial performance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequest {
    #[serde(default)]
    pub group_by: GroupBy,
    /// Ids of the selected consultants or clients (per `group_by`)
    pub selected_refs: Vec<String>,
    /// Inclusive lower bound of the issue date
    pub date_from: NaiveDate,
    /// Inclusive upper bound of the issue date
    pub date_to: NaiveDate,
}

/// Commercial performance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResponse {
    pub group_by: GroupBy,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// One row per group, ordered by name
    pub rows: Vec<PerformanceRow>,
    /// Invoice lines behind the rows, ordered by client then issue date
    pub details: Vec<InvoiceLine>,
    pub totals: PerformanceTotals,
    /// Mean of the rows' fixed cost over rows that have one (0 when none)
    pub average_fixed_cost: f64,
}

impl PerformanceResponse {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Totals for one consultant or client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    /// Consultant or client id
    pub key: String,
    pub name: String,
    pub net_revenue: f64,
    pub commission: f64,
    /// Sum of the monthly fixed cost over `periods`; None for client grouping
    pub fixed_cost: Option<f64>,
    /// `net_revenue - (fixed_cost + commission)`; None without a fixed cost
    pub profit: Option<f64>,
    /// Share of the report's total net revenue, percent
    pub revenue_share_pct: f64,
    /// Monthly breakdown, ascending
    pub periods: Vec<PeriodRow>,
}

/// One calendar month of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRow {
    /// "YYYY-MM"
    pub period: String,
    pub net_revenue: f64,
    pub commission: f64,
    pub fixed_cost: Option<f64>,
    pub profit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTotals {
    pub gross: f64,
    pub net_revenue: f64,
    pub commission: f64,
    pub fixed_cost: Option<f64>,
    pub profit: Option<f64>,
}

/// Invoice line of the detailed report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub invoice_ref: String,
    pub consultant_ref: String,
    pub consultant_name: String,
    pub client_ref: String,
    pub client_name: String,
    pub system_name: String,
    pub service_order: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub gross: f64,
    pub net: f64,
    pub commission: f64,
    pub status: InvoiceStatus,
}

/// Error body returned with HTTP 400
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_consultant_grouping() {
        let json = r#"{"selected_refs":["a"],"date_from":"2007-01-01","date_to":"2007-01-31"}"#;
        let req: PerformanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.group_by, GroupBy::Consultant);
        assert_eq!(req.date_to, NaiveDate::from_ymd_opt(2007, 1, 31).unwrap());
    }

    #[test]
    fn test_group_by_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GroupBy::Client).unwrap(), "\"client\"");
    }
}
